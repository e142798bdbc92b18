//! Structural invariant checking.
//!
//! Never on the write path: the checker exists so that tests and callers can
//! audit a tree after arbitrary operation sequences. Every violation found is
//! reported, one per line, rather than stopping at the first.

use super::node::{Caps, Node};
use super::raw_map::RawFanoutMap;

impl<K: Ord, V> RawFanoutMap<K, V> {
    /// Checks every structural invariant of the tree.
    ///
    /// Verified: strict key ordering within each node, key/value parity,
    /// occupancy bounds (root exempt from the minimum), internal arity
    /// (`children == keys + 1`), uniform leaf depth, separator bounds
    /// inherited from ancestors, the root-emptiness rule, and agreement
    /// between the recorded length and the reachable pair count.
    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        let mut errors: Vec<String> = Vec::new();

        if let Node::Internal(internal) = self.root() {
            if internal.key_count() == 0 {
                errors.push("root is an internal node with no keys".into());
            }
        }

        let mut leaf_depth: Option<usize> = None;
        let walk = Walk {
            caps: self.caps(),
            leaf_depth: &mut leaf_depth,
            errors: &mut errors,
        };
        let counted = walk.check(self.root(), 0, true, None, None);

        if counted != self.len() {
            errors.push(format!(
                "length mismatch: recorded {}, counted {} reachable pairs",
                self.len(),
                counted
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors.join("\n")) }
    }
}

struct Walk<'a> {
    caps: Caps,
    leaf_depth: &'a mut Option<usize>,
    errors: &'a mut Vec<String>,
}

impl Walk<'_> {
    /// Checks one node and its subtree; returns the number of pairs found.
    /// `lower`/`upper` are the exclusive key bounds inherited from ancestor
    /// separators.
    fn check<K: Ord, V>(
        mut self,
        node: &Node<K, V>,
        depth: usize,
        is_root: bool,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> usize {
        self.check_node(node, depth, is_root, lower, upper);
        self.count(node)
    }

    fn check_node<K: Ord, V>(
        &mut self,
        node: &Node<K, V>,
        depth: usize,
        is_root: bool,
        lower: Option<&K>,
        upper: Option<&K>,
    ) {
        let keys = node.keys();

        for i in 1..keys.len() {
            if keys[i - 1] >= keys[i] {
                self.errors.push(format!(
                    "node at depth {depth}: keys not strictly ascending at indices {} and {}",
                    i - 1,
                    i
                ));
            }
        }

        if node.val_count() != keys.len() {
            self.errors.push(format!(
                "node at depth {depth}: {} keys but {} values",
                keys.len(),
                node.val_count()
            ));
        }

        if let (Some(lower), Some(first)) = (lower, keys.first()) {
            if first <= lower {
                self.errors.push(format!(
                    "node at depth {depth}: first key escapes the lower separator bound of an ancestor"
                ));
            }
        }
        if let (Some(upper), Some(last)) = (upper, keys.last()) {
            if last >= upper {
                self.errors.push(format!(
                    "node at depth {depth}: last key escapes the upper separator bound of an ancestor"
                ));
            }
        }

        if !is_root && keys.len() < self.caps.min_keys() {
            self.errors.push(format!(
                "node at depth {depth} holds {} keys, below the minimum of {}",
                keys.len(),
                self.caps.min_keys()
            ));
        }
        if keys.len() > self.caps.max_keys() {
            self.errors.push(format!(
                "node at depth {depth} holds {} keys, above the maximum of {}",
                keys.len(),
                self.caps.max_keys()
            ));
        }

        match node {
            Node::Leaf(_) => match *self.leaf_depth {
                None => *self.leaf_depth = Some(depth),
                Some(expected) => {
                    if depth != expected {
                        self.errors.push(format!(
                            "leaf depth mismatch: expected {expected}, found a leaf at depth {depth}"
                        ));
                    }
                }
            },
            Node::Internal(internal) => {
                if internal.child_count() != keys.len() + 1 {
                    self.errors.push(format!(
                        "internal node at depth {depth} has {} children for {} keys",
                        internal.child_count(),
                        keys.len()
                    ));
                }
                for i in 0..internal.child_count() {
                    let child_lower = if i == 0 { lower } else { keys.get(i - 1) };
                    let child_upper = keys.get(i).or(upper);
                    self.check_node(internal.child(i), depth + 1, false, child_lower, child_upper);
                }
            }
        }
    }

    fn count<K, V>(&self, node: &Node<K, V>) -> usize {
        match node {
            Node::Leaf(_) => node.key_count(),
            Node::Internal(internal) => {
                let mut total = internal.key_count();
                for i in 0..internal.child_count() {
                    total += self.count(internal.child(i));
                }
                total
            }
        }
    }
}
