//! A classic B-tree ordered map with a runtime-tunable order.
//!
//! This crate provides [`FanoutMap`], an ordered map whose order — the
//! maximum number of children an internal node may hold — is picked at
//! construction time rather than baked in at compile time. That makes it
//! useful anywhere node fan-out is something you want to experiment with or
//! tune per workload: small orders exercise rebalancing constantly, large
//! orders approximate a sorted array with cheap lookups.
//!
//! # Example
//!
//! ```
//! use fanout_tree::FanoutMap;
//!
//! let mut events = FanoutMap::new(16).unwrap();
//! events.insert(1969, "moon landing");
//! events.insert(1989, "world wide web");
//! events.insert(2012, "higgs boson");
//!
//! assert_eq!(events.get(&1989), Some(&"world wide web"));
//!
//! // Range scans are ascending and inclusive on both ends.
//! let slice: Vec<_> = events.range(1960..=1990).map(|(_, &what)| what).collect();
//! assert_eq!(slice, ["moon landing", "world wide web"]);
//!
//! // The structural invariants can be audited at any point.
//! assert!(events.validate().is_ok());
//! ```
//!
//! # Structure
//!
//! The map is a *classic* B-tree, not a B+tree: internal nodes store values
//! for their separator keys, so a lookup that hits a separator answers
//! without descending to a leaf. Every node keeps between
//! `ceil(order / 2) - 1` and `order - 1` keys (the root is exempt from the
//! minimum), all leaves sit at the same depth, and nodes own their children
//! outright — there are no parent pointers, no shared structure, and no
//! unsafe code. Inserts split overfull nodes upward from the leaves;
//! deletions repair underfull nodes by rotating an entry through the parent
//! from a sibling, or by merging with one when neither sibling can spare an
//! entry.

#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

mod error;
mod raw;

pub mod map;

pub use error::Error;
pub use map::FanoutMap;
