use thiserror::Error;

/// Errors reported by [`FanoutMap`](crate::FanoutMap).
///
/// Absence of a key is never an error: lookups and removals signal a missing
/// key with `None`. The variants here cover the only two failure classes the
/// map has — a rejected configuration at construction time, and a broken
/// internal invariant surfaced by [`validate`](crate::FanoutMap::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested order cannot form a B-tree.
    ///
    /// An internal node must be able to hold at least two children plus one
    /// separator after a split, which requires an order of at least 3.
    #[error("invalid order {order}: a B-tree order must be at least 3")]
    InvalidOrder {
        /// The rejected order.
        order: usize,
    },

    /// One or more structural invariants do not hold.
    ///
    /// Only produced by [`validate`](crate::FanoutMap::validate). A correct
    /// build never reaches this state; seeing it means a bug in the insertion
    /// or deletion engine, not a user-facing condition. The message lists
    /// every violation found, one per line.
    #[error("tree invariant violated:\n{0}")]
    InvariantViolation(String),
}
