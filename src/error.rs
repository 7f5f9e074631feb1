use alloc::format;
use alloc::string::String;
use core::fmt;

/// Error taxonomy for the index.
///
/// `NotFound` is deliberately absent here: "not found" is represented as
/// an absent `Option`, never as an error (see the facade in `lib.rs`).
/// Only genuinely exceptional conditions produce a `BPlusTreeError`.
#[derive(Debug)]
pub enum BPlusTreeError {
    /// A precondition of a constructor or low-level list/tree operation was
    /// violated by the caller (odd/too-small `max_node_size`, an
    /// out-of-range `split_at` index, ...).
    PreconditionViolation(String),
    /// An internal inconsistency was detected while rebalancing the tree.
    /// Carries the balancing case in progress and the underlying cause.
    InvariantBroken(String),
}

impl fmt::Display for BPlusTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BPlusTreeError::PreconditionViolation(s) => {
                write!(f, "precondition violation: {s}")
            }
            BPlusTreeError::InvariantBroken(s) => write!(f, "invariant broken: {s}"),
        }
    }
}

impl core::error::Error for BPlusTreeError {}

impl core::cmp::PartialEq for BPlusTreeError {
    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}
impl Eq for BPlusTreeError {}

impl BPlusTreeError {
    pub fn precondition(why: &str) -> Self {
        BPlusTreeError::PreconditionViolation(String::from(why))
    }

    /// `balance`'s single "failed while balancing" wrapper: every
    /// internal inconsistency surfaced during a rebalance case is
    /// reported with the case name as context.
    pub fn balance_failed(case: &str, why: &str) -> Self {
        BPlusTreeError::InvariantBroken(format!("balance[{case}]: {why}"))
    }

    pub fn invariant_broken(where_: &str, why: &str) -> Self {
        BPlusTreeError::InvariantBroken(format!("{where_}: {why}"))
    }
}
