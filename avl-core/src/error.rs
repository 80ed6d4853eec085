//! Error types for AVL container operations.
//!
//! Ordinary map operations (`get`, `insert`, `remove`) signal absence or
//! displacement through `Option`/return values rather than `Result` — a
//! missing key is an expected outcome, not a failure. [`AvlError`] exists
//! for the one place this container *can* fail in a way worth naming: a
//! debug-time structural invariant check that caught a broken tree.

use thiserror::Error;

/// Errors surfaced by structural verification of an AVL tree.
///
/// These are programming-error signals, not part of the steady-state API:
/// a correctly implemented tree never produces one. [`crate::Tree::is_balanced`]
/// and friends are the cheap approximations meant for hot paths; the
/// [`AvlError`] variants below are what a thorough, O(n) invariant walk
/// reports when something has gone wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvlError {
    /// In-order traversal produced keys that were not strictly increasing.
    #[error("bst order violated: key at position {index} did not compare greater than its predecessor")]
    OrderViolation {
        /// Position (0-based, in-order) of the offending key.
        index: usize,
    },

    /// A node's stored balance factor disagreed with its measured subtree heights.
    #[error("balance factor mismatch: stored {stored}, computed {computed}")]
    BalanceFactorMismatch {
        /// The balance factor recorded on the node.
        stored: i8,
        /// `height(right) - height(left)`, computed by walking the subtree.
        computed: i8,
    },

    /// A node's balance factor (or a computed height difference) fell outside `{-1, 0, 1}`.
    #[error("avl height invariant violated: subtree heights differ by {difference}")]
    HeightImbalance {
        /// `height(right) - height(left)` for the offending node.
        difference: i32,
    },

    /// The tree's recorded size did not match the number of reachable nodes.
    #[error("size mismatch: tree reports {reported}, {counted} nodes are reachable")]
    SizeMismatch {
        /// `len()` as reported by the container.
        reported: usize,
        /// Nodes actually visited during a full traversal.
        counted: usize,
    },
}

/// A specialized `Result` type for AVL invariant verification.
pub type Result<T> = core::result::Result<T, AvlError>;
