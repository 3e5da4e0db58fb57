//! Input-validation failures shared across components.
//!
//! These cover malformed caller input only. Not-found outcomes (no route
//! between two connected-graph nodes, a region nobody can cover) are normal
//! return values, never errors.

use thiserror::Error;

/// A caller-input error. Components reject bad input at the boundary and
/// never attempt partial recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A route endpoint that is not a node of the location graph.
    #[error("unknown location `{0}` — not present in the graph")]
    UnknownNode(String),

    /// A distance matrix whose rows do not all match its height.
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    MatrixNotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A distance matrix with a non-zero self-distance.
    #[error("distance matrix diagonal must be zero: entry [{index}][{index}] is {value}")]
    NonZeroDiagonal { index: usize, value: u32 },

    /// Multi-center dispatch needs at least two centers.
    #[error("multi-center dispatch needs at least two centers, got {0}")]
    TooFewCenters(usize),

    /// Center list and cost matrix disagree on the center count.
    #[error("center list has {centers} entries but the cost matrix is {matrix}×{matrix}")]
    CenterCountMismatch { centers: usize, matrix: usize },

    /// A supply item whose weight would make the knapsack recurrence ill-defined.
    #[error("supply item `{0}` has zero weight — weights must be positive")]
    ZeroWeightItem(String),

    /// Capacity is an array dimension of the DP table; reject instead of truncating.
    #[error("capacity {0} exceeds the allocator ceiling of {1}")]
    CapacityTooLarge(usize, usize),

    /// Triage with nothing to scan for.
    #[error("keyword dictionary is empty — triage needs at least one pattern")]
    EmptyKeywordList,
}
