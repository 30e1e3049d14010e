//! Error types for triangulation operations.

use thiserror::Error;

/// Errors that can occur while building a triangulation or its dual.
///
/// Local degeneracies (a collinear triple met mid-construction, a hull edge
/// with no neighbor) are not errors: they surface as `None` values from the
/// predicates and tables instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// Fewer than three points were supplied.
    #[error("insufficient points: need at least 3, got {count}")]
    InsufficientPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// No triangle survived construction, e.g. all points are collinear.
    #[error("degenerate configuration: no triangle survived construction")]
    DegenerateConfiguration,

    /// A point coincides with an existing point within tolerance.
    #[error("point coincides with existing point {index}")]
    DuplicatePoint {
        /// Index of the existing point.
        index: usize,
    },
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, TriangulationError>;
