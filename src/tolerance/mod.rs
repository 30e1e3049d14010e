//! Epsilon-aware geometric predicates.
//!
//! Every predicate takes its tolerance as an explicit argument. The
//! [`Tolerance`] value bundles the tolerances used by the triangulation
//! pipeline so callers configure them in one place.

mod predicates;

pub use predicates::{
    circumcircle, in_circumcircle, orient2d, orientation, Circumcircle, Orientation,
};

use num_traits::Float;

/// Absolute tolerances used by triangulation and dual construction.
///
/// Tolerances are absolute, not relative to the magnitude of the input
/// coordinates. Inputs far from the origin or spanning many orders of
/// magnitude may need a custom `epsilon`.
///
/// # Example
///
/// ```
/// use dualmesh::Tolerance;
///
/// let tol: Tolerance<f64> = Tolerance::default().with_epsilon(1e-12);
/// assert_eq!(tol.epsilon, 1e-12);
/// assert_eq!(tol.duplicate_epsilon, 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<F> {
    /// Collinearity threshold for the circumcircle determinant, and the
    /// margin a point must clear to count as strictly inside a circumcircle.
    pub epsilon: F,
    /// Per-axis distance below which two points are treated as the same
    /// point by [`PointSet`](crate::PointSet).
    pub duplicate_epsilon: F,
}

impl<F: Float> Tolerance<F> {
    /// Default collinearity and circumcircle tolerance.
    pub const DEFAULT_EPSILON: f64 = 1e-10;

    /// Default duplicate-point tolerance, ten times [`Self::DEFAULT_EPSILON`].
    pub const DEFAULT_DUPLICATE_EPSILON: f64 = 1e-9;

    /// Creates a tolerance set from explicit values.
    #[inline]
    pub fn new(epsilon: F, duplicate_epsilon: F) -> Self {
        Self {
            epsilon,
            duplicate_epsilon,
        }
    }

    /// Returns a copy with a different predicate tolerance.
    #[inline]
    pub fn with_epsilon(self, epsilon: F) -> Self {
        Self { epsilon, ..self }
    }

    /// Returns a copy with a different duplicate-point tolerance.
    #[inline]
    pub fn with_duplicate_epsilon(self, duplicate_epsilon: F) -> Self {
        Self {
            duplicate_epsilon,
            ..self
        }
    }
}

impl<F: Float> Default for Tolerance<F> {
    fn default() -> Self {
        // f32 and f64 both represent these constants; fall back to machine
        // epsilon for exotic Float types that cannot.
        Self {
            epsilon: F::from(Self::DEFAULT_EPSILON).unwrap_or_else(F::epsilon),
            duplicate_epsilon: F::from(Self::DEFAULT_DUPLICATE_EPSILON)
                .unwrap_or_else(F::epsilon),
        }
    }
}
