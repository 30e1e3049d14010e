//! 2D ray type.

use super::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A 2D ray defined by an origin point and direction.
///
/// A ray extends infinitely from its origin. The direction is stored as-is;
/// use [`Ray2::normalized`] to build one with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<F> {
    /// Origin point of the ray
    pub origin: Point2<F>,
    /// Direction vector
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a new ray from origin and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray with a unit direction vector.
    ///
    /// Returns `None` if the direction's magnitude does not exceed `eps`.
    pub fn normalized(origin: Point2<F>, direction: Vec2<F>, eps: F) -> Option<Self> {
        direction.normalize(eps).map(|d| Self {
            origin,
            direction: d,
        })
    }

    /// Returns the point along the ray at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Truncates the ray to a segment of parameter length `length`.
    ///
    /// With a unit direction this is a segment of Euclidean length `length`.
    #[inline]
    pub fn to_segment(&self, length: F) -> Segment2<F> {
        Segment2::new(self.origin, self.point_at(length))
    }
}
