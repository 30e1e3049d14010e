//! Caller-owned point list with a cached triangulation.
//!
//! The triangulation functions are stateless. `PointSet` is the context an
//! interactive editor keeps between user actions: it rejects near-duplicate
//! points on entry and rebuilds the triangulation only after the point list
//! changes.
//!
//! # Example
//!
//! ```
//! use dualmesh::{Point2, PointSet, TriangulationError};
//!
//! let mut set: PointSet<f64> = PointSet::default();
//! set.add(Point2::new(0.0, 0.0)).unwrap();
//! set.add(Point2::new(1.0, 0.0)).unwrap();
//! set.add(Point2::new(0.0, 1.0)).unwrap();
//!
//! assert_eq!(
//!     set.add(Point2::new(1.0, 0.0)),
//!     Err(TriangulationError::DuplicatePoint { index: 1 })
//! );
//!
//! assert_eq!(set.triangulation().unwrap().len(), 1);
//! assert_eq!(set.voronoi().unwrap().rays.len(), 3);
//! ```

use crate::error::{Result, TriangulationError};
use crate::primitives::Point2;
use crate::tolerance::Tolerance;
use crate::triangulation::{delaunay_triangulation, voronoi_dual, Triangulation, VoronoiDual};
use num_traits::Float;

/// An ordered set of distinct points and its lazily built triangulation.
#[derive(Debug, Clone)]
pub struct PointSet<F> {
    points: Vec<Point2<F>>,
    tolerance: Tolerance<F>,
    cached: Option<Triangulation>,
}

impl<F: Float> PointSet<F> {
    /// Creates an empty set using the given tolerances.
    pub fn new(tolerance: Tolerance<F>) -> Self {
        Self {
            points: Vec::new(),
            tolerance,
            cached: None,
        }
    }

    /// Appends a point and returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::DuplicatePoint`] if both coordinates are
    /// within `duplicate_epsilon` of an existing point. The set is unchanged.
    pub fn add(&mut self, point: Point2<F>) -> Result<usize> {
        let eps = self.tolerance.duplicate_epsilon;
        if let Some(index) = self.points.iter().position(|p| p.coincides_with(point, eps)) {
            log::warn!("ignoring point too close to existing point {index}");
            return Err(TriangulationError::DuplicatePoint { index });
        }

        self.points.push(point);
        self.cached = None;
        Ok(self.points.len() - 1)
    }

    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    #[inline]
    pub fn tolerance(&self) -> Tolerance<F> {
        self.tolerance
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Removes every point.
    pub fn clear(&mut self) {
        self.points.clear();
        self.cached = None;
    }

    /// Returns the triangulation of the current points, building it if needed.
    ///
    /// # Errors
    ///
    /// See [`delaunay_triangulation`]. Failures are not cached.
    pub fn triangulation(&mut self) -> Result<&Triangulation> {
        cached_triangulation(&mut self.cached, &self.points, self.tolerance)
    }

    /// Builds the Voronoi dual of the current triangulation.
    ///
    /// # Errors
    ///
    /// See [`delaunay_triangulation`].
    pub fn voronoi(&mut self) -> Result<VoronoiDual<F>> {
        let triangulation = cached_triangulation(&mut self.cached, &self.points, self.tolerance)?;
        Ok(voronoi_dual(triangulation, &self.points, self.tolerance))
    }
}

impl<F: Float> Default for PointSet<F> {
    fn default() -> Self {
        Self::new(Tolerance::default())
    }
}

fn cached_triangulation<'a, F: Float>(
    cache: &'a mut Option<Triangulation>,
    points: &[Point2<F>],
    tolerance: Tolerance<F>,
) -> Result<&'a Triangulation> {
    let triangulation = match cache.take() {
        Some(triangulation) => triangulation,
        None => delaunay_triangulation(points, tolerance)?,
    };
    Ok(cache.insert(triangulation))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> PointSet<f64> {
        let mut set = PointSet::default();
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            set.add(Point2::new(x, y)).unwrap();
        }
        set
    }

    #[test]
    fn test_add_returns_indices() {
        let mut set: PointSet<f64> = PointSet::default();
        assert_eq!(set.add(Point2::new(0.0, 0.0)), Ok(0));
        assert_eq!(set.add(Point2::new(2.0, 0.0)), Ok(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_rejects_near_duplicate() {
        let mut set = unit_square();
        assert_eq!(
            set.add(Point2::new(1.0 + 1e-12, 1.0 - 1e-12)),
            Err(TriangulationError::DuplicatePoint { index: 2 })
        );
        assert_eq!(set.len(), 4);

        // Close in x only is still a distinct point
        assert_eq!(set.add(Point2::new(1.0, 0.5)), Ok(4));
    }

    #[test]
    fn test_too_few_points() {
        let mut set: PointSet<f64> = PointSet::default();
        set.add(Point2::new(0.0, 0.0)).unwrap();
        assert_eq!(
            set.triangulation().err(),
            Some(TriangulationError::InsufficientPoints { count: 1 })
        );
    }

    #[test]
    fn test_triangulation_is_cached_until_change() {
        let mut set = unit_square();
        assert_eq!(set.triangulation().unwrap().len(), 2);
        assert!(set.cached.is_some());

        set.add(Point2::new(0.5, 0.5)).unwrap();
        assert!(set.cached.is_none());
        assert_eq!(set.triangulation().unwrap().len(), 4);
    }

    #[test]
    fn test_voronoi_square() {
        let mut set = unit_square();
        let voronoi = set.voronoi().unwrap();
        assert_eq!(voronoi.finite_edges.len(), 1);
        assert_eq!(voronoi.rays.len(), 4);
    }

    #[test]
    fn test_clear() {
        let mut set = unit_square();
        set.triangulation().unwrap();
        set.clear();
        assert!(set.is_empty());
        assert!(set.cached.is_none());
        assert!(set.triangulation().is_err());
    }
}
