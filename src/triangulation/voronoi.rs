//! Voronoi diagram computation from Delaunay triangulation.
//!
//! A Voronoi diagram partitions the plane into cells, where each cell contains
//! all points closer to its generating site than to any other site.
//!
//! # How It Works
//!
//! The Voronoi diagram is the dual of the Delaunay triangulation:
//! - Each Delaunay triangle's circumcenter becomes a Voronoi vertex
//! - Each Delaunay edge shared by two triangles becomes a finite Voronoi edge
//! - Each hull edge becomes an unbounded ray from its triangle's circumcenter,
//!   pointing away from the triangle
//!
//! Triangles whose vertices are collinear within tolerance have no
//! circumcenter and are left out of the dual entirely.
//!
//! # Example
//!
//! ```
//! use dualmesh::triangulation::voronoi_from_points;
//! use dualmesh::{Point2, Tolerance};
//!
//! let sites: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let voronoi = voronoi_from_points(&sites, Tolerance::default()).unwrap();
//!
//! // One triangle: one Voronoi vertex, no finite edges, three rays
//! assert_eq!(voronoi.vertices().count(), 1);
//! assert!(voronoi.finite_edges.is_empty());
//! assert_eq!(voronoi.rays.len(), 3);
//! ```

use super::delaunay::{delaunay_triangulation, Triangulation};
use super::triangle::Edge;
use crate::error::Result;
use crate::primitives::{Point2, Ray2, Segment2};
use crate::tolerance::{circumcircle, Tolerance};
use crate::util::Timed;
use num_traits::Float;
use std::collections::HashSet;

/// A finite Voronoi edge between the circumcenters of two neighboring triangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiEdge<F> {
    /// Indices of the two triangles, lower index first.
    pub triangles: (usize, usize),
    /// Segment from the first triangle's circumcenter to the second's.
    pub segment: Segment2<F>,
}

/// An unbounded Voronoi edge anchored at a triangle with a hull edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiRay<F> {
    /// Index of the triangle whose circumcenter is the ray origin.
    pub triangle: usize,
    /// The hull edge the ray crosses, as input point indices.
    pub edge: Edge,
    /// Origin and unit outward direction.
    pub ray: Ray2<F>,
}

impl<F: Float> VoronoiRay<F> {
    /// Returns the point at distance `t` along the ray.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.ray.point_at(t)
    }

    /// Truncates the ray to a segment of the given length for display.
    #[inline]
    pub fn to_segment(&self, length: F) -> Segment2<F> {
        self.ray.to_segment(length)
    }
}

/// The Voronoi dual of a triangulation.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiDual<F> {
    /// Circumcenter of each triangle, by triangle index; `None` where the
    /// triangle is degenerate.
    pub circumcenters: Vec<Option<Point2<F>>>,
    /// Finite edges, one per neighboring pair of triangles that both have a
    /// circumcenter.
    pub finite_edges: Vec<VoronoiEdge<F>>,
    /// Rays, one per hull edge of a triangle that has a circumcenter.
    pub rays: Vec<VoronoiRay<F>>,
}

impl<F: Float> VoronoiDual<F> {
    /// Returns the circumcenter of triangle `t`, if it has one.
    #[inline]
    pub fn circumcenter(&self, t: usize) -> Option<Point2<F>> {
        self.circumcenters.get(t).copied().flatten()
    }

    /// Iterates over `(triangle index, circumcenter)` for every Voronoi vertex.
    pub fn vertices(&self) -> impl Iterator<Item = (usize, Point2<F>)> + '_ {
        self.circumcenters
            .iter()
            .enumerate()
            .filter_map(|(t, c)| c.map(|c| (t, c)))
    }

    /// Iterates over the finite edges as plain segments.
    pub fn segments(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.finite_edges.iter().map(|e| e.segment)
    }
}

/// Builds the Voronoi dual of a triangulation.
///
/// `points` must be the point slice the triangulation was built from.
///
/// # Panics
///
/// Panics if a triangle refers to an index outside `points`.
pub fn voronoi_dual<F: Float>(
    triangulation: &Triangulation,
    points: &[Point2<F>],
    tolerance: Tolerance<F>,
) -> VoronoiDual<F> {
    let _timer = Timed::debug("voronoi dual");
    let eps = tolerance.epsilon;
    let triangles = triangulation.triangles();
    let adjacency = triangulation.adjacency();

    let circumcenters: Vec<Option<Point2<F>>> = triangles
        .iter()
        .map(|tri| circumcircle(points[tri.a], points[tri.b], points[tri.c], eps).map(|c| c.center))
        .collect();

    let mut finite_edges = Vec::new();
    let mut rays = Vec::new();
    let mut visited: HashSet<(usize, usize)> = HashSet::new();

    for (i, tri) in triangles.iter().enumerate() {
        let Some(center) = circumcenters[i] else {
            continue;
        };

        for j in 0..3 {
            match adjacency.neighbor(i, j) {
                Some(k) => {
                    let Some(other) = circumcenters[k] else {
                        continue;
                    };
                    let pair = (i.min(k), i.max(k));
                    if visited.insert(pair) {
                        let segment = if i < k {
                            Segment2::new(center, other)
                        } else {
                            Segment2::new(other, center)
                        };
                        finite_edges.push(VoronoiEdge {
                            triangles: pair,
                            segment,
                        });
                    }
                }
                None => {
                    let (a, b) = tri.edge_opposite(j);
                    let (pa, pb) = (points[a], points[b]);
                    let opposite = points[tri.vertices()[j]];

                    let normal = (pb - pa).perpendicular();
                    let inward = opposite - pa.midpoint(pb);
                    let outward = if normal.dot(inward) < F::zero() {
                        normal
                    } else {
                        -normal
                    };
                    let Some(ray) = Ray2::normalized(center, outward, eps) else {
                        continue;
                    };

                    rays.push(VoronoiRay {
                        triangle: i,
                        edge: Edge::new(a, b),
                        ray,
                    });
                }
            }
        }
    }

    log::debug!(
        "voronoi dual: {} vertices, {} finite edges, {} rays",
        circumcenters.iter().flatten().count(),
        finite_edges.len(),
        rays.len()
    );

    VoronoiDual {
        circumcenters,
        finite_edges,
        rays,
    }
}

/// Triangulates `points` and builds the Voronoi dual in one call.
///
/// # Errors
///
/// Propagates the errors of [`delaunay_triangulation`].
pub fn voronoi_from_points<F: Float>(
    points: &[Point2<F>],
    tolerance: Tolerance<F>,
) -> Result<VoronoiDual<F>> {
    let triangulation = delaunay_triangulation(points, tolerance)?;
    Ok(voronoi_dual(&triangulation, points, tolerance))
}
