//! dualmesh - Delaunay triangulation and Voronoi duals for small 2D point sets
//!
//! Points go in, triangles over input indices come out, together with the
//! adjacency between triangles and the Voronoi diagram derived from both.
//! Construction is incremental Bowyer-Watson with epsilon-tolerant floating
//! point predicates; it is meant for interactive point counts, not bulk data.
//!
//! # Example
//!
//! ```
//! use dualmesh::triangulation::{delaunay_triangulation, voronoi_dual};
//! use dualmesh::{Point2, Tolerance};
//!
//! let points = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let tolerance = Tolerance::default();
//! let triangulation = delaunay_triangulation(&points, tolerance).unwrap();
//! assert_eq!(triangulation.len(), 2);
//!
//! let voronoi = voronoi_dual(&triangulation, &points, tolerance);
//! assert_eq!(voronoi.finite_edges.len(), 1);
//! assert_eq!(voronoi.rays.len(), 4);
//! ```

pub mod bounds;
pub mod error;
pub mod primitives;
pub mod session;
pub mod tolerance;
pub mod triangulation;
mod util;

pub use error::{Result, TriangulationError};
pub use primitives::{Point2, Ray2, Segment2, Vec2};
pub use session::PointSet;
pub use tolerance::{circumcircle, in_circumcircle, orient2d, Circumcircle, Orientation, Tolerance};
pub use triangulation::{
    delaunay_triangulation, voronoi_dual, AdjacencyTable, Triangle, Triangulation, VoronoiDual,
};
