//! Delaunay triangulation of point sets and its Voronoi dual.
//!
//! The pipeline runs in three stages, each usable on its own:
//! - [`delaunay_triangulation`] builds triangles over input indices
//! - [`AdjacencyTable`] records which triangles share each edge
//! - [`voronoi_dual`] turns triangles and adjacency into Voronoi edges and rays

mod adjacency;
mod delaunay;
mod triangle;
mod voronoi;

pub use adjacency::AdjacencyTable;
pub use delaunay::{
    delaunay_triangulation, delaunay_triangulation_with, fill_hull_pockets, insert_point,
    Insertion, InsertionStep, SuperTriangle, Triangulation, SUPER_VERTEX_COUNT,
};
pub use triangle::{Edge, Triangle};
pub use voronoi::{voronoi_dual, voronoi_from_points, VoronoiDual, VoronoiEdge, VoronoiRay};
