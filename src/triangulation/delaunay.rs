//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! The Bowyer-Watson algorithm is an incremental insertion algorithm:
//! 1. Start with a super-triangle whose circumcircle contains all points
//! 2. Insert points one at a time in input order: remove every triangle
//!    whose circumcircle contains the new point, then fan the cavity
//!    boundary to the new point
//! 3. Remove triangles connected to the super-triangle vertices
//! 4. Wrap outward from open mesh edges to restore hull triangles whose
//!    circumcircle reached a super-triangle vertex
//!
//! The super-triangle vertices occupy indices `0..3` of an augmented point
//! array; input point `i` sits at augmented index `i + 3`. Only
//! [`InsertionStep`] exposes augmented indices; finished triangulations
//! refer to input indices.
//!
//! # Complexity
//!
//! - Time: O(n²), every insertion rescans all live triangles and every
//!   filled hull edge rescans all points
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use dualmesh::triangulation::delaunay_triangulation;
//! use dualmesh::{Point2, Tolerance};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let triangulation = delaunay_triangulation(&points, Tolerance::default()).unwrap();
//! assert_eq!(triangulation.len(), 3);
//!
//! for tri in triangulation.triangles() {
//!     assert!(tri.vertices().iter().all(|&v| v < points.len()));
//! }
//! ```

use super::adjacency::AdjacencyTable;
use super::triangle::{Edge, Triangle};
use crate::bounds::Aabb2;
use crate::error::{Result, TriangulationError};
use crate::primitives::Point2;
use crate::tolerance::{circumcircle, in_circumcircle, orient2d, Tolerance};
use crate::util::Timed;
use num_traits::Float;
use std::collections::{HashMap, HashSet};

/// Number of synthetic vertices placed ahead of the input points.
pub const SUPER_VERTEX_COUNT: usize = 3;

/// A large triangle whose circumcircle strictly contains every input point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperTriangle<F> {
    /// The three synthetic vertices, counter-clockwise.
    pub vertices: [Point2<F>; 3],
}

impl<F: Float> SuperTriangle<F> {
    /// Builds a super-triangle around `bounds`.
    ///
    /// With `d` the larger bounding-box extent (an extent below `eps` counts
    /// as 1) and `c` the box center, the vertices are `c + (-20d, -10d)`,
    /// `c + (20d, -10d)` and `c + (0, 20d)`.
    pub fn enclosing(bounds: Aabb2<F>, eps: F) -> Self {
        let extent = |e: F| if e < eps { F::one() } else { e };
        let d = extent(bounds.width()).max(extent(bounds.height()));
        let ten = F::from(10.0).unwrap_or_else(F::one) * d;
        let twenty = ten + ten;
        let c = bounds.center();

        Self {
            vertices: [
                Point2::new(c.x - twenty, c.y - ten),
                Point2::new(c.x + twenty, c.y - ten),
                Point2::new(c.x, c.y + twenty),
            ],
        }
    }

    /// Returns the super-triangle as a triangle over augmented indices.
    #[inline]
    pub fn triangle() -> Triangle {
        Triangle::new(0, 1, 2)
    }
}

/// Returns `true` if any vertex of `tri` (augmented indices) is synthetic.
#[inline]
fn touches_super_triangle(tri: &Triangle) -> bool {
    tri.vertices().iter().any(|&v| v < SUPER_VERTEX_COUNT)
}

/// Outcome of inserting one point into a live triangle set.
#[derive(Debug, Clone, PartialEq)]
pub struct Insertion {
    /// The live triangles after insertion.
    pub triangles: Vec<Triangle>,
    /// Number of triangles whose circumcircle contained the point.
    pub removed: usize,
    /// Number of triangles fanned from the cavity boundary to the point.
    pub created: usize,
}

/// Snapshot handed to an observer after each input point is inserted.
///
/// Indices in `triangles` are augmented: `0..3` are super-triangle
/// vertices and input point `i` is `i + 3`.
#[derive(Debug, Clone, Copy)]
pub struct InsertionStep<'a, F> {
    /// Input index of the point just inserted.
    pub index: usize,
    /// The point just inserted.
    pub point: Point2<F>,
    /// Number of triangles removed to open the cavity.
    pub removed: usize,
    /// Number of triangles created around the new point.
    pub created: usize,
    /// Live triangles, over augmented indices.
    pub triangles: &'a [Triangle],
    /// Augmented point array: super-triangle vertices then input points.
    pub points: &'a [Point2<F>],
}

impl<F> InsertionStep<'_, F> {
    /// Maps an augmented index back to an input index.
    ///
    /// Returns `None` for super-triangle vertices.
    #[inline]
    pub fn input_index(&self, v: usize) -> Option<usize> {
        v.checked_sub(SUPER_VERTEX_COUNT)
    }

    /// Iterates over live triangles that touch no super-triangle vertex,
    /// re-indexed to input indices.
    pub fn finished_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.triangles
            .iter()
            .filter(|tri| !touches_super_triangle(tri))
            .map(|tri| tri.map(|v| v - SUPER_VERTEX_COUNT))
    }
}

/// A finished Delaunay triangulation.
///
/// Triangles refer to indices of the input point slice and are stored
/// counter-clockwise. The adjacency table is derived from them at
/// construction and stays in sync because the triangulation is immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangulation {
    triangles: Vec<Triangle>,
    adjacency: AdjacencyTable,
}

impl Triangulation {
    /// Wraps a triangle list, deriving its adjacency table.
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        let adjacency = AdjacencyTable::build(&triangles);
        Self {
            triangles,
            adjacency,
        }
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the adjacency table.
    #[inline]
    pub fn adjacency(&self) -> &AdjacencyTable {
        &self.adjacency
    }

    /// Returns the triangle at index `t`, if any.
    #[inline]
    pub fn triangle(&self, t: usize) -> Option<&Triangle> {
        self.triangles.get(t)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Iterates over hull edges as `(triangle index, edge)`.
    pub fn hull_edges(&self) -> impl Iterator<Item = (usize, Edge)> + '_ {
        self.triangles.iter().enumerate().flat_map(move |(t, tri)| {
            (0..3)
                .filter(move |&j| !tri.is_degenerate() && self.adjacency.is_hull_edge(t, j))
                .map(move |j| (t, Edge::from(tri.edge_opposite(j))))
        })
    }

    /// Consumes the triangulation, returning its triangles and adjacency.
    pub fn into_parts(self) -> (Vec<Triangle>, AdjacencyTable) {
        (self.triangles, self.adjacency)
    }
}

/// Inserts the point at augmented index `p` into a live triangle set.
///
/// This is one Bowyer-Watson step as a pure transformation: every triangle
/// whose circumcircle strictly contains the point is removed, and each
/// cavity-boundary edge (an edge used by exactly one removed triangle) is
/// joined to the point. New triangles are counter-clockwise.
///
/// # Panics
///
/// Panics if any index in `live` or `p` is out of range for `points`.
pub fn insert_point<F: Float>(
    live: Vec<Triangle>,
    points: &[Point2<F>],
    p: usize,
    eps: F,
) -> Insertion {
    let point = points[p];

    let (bad, mut triangles): (Vec<Triangle>, Vec<Triangle>) = live
        .into_iter()
        .partition(|tri| in_circumcircle(points[tri.a], points[tri.b], points[tri.c], point, eps));

    // Keep first-seen order so output is reproducible across runs.
    let mut order: Vec<Edge> = Vec::with_capacity(bad.len() * 3);
    let mut counts: HashMap<Edge, usize> = HashMap::with_capacity(bad.len() * 3);
    for tri in &bad {
        for (a, b) in tri.edges() {
            let edge = Edge::new(a, b);
            let count = counts.entry(edge).or_insert(0);
            if *count == 0 {
                order.push(edge);
            }
            *count += 1;
        }
    }

    let before = triangles.len();
    for edge in order {
        if counts[&edge] != 1 || edge.is_degenerate() || edge.contains(p) {
            continue;
        }
        let Edge(a, b) = edge;
        debug_assert!(
            a < points.len() && b < points.len(),
            "cavity edge ({a}, {b}) references a vertex outside the point array"
        );

        if orient2d(points[a], points[b], point) > F::zero() {
            triangles.push(Triangle::new(a, b, p));
        } else {
            triangles.push(Triangle::new(b, a, p));
        }
    }

    Insertion {
        created: triangles.len() - before,
        removed: bad.len(),
        triangles,
    }
}

/// Restores hull triangles that were stripped along with the super-triangle.
///
/// A finite super-triangle vertex can lie inside the circumcircle of a thin
/// hull triangle, so stripping it leaves pockets between the mesh and the
/// convex hull. Each open edge `a -> b` (mesh on its left) is wrapped outward: of
/// the points strictly to its right, the one whose circle through `a` and
/// `b` bulges least to the right closes the next triangle. Edges with no
/// point to their right are hull edges.
///
/// An empty input mesh is seeded from the edge between the first point and
/// its nearest neighbor, which is always a Delaunay edge.
///
/// Triangles use input indices, are counter-clockwise, and are appended
/// after the existing ones.
pub fn fill_hull_pockets<F: Float>(
    mut triangles: Vec<Triangle>,
    points: &[Point2<F>],
    eps: F,
) -> Vec<Triangle> {
    let mut directed: HashSet<(usize, usize)> =
        triangles.iter().flat_map(|tri| tri.edges()).collect();

    let mut open: Vec<(usize, usize)> = triangles
        .iter()
        .flat_map(|tri| tri.edges())
        .filter(|&(a, b)| !directed.contains(&(b, a)))
        .collect();
    if triangles.is_empty() {
        if let Some(nearest) = nearest_neighbor(points, 0) {
            open.push((nearest, 0));
            open.push((0, nearest));
        }
    }
    open.reverse();

    let limit = 2 * points.len();
    let before = triangles.len();

    while let Some((a, b)) = open.pop() {
        if directed.contains(&(b, a)) {
            continue;
        }
        let Some(c) = wrap_edge(points, a, b, eps) else {
            continue;
        };
        if triangles.len() >= limit {
            log::warn!("hull filling exceeded {limit} triangles; stopping");
            break;
        }

        triangles.push(Triangle::new(b, a, c));
        directed.extend([(b, a), (a, c), (c, b)]);
        for (p, q) in [(c, b), (a, c)] {
            if !directed.contains(&(q, p)) {
                open.push((p, q));
            }
        }
    }

    if triangles.len() > before {
        log::trace!("filled {} hull triangles", triangles.len() - before);
    }
    triangles
}

/// Finds the point closing the Delaunay triangle to the right of `a -> b`.
fn wrap_edge<F: Float>(points: &[Point2<F>], a: usize, b: usize, eps: F) -> Option<usize> {
    let (pa, pb) = (points[a], points[b]);
    let mid = pa.midpoint(pb);
    let right = -(pb - pa).perpendicular();

    let mut best: Option<(usize, F)> = None;
    for (c, &pc) in points.iter().enumerate() {
        if orient2d(pa, pb, pc) >= -eps {
            continue;
        }
        let Some(circle) = circumcircle(pa, pb, pc, eps) else {
            continue;
        };
        let bulge = (circle.center - mid).dot(right);
        if best.map_or(true, |(_, least)| bulge < least) {
            best = Some((c, bulge));
        }
    }
    best.map(|(c, _)| c)
}

fn nearest_neighbor<F: Float>(points: &[Point2<F>], i: usize) -> Option<usize> {
    let p = points.get(i)?;
    let mut best: Option<(usize, F)> = None;
    for (j, q) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        let d = p.distance_squared(*q);
        if best.map_or(true, |(_, least)| d < least) {
            best = Some((j, d));
        }
    }
    best.map(|(j, _)| j)
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Points must be distinct; coincident points produce an unspecified (but
/// non-panicking) result. Equivalent to [`delaunay_triangulation_with`]
/// with an observer that does nothing.
///
/// # Errors
///
/// - [`TriangulationError::InsufficientPoints`] for fewer than 3 points
/// - [`TriangulationError::DegenerateConfiguration`] if no triangle can be formed,
///   e.g. all points are collinear within tolerance
///
/// # Example
///
/// ```
/// use dualmesh::triangulation::delaunay_triangulation;
/// use dualmesh::{Point2, Tolerance, TriangulationError};
///
/// // Square with center point
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
/// let triangulation = delaunay_triangulation(&points, Tolerance::default()).unwrap();
/// assert_eq!(triangulation.len(), 4);
///
/// let collinear = [Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)];
/// assert_eq!(
///     delaunay_triangulation(&collinear, Tolerance::default()),
///     Err(TriangulationError::DegenerateConfiguration)
/// );
/// ```
pub fn delaunay_triangulation<F: Float>(
    points: &[Point2<F>],
    tolerance: Tolerance<F>,
) -> Result<Triangulation> {
    delaunay_triangulation_with(points, tolerance, |_| {})
}

/// Computes the Delaunay triangulation, reporting progress after each point.
///
/// `observer` is called once per input point, in input order, after that
/// point has been inserted. It sees the live triangle set including
/// triangles that still touch the super-triangle.
///
/// # Errors
///
/// Same as [`delaunay_triangulation`].
///
/// # Example
///
/// ```
/// use dualmesh::triangulation::delaunay_triangulation_with;
/// use dualmesh::{Point2, Tolerance};
///
/// let points = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let mut steps = Vec::new();
/// let result = delaunay_triangulation_with(&points, Tolerance::default(), |step| {
///     steps.push((step.index, step.finished_triangles().count()));
/// });
///
/// assert!(result.is_ok());
/// assert_eq!(steps, vec![(0, 0), (1, 0), (2, 1)]);
/// ```
pub fn delaunay_triangulation_with<F, O>(
    points: &[Point2<F>],
    tolerance: Tolerance<F>,
    mut observer: O,
) -> Result<Triangulation>
where
    F: Float,
    O: FnMut(&InsertionStep<'_, F>),
{
    if points.len() < 3 {
        return Err(TriangulationError::InsufficientPoints {
            count: points.len(),
        });
    }
    let bounds = points[1..]
        .iter()
        .fold(Aabb2::from_point(points[0]), |b, &p| b.expand_to_include(p));

    let _timer = Timed::debug("delaunay triangulation");
    let eps = tolerance.epsilon;
    let super_triangle = SuperTriangle::enclosing(bounds, eps);

    let mut augmented: Vec<Point2<F>> = Vec::with_capacity(points.len() + SUPER_VERTEX_COUNT);
    augmented.extend_from_slice(&super_triangle.vertices);
    augmented.extend_from_slice(points);

    let mut live = vec![SuperTriangle::<F>::triangle()];

    for (index, &point) in points.iter().enumerate() {
        let insertion = insert_point(live, &augmented, index + SUPER_VERTEX_COUNT, eps);
        log::trace!(
            "inserted point {index}: removed {} triangles, created {}",
            insertion.removed,
            insertion.created
        );

        observer(&InsertionStep {
            index,
            point,
            removed: insertion.removed,
            created: insertion.created,
            triangles: &insertion.triangles,
            points: &augmented,
        });
        live = insertion.triangles;
    }

    let stripped: Vec<Triangle> = live
        .into_iter()
        .filter(|tri| !touches_super_triangle(tri))
        .map(|tri| tri.map(|v| v - SUPER_VERTEX_COUNT))
        .collect();
    let triangles = fill_hull_pockets(stripped, points, eps);

    if triangles.is_empty() {
        log::warn!(
            "no triangle survived triangulation of {} points; input is degenerate",
            points.len()
        );
        return Err(TriangulationError::DegenerateConfiguration);
    }

    log::debug!(
        "triangulated {} points into {} triangles",
        points.len(),
        triangles.len()
    );
    Ok(Triangulation::from_triangles(triangles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn tol() -> Tolerance<f64> {
        Tolerance::default()
    }

    fn assert_delaunay(points: &[Point2<f64>], triangulation: &Triangulation) {
        for tri in triangulation.triangles() {
            let (a, b, c) = (points[tri.a], points[tri.b], points[tri.c]);
            for (i, &p) in points.iter().enumerate() {
                if tri.contains_vertex(i) {
                    continue;
                }
                assert!(
                    !in_circumcircle(a, b, c, p, 1e-10),
                    "point {} is inside circumcircle of triangle ({}, {}, {})",
                    i,
                    tri.a,
                    tri.b,
                    tri.c
                );
            }
        }
    }

    #[test]
    fn test_super_triangle_encloses_bounds() {
        let bounds = Aabb2::new(Point2::new(0.0_f64, 0.0), Point2::new(4.0, 2.0));
        let st = SuperTriangle::enclosing(bounds, 1e-10);
        assert_eq!(st.vertices[0], Point2::new(-78.0, -39.0));
        assert_eq!(st.vertices[1], Point2::new(82.0, -39.0));
        assert_eq!(st.vertices[2], Point2::new(2.0, 81.0));

        let [a, b, c] = st.vertices;
        for corner in [bounds.min, bounds.max, Point2::new(0.0, 2.0), Point2::new(4.0, 0.0)] {
            assert!(in_circumcircle(a, b, c, corner, 1e-10));
        }
    }

    #[test]
    fn test_super_triangle_flat_bounds() {
        // Zero-height box still produces a usable triangle
        let bounds = Aabb2::new(Point2::new(0.0_f64, 5.0), Point2::new(0.5, 5.0));
        let st = SuperTriangle::enclosing(bounds, 1e-10);
        assert_eq!(st.vertices[2], Point2::new(0.25, 25.0));
    }

    #[test]
    fn test_insert_point_into_super_triangle() {
        let augmented = vec![
            Point2::new(-20.0_f64, -10.0),
            Point2::new(20.0, -10.0),
            Point2::new(0.0, 20.0),
            Point2::new(0.0, 0.0),
        ];
        let insertion = insert_point(vec![SuperTriangle::<f64>::triangle()], &augmented, 3, 1e-10);

        assert_eq!(insertion.removed, 1);
        assert_eq!(insertion.created, 3);
        for tri in &insertion.triangles {
            assert!(tri.contains_vertex(3));
            let (a, b, c) = (augmented[tri.a], augmented[tri.b], augmented[tri.c]);
            assert!(orient2d(a, b, c) > 0.0, "triangle {:?} is not CCW", tri);
        }
    }

    #[test]
    fn test_insert_point_outside_all_circumcircles() {
        let augmented = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(50.0, 50.0),
        ];
        let live = vec![Triangle::new(0, 1, 2)];
        let insertion = insert_point(live.clone(), &augmented, 3, 1e-10);
        assert_eq!(insertion.removed, 0);
        assert_eq!(insertion.created, 0);
        assert_eq!(insertion.triangles, live);
    }

    #[test]
    fn test_delaunay_too_few_points() {
        let empty: Vec<Point2<f64>> = vec![];
        assert_eq!(
            delaunay_triangulation(&empty, tol()),
            Err(TriangulationError::InsufficientPoints { count: 0 })
        );

        let two = vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(
            delaunay_triangulation(&two, tol()),
            Err(TriangulationError::InsufficientPoints { count: 2 })
        );
    }

    #[test]
    fn test_delaunay_three_points() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let triangulation = delaunay_triangulation(&points, tol()).unwrap();
        assert_eq!(triangulation.len(), 1);
        assert_eq!(triangulation.triangles()[0].canonical(), [0, 1, 2]);
        assert_eq!(triangulation.hull_edges().count(), 3);
    }

    #[test]
    fn test_delaunay_square() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let triangulation = delaunay_triangulation(&points, tol()).unwrap();
        assert_eq!(triangulation.len(), 2);
        assert_eq!(triangulation.adjacency().shared_edge_pairs(), vec![(0, 1)]);
        assert_eq!(triangulation.hull_edges().count(), 4);
    }

    #[test]
    fn test_delaunay_collinear() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        assert_eq!(
            delaunay_triangulation(&points, tol()),
            Err(TriangulationError::DegenerateConfiguration)
        );
    }

    #[test]
    fn test_delaunay_triangles_are_ccw() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.1, 0.2),
            Point2::new(0.8, 0.1),
            Point2::new(0.9, 0.9),
            Point2::new(0.2, 0.85),
            Point2::new(0.5, 0.5),
        ];
        let triangulation = delaunay_triangulation(&points, tol()).unwrap();
        for tri in triangulation.triangles() {
            assert!(orient2d(points[tri.a], points[tri.b], points[tri.c]) > 0.0);
        }
    }

    #[test]
    fn test_delaunay_grid() {
        let mut points: Vec<Point2<f64>> = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                points.push(Point2::new(i as f64, j as f64));
            }
        }

        let triangulation = delaunay_triangulation(&points, tol()).unwrap();

        // 3x3 unit squares, two triangles each
        assert_eq!(triangulation.len(), 18);
        assert_delaunay(&points, &triangulation);
    }

    #[test]
    fn test_delaunay_random_like() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.1, 0.2),
            Point2::new(0.8, 0.1),
            Point2::new(0.9, 0.9),
            Point2::new(0.2, 0.85),
            Point2::new(0.5, 0.5),
            Point2::new(0.3, 0.3),
            Point2::new(0.7, 0.6),
            Point2::new(0.4, 0.8),
        ];
        let triangulation = delaunay_triangulation(&points, tol()).unwrap();
        assert_delaunay(&points, &triangulation);

        let used: HashSet<usize> = triangulation
            .triangles()
            .iter()
            .flat_map(|tri| tri.vertices())
            .collect();
        assert_eq!(used.len(), points.len());
    }

    #[test]
    fn test_delaunay_f32() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let triangulation = delaunay_triangulation(&points, Tolerance::default()).unwrap();
        assert_eq!(triangulation.len(), 1);
    }

    #[test]
    fn test_observer_sees_every_insertion() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.5),
        ];

        let mut seen = Vec::new();
        let triangulation = delaunay_triangulation_with(&points, tol(), |step| {
            assert_eq!(step.points.len(), points.len() + SUPER_VERTEX_COUNT);
            assert_eq!(step.points[step.index + SUPER_VERTEX_COUNT], step.point);
            assert_eq!(step.input_index(step.index + SUPER_VERTEX_COUNT), Some(step.index));
            assert_eq!(step.input_index(1), None);
            assert!(step.created >= 3);
            seen.push(step.index);
        })
        .unwrap();

        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(triangulation.len(), 4);
    }

    #[test]
    fn test_fill_hull_pockets_closes_square() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let filled = fill_hull_pockets(vec![Triangle::new(0, 1, 2)], &points, 1e-10);

        assert_eq!(filled.len(), 2);
        assert_eq!(filled[0], Triangle::new(0, 1, 2));
        assert_eq!(filled[1].canonical(), [0, 2, 3]);
        for tri in &filled {
            assert!(orient2d(points[tri.a], points[tri.b], points[tri.c]) > 0.0);
        }
    }

    #[test]
    fn test_fill_hull_pockets_keeps_complete_mesh() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let mesh = vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)];
        assert_eq!(fill_hull_pockets(mesh.clone(), &points, 1e-10), mesh);
    }

    #[test]
    fn test_fill_hull_pockets_seeds_empty_mesh() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(50.0, 0.001),
        ];
        let filled = fill_hull_pockets(Vec::new(), &points, 1e-10);
        assert_eq!(filled.len(), 1);
        assert_eq!(filled[0].canonical(), [0, 1, 2]);
        assert!(orient2d(points[filled[0].a], points[filled[0].b], points[filled[0].c]) > 0.0);

        let collinear = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        assert!(fill_hull_pockets(Vec::new(), &collinear, 1e-10).is_empty());
    }

    #[test]
    fn test_delaunay_thin_triangle() {
        // Too flat to survive stripping, but not collinear
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(50.0, 0.001),
        ];
        let triangulation = delaunay_triangulation(&points, tol()).unwrap();
        assert_eq!(triangulation.len(), 1);
        assert_eq!(triangulation.hull_edges().count(), 3);
    }

    #[test]
    fn test_delaunay_restores_stripped_hull_triangle() {
        let points: Vec<Point2<f64>> = [
            (16.0, 12.0),
            (18.0, 11.0),
            (17.0, 18.0),
            (13.0, 18.0),
            (7.0, 10.0),
            (0.0, 8.0),
            (19.0, 5.0),
        ]
        .iter()
        .map(|&(x, y)| Point2::new(x, y))
        .collect();

        // Insertion alone loses the thin triangle on hull edge 2-6
        let mut stripped = 0;
        delaunay_triangulation_with(&points, tol(), |step| {
            stripped = step.finished_triangles().count();
        })
        .unwrap();
        assert_eq!(stripped, 7);

        let triangulation = delaunay_triangulation(&points, tol()).unwrap();
        assert_eq!(triangulation.len(), 8);
        assert_eq!(triangulation.hull_edges().count(), 4);
        assert!(triangulation
            .triangles()
            .iter()
            .any(|tri| tri.canonical() == [1, 2, 6]));
        assert_delaunay(&points, &triangulation);
    }

    #[test]
    fn test_into_parts() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let (triangles, adjacency) = delaunay_triangulation(&points, tol()).unwrap().into_parts();
        assert_eq!(triangles.len(), 1);
        assert_eq!(adjacency.len(), 1);
    }
}
