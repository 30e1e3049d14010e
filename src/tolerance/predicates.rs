//! Geometric predicates with explicit tolerance.

use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Returns twice the signed area of the triangle `a`, `b`, `c`.
///
/// Positive when the points turn counter-clockwise, negative when they turn
/// clockwise, and zero when they are collinear.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}

/// Classifies the turn `a -> b -> c`.
///
/// `eps` is compared against the absolute value of [`orient2d`].
#[inline]
pub fn orientation<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = orient2d(a, b, c);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// The circle through a triangle's three vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle<F> {
    /// Center of the circle, equidistant from all three vertices.
    pub center: Point2<F>,
    /// Squared radius.
    pub radius_sq: F,
}

impl<F: Float> Circumcircle<F> {
    /// Returns `true` if `q` lies strictly inside the circle by more than `eps`.
    ///
    /// The comparison is `|q - center|² < r² - eps`, so points on the circle
    /// and points within `eps` of it are reported as outside.
    #[inline]
    pub fn contains(&self, q: Point2<F>, eps: F) -> bool {
        self.center.distance_squared(q) < self.radius_sq - eps
    }
}

/// Computes the circumcenter and squared circumradius of a triangle.
///
/// Returns `None` when the points are collinear within tolerance, i.e. when
/// the determinant `D = 2·(x1(y2−y3) + x2(y3−y1) + x3(y1−y2))` has `|D| < eps`.
///
/// # Example
///
/// ```
/// use dualmesh::tolerance::circumcircle;
/// use dualmesh::Point2;
///
/// let c = circumcircle(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
///     1e-10,
/// )
/// .unwrap();
///
/// // Right triangle: the center is the midpoint of the hypotenuse
/// assert!((c.center.x - 0.5).abs() < 1e-12);
/// assert!((c.center.y - 0.5).abs() < 1e-12);
/// assert!((c.radius_sq - 0.5).abs() < 1e-12);
/// ```
pub fn circumcircle<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    eps: F,
) -> Option<Circumcircle<F>> {
    let two = F::one() + F::one();
    let d = two * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y));

    if d.abs() < eps {
        return None;
    }

    let p1_sq = p1.x * p1.x + p1.y * p1.y;
    let p2_sq = p2.x * p2.x + p2.y * p2.y;
    let p3_sq = p3.x * p3.x + p3.y * p3.y;

    let ux = (p1_sq * (p2.y - p3.y) + p2_sq * (p3.y - p1.y) + p3_sq * (p1.y - p2.y)) / d;
    let uy = (p1_sq * (p3.x - p2.x) + p2_sq * (p1.x - p3.x) + p3_sq * (p2.x - p1.x)) / d;

    let center = Point2::new(ux, uy);
    Some(Circumcircle {
        center,
        radius_sq: p1.distance_squared(center),
    })
}

/// Tests if `q` lies strictly inside the circumcircle of `p1`, `p2`, `p3`.
///
/// Always `false` for a degenerate (collinear) triangle. Vertex order does
/// not matter.
///
/// # Example
///
/// ```
/// use dualmesh::tolerance::in_circumcircle;
/// use dualmesh::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.5, 0.866);
///
/// assert!(in_circumcircle(a, b, c, Point2::new(0.5, 0.29), 1e-10));
/// assert!(!in_circumcircle(a, b, c, Point2::new(10.0, 10.0), 1e-10));
/// ```
#[inline]
pub fn in_circumcircle<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    q: Point2<F>,
    eps: F,
) -> bool {
    circumcircle(p1, p2, p3, eps).is_some_and(|circle| circle.contains(q, eps))
}
