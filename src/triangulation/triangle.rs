//! Index-based triangles and edges.

/// A triangle represented by indices into a point array.
///
/// Storage order is significant for [`Triangle::edge_opposite`] and the
/// adjacency table; geometrically the triangle is an unordered triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the vertex indices in storage order.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three edges in storage order: `ab`, `bc`, `ca`.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Returns the edge opposite the `j`-th vertex.
    ///
    /// For `j = 0` this is `(b, c)`, for `j = 1` it is `(c, a)` and for
    /// `j = 2` it is `(a, b)`.
    ///
    /// # Panics
    ///
    /// Panics if `j > 2`.
    #[inline]
    pub fn edge_opposite(&self, j: usize) -> (usize, usize) {
        let v = self.vertices();
        (v[(j + 1) % 3], v[(j + 2) % 3])
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Returns `true` if any vertex index is repeated.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b || self.b == self.c || self.c == self.a
    }

    /// Returns the vertex indices sorted ascending.
    ///
    /// Two triangles with the same vertex set have equal canonical forms
    /// regardless of storage order.
    #[inline]
    pub fn canonical(&self) -> [usize; 3] {
        let mut v = self.vertices();
        v.sort_unstable();
        v
    }

    /// Returns a copy with every index transformed by `f`.
    #[inline]
    pub(crate) fn map(self, f: impl Fn(usize) -> usize) -> Self {
        Self::new(f(self.a), f(self.b), f(self.c))
    }
}

/// An undirected edge, normalized so the smaller index comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    /// Creates a canonical edge from two endpoints in either order.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a < b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }

    /// Returns `true` if both endpoints are the same vertex.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.0 == self.1
    }

    /// Checks if `v` is one of the endpoints.
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.0 == v || self.1 == v
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Edge::new(a, b)
    }
}
