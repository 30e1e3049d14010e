//! Neighbor relation between triangles that share an edge.

use super::triangle::{Edge, Triangle};
use std::collections::HashMap;

/// Per-triangle neighbors across each edge.
///
/// Entry `j` of triangle `i` is the triangle on the other side of the edge
/// opposite triangle `i`'s `j`-th vertex (see [`Triangle::edge_opposite`]),
/// or `None` if that edge lies on the hull.
///
/// The table is derived from a triangle list and never edited on its own;
/// rebuild it whenever the triangles change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyTable {
    neighbors: Vec<[Option<usize>; 3]>,
}

impl AdjacencyTable {
    /// Builds the adjacency table for a triangle list.
    ///
    /// Degenerate triangles (a repeated vertex index) are skipped: they have
    /// no neighbors and are nobody's neighbor.
    ///
    /// # Example
    ///
    /// ```
    /// use dualmesh::triangulation::{AdjacencyTable, Triangle};
    ///
    /// // Two triangles sharing the diagonal 0-2 of a quad
    /// let triangles = [Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)];
    /// let adjacency = AdjacencyTable::build(&triangles);
    ///
    /// // Edge opposite vertex 1 of the first triangle is 2-0
    /// assert_eq!(adjacency.neighbor(0, 1), Some(1));
    /// // Edge opposite vertex 3 of the second triangle is 0-2
    /// assert_eq!(adjacency.neighbor(1, 2), Some(0));
    /// assert!(adjacency.is_hull_edge(0, 0));
    /// ```
    pub fn build(triangles: &[Triangle]) -> Self {
        let mut owners: HashMap<Edge, Vec<usize>> = HashMap::new();

        for (i, tri) in triangles.iter().enumerate() {
            if tri.is_degenerate() {
                continue;
            }
            for (p, q) in tri.edges() {
                owners.entry(Edge::new(p, q)).or_default().push(i);
            }
        }

        let neighbors = triangles
            .iter()
            .enumerate()
            .map(|(i, tri)| {
                let mut slots = [None; 3];
                if tri.is_degenerate() {
                    return slots;
                }
                for (j, slot) in slots.iter_mut().enumerate() {
                    let (p, q) = tri.edge_opposite(j);
                    *slot = owners
                        .get(&Edge::new(p, q))
                        .and_then(|tris| tris.iter().copied().find(|&t| t != i));
                }
                slots
            })
            .collect();

        Self { neighbors }
    }

    /// Returns the number of triangles covered by the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` if the table covers no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Returns the three neighbor slots of triangle `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t` is out of range.
    #[inline]
    pub fn neighbors(&self, t: usize) -> [Option<usize>; 3] {
        self.neighbors[t]
    }

    /// Returns the neighbor of triangle `t` across the edge opposite vertex `j`.
    ///
    /// Returns `None` for hull edges and for out-of-range arguments.
    #[inline]
    pub fn neighbor(&self, t: usize, j: usize) -> Option<usize> {
        self.neighbors.get(t)?.get(j).copied().flatten()
    }

    /// Returns `true` if the edge opposite vertex `j` of triangle `t` has no neighbor.
    #[inline]
    pub fn is_hull_edge(&self, t: usize, j: usize) -> bool {
        self.neighbor(t, j).is_none()
    }

    /// Iterates over every row of the table.
    pub fn iter(&self) -> impl Iterator<Item = &[Option<usize>; 3]> + '_ {
        self.neighbors.iter()
    }

    /// Returns every mutual-neighbor pair `(i, k)` with `i < k`, each once.
    pub fn shared_edge_pairs(&self) -> Vec<(usize, usize)> {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(i, slots)| {
                slots
                    .iter()
                    .flatten()
                    .filter(move |&&k| k > i)
                    .map(move |&k| (i, k))
            })
            .collect()
    }
}
