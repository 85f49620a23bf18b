//! Weighted undirected graph stored as an adjacency list.
//!
//! Vertices are dense `usize` ids in `[0, vertex_count)`. Every undirected
//! edge is stored twice, once in each endpoint's list, so traversal only ever
//! needs to look at the current vertex's slot. Parallel edges and self-loops
//! are kept exactly as inserted.

use crate::error::GraphError;

/// Non-negative edge weight.
pub type Weight = u64;

/// One directed half of an undirected edge, as seen from its source vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    to: usize,
    weight: Weight,
}

impl Edge {
    /// Returns the neighbouring vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// A weighted undirected graph with a fixed vertex count.
///
/// # Examples
/// ```
/// use spanwood_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(1, 2, 1)?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.neighbours(1).map(<[_]>::len), Some(2));
/// # Ok::<(), spanwood_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Number of vertices fixed at construction.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges inserted so far, parallel edges included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the adjacency entries of `vertex` in insertion order, or
    /// `None` when the vertex is out of range.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> Option<&[Edge]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Inserts the undirected edge `(u, v)` with the given `weight`.
    ///
    /// Appends `(v, weight)` to `u`'s list and `(u, weight)` to `v`'s list.
    /// Duplicate edges create parallel entries and a self-loop stores two
    /// entries in the same list.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of this graph. The graph is left unchanged in that case.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }

        self.push_half(u, Edge { to: v, weight });
        self.push_half(v, Edge { to: u, weight });
        self.edge_count = self.edge_count.saturating_add(1);
        Ok(())
    }

    fn push_half(&mut self, from: usize, edge: Edge) {
        if let Some(slot) = self.adjacency.get_mut(from) {
            slot.push(edge);
        }
    }
}
