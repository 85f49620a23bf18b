//! Minimum spanning tree weight via Prim's algorithm.
//!
//! The traversal grows a single tree from a start vertex. Candidate edges are
//! pushed onto a [`FrontierQueue`] unconditionally and filtered lazily: when a
//! popped item names a vertex that is already in the tree it is discarded.
//! This replaces decrease-key while preserving the greedy-cut invariant, as
//! every non-stale pop is the lightest edge leaving the current tree.
//!
//! Vertices unreachable from the start never join the tree and contribute
//! nothing to the total. The result reports how many vertices were reached so
//! callers can tell a spanning tree from a partial one.

use tracing::{Span, debug, field, instrument, warn};

use crate::{
    error::MstError,
    frontier::{FrontierItem, FrontierQueue},
    graph::{Graph, Weight},
};

/// Vertex Prim's traversal starts from when none is given.
pub const DEFAULT_START_VERTEX: usize = 0;

/// Outcome of a Prim traversal.
///
/// When the graph is connected this describes a minimum spanning tree;
/// otherwise it describes the minimum spanning tree of the start vertex's
/// component.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrimTree {
    total_weight: Weight,
    reached: usize,
    vertex_count: usize,
}

impl PrimTree {
    /// Sum of the weights of the edges joining the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }

    /// Number of vertices that joined the tree, the start vertex included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn reached(&self) -> usize { self.reached }

    /// Number of vertices in the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns `true` when every vertex joined the tree.
    #[must_use]
    pub const fn is_spanning(&self) -> bool {
        self.reached == self.vertex_count
    }
}

/// Runs Prim's algorithm from [`DEFAULT_START_VERTEX`].
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] when the graph has no vertices.
///
/// # Examples
/// ```
/// use spanwood_core::{Graph, prim};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(1, 2, 1)?;
/// graph.add_edge(0, 2, 6)?;
/// let tree = prim(&graph)?;
/// assert_eq!(tree.total_weight(), 5);
/// assert!(tree.is_spanning());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn prim(graph: &Graph) -> Result<PrimTree, MstError> {
    prim_from(graph, DEFAULT_START_VERTEX)
}

/// Runs Prim's algorithm growing the tree from `start`.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] when the graph has no vertices and
/// [`MstError::InvalidStartVertex`] when `start` is not a vertex of `graph`.
#[instrument(
    name = "mst.prim",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count(), total_weight = field::Empty),
)]
pub fn prim_from(graph: &Graph, start: usize) -> Result<PrimTree, MstError> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }
    if start >= vertex_count {
        return Err(MstError::InvalidStartVertex {
            vertex: start,
            vertex_count,
        });
    }

    let mut visited = vec![false; vertex_count];
    let mut frontier = FrontierQueue::with_capacity(vertex_count);
    frontier.push(FrontierItem::new(start, 0));

    let mut total_weight: Weight = 0;
    let mut reached = 0_usize;
    let mut stale_pops = 0_usize;

    while let Some(FrontierItem { vertex, weight }) = frontier.pop_min() {
        let Some(seen) = visited.get_mut(vertex) else {
            continue;
        };
        if *seen {
            stale_pops = stale_pops.saturating_add(1);
            continue;
        }
        *seen = true;
        total_weight = total_weight.saturating_add(weight);
        reached = reached.saturating_add(1);

        for edge in graph.neighbours(vertex).unwrap_or_default() {
            if visited.get(edge.to()) == Some(&false) {
                frontier.push(FrontierItem::new(edge.to(), edge.weight()));
            }
        }
    }

    Span::current().record("total_weight", total_weight);
    debug!(total_weight, reached, stale_pops, "prim traversal completed");
    if reached < vertex_count {
        warn!(
            start,
            reached,
            unreachable = vertex_count.saturating_sub(reached),
            "graph is disconnected; total covers the start vertex's component only"
        );
    }

    Ok(PrimTree {
        total_weight,
        reached,
        vertex_count,
    })
}

impl Graph {
    /// Returns the total weight of the minimum spanning tree grown from
    /// vertex 0.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] when the graph has no vertices.
    pub fn minimum_spanning_weight(&self) -> Result<Weight, MstError> {
        prim(self).map(|tree| tree.total_weight())
    }
}


#[cfg(test)]
mod property;
