//! Fixture types for Prim property-based tests.

use crate::Graph;

/// Graph shape used when generating a fixture.
///
/// Each shape stresses a different part of the traversal: tie handling,
/// stale-entry filtering, or the disconnected policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphShape {
    /// Every edge carries a distinct weight, so the MST is unique.
    Distinct,
    /// Weights come from a tiny range, producing many ties.
    ManyIdentical,
    /// A random spanning tree plus a handful of extra edges.
    Sparse,
    /// Most vertex pairs are joined.
    Dense,
    /// Several components with no edges between them.
    Disconnected,
    /// Connected graph salted with self-loops and parallel edges.
    Multigraph,
}

/// Generated input for a property run.
///
/// Carries the shape and start vertex so failures print enough context to
/// replay the case.
#[derive(Clone, Debug)]
pub(super) struct PrimFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Undirected edges `(u, v, weight)` in insertion order.
    pub edges: Vec<(usize, usize, u64)>,
    /// Shape used during generation.
    pub shape: GraphShape,
    /// Vertex the traversal starts from.
    pub start: usize,
}

impl PrimFixture {
    /// Builds the [`Graph`] described by the fixture.
    ///
    /// Generated edges are always in range, so any rejection is reported as
    /// a message rather than a panic.
    pub(super) fn build(&self) -> Result<Graph, String> {
        let mut graph = Graph::new(self.vertex_count);
        for &(u, v, weight) in &self.edges {
            graph
                .add_edge(u, v, weight)
                .map_err(|err| format!("fixture edge ({u}, {v}) rejected: {err}"))?;
        }
        Ok(graph)
    }

    /// One-line description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "shape={:?}, vertices={}, edges={}, start={}",
            self.shape,
            self.vertex_count,
            self.edges.len(),
            self.start,
        )
    }
}
