//! Sequential Kruskal oracle for Prim property verification.
//!
//! Kruskal builds the minimum spanning forest of the whole graph; the oracle
//! then keeps only the tree containing the start vertex, which is exactly
//! what Prim grows. MST weight is unique, so totals must agree even when
//! ties let the two algorithms pick different edges.

use super::types::PrimFixture;

/// Reference answer for one fixture.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleResult {
    /// MST weight of the start vertex's component.
    pub component_weight: u64,
    /// Number of vertices in the start vertex's component.
    pub component_size: usize,
    /// Number of connected components in the whole graph.
    pub component_count: usize,
}

/// Path-halving find over a parent array.
pub(super) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}

/// Runs Kruskal's algorithm over `fixture` and summarises the start
/// vertex's tree.
pub(super) fn sequential_kruskal(fixture: &PrimFixture) -> OracleResult {
    let vertex_count = fixture.vertex_count;
    let mut edges: Vec<(usize, usize, u64)> = fixture
        .edges
        .iter()
        .copied()
        .filter(|&(u, v, _)| u != v && u < vertex_count && v < vertex_count)
        .collect();
    edges.sort_by_key(|&(_, _, weight)| weight);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut accepted = Vec::with_capacity(vertex_count);
    let mut component_count = vertex_count;

    for (u, v, weight) in edges {
        let left = find_root(&mut parent, u);
        let right = find_root(&mut parent, v);
        if left != right {
            parent[right.max(left)] = right.min(left);
            accepted.push((u, weight));
            component_count -= 1;
        }
    }

    if vertex_count == 0 {
        return OracleResult {
            component_weight: 0,
            component_size: 0,
            component_count: 0,
        };
    }

    let start_root = find_root(&mut parent, fixture.start);
    let component_weight = accepted
        .iter()
        .filter(|&&(u, _)| find_root(&mut parent, u) == start_root)
        .fold(0_u64, |total, &(_, weight)| total.saturating_add(weight));
    let component_size = (0..vertex_count)
        .filter(|&vertex| find_root(&mut parent, vertex) == start_root)
        .count();

    OracleResult {
        component_weight,
        component_size,
        component_count,
    }
}
