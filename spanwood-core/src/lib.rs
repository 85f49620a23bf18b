//! Spanwood core library.
//!
//! Builds weighted undirected graphs and computes the weight of their minimum
//! spanning tree with Prim's algorithm.
//!
//! ```
//! use spanwood_core::Graph;
//!
//! let mut graph = Graph::new(2);
//! graph.add_edge(0, 1, 7)?;
//! assert_eq!(graph.minimum_spanning_weight()?, 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod frontier;
mod graph;
mod mst;
#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode},
    frontier::{FrontierItem, FrontierQueue},
    graph::{Edge, Graph, Weight},
    mst::{DEFAULT_START_VERTEX, PrimTree, prim, prim_from},
};
