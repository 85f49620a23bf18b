//! Property-based tests for the Prim MST traversal.
//!
//! Checks Prim's totals against a sequential Kruskal oracle and verifies the
//! totals that must stay fixed under repetition, dominated parallel edges,
//! and a change of start vertex.

mod equivalence;
mod invariance;
mod oracle;
mod types;
