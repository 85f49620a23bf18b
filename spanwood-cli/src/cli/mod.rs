//! Command-line interface for the spanwood demonstration.
//!
//! Builds the fixed demonstration graph, runs Prim's traversal from the
//! requested start vertex, and renders the total as a single line.

mod commands;

pub use commands::{
    Cli, CliError, DEMO_EDGES, DEMO_VERTEX_COUNT, ExecutionSummary, build_demo_graph,
    render_summary, run_cli,
};
