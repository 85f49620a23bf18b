//! Command implementation and argument parsing for the spanwood CLI.

use std::io::{self, Write};

use clap::Parser;
use spanwood_core::{
    DEFAULT_START_VERTEX, Graph, GraphError, MstError, PrimTree, Weight, prim_from,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Number of vertices in the demonstration graph.
pub const DEMO_VERTEX_COUNT: usize = 5;

/// Undirected edges `(u, v, weight)` of the demonstration graph.
pub const DEMO_EDGES: [(usize, usize, Weight); 7] = [
    (0, 1, 2),
    (0, 3, 6),
    (1, 2, 3),
    (1, 3, 8),
    (1, 4, 5),
    (2, 4, 7),
    (3, 4, 9),
];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwood",
    about = "Print the minimum spanning tree weight of the demonstration graph."
)]
pub struct Cli {
    /// Vertex the Prim traversal starts from.
    #[arg(long, default_value_t = DEFAULT_START_VERTEX)]
    pub start: usize,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_VERTEX,
        }
    }
}

/// Errors surfaced while executing the CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The demonstration graph could not be built.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The spanning tree computation failed.
    #[error(transparent)]
    Mst(#[from] MstError),
}

impl CliError {
    /// Returns the stable code of the underlying core error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Graph(err) => err.code().as_str(),
            Self::Mst(err) => err.code().as_str(),
        }
    }
}

/// Outcome of executing the CLI command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Vertex the traversal started from.
    pub start: usize,
    /// Result of the traversal.
    pub tree: PrimTree,
}

/// Builds the fixed five-vertex demonstration graph.
///
/// # Errors
/// Returns [`GraphError`] if an edge in [`DEMO_EDGES`] falls outside
/// [`DEMO_VERTEX_COUNT`].
pub fn build_demo_graph() -> Result<Graph, GraphError> {
    let mut graph = Graph::new(DEMO_VERTEX_COUNT);
    for (u, v, weight) in DEMO_EDGES {
        graph.add_edge(u, v, weight)?;
    }
    Ok(graph)
}

/// Computes the demonstration graph's spanning tree from `cli.start`.
///
/// # Errors
/// Returns [`CliError`] when the start vertex is not part of the graph.
///
/// # Examples
/// ```
/// use spanwood_cli::cli::{Cli, run_cli};
///
/// let summary = run_cli(Cli::default())?;
/// assert_eq!(summary.tree.total_weight(), 16);
/// # Ok::<(), spanwood_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(start = cli.start, total_weight = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let graph = build_demo_graph()?;
    let tree = prim_from(&graph, cli.start)?;
    Span::current().record("total_weight", tree.total_weight());
    info!(
        total_weight = tree.total_weight(),
        reached = tree.reached(),
        "command completed"
    );
    Ok(ExecutionSummary {
        start: cli.start,
        tree,
    })
}

/// Renders `summary` as the single result line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// use spanwood_cli::cli::{Cli, render_summary, run_cli};
///
/// let summary = run_cli(Cli::default())?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8_lossy(buffer.get_ref()),
///     "Total weight of the Minimum Spanning Tree: 16\n",
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "Total weight of the Minimum Spanning Tree: {}",
        summary.tree.total_weight()
    )
}
