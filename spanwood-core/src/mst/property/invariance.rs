//! Property 2: totals that must not move.
//!
//! - **Idempotence**: repeated traversals of one graph agree exactly.
//! - **Dominated parallel edges**: re-adding an existing edge with a higher
//!   weight leaves the total unchanged.
//! - **Start independence**: on a connected graph every start vertex yields
//!   the same total.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, mst::prim_from};

use super::types::PrimFixture;

/// Number of repeated traversals compared for idempotence.
const REPETITIONS: usize = 3;

/// Runs the invariance property for the given fixture.
pub(super) fn run_invariance_property(fixture: &PrimFixture) -> TestCaseResult {
    let graph = fixture.build().map_err(TestCaseError::fail)?;
    let baseline = traverse(&graph, fixture.start, fixture)?;

    for run in 1..REPETITIONS {
        let repeat = traverse(&graph, fixture.start, fixture)?;
        if repeat != baseline {
            return Err(TestCaseError::fail(format!(
                "run {run}: result diverged: baseline={baseline:?}, run={repeat:?} ({})",
                fixture.describe(),
            )));
        }
    }

    check_dominated_parallel_edges(fixture, baseline.total_weight())?;

    if baseline.is_spanning() {
        for start in 0..graph.vertex_count() {
            let other = traverse(&graph, start, fixture)?;
            if other.total_weight() != baseline.total_weight() {
                return Err(TestCaseError::fail(format!(
                    "start {start} total {} differs from start {} total {} ({})",
                    other.total_weight(),
                    fixture.start,
                    baseline.total_weight(),
                    fixture.describe(),
                )));
            }
        }
    }

    Ok(())
}

fn check_dominated_parallel_edges(fixture: &PrimFixture, expected: u64) -> TestCaseResult {
    let mut heavier = fixture.clone();
    for &(u, v, weight) in &fixture.edges {
        if u != v {
            heavier.edges.push((v, u, weight.saturating_add(1)));
        }
    }
    let graph = heavier.build().map_err(TestCaseError::fail)?;
    let total = traverse(&graph, fixture.start, fixture)?.total_weight();
    if total != expected {
        return Err(TestCaseError::fail(format!(
            "dominated parallel edges moved the total from {expected} to {total} ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}

fn traverse(
    graph: &Graph,
    start: usize,
    fixture: &PrimFixture,
) -> Result<crate::PrimTree, TestCaseError> {
    prim_from(graph, start).map_err(|e| {
        TestCaseError::fail(format!(
            "prim_from({start}) failed: {e} ({})",
            fixture.describe()
        ))
    })
}
