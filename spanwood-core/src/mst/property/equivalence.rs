//! Property 1: agreement with the sequential Kruskal oracle.
//!
//! For any generated graph, Prim's total from the fixture's start vertex must
//! equal the MST weight of that vertex's component, and the number of
//! vertices reached must equal the component size.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::prim_from;

use super::oracle::sequential_kruskal;
use super::types::PrimFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &PrimFixture) -> TestCaseResult {
    let graph = fixture.build().map_err(TestCaseError::fail)?;
    let tree = prim_from(&graph, fixture.start).map_err(|e| {
        TestCaseError::fail(format!("prim_from failed: {e} ({})", fixture.describe()))
    })?;
    let oracle = sequential_kruskal(fixture);

    if tree.total_weight() != oracle.component_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: prim={}, oracle={} ({})",
            tree.total_weight(),
            oracle.component_weight,
            fixture.describe(),
        )));
    }

    if tree.reached() != oracle.component_size {
        return Err(TestCaseError::fail(format!(
            "reached mismatch: prim={}, oracle={} ({})",
            tree.reached(),
            oracle.component_size,
            fixture.describe(),
        )));
    }

    if tree.is_spanning() != (oracle.component_count == 1) {
        return Err(TestCaseError::fail(format!(
            "spanning flag {} disagrees with {} components ({})",
            tree.is_spanning(),
            oracle.component_count,
            fixture.describe(),
        )));
    }

    Ok(())
}
