//! Result collector: projects a batch down to its successful reports.

use crate::harness::types::{RunBatch, RunOutcome};
use crate::report::RunReport;

/// Split a batch into its successful reports (in invocation order) and the
/// number of discarded failures.
pub fn successes(batch: RunBatch) -> (Vec<RunReport>, usize) {
    let mut reports = Vec::with_capacity(batch.len());
    let mut failures = 0;

    for outcome in batch.outcomes {
        match outcome {
            RunOutcome::Success(report) => reports.push(report),
            RunOutcome::Failure { .. } => failures += 1,
        }
    }

    (reports, failures)
}
