//! End-to-end pipeline: drive the auditor, collect, reduce.

use crate::auditor::Auditor;
use crate::harness::collect;
use crate::harness::driver::Driver;
use crate::harness::median;
use crate::harness::types::{HarnessError, HarnessResult, MedianSelection, RunBatch};
use crate::session::Session;

/// Reduce a finished batch to its median selection.
///
/// `min_success` is the minimum successes/attempts ratio to accept before
/// trusting the median; 0.0 keeps the permissive behavior of reducing over
/// however many runs succeeded.
pub fn reduce_batch(batch: RunBatch, min_success: f64) -> HarnessResult<MedianSelection> {
    let attempts = batch.len();
    let (reports, failures) = collect::successes(batch);

    if failures > 0 {
        eprintln!("{} of {} runs failed and were discarded", failures, attempts);
    }

    if reports.is_empty() {
        return Err(HarnessError::EmptySampleSet);
    }

    if min_success > 0.0 && attempts > 0 {
        let ratio = reports.len() as f64 / attempts as f64;
        if ratio < min_success {
            return Err(HarnessError::BelowSuccessThreshold {
                successes: reports.len(),
                attempts,
                required: min_success,
            });
        }
    }

    median::select_median(reports)
}

/// Run the whole harness: `runs` sequential audits of `url`, then the
/// median selection over whatever succeeded.
pub fn run_harness<A: Auditor>(
    auditor: A,
    url: &str,
    runs: usize,
    min_success: f64,
    session: Option<Session>,
) -> HarnessResult<MedianSelection> {
    let mut driver = Driver::new(auditor, runs);
    if let Some(session) = session {
        driver = driver.save_reports_to(session);
    }

    let batch = driver.run(url);
    reduce_batch(batch, min_success)
}
