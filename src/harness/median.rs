//! Median-run selection.
//!
//! The representative sample is a whole run, not an average of metrics
//! across runs: averaging would combine timings from different executions
//! and break the correlation between metrics measured together (a run on a
//! slow network is consistently slow across FCP, LCP, and interactive).
//!
//! The selection algorithm is part of this crate's contract and is
//! implemented here rather than delegated: sort successes ascending by
//! primary score with a stable sort (ties keep invocation order), then take
//! the element at index `(count - 1) / 2` — the lower middle when the count
//! is even. For a given multiset of scores this is deterministic regardless
//! of the order the runs arrived in.

use crate::harness::types::{HarnessError, HarnessResult, MedianSelection};
use crate::report::RunReport;

/// Select the median run from a non-empty set of successful reports.
///
/// Returns `HarnessError::EmptySampleSet` for an empty input; there is no
/// defined median over zero samples and no default is fabricated.
pub fn select_median(mut reports: Vec<RunReport>) -> HarnessResult<MedianSelection> {
    if reports.is_empty() {
        return Err(HarnessError::EmptySampleSet);
    }

    let sample_count = reports.len();

    let mut order: Vec<usize> = (0..sample_count).collect();
    // Stable sort over indices: equal scores stay in invocation order.
    order.sort_by(|&a, &b| reports[a].score.total_cmp(&reports[b].score));

    let rank = (sample_count - 1) / 2;
    let report = reports.swap_remove(order[rank]);

    Ok(MedianSelection {
        report,
        rank,
        sample_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MetricBlock;
    use pretty_assertions::assert_eq;

    fn report(score: f64) -> RunReport {
        RunReport {
            score,
            metrics: MetricBlock::default(),
        }
    }

    fn report_with_fcp(score: f64, fcp: f64) -> RunReport {
        RunReport {
            score,
            metrics: MetricBlock {
                first_contentful_paint: Some(fcp),
                ..MetricBlock::default()
            },
        }
    }

    #[test]
    fn test_odd_count_selects_true_median() {
        let reports = vec![report(0.70), report(0.90), report(0.80)];
        let selection = select_median(reports).unwrap();
        assert_eq!(selection.report.score, 0.80);
        assert_eq!(selection.rank, 1);
        assert_eq!(selection.sample_count, 3);
    }

    #[test]
    fn test_even_count_selects_lower_middle() {
        let reports = vec![report(0.4), report(0.9), report(0.6), report(0.8)];
        // Sorted: 0.4, 0.6, 0.8, 0.9 — lower middle is 0.6.
        let selection = select_median(reports).unwrap();
        assert_eq!(selection.report.score, 0.6);
        assert_eq!(selection.rank, 1);
        assert_eq!(selection.sample_count, 4);
    }

    #[test]
    fn test_single_report_is_its_own_median() {
        let selection = select_median(vec![report(0.42)]).unwrap();
        assert_eq!(selection.report.score, 0.42);
        assert_eq!(selection.rank, 0);
        assert_eq!(selection.sample_count, 1);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(
            select_median(Vec::new()),
            Err(HarnessError::EmptySampleSet)
        ));
    }

    #[test]
    fn test_selection_invariant_under_reordering() {
        let a = vec![report(0.70), report(0.90), report(0.80), report(0.60), report(0.85)];
        let b = vec![report(0.85), report(0.60), report(0.90), report(0.70), report(0.80)];

        let sel_a = select_median(a).unwrap();
        let sel_b = select_median(b).unwrap();
        assert_eq!(sel_a.report, sel_b.report);
        assert_eq!(sel_a.rank, sel_b.rank);
    }

    #[test]
    fn test_ties_broken_by_invocation_order() {
        // All scores equal: the sort must not reshuffle them, so the middle
        // run by invocation order wins.
        let reports = vec![
            report_with_fcp(0.5, 100.0),
            report_with_fcp(0.5, 200.0),
            report_with_fcp(0.5, 300.0),
        ];
        let selection = select_median(reports).unwrap();
        assert_eq!(selection.report.metrics.first_contentful_paint, Some(200.0));
    }
}
