//! Metric reporter: turns the median selection into the printed report.
//!
//! One `label value` line per metric, in a fixed documented order. A metric
//! the auditor did not emit gets the sentinel value instead of aborting the
//! rest of the report, so consumers can tell "not measured" apart from
//! "measured as zero".

use crate::harness::types::MedianSelection;

/// Placeholder printed for a metric absent from the selected report
pub const SENTINEL: &str = "not available";

/// Build the report lines in their fixed output order.
pub fn metric_lines(selection: &MedianSelection) -> Vec<(&'static str, String)> {
    let metrics = &selection.report.metrics;
    vec![
        (
            "performanceScore",
            format_value(Some(selection.report.score * 100.0)),
        ),
        (
            "firstContentfulPaint",
            format_value(metrics.first_contentful_paint),
        ),
        (
            "largestContentfulPaint",
            format_value(metrics.largest_contentful_paint),
        ),
        ("interactive", format_value(metrics.interactive)),
        ("speedIndex", format_value(metrics.speed_index)),
        ("totalBlockingTime", format_value(metrics.total_blocking_time)),
        ("observedLoad", format_value(metrics.observed_load)),
        (
            "observedDomContentLoaded",
            format_value(metrics.observed_dom_content_loaded),
        ),
    ]
}

/// Print the report to stdout, one metric per line.
pub fn print(selection: &MedianSelection) {
    for (label, value) in metric_lines(selection) {
        println!("{} {}", label, value);
    }
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format_number(v),
        None => SENTINEL.to_string(),
    }
}

/// Render a metric value without float noise: rounded to a millisecond
/// fraction and with a bare integer when the fraction is zero.
fn format_number(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{MetricBlock, RunReport};
    use pretty_assertions::assert_eq;

    fn selection(score: f64, metrics: MetricBlock) -> MedianSelection {
        MedianSelection {
            report: RunReport { score, metrics },
            rank: 0,
            sample_count: 1,
        }
    }

    fn full_metrics() -> MetricBlock {
        MetricBlock {
            first_contentful_paint: Some(1200.5),
            largest_contentful_paint: Some(2400.0),
            interactive: Some(3100.0),
            speed_index: Some(1800.0),
            total_blocking_time: Some(150.0),
            observed_load: Some(900.0),
            observed_dom_content_loaded: Some(700.0),
        }
    }

    #[test]
    fn test_scaled_score_prints_clean() {
        // 0.8 * 100 is not exactly 80.0 in floats; the line must still
        // read "80".
        let lines = metric_lines(&selection(0.80, full_metrics()));
        assert_eq!(lines[0], ("performanceScore", "80".to_string()));
    }

    #[test]
    fn test_lines_in_fixed_order() {
        let lines = metric_lines(&selection(0.93, full_metrics()));
        let labels: Vec<&str> = lines.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "performanceScore",
                "firstContentfulPaint",
                "largestContentfulPaint",
                "interactive",
                "speedIndex",
                "totalBlockingTime",
                "observedLoad",
                "observedDomContentLoaded",
            ]
        );
        assert_eq!(lines[1].1, "1200.5");
        assert_eq!(lines[2].1, "2400");
    }

    #[test]
    fn test_missing_metric_gets_sentinel_others_print() {
        let mut metrics = full_metrics();
        metrics.total_blocking_time = None;

        let lines = metric_lines(&selection(0.75, metrics));
        assert_eq!(lines[5], ("totalBlockingTime", SENTINEL.to_string()));
        assert_eq!(lines[1].1, "1200.5");
        assert_eq!(lines[7].1, "700");
    }

    #[test]
    fn test_all_metrics_missing_still_reports_score() {
        let lines = metric_lines(&selection(0.5, MetricBlock::default()));
        assert_eq!(lines[0].1, "50");
        for (_, value) in &lines[1..] {
            assert_eq!(value, SENTINEL);
        }
    }
}
