//! Auditor report schema and parsing.
//!
//! The auditor emits one JSON document per successful run. Only two corners
//! of that document matter here: `categories.performance.score` (the 0–1
//! primary score used to rank runs) and `audits.metrics.details.items[0]`
//! (the headline timing metrics). Everything else is ignored.

use serde::{Deserialize, Serialize};

/// Headline metrics from a single audit, all in milliseconds.
///
/// Every field is individually optional: an auditor version that does not
/// emit one of them must not invalidate the rest of the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricBlock {
    pub first_contentful_paint: Option<f64>,
    pub largest_contentful_paint: Option<f64>,
    pub interactive: Option<f64>,
    pub speed_index: Option<f64>,
    pub total_blocking_time: Option<f64>,
    pub observed_load: Option<f64>,
    pub observed_dom_content_loaded: Option<f64>,
}

/// One successful audit: the primary score plus its metrics block.
///
/// Reports are immutable once parsed; the rest of the pipeline only reads
/// them. Metrics stay together as a unit because they were all measured
/// within the same run (a slow run is consistently slow across fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Primary performance score, 0.0–1.0, higher is better.
    pub score: f64,

    /// Headline metrics measured in the same run.
    pub metrics: MetricBlock,
}

impl RunReport {
    /// Parse an auditor JSON document into a report.
    pub fn from_json(data: &[u8]) -> ParseResult<Self> {
        let raw: RawReport = serde_json::from_slice(data)?;

        let score = raw
            .categories
            .performance
            .score
            .ok_or_else(|| ParseError::Schema("performance score is null".to_string()))?;

        let metrics = raw
            .audits
            .metrics
            .details
            .items
            .into_iter()
            .next()
            .ok_or_else(|| ParseError::Schema("metrics audit has no items".to_string()))?;

        Ok(Self { score, metrics })
    }
}

// Raw wire shape of the auditor document, pared down to the fields we read.
// Unknown fields are ignored by serde, so full production reports parse.

#[derive(Debug, Deserialize)]
struct RawReport {
    categories: RawCategories,
    audits: RawAudits,
}

#[derive(Debug, Deserialize)]
struct RawCategories {
    performance: RawPerformance,
}

#[derive(Debug, Deserialize)]
struct RawPerformance {
    // Null when the auditor loaded the page but could not score it.
    score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawAudits {
    metrics: RawMetricsAudit,
}

#[derive(Debug, Deserialize)]
struct RawMetricsAudit {
    details: RawDetails,
}

#[derive(Debug, Deserialize)]
struct RawDetails {
    items: Vec<MetricBlock>,
}

/// Result type for report parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Error types for report parsing
#[derive(Debug)]
pub enum ParseError {
    /// The document is not valid JSON (malformed or truncated)
    Json(serde_json::Error),

    /// The document parsed but is missing a required field
    Schema(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Json(err) => write!(f, "invalid report JSON: {}", err),
            ParseError::Schema(msg) => write!(f, "unexpected report shape: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Json(err) => Some(err),
            ParseError::Schema(_) => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document(score: f64) -> String {
        format!(
            r#"{{
                "requestedUrl": "https://example.com/",
                "categories": {{
                    "performance": {{ "id": "performance", "score": {} }}
                }},
                "audits": {{
                    "metrics": {{
                        "details": {{
                            "type": "debugdata",
                            "items": [{{
                                "firstContentfulPaint": 1200.5,
                                "largestContentfulPaint": 2400.0,
                                "interactive": 3100.0,
                                "speedIndex": 1800.0,
                                "totalBlockingTime": 150.0,
                                "observedLoad": 900.0,
                                "observedDomContentLoaded": 700.0,
                                "cumulativeLayoutShift": 0.01
                            }}]
                        }}
                    }}
                }}
            }}"#,
            score
        )
    }

    #[test]
    fn test_parse_full_document() {
        let report = RunReport::from_json(sample_document(0.93).as_bytes()).unwrap();
        assert_eq!(report.score, 0.93);
        assert_eq!(report.metrics.first_contentful_paint, Some(1200.5));
        assert_eq!(report.metrics.observed_dom_content_loaded, Some(700.0));
    }

    #[test]
    fn test_parse_missing_metric_is_none() {
        let doc = r#"{
            "categories": { "performance": { "score": 0.5 } },
            "audits": { "metrics": { "details": { "items": [{
                "firstContentfulPaint": 100.0
            }] } } }
        }"#;
        let report = RunReport::from_json(doc.as_bytes()).unwrap();
        assert_eq!(report.metrics.first_contentful_paint, Some(100.0));
        assert_eq!(report.metrics.total_blocking_time, None);
    }

    #[test]
    fn test_parse_truncated_document() {
        let doc = sample_document(0.9);
        let truncated = &doc.as_bytes()[..doc.len() / 2];
        assert!(matches!(
            RunReport::from_json(truncated),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn test_parse_null_score() {
        let doc = r#"{
            "categories": { "performance": { "score": null } },
            "audits": { "metrics": { "details": { "items": [{}] } } }
        }"#;
        assert!(matches!(
            RunReport::from_json(doc.as_bytes()),
            Err(ParseError::Schema(_))
        ));
    }

    #[test]
    fn test_parse_empty_items() {
        let doc = r#"{
            "categories": { "performance": { "score": 0.8 } },
            "audits": { "metrics": { "details": { "items": [] } } }
        }"#;
        assert!(matches!(
            RunReport::from_json(doc.as_bytes()),
            Err(ParseError::Schema(_))
        ));
    }
}
