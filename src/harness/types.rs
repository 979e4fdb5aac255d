use serde::Serialize;

use crate::report::RunReport;

/// Outcome of a single auditor attempt
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The auditor exited cleanly and its output parsed as a report
    Success(RunReport),

    /// The attempt produced no usable report
    Failure {
        /// Human-readable description of what went wrong
        reason: String,

        /// Child exit code, when the process exited normally
        status: Option<i32>,
    },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success(_))
    }
}

/// Ordered outcomes of one full batch of attempts.
///
/// Order is invocation order. Nothing downstream depends on it, but it is
/// preserved so failures can be correlated with their attempt index.
#[derive(Debug, Clone, Default)]
pub struct RunBatch {
    pub outcomes: Vec<RunOutcome>,
}

impl RunBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: RunOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }
}

/// The representative run chosen by the median reducer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedianSelection {
    /// The selected report
    pub report: RunReport,

    /// Zero-based rank of the selection among successful runs sorted
    /// ascending by score
    pub rank: usize,

    /// Number of successful runs the selection was drawn from
    pub sample_count: usize,
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Error types for harness operations
#[derive(Debug)]
pub enum HarnessError {
    /// Every attempt failed; there is no sample to reduce over
    EmptySampleSet,

    /// Fewer attempts succeeded than the configured minimum ratio allows
    BelowSuccessThreshold {
        successes: usize,
        attempts: usize,
        required: f64,
    },

    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarnessError::EmptySampleSet => {
                write!(f, "no successful runs: nothing to select a median from")
            }
            HarnessError::BelowSuccessThreshold {
                successes,
                attempts,
                required,
            } => write!(
                f,
                "only {}/{} runs succeeded, below the required success ratio {:.2}",
                successes, attempts, required
            ),
            HarnessError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::EmptySampleSet => None,
            HarnessError::BelowSuccessThreshold { .. } => None,
            HarnessError::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for HarnessError {
    fn from(err: std::io::Error) -> Self {
        HarnessError::Io(err)
    }
}
