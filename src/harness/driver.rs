//! Run driver: executes the auditor `runs` times and records every outcome.
//!
//! Attempts are strictly sequential; each one blocks until the child
//! process exits. A failed attempt is logged and recorded, never retried —
//! the sample size is the tolerance mechanism, not per-attempt retries.

use crate::auditor::Auditor;
use crate::harness::types::{RunBatch, RunOutcome};
use crate::report::RunReport;
use crate::session::Session;

/// Drives repeated auditor invocations against a single target URL.
pub struct Driver<A: Auditor> {
    auditor: A,
    runs: usize,
    session: Option<Session>,
}

impl<A: Auditor> Driver<A> {
    pub fn new(auditor: A, runs: usize) -> Self {
        Self {
            auditor,
            runs,
            session: None,
        }
    }

    /// Save each successful attempt's raw JSON into the session directory
    pub fn save_reports_to(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Run the full batch. The returned batch has exactly `runs` outcomes,
    /// successes and failures intermixed in invocation order.
    pub fn run(&mut self, url: &str) -> RunBatch {
        let name = self.auditor.describe();
        let mut batch = RunBatch::new();

        for attempt in 1..=self.runs {
            eprintln!("Running {} attempt #{}/{}...", name, attempt, self.runs);
            let outcome = self.attempt(url, attempt);
            match &outcome {
                RunOutcome::Success(report) => {
                    eprintln!("  attempt #{} ok (score {:.2})", attempt, report.score);
                }
                RunOutcome::Failure { reason, .. } => {
                    eprintln!("  attempt #{} failed: {}, skipping", attempt, reason);
                }
            }
            batch.push(outcome);
        }

        batch
    }

    fn attempt(&mut self, url: &str, index: usize) -> RunOutcome {
        let output = match self.auditor.invoke(url) {
            Ok(output) => output,
            Err(err) => {
                return RunOutcome::Failure {
                    reason: format!("auditor did not run: {}", err),
                    status: None,
                };
            }
        };

        if !output.success() {
            let reason = match output.status {
                Some(code) => format!("auditor exited with status {}", code),
                None => "auditor terminated by signal".to_string(),
            };
            return RunOutcome::Failure {
                reason,
                status: output.status,
            };
        }

        match RunReport::from_json(&output.stdout) {
            Ok(report) => {
                if let Some(session) = &self.session {
                    let path = session.report_path(index);
                    if let Err(err) = std::fs::write(&path, &output.stdout) {
                        eprintln!(
                            "Warning: could not save raw report {}: {}",
                            path.display(),
                            err
                        );
                    }
                }
                RunOutcome::Success(report)
            }
            Err(err) => RunOutcome::Failure {
                reason: err.to_string(),
                status: output.status,
            },
        }
    }
}
