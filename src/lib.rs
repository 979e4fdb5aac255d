//! pagebench - repeated page-performance auditing with median-run selection.
//!
//! This crate provides:
//! - Sequential subprocess driving of an external Lighthouse-style auditor
//! - Failure-tolerant result collection across a batch of runs
//! - Deterministic median-run selection by primary score
//! - Fixed-order metric reporting with sentinel values for absent fields
//! - Session management for saved raw reports
//!
//! # Example
//!
//! ```rust,no_run
//! use pagebench::auditor::SubprocessAuditor;
//! use pagebench::harness::{reporter, run_harness};
//!
//! let auditor = SubprocessAuditor::new("lighthouse");
//! let selection = run_harness(auditor, "https://example.com/", 5, 0.0, None).unwrap();
//! reporter::print(&selection);
//! ```

pub mod auditor;
pub mod config;
pub mod harness;
pub mod report;
pub mod session;

// Re-export auditor backends
pub use auditor::{Auditor, AuditorOutput, MockAuditor, SubprocessAuditor};

// Re-export harness types and operations
pub use harness::{
    Driver, HarnessError, HarnessResult, MedianSelection, RunBatch, RunOutcome, reduce_batch,
    run_harness, select_median,
};

// Re-export report types
pub use report::{MetricBlock, ParseError, ParseResult, RunReport};

// Re-export session management
pub use session::{Session, cleanup_old_sessions, list_sessions};
