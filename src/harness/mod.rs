pub mod collect;
pub mod driver;
pub mod median;
pub mod pipeline;
pub mod reporter;
pub mod types;

pub use driver::Driver;
pub use median::select_median;
pub use pipeline::{reduce_batch, run_harness};
pub use types::{HarnessError, HarnessResult, MedianSelection, RunBatch, RunOutcome};
