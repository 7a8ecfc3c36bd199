//! CLI command implementations.

mod report;

pub use report::{run_report, ReportArgs};
