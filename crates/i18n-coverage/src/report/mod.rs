//! Coverage computation and the plain-text report.

mod coverage;
mod error;

pub use coverage::{CoverageReport, LanguageCoverage, round_percent};
pub use error::CoverageError;
