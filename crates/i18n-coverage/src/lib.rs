//! Translation key coverage for locale trees.
//!
//! A locales root contains one directory per language. Every file below a
//! language directory is a JSON document whose top-level keys are
//! translation keys. Coverage of a language is the share of all keys seen
//! in any language (the common set) that the language defines.
//!
//! # Example
//!
//! ```no_run
//! use i18n_coverage::{CoverageReport, Scanner};
//!
//! let collection = Scanner::new("public/locales").scan().unwrap();
//! let report = CoverageReport::from_collection(&collection).unwrap();
//! print!("{report}");
//! ```

pub mod report;
pub mod scanner;
pub mod types;

pub use report::{CoverageError, CoverageReport, LanguageCoverage};
pub use scanner::{KeyCollection, ScanError, ScanWarning, Scanner};
pub use types::{KeySet, Language};
