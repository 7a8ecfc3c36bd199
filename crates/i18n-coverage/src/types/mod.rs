//! Core types shared by the scanner and the coverage report.

mod key_set;
mod language;

pub use key_set::KeySet;
pub use language::Language;
