use thiserror::Error;

/// Errors computing coverage from a key collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoverageError {
    /// No language contributed any key, so there is nothing to measure
    /// coverage against.
    #[error("no translation keys found in {languages} language(s)")]
    NoKeys { languages: usize },
}
