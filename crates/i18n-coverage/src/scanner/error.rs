//! Error and warning types for locale scanning.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::scanner::JsonKind;

/// Errors that abort a scan.
///
/// No partial collection is returned once any of these occurs.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The locales root could not be listed.
    #[error("failed to list locales root '{path}': {source}")]
    ListRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Walking a language directory failed.
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A translation file could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A translation file is not valid JSON.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
        /// Full file content, kept for source-annotated diagnostics.
        content: String,
    },
}

/// Non-fatal conditions found while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// The document parsed, but its top level is not an object, so it
    /// contributes no keys.
    NonObjectDocument { path: PathBuf, kind: JsonKind },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::NonObjectDocument { path, kind } => write!(
                f,
                "'{}' is a JSON {kind}, not an object; it contributes no keys",
                path.display()
            ),
        }
    }
}
