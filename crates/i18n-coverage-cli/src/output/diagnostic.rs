//! Miette diagnostic wrapper for translation file parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for malformed JSON translation files.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid JSON: {message}")]
#[diagnostic(
    code(i18n_coverage::parse),
    help("every file under a language directory must be a JSON object")
)]
pub struct ParseDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl ParseDiagnostic {
    /// Create a diagnostic pointing at `line:column` (both 1-based) of `content`.
    pub fn new(path: &Path, content: &str, line: usize, column: usize, message: &str) -> Self {
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        ParseDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: message.to_string(),
        }
    }

    /// Byte offset of the labelled span.
    #[cfg(test)]
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}
