//! Locale tree scanning.
//!
//! A locales root holds one directory per language. Scanning lists those
//! directories once, then walks each of them and collects the top-level keys
//! of every JSON object document found, per language and across all
//! languages.

mod collection;
mod discover;
mod document;
mod error;
mod walk;

pub use collection::KeyCollection;
pub use discover::discover_languages;
pub use document::{Document, JsonKind, parse_document};
pub use error::{ScanError, ScanWarning};
pub use walk::Scanner;
