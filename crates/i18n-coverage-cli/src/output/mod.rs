//! Rendering of reports and errors for the terminal.

pub mod diagnostic;
pub mod missing;
pub mod table;

pub use diagnostic::ParseDiagnostic;
