//! Listing of keys each language lacks.

use i18n_coverage::CoverageReport;
use owo_colors::{OwoColorize, Stream};

/// Render the missing keys of every incomplete language.
///
/// Complete languages are left out; the result is empty when every language
/// is complete.
pub fn format_missing(report: &CoverageReport) -> String {
    let mut out = String::new();
    for coverage in report.languages() {
        if coverage.is_complete() {
            continue;
        }
        let heading = format!("Missing in {}:", coverage.language);
        out.push_str(&format!(
            "\n{}\n",
            heading.if_supports_color(Stream::Stdout, |text| text.bold())
        ));
        for key in &coverage.missing {
            out.push_str(&format!(
                "  - {}\n",
                key.if_supports_color(Stream::Stdout, |text| text.yellow())
            ));
        }
    }
    out
}
