//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use i18n_coverage::CoverageReport;

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(report: &CoverageReport) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Keys", "Coverage", "Missing"]);

    for lang in report.languages() {
        table.add_row(vec![
            lang.language.to_string(),
            format!("{}/{}", lang.keys, lang.total),
            format!("{}%", lang.percent),
            lang.missing.len().to_string(),
        ]);
    }

    table
}
