//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use qname::QualifiedName;

/// Format a parsed name's parts as an ASCII table.
pub fn format_parts_table(parsed: &QualifiedName) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec![
        "namespace".to_string(),
        parsed.namespace.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec!["name".to_string(), parsed.name.clone()]);
    table.add_row(vec!["array".to_string(), parsed.array.to_string()]);
    table.add_row(vec!["simple".to_string(), parsed.simple.to_string()]);
    table.add_row(vec!["canonical".to_string(), parsed.to_string()]);

    table
}
