//! Result rendering: JSON (the default) and a terminal table.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use bom_model::BomEntry;

/// Serialize a value as JSON indented with `spaces` spaces per level;
/// `spaces == 0` produces compact output.
pub fn render_json<T: Serialize>(value: &T, spaces: usize) -> Result<String> {
    if spaces == 0 {
        return serde_json::to_string(value).context("serialize result");
    }
    let indent = vec![b' '; spaces];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .context("serialize result")?;
    String::from_utf8(buffer).context("serialized JSON is valid UTF-8")
}

/// Render the ranked entries as a terminal table.
pub fn render_table(entries: &[BomEntry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "MPN",
            "Manufacturer",
            "Reference Designators",
            "Occurrences",
        ]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.mpn),
            Cell::new(&entry.manufacturer),
            Cell::new(entry.reference_designators.join(", ")),
            Cell::new(entry.occurrences),
        ]);
    }
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}
