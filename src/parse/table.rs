//! Table output parsing
//!
//! nmcli pads list output into columns. Two or more spaces separate fields;
//! a single space belongs to the value (`Wired connection 1`).

/// Rows of trimmed, non-empty fields. Row 0 is whatever nmcli printed first,
/// normally the header.
pub type RawTable = Vec<Vec<String>>;

const FIELD_SEPARATOR: &str = "  ";

/// Split table text into rows of fields
pub fn parse_table(text: &str) -> RawTable {
    text.lines()
        .map(|line| {
            line.trim()
                .split(FIELD_SEPARATOR)
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect()
}

/// Drop the header row
pub fn strip_header(mut table: RawTable) -> RawTable {
    if !table.is_empty() {
        table.remove(0);
    }
    table
}
