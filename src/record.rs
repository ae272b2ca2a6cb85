//! Positional mapping of table rows onto typed records
//!
//! nmcli columns are bound by position, not by header name, so every record
//! shape declares its columns in the order nmcli prints them and checks the
//! row length before anything is constructed.

use crate::error::{NmviewError, NmviewResult};
use crate::parse::RawTable;

/// The in-use marker nmcli prints in the first column of `device wifi list`
pub const IN_USE_MARKER: &str = "*";

/// A record built from one table row
pub trait TableRecord: Sized {
    /// Record name used in error messages
    const KIND: &'static str;

    /// nmcli column headers, in output order
    const COLUMNS: &'static [&'static str];

    /// Bind a row's fields to the record.
    ///
    /// Fails with [`NmviewError::ArityMismatch`] (row index 0) when the field
    /// count differs from `COLUMNS.len()`.
    fn from_fields(fields: Vec<String>) -> NmviewResult<Self>;
}

/// Turn a row into exactly `N` fields or report the arity mismatch
pub fn bind_fields<const N: usize>(
    record: &'static str,
    fields: Vec<String>,
) -> NmviewResult<[String; N]> {
    let found = fields.len();
    fields.try_into().map_err(|_| NmviewError::ArityMismatch {
        record,
        row: 0,
        expected: N,
        found,
    })
}

/// Map every row to `R`
///
/// Either every row maps or the whole call fails; a partially mapped list is
/// never returned.
pub fn map_rows<R: TableRecord>(rows: RawTable) -> NmviewResult<Vec<R>> {
    rows.into_iter()
        .enumerate()
        .map(|(index, fields)| {
            R::from_fields(fields).map_err(|e| match e {
                NmviewError::ArityMismatch { record, expected, found, .. } => {
                    NmviewError::ArityMismatch {
                        record,
                        row: index,
                        expected,
                        found,
                    }
                }
                other => other,
            })
        })
        .collect()
}

/// Give unmarked scan rows an empty in-use column
///
/// nmcli leaves the IN-USE column blank for access points that are not
/// associated, and the table parser cannot see a blank leading column.
pub fn align_in_use_column(rows: RawTable) -> RawTable {
    rows.into_iter()
        .map(|mut row| {
            if row.first().map(String::as_str) != Some(IN_USE_MARKER) {
                row.insert(0, String::new());
            }
            row
        })
        .collect()
}
