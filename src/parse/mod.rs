//! Parsers for nmcli's two text output styles
//!
//! - table: whitespace-aligned columns, used by list commands
//! - keyvalue: `KEY: value` lines, used by `show` commands

pub mod keyvalue;
pub mod table;

pub use keyvalue::{parse_key_value, KeyValues, ParseWarning, DEFAULT_DELIMITER};
pub use table::{parse_table, strip_header, RawTable};
