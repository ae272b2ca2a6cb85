//! Key/value output parsing
//!
//! `nmcli con show <name>` and `nmcli device show <id>` print one
//! `KEY:   value` pair per line. Values may contain the delimiter themselves
//! (hardware addresses, IPv6 addresses), so only the first occurrence splits.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

pub const DEFAULT_DELIMITER: char = ':';

/// A line that was skipped because it had no delimiter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 1-based line number within the parsed text
    pub line: usize,
    pub text: String,
}

/// Parsed key/value output together with any lines that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValues {
    pub values: BTreeMap<String, String>,
    pub warnings: Vec<ParseWarning>,
}

impl KeyValues {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse `key<delimiter>value` lines
///
/// Keys are kept verbatim, values are trimmed. Later keys overwrite earlier
/// ones. Lines without the delimiter are recorded in
/// [`KeyValues::warnings`] and otherwise ignored.
pub fn parse_key_value(text: &str, delimiter: char) -> KeyValues {
    let mut parsed = KeyValues::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match line.split_once(delimiter) {
            Some((key, value)) => {
                parsed.values.insert(key.to_string(), value.trim().to_string());
            }
            None => {
                warn!("Skipping line {} without '{}': {:?}", index + 1, delimiter, line);
                parsed.warnings.push(ParseWarning {
                    line: index + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    parsed
}
