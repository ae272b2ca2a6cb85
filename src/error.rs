//! Error types for nmview

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NmviewError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// nmcli exited nonzero or could not be spawned
    #[error("{}", command_failed_message(.args, .code, .stderr))]
    CommandFailed {
        args: Vec<String>,
        code: Option<i32>,
        stderr: String,
    },

    /// A table row does not have the column count of the record it maps to
    #[error("{record} row {row} has {found} fields, expected {expected}")]
    ArityMismatch {
        record: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// nmcli printed something that is not UTF-8
    #[error("Invalid output: {0}")]
    InvalidOutput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

fn command_failed_message(args: &[String], code: &Option<i32>, stderr: &str) -> String {
    let cmd = args.join(" ");
    match code {
        Some(code) => format!("Command '{}' failed with code {}: {}", cmd, code, stderr),
        None => format!("Command '{}' failed: {}", cmd, stderr),
    }
}

pub type NmviewResult<T> = Result<T, NmviewError>;
