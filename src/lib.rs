//! nmview - NetworkManager inspection through nmcli
//!
//! Runs `nmcli` and turns its text output into typed records:
//! - command: nmcli invocation (`CommandRunner`, `Nmcli`)
//! - parse: table and key/value output parsers
//! - record: positional row-to-record mapping
//! - models: `Connection`, `Device`, `Network`
//! - manager: the operations callers use (`NetworkManager`)
//! - validation: checks run before nmcli is spawned
//! - config: TOML configuration
//! - error: error types

pub mod error;
pub mod config;
pub mod validation;
pub mod command;
pub mod parse;
pub mod record;
pub mod models;
pub mod manager;

// Re-export commonly used types
pub use error::{NmviewError, NmviewResult};
pub use config::{NmcliSettings, NmviewConfig};
pub use command::{CommandRunner, Nmcli};
pub use parse::{parse_key_value, parse_table, KeyValues, ParseWarning, RawTable};
pub use record::{map_rows, TableRecord};
pub use models::{Connection, Device, Network};
pub use manager::NetworkManager;
