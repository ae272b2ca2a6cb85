//! Input checks applied before nmcli is spawned
//!
//! Arguments always reach nmcli as separate argv entries, so nothing here
//! escapes or rewrites input. These checks only reject input that nmcli
//! would misread (an empty value, or something that looks like an option).

use crate::error::{NmviewError, NmviewResult};

/// Maximum length for interface names (Linux kernel limit is 15)
const MAX_INTERFACE_NAME_LEN: usize = 15;

/// Require a non-empty value
///
/// Credentials are only checked for presence; nmcli and NetworkManager
/// decide whether a password is acceptable.
pub fn require_present(field: &str, value: &str) -> NmviewResult<()> {
    if value.is_empty() {
        return Err(NmviewError::InvalidParameter(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

/// Validate an interface name passed as `ifname` or to `device show`
pub fn validate_interface_name(name: &str) -> NmviewResult<()> {
    require_present("Interface name", name)?;

    if name.len() > MAX_INTERFACE_NAME_LEN {
        return Err(NmviewError::InvalidParameter(format!(
            "Interface name too long (max {} characters)",
            MAX_INTERFACE_NAME_LEN
        )));
    }

    // The kernel rejects these in interface names
    if let Some(c) = name.chars().find(|c| c.is_whitespace() || *c == '/') {
        return Err(NmviewError::InvalidParameter(format!(
            "Invalid interface name '{}': contains invalid character '{}'",
            name, c
        )));
    }

    // nmcli would parse it as an option
    if name.starts_with('-') {
        return Err(NmviewError::InvalidParameter(
            "Interface name cannot start with dash".to_string(),
        ));
    }

    Ok(())
}
