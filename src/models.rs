//! Records produced from nmcli list output

use crate::error::NmviewResult;
use crate::record::{bind_fields, TableRecord, IN_USE_MARKER};
use serde::{Deserialize, Serialize};

/// What nmcli prints for an empty column (`DEVICE` of an inactive profile,
/// `CONNECTION` of an unmanaged device, hidden SSIDs)
pub const NONE_SENTINEL: &str = "--";

/// A saved connection profile, one row of `nmcli con`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub name: String,
    pub uuid: String,
    #[serde(rename = "type")]
    pub conn_type: String,
    pub device: String,
}

impl Connection {
    /// Whether the profile is currently bound to a device
    pub fn is_active(&self) -> bool {
        self.device != NONE_SENTINEL
    }
}

impl TableRecord for Connection {
    const KIND: &'static str = "Connection";
    const COLUMNS: &'static [&'static str] = &["NAME", "UUID", "TYPE", "DEVICE"];

    fn from_fields(fields: Vec<String>) -> NmviewResult<Self> {
        let [name, uuid, conn_type, device] = bind_fields::<4>(Self::KIND, fields)?;
        Ok(Self {
            name,
            uuid,
            conn_type,
            device,
        })
    }
}

/// A network interface, one row of `nmcli device`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub device: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub state: String,
    pub connection: String,
}

impl Device {
    pub fn is_wifi(&self) -> bool {
        self.device_type == "wifi"
    }

    /// Whether a connection profile is active on the device
    pub fn is_connected(&self) -> bool {
        self.connection != NONE_SENTINEL
    }
}

impl TableRecord for Device {
    const KIND: &'static str = "Device";
    const COLUMNS: &'static [&'static str] = &["DEVICE", "TYPE", "STATE", "CONNECTION"];

    fn from_fields(fields: Vec<String>) -> NmviewResult<Self> {
        let [device, device_type, state, connection] = bind_fields::<4>(Self::KIND, fields)?;
        Ok(Self {
            device,
            device_type,
            state,
            connection,
        })
    }
}

/// An access point seen by `nmcli device wifi list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// `*` for the associated access point, empty otherwise
    pub in_use: String,
    pub bssid: String,
    pub ssid: String,
    pub mode: String,
    pub chan: String,
    pub rate: String,
    pub signal: String,
    pub bars: String,
    pub security: String,
}

impl Network {
    pub fn is_in_use(&self) -> bool {
        self.in_use == IN_USE_MARKER
    }
}

impl TableRecord for Network {
    const KIND: &'static str = "Network";
    const COLUMNS: &'static [&'static str] = &[
        "IN-USE", "BSSID", "SSID", "MODE", "CHAN", "RATE", "SIGNAL", "BARS", "SECURITY",
    ];

    fn from_fields(fields: Vec<String>) -> NmviewResult<Self> {
        let [in_use, bssid, ssid, mode, chan, rate, signal, bars, security] =
            bind_fields::<9>(Self::KIND, fields)?;
        Ok(Self {
            in_use,
            bssid,
            ssid,
            mode,
            chan,
            rate,
            signal,
            bars,
            security,
        })
    }
}
