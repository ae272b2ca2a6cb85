//! NetworkManager operations backed by nmcli
//!
//! Each operation builds one nmcli argument list, runs it, and parses the
//! output. Errors are returned as-is; nothing here retries or substitutes
//! placeholder values.

use crate::command::{CommandRunner, Nmcli};
use crate::config::NmviewConfig;
use crate::error::NmviewResult;
use crate::models::{Connection, Device, Network};
use crate::parse::{parse_key_value, parse_table, strip_header, KeyValues, DEFAULT_DELIMITER};
use crate::record::{align_in_use_column, map_rows};
use crate::validation;
use std::ffi::OsString;
use tracing::{debug, info};

/// Connections, devices and Wi-Fi networks as nmcli reports them
pub struct NetworkManager<R = Nmcli> {
    runner: R,
}

impl NetworkManager<Nmcli> {
    /// Use the nmcli executable named in `config`
    pub fn from_config(config: &NmviewConfig) -> Self {
        Self::new(Nmcli::new(&config.nmcli))
    }
}

impl<R: CommandRunner> NetworkManager<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// List saved connection profiles (`nmcli con`)
    pub async fn list_connections(&self) -> NmviewResult<Vec<Connection>> {
        let output = self.nmcli(&["con"]).await?;
        let connections: Vec<Connection> = map_rows(strip_header(parse_table(&output)))?;
        debug!("Found {} connections", connections.len());
        Ok(connections)
    }

    /// Show every property of one connection profile
    pub async fn connection_detail(&self, name: &str) -> NmviewResult<KeyValues> {
        validation::require_present("Connection name", name)?;
        let output = self.nmcli(&["con", "show", name]).await?;
        Ok(parse_key_value(&output, DEFAULT_DELIMITER))
    }

    /// Delete a connection profile by name
    pub async fn delete_connection(&self, name: &str) -> NmviewResult<()> {
        validation::require_present("Connection name", name)?;
        info!("Deleting connection '{}'", name);
        self.nmcli(&["con", "delete", "id", name]).await?;
        Ok(())
    }

    /// List network devices (`nmcli device`)
    pub async fn list_devices(&self) -> NmviewResult<Vec<Device>> {
        let output = self.nmcli(&["device"]).await?;
        let devices: Vec<Device> = map_rows(strip_header(parse_table(&output)))?;
        debug!("Found {} devices", devices.len());
        Ok(devices)
    }

    /// Devices that can join a Wi-Fi network
    pub async fn wifi_devices(&self) -> NmviewResult<Vec<Device>> {
        let devices = self.list_devices().await?;
        Ok(devices.into_iter().filter(Device::is_wifi).collect())
    }

    /// Show every property of one device
    pub async fn device_detail(&self, ifname: &str) -> NmviewResult<KeyValues> {
        validation::validate_interface_name(ifname)?;
        let output = self.nmcli(&["device", "show", ifname]).await?;
        Ok(parse_key_value(&output, DEFAULT_DELIMITER))
    }

    /// List visible access points, optionally for a single interface
    pub async fn scan_networks(&self, ifname: Option<&str>) -> NmviewResult<Vec<Network>> {
        let mut args = vec!["device", "wifi", "list"];
        if let Some(ifname) = ifname {
            validation::validate_interface_name(ifname)?;
            args.extend(["ifname", ifname]);
        }

        let output = self.nmcli(&args).await?;
        let rows = align_in_use_column(strip_header(parse_table(&output)));
        let networks: Vec<Network> = map_rows(rows)?;
        debug!("Found {} access points", networks.len());
        Ok(networks)
    }

    /// Join a WPA-PSK network, creating a connection profile named after the SSID
    pub async fn add_wifi(&self, ssid: &str, psk: &str, ifname: Option<&str>) -> NmviewResult<()> {
        validation::require_present("SSID", ssid)?;
        validation::require_present("Password", psk)?;

        let mut args = vec!["device", "wifi", "connect", ssid, "password", psk];
        if let Some(ifname) = ifname {
            validation::validate_interface_name(ifname)?;
            args.extend(["ifname", ifname]);
        }

        info!("Connecting to Wi-Fi network '{}'", ssid);
        self.nmcli(&args).await?;
        Ok(())
    }

    async fn nmcli(&self, args: &[&str]) -> NmviewResult<String> {
        let args: Vec<OsString> = args.iter().map(OsString::from).collect();
        self.runner.run(&args).await
    }
}
