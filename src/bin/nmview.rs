//! nmview - inspect and change NetworkManager state through nmcli
//!
//! ```bash
//! nmview connection list
//! nmview --json device show wlp2s0
//! nmview device wifi-list --ifname wlp2s0
//! nmview wifi connect "My Network" --password hunter22
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use libnmview::record::TableRecord;
use libnmview::{Connection, Device, KeyValues, Network, NetworkManager, NmviewConfig};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "nmview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "View and manage NetworkManager connections, devices and Wi-Fi networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Path to the nmcli executable (overrides the configuration file)
    #[arg(long, value_name = "PATH")]
    nmcli: Option<PathBuf>,

    /// Print results as JSON
    #[arg(short, long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage connection profiles
    #[command(subcommand)]
    Connection(ConnectionCommands),

    /// Inspect network devices
    #[command(subcommand)]
    Device(DeviceCommands),

    /// Join Wi-Fi networks
    #[command(subcommand)]
    Wifi(WifiCommands),
}

#[derive(Subcommand)]
enum ConnectionCommands {
    /// List connection profiles
    List,
    /// Show all properties of a connection profile
    Show {
        /// Connection name
        name: String,
    },
    /// Delete a connection profile
    Delete {
        /// Connection name
        name: String,
    },
}

#[derive(Subcommand)]
enum DeviceCommands {
    /// List devices
    List,
    /// Show all properties of a device
    Show {
        /// Interface name
        ifname: String,
    },
    /// List visible Wi-Fi access points
    WifiList {
        /// Only scan on this interface
        #[arg(long)]
        ifname: Option<String>,
    },
}

#[derive(Subcommand)]
enum WifiCommands {
    /// Connect to a WPA-PSK network
    Connect {
        /// Network SSID
        ssid: String,
        /// Pre-shared key
        #[arg(short, long)]
        password: String,
        /// Interface to connect with (any Wi-Fi device if omitted)
        #[arg(long)]
        ifname: Option<String>,
    },
    /// List Wi-Fi capable devices
    Devices,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => NmviewConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => NmviewConfig::default(),
    };
    if let Some(path) = &cli.nmcli {
        config.nmcli.path = path.clone();
    }
    debug!("Using nmcli at {}", config.nmcli.path.display());

    let nm = NetworkManager::from_config(&config);

    match &cli.command {
        Commands::Connection(cmd) => match cmd {
            ConnectionCommands::List => {
                let connections = nm.list_connections().await?;
                print_records(cli, &connections, connection_row)?;
            }
            ConnectionCommands::Show { name } => {
                let detail = nm.connection_detail(name).await?;
                print_detail(cli, &detail)?;
            }
            ConnectionCommands::Delete { name } => {
                nm.delete_connection(name).await?;
                if !cli.json {
                    println!("Connection '{}' deleted", name);
                }
            }
        },
        Commands::Device(cmd) => match cmd {
            DeviceCommands::List => {
                let devices = nm.list_devices().await?;
                print_records(cli, &devices, device_row)?;
            }
            DeviceCommands::Show { ifname } => {
                let detail = nm.device_detail(ifname).await?;
                print_detail(cli, &detail)?;
            }
            DeviceCommands::WifiList { ifname } => {
                let networks = nm.scan_networks(ifname.as_deref()).await?;
                print_records(cli, &networks, network_row)?;
            }
        },
        Commands::Wifi(cmd) => match cmd {
            WifiCommands::Connect { ssid, password, ifname } => {
                nm.add_wifi(ssid, password, ifname.as_deref()).await?;
                if !cli.json {
                    println!("Connected to '{}'", ssid);
                }
            }
            WifiCommands::Devices => {
                let devices = nm.wifi_devices().await?;
                print_records(cli, &devices, device_row)?;
            }
        },
    }

    Ok(())
}

/// Initialize logging based on command-line arguments
fn init_logging(cli: &Cli) {
    let log_level = if cli.verbose { "debug" } else { cli.log_level.as_str() };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("nmview={},libnmview={}", log_level, log_level))
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}

// ============================================================================
// OUTPUT FORMATTING HELPERS
// ============================================================================

fn connection_row(c: &Connection) -> Vec<&str> {
    vec![c.name.as_str(), c.uuid.as_str(), c.conn_type.as_str(), c.device.as_str()]
}

fn device_row(d: &Device) -> Vec<&str> {
    vec![d.device.as_str(), d.device_type.as_str(), d.state.as_str(), d.connection.as_str()]
}

fn network_row(n: &Network) -> Vec<&str> {
    vec![
        n.in_use.as_str(),
        n.bssid.as_str(),
        n.ssid.as_str(),
        n.mode.as_str(),
        n.chan.as_str(),
        n.rate.as_str(),
        n.signal.as_str(),
        n.bars.as_str(),
        n.security.as_str(),
    ]
}

/// Print records as JSON or as a column-aligned table
fn print_records<T, F>(cli: &Cli, records: &[T], row: F) -> anyhow::Result<()>
where
    T: TableRecord + Serialize,
    F: Fn(&T) -> Vec<&str>,
{
    if cli.json {
        return print_json(records);
    }

    let rows: Vec<Vec<&str>> = records.iter().map(row).collect();
    let widths: Vec<usize> = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    print_aligned(T::COLUMNS, &widths);
    for r in &rows {
        print_aligned(r, &widths);
    }
    Ok(())
}

fn print_aligned(fields: &[&str], widths: &[usize]) {
    let line = fields
        .iter()
        .zip(widths)
        .map(|(field, width)| format!("{:<width$}", field, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}

fn print_detail(cli: &Cli, detail: &KeyValues) -> anyhow::Result<()> {
    if cli.json {
        return print_json(&detail.values);
    }

    let width = detail.values.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    for (key, value) in &detail.values {
        println!("{:<width$}  {}", format!("{}:", key), value, width = width + 1);
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
