//! Integration tests for the nmview CLI
//!
//! A small shell script stands in for nmcli so the tests do not depend on
//! NetworkManager being installed or running.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

const FAKE_NMCLI: &str = r#"#!/bin/sh
if [ "$1" != "-c" ] || [ "$2" != "no" ]; then
    echo "Error: colour flag missing" >&2
    exit 2
fi
shift 2
case "$*" in
"con")
    cat <<'EOF'
NAME                UUID                                  TYPE      DEVICE
blan                b6f51e11-79d7-4216-9b67-a63a910551fe  wifi      wlx002275ff9588
Wired connection 1  50be8431-404f-3255-a055-4949d051ad1b  ethernet  --
EOF
    ;;
"device")
    cat <<'EOF'
DEVICE           TYPE      STATE         CONNECTION
wlx002275ff9588  wifi      connected     blan
lo               loopback  unmanaged     --
EOF
    ;;
"device wifi list")
    cat <<'EOF'
IN-USE  BSSID              SSID      MODE   CHAN  RATE        SIGNAL  BARS  SECURITY
*       00:22:75:FF:95:88  blan      Infra  6     54 Mbit/s   82      ****  WPA2
        5C:1F:A8:44:1C:2D  newbie-5  Infra  36    270 Mbit/s  57      ***   WPA1 WPA2
EOF
    ;;
"device show wlx002275ff9588")
    cat <<'EOF'
GENERAL.DEVICE:                         wlx002275ff9588
GENERAL.HWADDR:                         00:22:75:FF:95:88
EOF
    ;;
"con delete id blan")
    echo "Connection 'blan' (b6f51e11-79d7-4216-9b67-a63a910551fe) successfully deleted."
    ;;
*)
    echo "Error: no such connection profile." >&2
    exit 10
    ;;
esac
"#;

/// Write the fake nmcli into `dir` and return its path
fn fake_nmcli(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("nmcli");
    fs::write(&path, FAKE_NMCLI).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Helper to create a test nmview command using the fake nmcli
fn nmview(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nmview").unwrap();
    cmd.arg("--nmcli").arg(fake_nmcli(dir));
    cmd
}

#[test]
fn test_help_command() {
    Command::cargo_bin("nmview")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("NetworkManager"));
}

#[test]
fn test_connection_list() {
    let dir = TempDir::new().unwrap();
    nmview(&dir)
        .args(["connection", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wired connection 1"))
        .stdout(predicate::str::contains("b6f51e11-79d7-4216-9b67-a63a910551fe"));
}

#[test]
fn test_device_list_json() {
    let dir = TempDir::new().unwrap();
    let output = nmview(&dir).args(["--json", "device", "list"]).output().unwrap();
    assert!(output.status.success());

    let devices: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(devices.as_array().unwrap().len(), 2);
    assert_eq!(devices[0]["device"], "wlx002275ff9588");
    assert_eq!(devices[0]["type"], "wifi");
    assert_eq!(devices[1]["connection"], "--");
}

#[test]
fn test_wifi_devices_only_lists_wifi() {
    let dir = TempDir::new().unwrap();
    nmview(&dir)
        .args(["wifi", "devices"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wlx002275ff9588"))
        .stdout(predicate::str::contains("loopback").not());
}

#[test]
fn test_wifi_list_json() {
    let dir = TempDir::new().unwrap();
    let output = nmview(&dir)
        .args(["--json", "device", "wifi-list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let networks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(networks[0]["in_use"], "*");
    assert_eq!(networks[0]["ssid"], "blan");
    assert_eq!(networks[1]["in_use"], "");
    assert_eq!(networks[1]["ssid"], "newbie-5");
    assert_eq!(networks[1]["security"], "WPA1 WPA2");
}

#[test]
fn test_device_show() {
    let dir = TempDir::new().unwrap();
    nmview(&dir)
        .args(["device", "show", "wlx002275ff9588"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:22:75:FF:95:88"));
}

#[test]
fn test_connection_delete() {
    let dir = TempDir::new().unwrap();
    nmview(&dir)
        .args(["connection", "delete", "blan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));
}

#[test]
fn test_unknown_connection_reports_stderr() {
    let dir = TempDir::new().unwrap();
    nmview(&dir)
        .args(["connection", "show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no such connection profile"));
}

#[test]
fn test_wifi_connect_requires_ssid() {
    // The nmcli path does not exist; validation must fail before it is needed
    Command::cargo_bin("nmview")
        .unwrap()
        .args(["--nmcli", "/nonexistent/nmcli", "wifi", "connect", "", "--password", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SSID cannot be empty"));
}

#[test]
fn test_config_file_sets_nmcli_path() {
    let dir = TempDir::new().unwrap();
    let nmcli = fake_nmcli(&dir);
    let config = dir.path().join("nmview.toml");
    fs::write(&config, format!("[nmcli]\npath = {:?}\n", nmcli.display().to_string())).unwrap();

    Command::cargo_bin("nmview")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["connection", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blan"));
}

#[test]
fn test_missing_config_file() {
    Command::cargo_bin("nmview")
        .unwrap()
        .args(["--config", "/nonexistent/nmview.toml", "connection", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}
