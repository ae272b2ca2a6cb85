//! nmcli invocation
//!
//! Every call spawns exactly one `nmcli -c no <args...>` process and waits for
//! it to exit. Arguments are handed to the process as separate argv entries,
//! never through a shell.

use crate::config::NmcliSettings;
use crate::error::{NmviewError, NmviewResult};
use async_trait::async_trait;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Arguments placed before every invocation; nmcli colours output by default.
pub const NO_COLOR_ARGS: [&str; 2] = ["-c", "no"];

/// Something that can run nmcli and hand back its stdout
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run nmcli with `args` (after the no-colour prefix) and return stdout.
    ///
    /// A nonzero exit status is reported as [`NmviewError::CommandFailed`];
    /// no output is returned in that case.
    async fn run(&self, args: &[OsString]) -> NmviewResult<String>;
}

/// Runs the real nmcli executable
#[derive(Debug, Clone)]
pub struct Nmcli {
    path: PathBuf,
}

impl Nmcli {
    pub fn new(settings: &NmcliSettings) -> Self {
        Self::with_path(&settings.path)
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn full_args(&self, args: &[OsString]) -> Vec<String> {
        std::iter::once(self.path.as_os_str())
            .chain(NO_COLOR_ARGS.iter().map(|a| OsStr::new(*a)))
            .chain(args.iter().map(|a| a.as_os_str()))
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl Default for Nmcli {
    fn default() -> Self {
        Self::new(&NmcliSettings::default())
    }
}

#[async_trait]
impl CommandRunner for Nmcli {
    async fn run(&self, args: &[OsString]) -> NmviewResult<String> {
        debug!("Running {:?}", self.full_args(args));

        let output = Command::new(&self.path)
            .args(NO_COLOR_ARGS)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                warn!("Failed to spawn {}: {}", self.path.display(), e);
                NmviewError::CommandFailed {
                    args: self.full_args(args),
                    code: None,
                    stderr: e.to_string(),
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                "nmcli exited with {:?}: {}",
                output.status.code(),
                stderr
            );
            return Err(NmviewError::CommandFailed {
                args: self.full_args(args),
                code: output.status.code(),
                stderr,
            });
        }

        String::from_utf8(output.stdout)
            .map_err(|e| NmviewError::InvalidOutput(format!("stdout is not UTF-8: {}", e)))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[tokio::test]
    async fn test_prefix_is_passed_before_arguments() {
        // echo prints its argv, which shows exactly what nmcli would receive
        let runner = Nmcli::with_path("echo");
        let out = runner.run(&args(&["con", "show", "Wired connection 1"])).await.unwrap();
        assert_eq!(out, "-c no con show Wired connection 1\n");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_command_failed() {
        // `sh -c no` tries to execute a command named "no"
        let runner = Nmcli::with_path("sh");
        let err = runner.run(&[]).await.unwrap_err();

        match err {
            NmviewError::CommandFailed { args, code, stderr } => {
                assert_eq!(args, vec!["sh", "-c", "no"]);
                assert_eq!(code, Some(127));
                assert!(stderr.contains("not found"), "stderr was {:?}", stderr);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_executable() {
        let runner = Nmcli::with_path("/nonexistent/bin/nmcli");
        let err = runner.run(&args(&["con"])).await.unwrap_err();

        match err {
            NmviewError::CommandFailed { args, code, .. } => {
                assert_eq!(args, vec!["/nonexistent/bin/nmcli", "-c", "no", "con"]);
                assert_eq!(code, None);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_default_uses_configured_path() {
        assert_eq!(Nmcli::default().path(), Path::new("/usr/bin/nmcli"));
    }
}
