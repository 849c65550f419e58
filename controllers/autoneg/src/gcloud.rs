//! gcloud CLI wrapper
//!
//! Off-GCE fallback for ambient identity: reads configuration values and
//! access tokens from a locally installed gcloud.

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Errors from invoking the gcloud CLI
#[derive(Debug, Error)]
pub enum GcloudError {
    /// The binary could not be spawned at all
    #[error("failed to run {command:?}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited non-zero
    #[error("{command:?} exited with {status}, stderr={stderr:?}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The command succeeded but printed nothing usable
    #[error("{command:?} returned an empty value")]
    EmptyValue { command: String },
}

/// Wrapper around a locally installed gcloud binary
pub struct GcloudCli {
    program: String,
}

impl Default for GcloudCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GcloudCli {
    /// Wrap the gcloud binary found on PATH
    pub fn new() -> Self {
        Self {
            program: "gcloud".to_string(),
        }
    }

    /// Wrap a specific binary (used by tests)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Read a configuration value, `gcloud config get-value <key> -q`
    pub async fn config_get_value(&self, key: &str) -> Result<String, GcloudError> {
        self.run(&["config", "get-value", key, "-q"]).await
    }

    /// Mint an access token for the active account,
    /// `gcloud auth print-access-token -q`
    pub async fn print_access_token(&self) -> Result<String, GcloudError> {
        self.run(&["auth", "print-access-token", "-q"]).await
    }

    /// Run the binary, capture both output streams, trim the result, and
    /// reject empty values
    async fn run(&self, args: &[&str]) -> Result<String, GcloudError> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!(command = %command, "running gcloud");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|source| GcloudError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GcloudError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if value.is_empty() {
            return Err(GcloudError::EmptyValue { command });
        }
        Ok(value)
    }
}
