//! Command execution utilities
//!
//! Provides consistent command execution with proper error handling and logging.

use anyhow::{Context, Result};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Result of a command execution.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

/// Run a command and return its output.
///
/// Both stdout and stderr are captured, so nothing the command prints
/// reaches this process's own streams.
#[instrument(skip_all, fields(cmd = %cmd))]
pub async fn run(cmd: &str, args: &[&str]) -> Result<CommandOutput> {
    debug!(args = ?args, "Running command");

    let output = Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await
        .context(format!("Failed to execute {}", cmd))?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        success: output.status.success(),
        code: output.status.code(),
    })
}

/// Probe with a command - returns Ok(true) on exit 0, Ok(false) otherwise.
///
/// Spawn errors (Err) are kept apart from a non-zero exit (Ok(false)).
pub async fn probe(cmd: &str, args: &[&str]) -> Result<bool> {
    let output = run(cmd, args).await?;
    if !output.success {
        debug!(
            cmd,
            code = ?output.code,
            stdout = %output.stdout,
            stderr = %output.stderr,
            "Probe reported failure"
        );
    }
    Ok(output.success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let output = run("echo", &["hello", "world"]).await.unwrap();
        assert!(output.success);
        assert_eq!(output.code, Some(0));
        assert_eq!(output.stdout, "hello world");
    }

    #[tokio::test]
    async fn test_probe_maps_exit_status() {
        assert!(probe("true", &[]).await.unwrap());
        assert!(!probe("false", &[]).await.unwrap());
    }

    #[tokio::test]
    async fn test_probe_spawn_failure_is_error() {
        assert!(probe("/nonexistent/pg_isready", &[]).await.is_err());
    }
}
