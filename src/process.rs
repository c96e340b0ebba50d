//! # External Command Execution
//!
//! The spooler transports and printer discovery shell out to system
//! utilities (`lp`, `lpstat`, the Windows raw-print helper, PowerShell).
//! All of them go through the [`CommandRunner`] trait so tests can swap in
//! a scripted runner and assert on the exact invocations.

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::{LabelWriterError, Result};

/// Launch a named executable, optionally feed it binary stdin, and return
/// its captured stdout text.
///
/// Implementations reject with [`LabelWriterError::Spooler`] when the
/// process cannot be launched or exits non-zero.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[&str], stdin: Option<&[u8]>) -> Result<String>;
}

/// [`CommandRunner`] backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str], stdin: Option<&[u8]>) -> Result<String> {
        debug!(program, ?args, stdin_len = stdin.map(<[u8]>::len), "running command");

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(if stdin.is_some() {
                std::process::Stdio::piped()
            } else {
                std::process::Stdio::null()
            })
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped());

        let mut child = command.spawn().map_err(|e| {
            LabelWriterError::Spooler(format!("failed to launch '{}': {}", program, e))
        })?;

        if let Some(data) = stdin {
            let mut pipe = child.stdin.take().ok_or_else(|| {
                LabelWriterError::Spooler(format!("no stdin pipe for '{}'", program))
            })?;
            pipe.write_all(data).await.map_err(|e| {
                LabelWriterError::Spooler(format!("failed to write to '{}' stdin: {}", program, e))
            })?;
            // close the pipe so the child sees EOF
            drop(pipe);
        }

        let output = child.wait_with_output().await.map_err(|e| {
            LabelWriterError::Spooler(format!("failed to wait for '{}': {}", program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LabelWriterError::Spooler(format!(
                "'{}' exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

// ============================================================================
// TEST SUPPORT
// ============================================================================


// ============================================================================
// TESTS
// ============================================================================
