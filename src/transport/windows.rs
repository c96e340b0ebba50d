//! # Windows Raw-Print Transport
//!
//! Delivers the job buffer through the Windows spooler's raw datatype.
//! Windows has no `lp`-style stdin submission, so the buffer is staged in
//! a uniquely named temporary file and handed to the `RawPrint` helper
//! together with the target queue's device id.
//!
//! The temporary file is deleted after the helper returns, success or
//! failure.

use std::path::PathBuf;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::{LabelWriterError, Result};
use crate::process::CommandRunner;

/// Raw-print helper binary, expected on PATH.
const RAW_PRINT_HELPER: &str = "RawPrint.exe";

/// Send a job buffer to a Windows printer queue.
///
/// Fails with [`LabelWriterError::Spooler`] if the helper cannot be
/// launched or exits non-zero, and with [`LabelWriterError::Io`] if the
/// temporary spool file cannot be written.
#[instrument(skip(runner, data), fields(data_len = data.len()))]
pub async fn send(runner: &dyn CommandRunner, device_id: &str, data: &[u8]) -> Result<()> {
    let path = spool_path();
    tokio::fs::write(&path, data)
        .await
        .map_err(LabelWriterError::Io)?;

    let path_str = path.to_string_lossy().into_owned();
    let result = runner
        .run(RAW_PRINT_HELPER, &[device_id, &path_str], None)
        .await;

    if let Err(e) = tokio::fs::remove_file(&path).await {
        // the job outcome matters more than a leaked temp file
        warn!(path = %path.display(), error = %e, "failed to remove spool file");
    }

    result?;
    info!(device_id, "job handed to raw-print helper");
    Ok(())
}

/// Uniquely named spool file in the system temp directory.
fn spool_path() -> PathBuf {
    std::env::temp_dir().join(format!("labelwriter-{}.bin", Uuid::new_v4()))
}

// ============================================================================
// TESTS
// ============================================================================
