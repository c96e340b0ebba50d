//! # Device Transport
//!
//! Writes the job buffer directly to a character device node in binary
//! mode, e.g. `/dev/usb/lp0` on Linux. No spooler, no framing; the kernel
//! line-printer driver hands the bytes to the printer as-is.
//!
//! Useful on headless systems with no CUPS, or when a queue's filter chain
//! would mangle the raw command stream.

use std::path::Path;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

use crate::error::{LabelWriterError, Result};

/// Write a job buffer to a device path.
///
/// Fails with [`LabelWriterError::Io`] when the device cannot be opened
/// or the write fails.
#[instrument(skip(data), fields(path = %path.display(), data_len = data.len()))]
pub async fn send(path: &Path, data: &[u8]) -> Result<()> {
    let mut device = OpenOptions::new()
        .write(true)
        .open(path)
        .await
        .map_err(LabelWriterError::Io)?;

    device.write_all(data).await.map_err(LabelWriterError::Io)?;
    device.flush().await.map_err(LabelWriterError::Io)?;

    info!("job written to device");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
