//! # Network Transport
//!
//! Raw TCP delivery to a network-attached LabelWriter or print server.
//!
//! Port 9100 raw printing is the documented convention for this printer
//! family: the job buffer is written to the socket with no framing beyond
//! the command stream itself, then the connection is closed.
//!
//! A single 30-second window covers connect, write, and shutdown; if the
//! printer accepts the connection but stops consuming bytes, the job fails
//! with [`LabelWriterError::Timeout`] rather than hanging.

use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument};

use crate::error::{LabelWriterError, Result};

/// Connect/activity timeout for one job.
pub const NETWORK_TIMEOUT: Duration = Duration::from_secs(30);

/// Send a job buffer over raw TCP.
#[instrument(skip(data), fields(data_len = data.len()))]
pub async fn send(host: &str, port: u16, data: &[u8]) -> Result<()> {
    send_with_timeout(host, port, data, NETWORK_TIMEOUT).await
}

/// [`send`] with an explicit timeout window.
pub async fn send_with_timeout(
    host: &str,
    port: u16,
    data: &[u8],
    timeout: Duration,
) -> Result<()> {
    let addr = format!("{}:{}", host, port);

    tokio::time::timeout(timeout, async {
        let mut stream = TcpStream::connect(&addr)
            .await
            .map_err(|e| LabelWriterError::Connection(format!("{}: {}", addr, e)))?;

        info!(addr = %addr, "connected, sending job");

        stream
            .write_all(data)
            .await
            .map_err(|e| LabelWriterError::Connection(format!("write to {}: {}", addr, e)))?;
        stream
            .shutdown()
            .await
            .map_err(|e| LabelWriterError::Connection(format!("close {}: {}", addr, e)))?;

        info!(addr = %addr, "job sent");
        Ok(())
    })
    .await
    .map_err(|_| {
        LabelWriterError::Timeout(format!(
            "no response from {} within {}s",
            addr,
            timeout.as_secs()
        ))
    })?
}

// ============================================================================
// TESTS
// ============================================================================
