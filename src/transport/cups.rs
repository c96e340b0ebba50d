//! # CUPS Transport
//!
//! Submits the job buffer to a CUPS queue by piping it to the spooler's
//! `lp` command. `-d` names the destination queue; `-s` suppresses the
//! job-id chatter on stdout.
//!
//! The buffer travels as raw bytes on stdin, so the queue must be
//! configured for raw passthrough (the normal setup for LabelWriter
//! queues, which have no PPD-level raster filter worth invoking twice).

use tracing::{info, instrument};

use crate::error::Result;
use crate::process::CommandRunner;

/// Spooler submission command.
const LP: &str = "lp";

/// Submit a job buffer to a CUPS queue.
///
/// Fails with [`crate::LabelWriterError::Spooler`] if `lp` cannot be
/// launched or exits non-zero.
#[instrument(skip(runner, data), fields(data_len = data.len()))]
pub async fn send(runner: &dyn CommandRunner, queue: &str, data: &[u8]) -> Result<()> {
    runner.run(LP, &["-d", queue, "-s"], Some(data)).await?;
    info!(queue, "job submitted to spooler");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::test_support::ScriptedRunner;

    #[tokio::test]
    async fn test_pipes_buffer_to_lp() {
        let runner = ScriptedRunner::new(vec![Ok(String::new())]);
        send(&runner, "Dymo_LabelWriter_450", &[0x1B, 0x2A])
            .await
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "lp");
        assert_eq!(calls[0].args, vec!["-d", "Dymo_LabelWriter_450", "-s"]);
        assert_eq!(calls[0].stdin.as_deref(), Some(&[0x1B, 0x2A][..]));
    }

    #[tokio::test]
    async fn test_lp_failure_propagates() {
        let runner = ScriptedRunner::failing("lp: destination unknown");
        let err = send(&runner, "nope", &[0x00]).await.unwrap_err();
        assert!(matches!(err, crate::LabelWriterError::Spooler(_)));
    }
}
