//! # Print Service
//!
//! Ties the pieces together: encode a bitmap into a job buffer, resolve a
//! delivery target (explicit configuration or one-time autodetection),
//! and hand the buffer to exactly one transport.
//!
//! ## Job Model
//!
//! Each [`LabelWriter::print`] call is self-contained and synchronous
//! with respect to its own buffer: one encode, one dispatch, one
//! success/failure outcome. Nothing is retried automatically; the only
//! bounded re-attempt is dispatching once after a successful
//! autodetection. Callers wanting concurrent jobs should use one service
//! instance per job.

use tracing::{debug, instrument};

use crate::discovery::{self, Platform, PrinterDescriptor};
use crate::error::Result;
use crate::printer::{PrinterConfig, Target};
use crate::process::{CommandRunner, SystemRunner};
use crate::protocol::encoder;

/// A LabelWriter print service.
///
/// ## Example
///
/// ```no_run
/// use labelwriter::{LabelWriter, PrinterConfig};
///
/// # async fn demo() -> Result<(), labelwriter::LabelWriterError> {
/// // explicit network printer
/// let mut printer = LabelWriter::new(PrinterConfig::network("192.168.1.50", 9100));
///
/// // 336 × 1052 address label, rasterized elsewhere
/// let bitmap = vec![vec![0u8; 42]; 1052];
/// printer.print(&bitmap, 1).await?;
/// # Ok(())
/// # }
/// ```
///
/// With a default (empty) configuration the first print autodetects an
/// attached Dymo printer through the platform spooler and remembers it
/// for the lifetime of the service.
pub struct LabelWriter<R: CommandRunner = SystemRunner> {
    config: PrinterConfig,
    resolved: Option<Target>,
    runner: R,
}

impl LabelWriter<SystemRunner> {
    /// Create a service over the system spooler commands.
    pub fn new(config: PrinterConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> LabelWriter<R> {
    /// Create a service with a custom command runner (test seam).
    pub fn with_runner(config: PrinterConfig, runner: R) -> Self {
        Self {
            config,
            resolved: None,
            runner,
        }
    }

    /// The configuration this service was constructed with.
    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Print a bit-packed bitmap matrix, `copies` times on one job.
    ///
    /// Encoding happens before any I/O, so an invalid bitmap or copy
    /// count fails without touching the printer.
    #[instrument(skip(self, bitmap), fields(rows = bitmap.len(), copies))]
    pub async fn print(&mut self, bitmap: &[Vec<u8>], copies: u32) -> Result<()> {
        let job = encoder::encode_job(bitmap, copies)?;
        let target = self.resolve_target().await?;
        crate::transport::dispatch(&target, &self.runner, &job).await
    }

    /// Enumerate the printers the host system knows about.
    pub async fn list_printers(&self) -> Result<Vec<PrinterDescriptor>> {
        discovery::list_printers(Platform::host(), &self.runner).await
    }

    /// Resolve the delivery target: explicit interface, cached discovery
    /// result, or a fresh autodetection (remembered afterwards).
    async fn resolve_target(&mut self) -> Result<Target> {
        if let Some(target) = &self.resolved {
            return Ok(target.clone());
        }
        let target = match Target::from_config(&self.config)? {
            Some(explicit) => explicit,
            None => {
                debug!("no interface configured, autodetecting");
                discovery::autodetect(Platform::host(), &self.runner).await?
            }
        };
        self.resolved = Some(target.clone());
        Ok(target)
    }
}

// ============================================================================
// TESTS
// ============================================================================
