//! # Printer Transport Layer
//!
//! Delivery backends for sending an assembled job buffer to the printer,
//! selected by the resolved [`Target`] variant.
//!
//! ## Available Transports
//!
//! - [`network`]: raw TCP (port 9100 convention)
//! - [`cups`]: CUPS spooler submission via `lp`
//! - [`windows`]: Windows raw-print helper via a temp spool file
//! - [`device`]: direct character-device write
//!
//! Each transport delivers the whole buffer in one call and reports a
//! single success/failure outcome; there is no partial completion and no
//! automatic retry.

pub mod cups;
pub mod device;
pub mod network;
pub mod windows;

use crate::error::Result;
use crate::printer::Target;
use crate::process::CommandRunner;

/// Hand a job buffer to the transport named by `target`.
pub async fn dispatch(target: &Target, runner: &dyn CommandRunner, data: &[u8]) -> Result<()> {
    match target {
        Target::Network { host, port } => network::send(host, *port, data).await,
        Target::Cups { queue } => cups::send(runner, queue, data).await,
        Target::Windows { device_id } => windows::send(runner, device_id, data).await,
        Target::Device { path } => device::send(path, data).await,
    }
}
