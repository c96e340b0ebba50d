//! # Labelwriter - Thermal Label Printer Library
//!
//! Labelwriter is a Rust library for printing on Dymo LabelWriter thermal
//! label printers. It provides:
//!
//! - **Protocol implementation**: LabelWriter command builders and the
//!   print-job encoder
//! - **Transports**: raw TCP, CUPS spooler, Windows raw-print helper, and
//!   direct character-device writes
//! - **Discovery**: per-platform printer enumeration with best-effort
//!   autodetection of an attached Dymo printer
//!
//! ## Quick Start
//!
//! ```no_run
//! use labelwriter::{LabelWriter, PrinterConfig};
//!
//! # async fn demo() -> Result<(), labelwriter::LabelWriterError> {
//! // No configuration: discover an attached Dymo through the spooler
//! let mut printer = LabelWriter::new(PrinterConfig::default());
//!
//! // A 336 × 1052 address label bitmap, bit-packed portrait rows,
//! // rasterized by the caller
//! let bitmap: Vec<Vec<u8>> = vec![vec![0u8; 42]; 1052];
//!
//! printer.print(&bitmap, 1).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | LabelWriter command builders and job encoder |
//! | [`transport`] | Delivery backends (network, CUPS, Windows, device) |
//! | [`discovery`] | Per-platform printer enumeration |
//! | [`printer`] | Connection configuration and resolved targets |
//! | [`labels`] | Label stock geometry presets |
//! | [`service`] | The [`LabelWriter`] print service |
//! | [`process`] | External command execution seam |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! LabelWriter 400/450 series printers and compatibles speaking the same
//! ESC command set. Printers with other command sets are out of scope.
//!
//! ## Concurrency
//!
//! All delivery operations are async. One service instance handles one
//! job at a time; callers wanting concurrent jobs should serialize calls
//! per instance or use one instance per job.

pub mod discovery;
pub mod error;
pub mod labels;
pub mod printer;
pub mod process;
pub mod protocol;
pub mod service;
pub mod transport;

// Re-exports for convenience
pub use error::LabelWriterError;
pub use labels::LabelSpec;
pub use printer::{Interface, PrinterConfig};
pub use protocol::Bitmap;
pub use service::LabelWriter;
