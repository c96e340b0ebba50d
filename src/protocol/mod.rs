//! # LabelWriter Protocol Implementation
//!
//! This module provides the low-level command builders and the print-job
//! encoder for the Dymo LabelWriter command protocol.
//!
//! ## Module Structure
//!
//! - [`commands`]: fixed and derived printer commands (reset, form feeds,
//!   geometry, raster framing)
//! - [`encoder`]: bitmap matrix + copy count → assembled job buffer
//!
//! ## Usage Example
//!
//! ```
//! use labelwriter::protocol::{commands, encoder};
//!
//! // One 16-dot-wide, 2-row label
//! let matrix = vec![vec![0xFF, 0xFF], vec![0x81, 0x81]];
//! let job = encoder::encode_job(&matrix, 1).unwrap();
//!
//! // Jobs always open with the resynchronization preamble
//! assert_eq!(&job[..commands::START_ESC_COUNT], commands::start_of_print().as_slice());
//! ```
//!
//! ## Protocol Reference
//!
//! Based on the "DYMO LabelWriter 450 Series Printers Technical Reference
//! Manual" command listing.

pub mod commands;
pub mod encoder;

pub use encoder::{Bitmap, encode_job};
