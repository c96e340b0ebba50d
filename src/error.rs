//! # Error Types
//!
//! This module defines error types used throughout the labelwriter library.
//!
//! Every failure surfaces to the immediate caller of the public operation
//! that triggered it; nothing is retried automatically except the single
//! discovery-then-dispatch retry in [`crate::service::LabelWriter`].

use thiserror::Error;

/// Main error type for labelwriter operations
#[derive(Debug, Error)]
pub enum LabelWriterError {
    /// Malformed bitmap matrix or copy count
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Bad or missing interface-specific configuration, or an
    /// unrecognized interface value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Autodetection found no label printer among the system queues
    #[error("No label printer found")]
    PrinterNotFound,

    /// Printer discovery attempted on an unhandled operating system
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// Network transport socket error
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Network transport exceeded its activity window
    #[error("Timeout: {0}")]
    Timeout(String),

    /// External spooler command or raw-print helper failure
    #[error("Spooler error: {0}")]
    Spooler(String),

    /// Device write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for labelwriter operations
pub type Result<T> = std::result::Result<T, LabelWriterError>;
