//! # Printer Module
//!
//! Printer connection configuration and resolved delivery targets.
//!
//! ## Modules
//!
//! - [`config`]: [`PrinterConfig`], the [`Interface`] selector, and the
//!   resolved [`Target`] the dispatcher acts on

pub mod config;

pub use config::{DEFAULT_HOST, DEFAULT_PORT, Interface, PrinterConfig, Target};
