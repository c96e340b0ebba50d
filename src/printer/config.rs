//! # Printer Configuration
//!
//! Configuration values describing how to reach a LabelWriter, and the
//! resolved delivery target the transport dispatcher acts on.
//!
//! A [`PrinterConfig`] with no `interface` means "discover on first use":
//! the service enumerates system printers, picks the first whose name
//! looks like a Dymo, and remembers the resolved target for its lifetime.
//!
//! Validation is fail-fast: an unrecognized interface tag is rejected when
//! the configuration is parsed, never at dispatch time.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LabelWriterError, Result};

/// Default host for the network transport.
pub const DEFAULT_HOST: &str = "localhost";

/// Default TCP port for raw network printing (the documented convention
/// for this printer family).
pub const DEFAULT_PORT: u16 = 9100;

/// Delivery interface selector.
///
/// Spelled in SCREAMING_CASE on the wire (`"NETWORK"`, `"CUPS"`,
/// `"WINDOWS"`, `"DEVICE"`) to match the configuration convention of the
/// drivers this library interoperates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interface {
    /// Raw TCP to a print server or network-attached printer
    Network,
    /// Submission through the CUPS spooler
    Cups,
    /// Windows raw-print helper via the installed queue
    Windows,
    /// Direct write to a character device node
    Device,
}

impl FromStr for Interface {
    type Err = LabelWriterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "NETWORK" => Ok(Self::Network),
            "CUPS" => Ok(Self::Cups),
            "WINDOWS" => Ok(Self::Windows),
            "DEVICE" => Ok(Self::Device),
            other => Err(LabelWriterError::Config(format!(
                "unrecognized interface '{}'; expected NETWORK, CUPS, WINDOWS or DEVICE",
                other
            ))),
        }
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Network => "NETWORK",
            Self::Cups => "CUPS",
            Self::Windows => "WINDOWS",
            Self::Device => "DEVICE",
        };
        f.write_str(tag)
    }
}

/// Printer connection configuration.
///
/// All fields are optional; unset `interface` triggers autodetection on
/// first use. Only the fields the selected interface needs are read:
///
/// | Interface | Required fields | Defaults |
/// |-----------|-----------------|----------|
/// | NETWORK | — | `host = "localhost"`, `port = 9100` |
/// | CUPS | `device_id` | — |
/// | WINDOWS | `device_id` | — |
/// | DEVICE | `device` | — |
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrinterConfig {
    /// Delivery interface; `None` means autodetect on first use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<Interface>,

    /// Network transport host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Network transport port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Spooler queue / system device identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    /// Character device path for direct writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<PathBuf>,
}

impl PrinterConfig {
    /// Parse a configuration from JSON, failing fast on an unrecognized
    /// interface tag or unknown fields.
    ///
    /// ## Example
    ///
    /// ```
    /// use labelwriter::printer::{Interface, PrinterConfig};
    ///
    /// let config = PrinterConfig::from_json(r#"{"interface": "NETWORK", "port": 9100}"#).unwrap();
    /// assert_eq!(config.interface, Some(Interface::Network));
    ///
    /// assert!(PrinterConfig::from_json(r#"{"interface": "BOGUS"}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| LabelWriterError::Config(format!("invalid printer config: {}", e)))
    }

    /// Convenience constructor for a network printer.
    pub fn network(host: impl Into<String>, port: u16) -> Self {
        Self {
            interface: Some(Interface::Network),
            host: Some(host.into()),
            port: Some(port),
            ..Self::default()
        }
    }

    /// Convenience constructor for a CUPS queue.
    pub fn cups(device_id: impl Into<String>) -> Self {
        Self {
            interface: Some(Interface::Cups),
            device_id: Some(device_id.into()),
            ..Self::default()
        }
    }

    /// Convenience constructor for a direct device write.
    pub fn device(path: impl Into<PathBuf>) -> Self {
        Self {
            interface: Some(Interface::Device),
            device: Some(path.into()),
            ..Self::default()
        }
    }
}

/// A fully resolved delivery target: one variant per transport strategy,
/// carrying exactly the fields that transport needs.
///
/// Produced either from an explicit [`PrinterConfig`] interface via
/// [`Target::from_config`], or by autodetection
/// ([`crate::discovery::autodetect`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Raw TCP delivery
    Network { host: String, port: u16 },
    /// CUPS spooler submission
    Cups { queue: String },
    /// Windows raw-print helper
    Windows { device_id: String },
    /// Direct character-device write
    Device { path: PathBuf },
}

impl Target {
    /// Resolve an explicitly configured interface into a target.
    ///
    /// Returns `Ok(None)` when no interface is set (the caller should run
    /// autodetection). Fails with [`LabelWriterError::Config`] when the
    /// selected interface is missing its required field.
    pub fn from_config(config: &PrinterConfig) -> Result<Option<Self>> {
        let Some(interface) = config.interface else {
            return Ok(None);
        };
        let target = match interface {
            Interface::Network => Self::Network {
                host: config
                    .host
                    .clone()
                    .unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: config.port.unwrap_or(DEFAULT_PORT),
            },
            Interface::Cups => Self::Cups {
                queue: require(config.device_id.as_deref(), "CUPS", "device_id")?,
            },
            Interface::Windows => Self::Windows {
                device_id: require(config.device_id.as_deref(), "WINDOWS", "device_id")?,
            },
            Interface::Device => {
                let path = config.device.clone().filter(|p| !p.as_os_str().is_empty());
                Self::Device {
                    path: path.ok_or_else(|| {
                        LabelWriterError::Config(
                            "DEVICE interface requires a device path".to_string(),
                        )
                    })?,
                }
            }
        };
        Ok(Some(target))
    }
}

fn require(value: Option<&str>, interface: &str, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(LabelWriterError::Config(format!(
            "{} interface requires a non-empty {}",
            interface, field
        ))),
    }
}

// ============================================================================
// TESTS
// ============================================================================
