//! # Printer Discovery
//!
//! Enumerates system-known printers per platform and filters for an
//! attached LabelWriter.
//!
//! ## Platforms
//!
//! - [`unix`]: CUPS destinations via `lpstat`
//! - [`windows`]: installed queues via the Win32 management layer
//! - anything else: [`LabelWriterError::UnsupportedPlatform`], without
//!   invoking any external process
//!
//! Autodetection picks the first printer whose display name contains
//! `"dymo"` (case-insensitive) and resolves it to the platform's spooler
//! transport.

pub mod unix;
pub mod windows;

use tracing::info;

use crate::error::{LabelWriterError, Result};
use crate::printer::Target;
use crate::process::CommandRunner;

/// One system-known printer.
///
/// `device_id` is the stable identifier used for job submission;
/// `name` is the human-readable label used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterDescriptor {
    pub device_id: String,
    pub name: String,
}

/// Host platform family, as far as discovery is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
    Unsupported,
}

impl Platform {
    /// The platform this process is running on.
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(unix) {
            Self::Unix
        } else {
            Self::Unsupported
        }
    }
}

/// Enumerate system printers on the given platform.
pub async fn list_printers(
    platform: Platform,
    runner: &dyn CommandRunner,
) -> Result<Vec<PrinterDescriptor>> {
    match platform {
        Platform::Unix => unix::list_printers(runner).await,
        Platform::Windows => windows::list_printers(runner).await,
        Platform::Unsupported => Err(LabelWriterError::UnsupportedPlatform(
            std::env::consts::OS.to_string(),
        )),
    }
}

/// Find an attached LabelWriter and resolve it to a spooler target.
///
/// Any enumeration failure, and the no-match case, surface as
/// [`LabelWriterError::PrinterNotFound`]; the caller asked "give me a
/// label printer", not "list my queues".
pub async fn autodetect(platform: Platform, runner: &dyn CommandRunner) -> Result<Target> {
    let printers = list_printers(platform, runner)
        .await
        .map_err(|_| LabelWriterError::PrinterNotFound)?;

    let found = printers
        .into_iter()
        .find(|p| p.name.to_lowercase().contains("dymo"))
        .ok_or(LabelWriterError::PrinterNotFound)?;

    info!(device_id = %found.device_id, name = %found.name, "autodetected label printer");

    Ok(match platform {
        Platform::Windows => Target::Windows {
            device_id: found.device_id,
        },
        _ => Target::Cups {
            queue: found.device_id,
        },
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::test_support::ScriptedRunner;

    #[tokio::test]
    async fn test_unsupported_platform_invokes_nothing() {
        let runner = ScriptedRunner::new(vec![]);
        let err = list_printers(Platform::Unsupported, &runner)
            .await
            .unwrap_err();
        assert!(matches!(err, LabelWriterError::UnsupportedPlatform(_)));
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn test_autodetect_matches_case_insensitively() {
        let runner = ScriptedRunner::new(vec![
            Ok("Office_Laser\nDymo_LW\n".to_string()),
            Ok("printer Office_Laser is idle.\n\tDescription: Hallway Laser\n".to_string()),
            Ok("printer Dymo_LW is idle.\n\tDescription: DYMO LabelWriter 450\n".to_string()),
        ]);

        let target = autodetect(Platform::Unix, &runner).await.unwrap();
        assert_eq!(
            target,
            Target::Cups {
                queue: "Dymo_LW".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_autodetect_matches_fallback_name() {
        // no description anywhere: the underscore-to-space fallback still matches
        let runner = ScriptedRunner::new(vec![
            Ok("dymo_labelwriter\n".to_string()),
            Ok("printer dymo_labelwriter is idle.\n".to_string()),
        ]);

        let target = autodetect(Platform::Unix, &runner).await.unwrap();
        assert_eq!(
            target,
            Target::Cups {
                queue: "dymo_labelwriter".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_autodetect_no_match_is_printer_not_found() {
        let runner = ScriptedRunner::new(vec![
            Ok("Office_Laser\n".to_string()),
            Ok("printer Office_Laser is idle.\n".to_string()),
        ]);

        let err = autodetect(Platform::Unix, &runner).await.unwrap_err();
        assert!(matches!(err, LabelWriterError::PrinterNotFound));
    }

    #[tokio::test]
    async fn test_autodetect_enumeration_failure_is_printer_not_found() {
        let runner = ScriptedRunner::failing("lpstat: scheduler not running");
        let err = autodetect(Platform::Unix, &runner).await.unwrap_err();
        assert!(matches!(err, LabelWriterError::PrinterNotFound));
    }

    #[tokio::test]
    async fn test_autodetect_on_windows_resolves_windows_target() {
        let listing = "DeviceID : DYMO LabelWriter 450\nName : DYMO LabelWriter 450\n\n";
        let runner = ScriptedRunner::new(vec![Ok(listing.to_string())]);

        let target = autodetect(Platform::Windows, &runner).await.unwrap();
        assert_eq!(
            target,
            Target::Windows {
                device_id: "DYMO LabelWriter 450".to_string(),
            }
        );
    }
}
