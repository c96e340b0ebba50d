//! # Windows Printer Enumeration
//!
//! Queries the Win32 management layer for installed printers and parses
//! the result as blank-line-delimited records of `Label : Value` lines.
//!
//! `Format-List` output looks like:
//!
//! ```text
//! DeviceID : DYMO LabelWriter 450
//! Name     : DYMO LabelWriter 450
//!
//! DeviceID : Microsoft Print to PDF
//! Name     : Microsoft Print to PDF
//! ```
//!
//! A record yields a descriptor only when both a device-id line and a
//! name line are present; labels match case-insensitively.

use tracing::debug;

use crate::discovery::PrinterDescriptor;
use crate::error::Result;
use crate::process::CommandRunner;

const POWERSHELL: &str = "powershell";
const PRINTER_QUERY: &str = "Get-CimInstance Win32_Printer | Format-List DeviceID,Name";

/// Enumerate installed Windows printers as printer descriptors.
pub async fn list_printers(runner: &dyn CommandRunner) -> Result<Vec<PrinterDescriptor>> {
    let listing = runner
        .run(POWERSHELL, &["-NoProfile", "-Command", PRINTER_QUERY], None)
        .await?;
    let printers = parse_listing(&listing);
    debug!(count = printers.len(), "enumerated installed printers");
    Ok(printers)
}

/// Parse blank-line-delimited `Label : Value` records.
fn parse_listing(listing: &str) -> Vec<PrinterDescriptor> {
    let mut printers = Vec::new();
    let mut device_id: Option<String> = None;
    let mut name: Option<String> = None;

    let mut flush = |device_id: &mut Option<String>, name: &mut Option<String>| {
        if let (Some(id), Some(n)) = (device_id.take(), name.take()) {
            printers.push(PrinterDescriptor {
                device_id: id,
                name: n,
            });
        }
    };

    for line in listing.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut device_id, &mut name);
            continue;
        }
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match label.trim().to_ascii_lowercase().as_str() {
            "deviceid" => device_id = Some(value.to_string()),
            "name" => name = Some(value.to_string()),
            _ => {}
        }
    }
    flush(&mut device_id, &mut name);

    printers
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::test_support::ScriptedRunner;

    const LISTING: &str = "\r\n\
DeviceID : DYMO LabelWriter 450\r\n\
Name     : DYMO LabelWriter 450\r\n\
\r\n\
DeviceID : Microsoft Print to PDF\r\n\
Name     : Microsoft Print to PDF\r\n\
\r\n";

    #[test]
    fn test_parse_listing() {
        let printers = parse_listing(LISTING);
        assert_eq!(printers.len(), 2);
        assert_eq!(printers[0].device_id, "DYMO LabelWriter 450");
        assert_eq!(printers[1].name, "Microsoft Print to PDF");
    }

    #[test]
    fn test_incomplete_record_skipped() {
        let listing = "DeviceID : Orphan Queue\n\nName : Nameless\n\n";
        assert!(parse_listing(listing).is_empty());
    }

    #[test]
    fn test_labels_case_insensitive() {
        let listing = "DEVICEID : Q1\nname : Queue One\n";
        let printers = parse_listing(listing);
        assert_eq!(printers.len(), 1);
        assert_eq!(printers[0].device_id, "Q1");
        assert_eq!(printers[0].name, "Queue One");
    }

    #[test]
    fn test_value_containing_colon() {
        let listing = "DeviceID : USB:001\nName : Front: Desk\n";
        let printers = parse_listing(listing);
        assert_eq!(printers[0].device_id, "USB:001");
        assert_eq!(printers[0].name, "Front: Desk");
    }

    #[tokio::test]
    async fn test_queries_management_layer() {
        let runner = ScriptedRunner::new(vec![Ok(LISTING.to_string())]);
        let printers = list_printers(&runner).await.unwrap();
        assert_eq!(printers.len(), 2);

        let calls = runner.calls();
        assert_eq!(calls[0].program, "powershell");
        assert!(calls[0].args[2].contains("Win32_Printer"));
    }
}
