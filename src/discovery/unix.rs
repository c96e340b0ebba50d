//! # Unix Printer Enumeration
//!
//! Lists CUPS destinations via `lpstat -e` and enriches each queue id
//! with its human-readable description from `lpstat -l -p <id>`.
//!
//! Name enrichment is best-effort: a failed or description-less status
//! lookup leaves the fallback name (queue id with underscores turned to
//! spaces) in place rather than failing the whole listing.

use tracing::{debug, warn};

use crate::discovery::PrinterDescriptor;
use crate::error::Result;
use crate::process::CommandRunner;

const LPSTAT: &str = "lpstat";

/// Enumerate CUPS queues as printer descriptors.
pub async fn list_printers(runner: &dyn CommandRunner) -> Result<Vec<PrinterDescriptor>> {
    let listing = runner.run(LPSTAT, &["-e"], None).await?;

    let ids: Vec<&str> = listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    debug!(count = ids.len(), "enumerated spooler destinations");

    let mut printers = Vec::with_capacity(ids.len());
    for id in ids {
        let name = match runner.run(LPSTAT, &["-l", "-p", id], None).await {
            Ok(status) => parse_description(&status),
            Err(e) => {
                warn!(id, error = %e, "status lookup failed, using fallback name");
                None
            }
        };
        printers.push(PrinterDescriptor {
            device_id: id.to_string(),
            name: name.unwrap_or_else(|| fallback_name(id)),
        });
    }
    Ok(printers)
}

/// Extract the `Description:` field from `lpstat -l -p` output.
fn parse_description(status: &str) -> Option<String> {
    status.lines().find_map(|line| {
        let line = line.trim();
        let (label, value) = line.split_once(':')?;
        if label.trim().eq_ignore_ascii_case("description") {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        } else {
            None
        }
    })
}

/// Queue ids encode spaces as underscores; undo that for display.
fn fallback_name(id: &str) -> String {
    id.replace('_', " ")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::test_support::ScriptedRunner;

    #[test]
    fn test_parse_description() {
        let status = "printer Dymo_LW is idle.\n\tDescription: DYMO LabelWriter 450\n\tLocation: desk\n";
        assert_eq!(
            parse_description(status),
            Some("DYMO LabelWriter 450".to_string())
        );
    }

    #[test]
    fn test_parse_description_case_insensitive() {
        assert_eq!(
            parse_description("\tdescription: Front Desk\n"),
            Some("Front Desk".to_string())
        );
    }

    #[test]
    fn test_parse_description_missing_or_empty() {
        assert_eq!(parse_description("printer X is idle.\n"), None);
        assert_eq!(parse_description("\tDescription: \n"), None);
    }

    #[test]
    fn test_fallback_name() {
        assert_eq!(fallback_name("Dymo_LabelWriter_450"), "Dymo LabelWriter 450");
    }

    #[tokio::test]
    async fn test_mixed_description_availability() {
        let runner = ScriptedRunner::new(vec![
            Ok("Dymo_LW\nOffice_Laser\n".to_string()),
            Ok("printer Dymo_LW is idle.\n\tDescription: DYMO LabelWriter 450\n".to_string()),
            Ok("printer Office_Laser is idle.\n\tLocation: hallway\n".to_string()),
        ]);

        let printers = list_printers(&runner).await.unwrap();
        assert_eq!(printers.len(), 2);
        assert_eq!(printers[0].device_id, "Dymo_LW");
        assert_eq!(printers[0].name, "DYMO LabelWriter 450");
        assert_eq!(printers[1].device_id, "Office_Laser");
        assert_eq!(printers[1].name, "Office Laser");
    }

    #[tokio::test]
    async fn test_status_failure_degrades_to_fallback() {
        let runner = ScriptedRunner::new(vec![
            Ok("Dymo_LW\n".to_string()),
            Err("lpstat: queue vanished".to_string()),
        ]);

        let printers = list_printers(&runner).await.unwrap();
        assert_eq!(printers.len(), 1);
        assert_eq!(printers[0].name, "Dymo LW");
    }

    #[tokio::test]
    async fn test_enumeration_failure_propagates() {
        let runner = ScriptedRunner::failing("lpstat: scheduler not running");
        assert!(list_printers(&runner).await.is_err());
    }
}
