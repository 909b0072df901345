//! The state backup value object.
//!
//! A backup is the only persistence this tool has: the user explicitly
//! exports `{ formData, formatacao, exportDate, version }` to a JSON
//! file and can later import it, replacing both in-memory snapshots
//! wholesale. Serialization lives in `proposta-export::backup`.

use serde::{Deserialize, Serialize};

use crate::content::ProposalContent;
use crate::style::StyleConfig;

/// Format version literal written by every export. Ignored on import;
/// there is no version negotiation.
pub const BACKUP_VERSION: &str = "1.0";

/// One exported/importable application state.
///
/// `form_data` and `formatacao` are required on import -- a document
/// missing either is rejected and the current state is left untouched.
/// `export_date` and `version` are informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    /// The proposal form content.
    pub form_data: ProposalContent,
    /// The style configuration.
    pub formatacao: StyleConfig,
    /// ISO-8601 timestamp of the export, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<String>,
    /// Format version string, currently always [`BACKUP_VERSION`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Backup {
    /// Assemble a backup of the given snapshots, stamped with the
    /// export timestamp and the current format version.
    #[must_use]
    pub fn new(content: ProposalContent, style: StyleConfig, export_date: String) -> Self {
        Self {
            form_data: content,
            formatacao: style,
            export_date: Some(export_date),
            version: Some(BACKUP_VERSION.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn backup_serializes_with_original_top_level_keys() {
        let backup = Backup::new(
            ProposalContent::default(),
            StyleConfig::default(),
            "2026-08-29T12:00:00.000Z".into(),
        );
        let json = serde_json::to_string(&backup).unwrap();
        assert!(json.contains("\"formData\""));
        assert!(json.contains("\"formatacao\""));
        assert!(json.contains("\"exportDate\""));
        assert!(json.contains("\"version\":\"1.0\""));
    }

    #[test]
    fn export_date_and_version_are_optional_on_input() {
        let json = format!(
            "{{\"formData\":{},\"formatacao\":{}}}",
            serde_json::to_string(&ProposalContent::empty()).unwrap(),
            serde_json::to_string(&StyleConfig::default()).unwrap(),
        );
        let backup: Backup = serde_json::from_str(&json).unwrap();
        assert!(backup.export_date.is_none());
        assert!(backup.version.is_none());
    }
}
