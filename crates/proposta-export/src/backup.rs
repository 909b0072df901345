//! State backup JSON read/write.
//!
//! Export serializes `{ formData, formatacao, exportDate, version }`
//! pretty-printed; import parses the same structure back, rejecting
//! any document that is not valid JSON or is missing either required
//! top-level field. Import is all-or-nothing: on error the caller
//! keeps its current state.

use proposta_report::{Backup, ProposalContent, StyleConfig};

/// Errors from backup serialization and parsing.
#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    /// The selected file is not valid JSON or is missing a required
    /// field (`formData` or `formatacao`).
    #[error("invalid backup file: {0}")]
    Invalid(String),

    /// Serializing the current state failed. Not expected for these
    /// types; surfaced rather than swallowed.
    #[error("could not serialize backup: {0}")]
    Serialize(String),
}

/// Serialize the given snapshots as a pretty-printed backup document.
///
/// `export_date` is the caller-supplied ISO-8601 timestamp (this crate
/// stays clock-free).
///
/// # Errors
///
/// Returns [`BackupError::Serialize`] if JSON serialization fails.
pub fn to_json(
    content: &ProposalContent,
    style: &StyleConfig,
    export_date: String,
) -> Result<String, BackupError> {
    let backup = Backup::new(content.clone(), style.clone(), export_date);
    serde_json::to_string_pretty(&backup).map_err(|e| BackupError::Serialize(e.to_string()))
}

/// Parse a backup document.
///
/// # Errors
///
/// Returns [`BackupError::Invalid`] for malformed JSON or a document
/// missing `formData` or `formatacao`.
pub fn from_json(json: &str) -> Result<Backup, BackupError> {
    serde_json::from_str(json).map_err(|e| BackupError::Invalid(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_reproduces_both_snapshots_field_for_field() {
        let content = ProposalContent::default();
        let style = StyleConfig {
            font_family: "Georgia".into(),
            font_size: 16.0,
            ..StyleConfig::default()
        };
        let json = to_json(&content, &style, "2026-08-29T12:00:00.000Z".into()).unwrap();
        let backup = from_json(&json).unwrap();
        assert_eq!(backup.form_data, content);
        assert_eq!(backup.formatacao, style);
        assert_eq!(backup.version.as_deref(), Some("1.0"));
        assert_eq!(
            backup.export_date.as_deref(),
            Some("2026-08-29T12:00:00.000Z")
        );
    }

    #[test]
    fn import_rejects_missing_form_data() {
        let style_json = serde_json::to_string(&StyleConfig::default()).unwrap();
        let json = format!("{{\"formatacao\":{style_json}}}");
        assert!(from_json(&json).is_err());
    }

    #[test]
    fn import_rejects_missing_formatacao() {
        let content_json = serde_json::to_string(&ProposalContent::default()).unwrap();
        let json = format!("{{\"formData\":{content_json}}}");
        assert!(from_json(&json).is_err());
    }

    #[test]
    fn import_rejects_non_json_input() {
        assert!(from_json("not json at all").is_err());
        assert!(from_json("").is_err());
    }

    #[test]
    fn import_accepts_documents_without_date_or_version() {
        let json = format!(
            "{{\"formData\":{},\"formatacao\":{}}}",
            serde_json::to_string(&ProposalContent::default()).unwrap(),
            serde_json::to_string(&StyleConfig::default()).unwrap(),
        );
        let backup = from_json(&json).unwrap();
        assert!(backup.version.is_none());
    }
}
