//! Artifact filename derivation.

use proposta_report::ProposalContent;

/// Filename prefix for document artifacts (HTML, PDF).
pub const REPORT_PREFIX: &str = "relatorio-comercial";

/// Filename prefix for state backup artifacts (JSON).
pub const DATA_PREFIX: &str = "relatorio-dados";

/// Fixed filename for the rasterized image artifact -- the PNG carries
/// no project-name slug.
pub const PNG_FILENAME: &str = "relatorio-comercial.png";

/// Slug a project name for use in a filename: whitespace runs become a
/// single hyphen and the result is lowercased. Other characters pass
/// through unchanged, matching the filenames earlier exports produced.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Filename for a document artifact: `relatorio-comercial-<slug>.<ext>`.
#[must_use]
pub fn artifact_filename(content: &ProposalContent, ext: &str) -> String {
    format!("{REPORT_PREFIX}-{}.{ext}", slugify(&content.nome_projeto))
}

/// Filename for a state backup: `relatorio-dados-<slug>.json`.
#[must_use]
pub fn backup_filename(content: &ProposalContent) -> String {
    format!("{DATA_PREFIX}-{}.json", slugify(&content.nome_projeto))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Tax Review Q1"), "tax-review-q1");
    }

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("  Tax\t Review \n Q1 "), "tax-review-q1");
    }

    #[test]
    fn artifact_filename_contains_slug_and_extension() {
        let content = ProposalContent {
            nome_projeto: "Tax Review Q1".into(),
            ..ProposalContent::empty()
        };
        assert_eq!(
            artifact_filename(&content, "html"),
            "relatorio-comercial-tax-review-q1.html"
        );
        assert_eq!(
            backup_filename(&content),
            "relatorio-dados-tax-review-q1.json"
        );
    }

    #[test]
    fn png_filename_is_fixed() {
        assert_eq!(PNG_FILENAME, "relatorio-comercial.png");
    }
}
