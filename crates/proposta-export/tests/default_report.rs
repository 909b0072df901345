//! Integration test: run the seeded example proposal through the
//! renderer and every pure serializer.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proposta_report::{ProposalContent, StyleConfig, render_report};

#[test]
fn default_proposal_renders_and_exports_in_every_format() {
    let content = ProposalContent::default();
    let style = StyleConfig::default();
    let year = 2026;

    // HTML fragment.
    let fragment = render_report(&content, &style, year);
    assert!(fragment.contains("RECUPERAÇÃO") || fragment.contains("Recuperação"));
    assert!(fragment.contains("6. ASPECTOS FINANCEIROS"));

    // Full downloadable document.
    let doc = proposta_export::download_document(&fragment, &content, &style);
    assert!(doc.contains("<title>"));
    assert!(doc.contains(&fragment));
    eprintln!("HTML document: {} bytes", doc.len());

    // Print shell.
    let print_doc = proposta_export::print_document(&fragment, &content, &style);
    assert!(print_doc.contains("size: A4"));

    // PDF.
    let pdf = proposta_export::to_pdf(&content, &style, year);
    assert!(pdf.starts_with(b"%PDF-1.4"));
    eprintln!("PDF: {} bytes", pdf.len());

    // Backup round trip.
    let json =
        proposta_export::to_json(&content, &style, "2026-08-29T00:00:00.000Z".into()).unwrap();
    let backup = proposta_export::from_json(&json).unwrap();
    assert_eq!(backup.form_data, content);
    assert_eq!(backup.formatacao, style);

    // Filenames.
    assert!(
        proposta_export::artifact_filename(&content, "pdf").starts_with("relatorio-comercial-")
    );
}

#[test]
fn padded_proposal_spans_multiple_pdf_pages_with_footers() {
    let mut content = ProposalContent::default();
    content.casos_sucesso = "Caso de sucesso documentado em detalhe para o cliente.\n".repeat(90);
    let style = StyleConfig::default();

    let pdf = proposta_export::to_pdf(&content, &style, 2026);
    let text = String::from_utf8_lossy(&pdf);

    let pages = text.matches("/Type /Page ").count();
    assert!(pages > 1, "expected more than one page, got {pages}");
    assert_eq!(
        text.matches("Todos os direitos reservados").count(),
        pages,
        "every page must carry the footer"
    );
}
