//! Full HTML document shells around the rendered report fragment.
//!
//! The fragment from `proposta-report` carries every style inline; the
//! shells only add the document skeleton: charset/viewport metadata, a
//! `<title>`, one external Google Fonts reference (the single network
//! dependency of an exported artifact), and the print CSS.

use proposta_report::{ProposalContent, StyleConfig, html_escape, template};

/// The Google Fonts stylesheet URL for the configured family.
fn font_link(style: &StyleConfig) -> String {
    let family = style
        .font_family
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("+");
    format!("https://fonts.googleapis.com/css2?family={family}:wght@400;500;600;700&display=swap")
}

/// Document `<title>`: project name plus the firm wordmark.
fn document_title(content: &ProposalContent) -> String {
    format!(
        "{} - {}",
        html_escape(template::display_title(content)),
        template::FIRM_NAME
    )
}

/// Wrap the fragment as a standalone, downloadable HTML document.
///
/// Self-contained apart from the font link: the page renders the
/// proposal centered on a neutral backdrop and prints acceptably via
/// the embedded `@media print` rules.
#[must_use]
pub fn download_document(fragment: &str, content: &ProposalContent, style: &StyleConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link href="{font}" rel="stylesheet">
    <style>
        @media print {{
            body {{
                -webkit-print-color-adjust: exact !important;
                print-color-adjust: exact !important;
            }}

            @page {{
                size: A4;
                margin: 15mm;
            }}

            .container {{
                box-shadow: none !important;
                margin: 0 !important;
            }}
        }}

        body {{
            font-family: {family}, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #f5f5f5;
            font-size: {size}px;
            line-height: {lh};
            color: {text};
        }}

        .container {{
            width: 210mm;
            max-width: 100%;
            margin: 0 auto;
            background: {bg};
            border-radius: {radius}px;
            overflow: hidden;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        }}
    </style>
</head>
<body>
    <div class="container">
        {fragment}
    </div>
</body>
</html>"#,
        title = document_title(content),
        font = font_link(style),
        family = style.font_family,
        size = style.font_size,
        lh = style.line_height,
        text = style.text_color,
        bg = style.background_color,
        radius = style.border_radius,
    )
}

/// Wrap the fragment as a print-optimized document for the popup print
/// flow: A4 page setup, forced color printing, no shadow or radius.
#[must_use]
pub fn print_document(fragment: &str, content: &ProposalContent, style: &StyleConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link href="{font}" rel="stylesheet">
    <style>
        @page {{
            size: A4;
            margin: 15mm;
        }}

        @media print {{
            body {{
                -webkit-print-color-adjust: exact !important;
                print-color-adjust: exact !important;
                margin: 0;
                padding: 0;
            }}

            .container {{
                box-shadow: none !important;
                border-radius: 0 !important;
                margin: 0 !important;
                padding: 0 !important;
            }}
        }}

        body {{
            font-family: {family}, sans-serif;
            margin: 0;
            padding: 0;
            background-color: white;
            font-size: {size}px;
            line-height: {lh};
            color: {text};
        }}

        .container {{
            width: 100%;
            max-width: 210mm;
            margin: 0 auto;
            background: {bg};
            min-height: 100vh;
        }}
    </style>
</head>
<body>
    <div class="container">
        {fragment}
    </div>
</body>
</html>"#,
        title = document_title(content),
        font = font_link(style),
        family = style.font_family,
        size = style.font_size,
        lh = style.line_height,
        text = style.text_color,
        bg = style.background_color,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proposta_report::render_report;

    fn rendered() -> (String, ProposalContent, StyleConfig) {
        let content = ProposalContent::default();
        let style = StyleConfig::default();
        let fragment = render_report(&content, &style, 2026);
        (fragment, content, style)
    }

    #[test]
    fn download_document_embeds_fragment_and_font_link() {
        let (fragment, content, style) = rendered();
        let doc = download_document(&fragment, &content, &style);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(&fragment));
        assert_eq!(doc.matches("fonts.googleapis.com").count(), 1);
        assert!(doc.contains("family=Montserrat:wght@400;500;600;700"));
    }

    #[test]
    fn multi_word_font_family_is_plus_joined_in_link() {
        let (fragment, content, mut style) = rendered();
        style.font_family = "Open Sans".into();
        let doc = download_document(&fragment, &content, &style);
        assert!(doc.contains("family=Open+Sans:"));
    }

    #[test]
    fn print_document_sets_a4_page_and_white_body() {
        let (fragment, content, style) = rendered();
        let doc = print_document(&fragment, &content, &style);
        assert!(doc.contains("size: A4"));
        assert!(doc.contains("margin: 15mm"));
        assert!(doc.contains("background-color: white"));
        assert!(doc.contains("print-color-adjust: exact"));
    }

    #[test]
    fn title_falls_back_to_placeholder_for_empty_project_name() {
        let style = StyleConfig::default();
        let content = ProposalContent::empty();
        let fragment = render_report(&content, &style, 2026);
        let doc = download_document(&fragment, &content, &style);
        assert!(doc.contains("<title>[Nome do Projeto/Produto] - FCB Advogados</title>"));
    }

    #[test]
    fn shells_are_self_contained_besides_the_font_link() {
        let (fragment, content, style) = rendered();
        for doc in [
            download_document(&fragment, &content, &style),
            print_document(&fragment, &content, &style),
        ] {
            let external_refs = doc.matches("https://").count();
            // Font link + remote logo image from the fragment header.
            assert_eq!(external_refs, 2);
        }
    }
}
