//! The proposal template: fixed document structure and HTML fragment
//! renderer.
//!
//! The document structure (six numbered sections, each a list of
//! labelled fields in list or paragraph mode) is expressed once as
//! data via [`sections`], so the HTML renderer here and the page
//! layout in `proposta-export` share the same splitting and fallback
//! policy instead of duplicating it per output format.
//!
//! [`render_report`] is a pure, total function: every field has a
//! fallback placeholder, so there are no error cases. All style values
//! are injected as inline `style` attributes, which keeps every
//! exported artifact self-contained.

use std::fmt::Write;

use crate::content::ProposalContent;
use crate::style::StyleConfig;

/// Placeholder emitted for empty list/paragraph fields.
pub const PLACEHOLDER: &str = "[Conteúdo não informado]";

/// Placeholder emitted for an empty project name.
pub const TITLE_PLACEHOLDER: &str = "[Nome do Projeto/Produto]";

/// Firm wordmark used in the header and footer.
pub const FIRM_NAME: &str = "FCB Advogados";

/// Remote logo image for the HTML header. The `<img>` carries an
/// `onerror` handler that hides it, so an offline artifact degrades to
/// the title alone.
pub const LOGO_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/FCB_fundo%20transparente_assinatura_imagem_AL-DVzHiQaovpgYD4mSDbNfetuSDMyE2e.png";

/// Footer disclaimer line, stamped on every exported page.
pub const FOOTER_DISCLAIMER: &str =
    "Este material é informativo e não constitui aconselhamento jurídico.";

/// Footer copyright line for the given year.
#[must_use]
pub fn footer_copyright(year: i32) -> String {
    format!("© {year} {FIRM_NAME}. Todos os direitos reservados.")
}

/// How a field's text is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    /// Single inline paragraph; empty falls back to [`TITLE_PLACEHOLDER`].
    Inline,
    /// One `<li>` per non-blank line; empty falls back to [`PLACEHOLDER`].
    List,
    /// One `<p>` per non-blank line; empty falls back to [`PLACEHOLDER`].
    Paragraphs,
}

/// A labelled field within a section.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    /// Bold label shown above the field text, with trailing colon.
    pub label: &'static str,
    /// The raw field text from the form.
    pub text: &'a str,
    /// Presentation mode.
    pub mode: FieldMode,
}

/// A numbered document section.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    /// Uppercase numbered title, e.g. `"1. INFORMAÇÕES GERAIS DO PRODUTO"`.
    pub title: &'static str,
    /// Fields in display order.
    pub fields: Vec<Field<'a>>,
}

/// The fixed document structure over a content snapshot.
///
/// Section order and field assignment never vary; only the borrowed
/// text changes with the snapshot.
#[must_use]
pub fn sections(content: &ProposalContent) -> Vec<Section<'_>> {
    use FieldMode::{Inline, List, Paragraphs};

    let field = |label, text, mode| Field { label, text, mode };

    vec![
        Section {
            title: "1. INFORMAÇÕES GERAIS DO PRODUTO",
            fields: vec![
                field("Nome do Projeto/Produto:", &content.nome_projeto, Inline),
                field(
                    "Descrição do Projeto/Produto:",
                    &content.descricao_projeto,
                    Paragraphs,
                ),
                field("Objetivo do Projeto/Produto:", &content.objetivo_projeto, List),
            ],
        },
        Section {
            title: "2. PÚBLICO-ALVO",
            fields: vec![
                field("Perfil do Cliente:", &content.perfil_cliente, List),
                field(
                    "Necessidades Específicas do Cliente:",
                    &content.necessidades_cliente,
                    List,
                ),
                field("Setores de Atuação:", &content.setores_atuacao, List),
            ],
        },
        Section {
            title: "3. DETALHES DO PROJETO",
            fields: vec![
                field("Metodologia:", &content.metodologia, List),
                field("Entregáveis:", &content.entregaveis, List),
                field("Indicadores de Sucesso:", &content.indicadores_sucesso, List),
            ],
        },
        Section {
            title: "4. BENEFÍCIOS PARA O CLIENTE",
            fields: vec![
                field("Benefícios Tangíveis:", &content.beneficios_tangiveis, List),
                field(
                    "Benefícios Intangíveis:",
                    &content.beneficios_intangiveis,
                    List,
                ),
            ],
        },
        Section {
            title: "5. DIFERENCIAIS COMPETITIVOS",
            fields: vec![
                field("Pontos Fortes:", &content.pontos_fortes, List),
                field("Casos de Sucesso:", &content.casos_sucesso, Paragraphs),
            ],
        },
        Section {
            title: "6. ASPECTOS FINANCEIROS",
            fields: vec![field(
                "Modelo de Precificação:",
                &content.modelo_precificacao,
                Paragraphs,
            )],
        },
    ]
}

/// Split a multi-line field into its presentational items: one per
/// line, trimmed, blank lines dropped.
#[must_use]
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Escape the five HTML special characters for safe embedding in
/// element text content and attribute values.
///
/// Handles `&` (must be first), `<`, `>`, `"`, and `'`.
#[must_use]
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// The project title with its fallback applied, unescaped.
#[must_use]
pub fn display_title(content: &ProposalContent) -> &str {
    if content.nome_projeto.trim().is_empty() {
        TITLE_PLACEHOLDER
    } else {
        &content.nome_projeto
    }
}

/// Render one field body (without its label) as an HTML snippet.
fn render_field_body(field: &Field<'_>) -> String {
    let lines = non_blank_lines(field.text);

    match field.mode {
        FieldMode::Inline => {
            let text = if lines.is_empty() {
                TITLE_PLACEHOLDER.to_string()
            } else {
                html_escape(field.text.trim())
            };
            format!("<p style=\"margin: 0 0 12px 0;\">{text}</p>")
        }
        FieldMode::List => {
            if lines.is_empty() {
                return format!("<p>{PLACEHOLDER}</p>");
            }
            let mut out = String::from(
                "<ul style=\"list-style-type: disc; padding-left: 20px; margin: 8px 0;\">",
            );
            for line in lines {
                let _ = write!(
                    out,
                    "<li style=\"margin: 4px 0;\">{}</li>",
                    html_escape(line)
                );
            }
            out.push_str("</ul>");
            out
        }
        FieldMode::Paragraphs => {
            if lines.is_empty() {
                return format!("<p>{PLACEHOLDER}</p>");
            }
            let mut out = String::new();
            for line in lines {
                let _ = write!(
                    out,
                    "<p style=\"margin: 8px 0;\">{}</p>",
                    html_escape(line)
                );
            }
            out
        }
    }
}

/// Render the proposal as a self-contained HTML fragment.
///
/// Pure and total: safe to call repeatedly from the live preview and
/// every export path. `year` feeds the footer copyright line (the
/// caller supplies it so this crate stays clock-free).
#[must_use]
pub fn render_report(content: &ProposalContent, style: &StyleConfig, year: i32) -> String {
    let mut out = String::with_capacity(8 * 1024);

    let _ = write!(
        out,
        "<div style=\"font-family: {font}, sans-serif; font-size: {body}px; \
         line-height: {lh}; color: {text}; background-color: {bg}; overflow: hidden;\">",
        font = style.font_family,
        body = style.font_size,
        lh = style.line_height,
        text = style.text_color,
        bg = style.background_color,
    );

    // Header: uppercase title left, logo pinned top-right.
    let _ = write!(
        out,
        "<header style=\"padding: 24px; position: relative; background-color: #f5f5f5;\">\
         <div style=\"display: flex; justify-content: space-between; align-items: flex-start; \
         margin-bottom: 12px;\">\
         <div style=\"width: 66%; padding-right: 16px;\">\
         <h1 style=\"font-size: {header}px; color: {primary}; font-weight: bold; \
         text-transform: uppercase; text-align: left; margin: 0;\">{title}</h1>\
         </div>\
         <div style=\"position: absolute; top: 16px; right: 16px;\">\
         <img src=\"{logo}\" alt=\"{firm}\" \
         style=\"width: {lw}px; height: {lhpx}px; object-fit: contain;\" \
         onerror=\"this.style.display='none'\"/>\
         </div></div></header>",
        header = style.header_font_size,
        primary = style.primary_color,
        title = html_escape(display_title(content)),
        logo = LOGO_URL,
        firm = FIRM_NAME,
        lw = style.logo_width(),
        lhpx = style.logo_height(),
    );

    // Content: the six fixed sections.
    let _ = write!(out, "<div style=\"padding: {}px;\">", style.spacing);
    for section in sections(content) {
        let _ = write!(
            out,
            "<section style=\"margin-bottom: {spacing}px;\">\
             <h2 style=\"font-size: {title_size}px; color: {primary}; font-weight: bold; \
             margin-bottom: 12px; padding-bottom: 8px; \
             border-bottom: 2px solid {secondary};\">{title}</h2>\
             <div style=\"margin-left: 16px;\">",
            spacing = style.spacing,
            title_size = style.title_font_size,
            primary = style.primary_color,
            secondary = style.secondary_color,
            title = section.title,
        );
        for (i, field) in section.fields.iter().enumerate() {
            let top_margin = if i == 0 { "" } else { " margin-top: 12px;" };
            let _ = write!(
                out,
                "<h4 style=\"font-weight: 600; margin-bottom: 4px;{top_margin} \
                 color: {primary};\">{label}</h4>{body}",
                primary = style.primary_color,
                label = field.label,
                body = render_field_body(field),
            );
        }
        out.push_str("</div></section>");
    }
    out.push_str("</div>");

    // Footer: copyright + disclaimer on the primary color band.
    let _ = write!(
        out,
        "<footer style=\"text-align: center; padding: 16px; background-color: {primary}; \
         color: white; font-size: 12px;\">\
         <p style=\"margin: 0 0 4px 0;\">{copyright}</p>\
         <p style=\"margin: 0;\">{disclaimer}</p>\
         </footer></div>",
        primary = style.primary_color,
        copyright = footer_copyright(year),
        disclaimer = FOOTER_DISCLAIMER,
    );

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn defaults() -> (ProposalContent, StyleConfig) {
        (ProposalContent::default(), StyleConfig::default())
    }

    // --- non_blank_lines ---

    #[test]
    fn non_blank_lines_trims_and_drops_blanks() {
        let lines = non_blank_lines("  a  \n\n b\n   \nc");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn non_blank_lines_of_whitespace_only_is_empty() {
        assert!(non_blank_lines("  \n \n").is_empty());
    }

    // --- html_escape ---

    #[test]
    fn html_escape_handles_all_special_characters() {
        assert_eq!(
            html_escape(r#"<b>"R&D" 'x'</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot; &#39;x&#39;&lt;/b&gt;"
        );
    }

    // --- placeholders ---

    #[test]
    fn empty_list_field_renders_placeholder_not_empty_fragment() {
        let (mut content, style) = defaults();
        content.metodologia = String::new();
        let html = render_report(&content, &style, 2026);
        assert!(html.contains(PLACEHOLDER));
    }

    #[test]
    fn whitespace_only_field_renders_placeholder() {
        let (mut content, style) = defaults();
        content.casos_sucesso = "  \n \n ".into();
        let html = render_report(&content, &style, 2026);
        assert!(html.contains(PLACEHOLDER));
    }

    #[test]
    fn empty_project_name_uses_title_placeholder() {
        let (mut content, style) = defaults();
        content.nome_projeto = String::new();
        let html = render_report(&content, &style, 2026);
        assert!(html.contains(TITLE_PLACEHOLDER));
    }

    #[test]
    fn populated_document_has_no_placeholders() {
        let (content, style) = defaults();
        let html = render_report(&content, &style, 2026);
        assert!(!html.contains(PLACEHOLDER));
        assert!(!html.contains(TITLE_PLACEHOLDER));
    }

    // --- list / paragraph splitting ---

    #[test]
    fn list_item_count_matches_non_blank_lines() {
        let (mut content, style) = defaults();
        content.objetivo_projeto = "um\n\ndois\n  \ntrês".into();
        let html = render_report(&content, &style, 2026);
        let expected = 3;
        // Count only the list items for this field's value.
        assert!(html.contains("<li style=\"margin: 4px 0;\">um</li>"));
        assert!(html.contains("<li style=\"margin: 4px 0;\">três</li>"));
        let count = html.matches("<li style=\"margin: 4px 0;\">um</li>").count()
            + html.matches("<li style=\"margin: 4px 0;\">dois</li>").count()
            + html.matches("<li style=\"margin: 4px 0;\">três</li>").count();
        assert_eq!(count, expected);
    }

    #[test]
    fn paragraph_mode_emits_one_p_per_line() {
        let field = Field {
            label: "x",
            text: "primeiro caso\nsegundo caso\n\n",
            mode: FieldMode::Paragraphs,
        };
        let body = render_field_body(&field);
        assert_eq!(body.matches("<p style=\"margin: 8px 0;\">").count(), 2);
    }

    #[test]
    fn list_mode_escapes_user_text() {
        let field = Field {
            label: "x",
            text: "a < b & c",
            mode: FieldMode::List,
        };
        let body = render_field_body(&field);
        assert!(body.contains("a &lt; b &amp; c"));
        assert!(!body.contains("a < b"));
    }

    // --- fixed structure ---

    #[test]
    fn all_six_sections_render_in_order() {
        let (content, style) = defaults();
        let html = render_report(&content, &style, 2026);
        let mut last = 0;
        for section in sections(&content) {
            let pos = html.find(section.title).unwrap();
            assert!(pos > last, "section {} out of order", section.title);
            last = pos;
        }
    }

    #[test]
    fn footer_carries_year_and_disclaimer() {
        let (content, style) = defaults();
        let html = render_report(&content, &style, 2031);
        assert!(html.contains("© 2031 FCB Advogados"));
        assert!(html.contains(FOOTER_DISCLAIMER));
    }

    #[test]
    fn style_values_appear_as_inline_attributes() {
        let (content, mut style) = defaults();
        style.font_size = 17.0;
        style.primary_color = "#123456".into();
        style.background_color = "#ABCDEF".into();
        let html = render_report(&content, &style, 2026);
        assert!(html.contains("font-size: 17px"));
        assert!(html.contains("color: #123456"));
        assert!(html.contains("background-color: #ABCDEF"));
        assert!(!html.contains("<style"));
    }

    #[test]
    fn title_is_rendered_uppercase_via_css() {
        let (content, style) = defaults();
        let html = render_report(&content, &style, 2026);
        assert!(html.contains("text-transform: uppercase"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let (content, style) = defaults();
        assert_eq!(
            render_report(&content, &style, 2026),
            render_report(&content, &style, 2026)
        );
    }
}
