//! Paginated PDF serializer.
//!
//! Assembles a minimal PDF by writing objects directly: catalog, page
//! tree, two Type1 fonts (Helvetica / Helvetica-Bold with WinAnsi
//! encoding), and one uncompressed content stream per page. No
//! external PDF library is involved, which keeps the serializer pure
//! and WASM-friendly.
//!
//! Page content comes from the shared [`layout`](crate::layout)
//! engine, so the PDF presents exactly the blocks the canvas capture
//! draws, with the footer band stamped on every page.

use std::fmt::Write;

use proposta_report::{ProposalContent, StyleConfig};

use crate::layout::{Page, PageGeometry, layout_document};

/// Serialize the proposal as a multi-page A4 PDF.
///
/// Pure and total: layout is total, and every field falls back to its
/// placeholder, so there are no error cases.
#[must_use]
pub fn to_pdf(content: &ProposalContent, style: &StyleConfig, year: i32) -> Vec<u8> {
    let pages = layout_document(content, style, PageGeometry::A4, year);
    build_pdf(&pages)
}

/// Escape text for a PDF literal string in WinAnsi encoding.
///
/// Backslash and parentheses are escaped; Latin-1 characters outside
/// ASCII are emitted as octal escapes (WinAnsi matches Latin-1 for the
/// accented characters Portuguese needs); anything beyond U+00FF
/// degrades to `?`.
fn escape_pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            c if (c as u32) < 0x20 => out.push(' '),
            c if c.is_ascii() => out.push(c),
            c if (c as u32) <= 0xFF => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            // CP1252 punctuation living above Latin-1 in Unicode.
            '\u{2022}' => out.push_str("\\225"),
            '\u{2013}' => out.push_str("\\226"),
            '\u{2014}' => out.push_str("\\227"),
            '\u{2018}' => out.push_str("\\221"),
            '\u{2019}' => out.push_str("\\222"),
            '\u{201C}' => out.push_str("\\223"),
            '\u{201D}' => out.push_str("\\224"),
            '\u{2026}' => out.push_str("\\205"),
            _ => out.push('?'),
        }
    }
    out
}

/// Build the content stream for one page.
///
/// Layout coordinates are top-down; PDF user space is bottom-up, so
/// every `y` is flipped against the page height.
fn content_stream(page: &Page) -> String {
    let mut s = String::with_capacity(4 * 1024);

    // Footer band: filled rectangle across the bottom of the page.
    let band_height = page.height - page.footer_top;
    let _ = writeln!(
        s,
        "{:.3} {:.3} {:.3} rg",
        page.footer_color.r, page.footer_color.g, page.footer_color.b
    );
    let _ = writeln!(s, "0 0 {:.2} {band_height:.2} re f", page.width);

    for line in &page.lines {
        let font = if line.bold { "/F2" } else { "/F1" };
        let y = page.height - line.y;
        let _ = writeln!(
            s,
            "{:.3} {:.3} {:.3} rg",
            line.color.r, line.color.g, line.color.b
        );
        let _ = writeln!(
            s,
            "BT {font} {size:.2} Tf {x:.2} {y:.2} Td ({text}) Tj ET",
            size = line.size,
            x = line.x,
            text = escape_pdf_text(&line.text),
        );
    }
    s
}

/// Assemble the complete PDF file from laid-out pages.
fn build_pdf(pages: &[Page]) -> Vec<u8> {
    // Object numbering: 1 catalog, 2 page tree, 3 /F1, 4 /F2, then
    // (page, contents) pairs from 5.
    let first_page_obj = 5;
    let page_obj = |i: usize| first_page_obj + 2 * i;
    let content_obj = |i: usize| first_page_obj + 2 * i + 1;

    let kids = pages
        .iter()
        .enumerate()
        .map(|(i, _)| format!("{} 0 R", page_obj(i)))
        .collect::<Vec<_>>()
        .join(" ");

    let mut bodies: Vec<String> = Vec::with_capacity(4 + 2 * pages.len());
    bodies.push(String::from("<< /Type /Catalog /Pages 2 0 R >>"));
    bodies.push(format!(
        "<< /Type /Pages /Kids [{kids}] /Count {} >>",
        pages.len()
    ));
    bodies.push(String::from(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    ));
    bodies.push(String::from(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>",
    ));

    for (i, page) in pages.iter().enumerate() {
        bodies.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {w:.2} {h:.2}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> \
             /Contents {c} 0 R >>",
            w = page.width,
            h = page.height,
            c = content_obj(i),
        ));
        let stream = content_stream(page);
        bodies.push(format!(
            "<< /Length {} >>\nstream\n{stream}endstream",
            stream.len()
        ));
    }

    let mut out = String::with_capacity(16 * 1024);
    out.push_str("%PDF-1.4\n");

    let mut offsets = Vec::with_capacity(bodies.len());
    for (index, body) in bodies.iter().enumerate() {
        offsets.push(out.len());
        let _ = write!(out, "{} 0 obj\n{body}\nendobj\n", index + 1);
    }

    let xref_offset = out.len();
    let _ = writeln!(out, "xref\n0 {}", bodies.len() + 1);
    out.push_str("0000000000 65535 f \n");
    for offset in offsets {
        let _ = writeln!(out, "{offset:010} 00000 n ");
    }
    let _ = write!(
        out,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        bodies.len() + 1
    );

    out.into_bytes()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pdf_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn pdf_has_header_and_trailer() {
        let bytes = to_pdf(&ProposalContent::default(), &StyleConfig::default(), 2026);
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(pdf_text(&bytes).trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn escape_handles_parens_backslash_and_accents() {
        assert_eq!(escape_pdf_text("a(b)c\\d"), "a\\(b\\)c\\\\d");
        // é is U+00E9 -> octal 351 in WinAnsi.
        assert_eq!(escape_pdf_text("é"), "\\351");
        // The list bullet maps to its CP1252 slot.
        assert_eq!(escape_pdf_text("\u{2022}"), "\\225");
        // Anything unmapped degrades to '?'.
        assert_eq!(escape_pdf_text("\u{4E2D}"), "?");
    }

    #[test]
    fn default_content_produces_at_least_one_page() {
        let bytes = to_pdf(&ProposalContent::default(), &StyleConfig::default(), 2026);
        let text = pdf_text(&bytes);
        assert!(text.matches("/Type /Page ").count() >= 1);
        assert!(text.contains("/BaseFont /Helvetica"));
    }

    #[test]
    fn long_content_produces_multiple_pages_each_with_footer() {
        let mut content = ProposalContent::default();
        content.metodologia = "Etapa de trabalho detalhada do projeto.\n".repeat(120);
        let bytes = to_pdf(&content, &StyleConfig::default(), 2026);
        let text = pdf_text(&bytes);

        let page_count = text.matches("/Type /Page ").count();
        assert!(page_count > 1, "expected multiple pages, got {page_count}");

        // The footer copyright line is stamped into every content stream.
        let footer_count = text.matches("Todos os direitos reservados").count();
        assert_eq!(footer_count, page_count);
    }

    #[test]
    fn xref_entry_count_matches_objects() {
        let bytes = to_pdf(&ProposalContent::empty(), &StyleConfig::default(), 2026);
        let text = pdf_text(&bytes);
        let page_count = text.matches("/Type /Page ").count();
        let expected_objects = 4 + 2 * page_count;
        assert!(text.contains(&format!("xref\n0 {}", expected_objects + 1)));
        assert!(text.contains(&format!("/Size {}", expected_objects + 1)));
    }

    #[test]
    fn stream_flips_y_against_page_height() {
        // A line near the top of the page must land near 841.89 in PDF
        // space. The firm wordmark is the first placed line.
        let bytes = to_pdf(&ProposalContent::empty(), &StyleConfig::default(), 2026);
        let text = pdf_text(&bytes);
        let stream_start = text.find("stream\n").unwrap();
        let body = &text[stream_start..];
        assert!(body.contains("FCB Advogados"));
    }
}
