//! Page-aware text layout shared by the PDF writer and the canvas
//! capture path.
//!
//! Turns a proposal snapshot into pages of positioned text lines:
//! greedy word-wrapping with approximate per-character widths, a
//! cursor tracking the running vertical offset, and a page break
//! whenever the next line would overflow the printable height. The
//! footer band (copyright + disclaimer) is stamped on every page.
//!
//! Coordinates are top-down with the origin at the top-left corner of
//! the page; consumers that need a bottom-up system (PDF) flip `y`
//! against the page height.

use proposta_report::template::{FIRM_NAME, FOOTER_DISCLAIMER, footer_copyright};
use proposta_report::{
    FieldMode, PLACEHOLDER, ProposalContent, StyleConfig, TITLE_PLACEHOLDER, display_title,
    non_blank_lines, sections,
};

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Parse a `#rrggbb` hex string. Malformed input falls back to
    /// black so layout stays total.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Self::BLACK;
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map(|v| f64::from(v) / 255.0)
        };
        match (channel(0..2), channel(2..4), channel(4..6)) {
            (Ok(r), Ok(g), Ok(b)) => Self { r, g, b },
            _ => Self::BLACK,
        }
    }

    /// CSS `rgb(...)` form for canvas drawing.
    #[must_use]
    pub fn to_css(self) -> String {
        let to255 = |v: f64| (v * 255.0).round();
        format!("rgb({}, {}, {})", to255(self.r), to255(self.g), to255(self.b))
    }
}

/// Physical page setup for the layout engine, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width.
    pub width: f64,
    /// Page height; `None` lays the whole document out on a single
    /// tall page (used for raster capture).
    pub height: Option<f64>,
    /// Uniform page margin.
    pub margin: f64,
    /// Height reserved at the bottom of every page for the footer band.
    pub footer_height: f64,
}

impl PageGeometry {
    /// A4 portrait in PostScript points, with margins close to the
    /// 15 mm the print stylesheet uses.
    pub const A4: Self = Self {
        width: 595.28,
        height: Some(841.89),
        margin: 42.0,
        footer_height: 44.0,
    };

    /// Unbounded single-page geometry of the given width, for the
    /// offscreen raster capture.
    #[must_use]
    pub const fn tall(width: f64) -> Self {
        Self {
            width,
            height: None,
            margin: 32.0,
            footer_height: 52.0,
        }
    }
}

/// One positioned line of text, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub text: String,
    /// Distance from the left page edge.
    pub x: f64,
    /// Baseline distance from the top page edge.
    pub y: f64,
    /// Font size in points.
    pub size: f64,
    pub bold: bool,
    pub color: Color,
}

/// One laid-out page, footer band included.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    /// All text lines on the page, footer lines included.
    pub lines: Vec<PositionedLine>,
    /// Top edge of the footer band; the band spans from here to the
    /// bottom of the page.
    pub footer_top: f64,
    /// Footer band fill color (the style's primary color).
    pub footer_color: Color,
}

/// Approximate width of `text` at `size`, using per-character classes
/// tuned for Helvetica-like faces. Exact metrics are not needed: wraps
/// just have to land close to where the browser would put them.
#[must_use]
pub fn text_width(text: &str, size: f64, bold: bool) -> f64 {
    let mut units = 0.0;
    for ch in text.chars() {
        units += match ch {
            'i' | 'j' | 'l' | 't' | 'f' | 'r' | 'I' | '.' | ',' | ';' | ':' | '\'' | '|' | '!'
            | '(' | ')' | '[' | ']' => 0.35,
            'm' | 'w' | 'M' | 'W' | '@' => 0.85,
            ' ' => 0.30,
            '0'..='9' => 0.55,
            c if c.is_uppercase() => 0.70,
            _ => 0.52,
        };
    }
    let bold_factor = if bold { 1.05 } else { 1.0 };
    units * size * bold_factor
}

/// Greedy word wrap. Words that alone exceed `max_width` are emitted
/// as their own overlong line rather than split mid-word.
fn wrap(text: &str, size: f64, bold: bool, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, size, bold) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Font/spacing treatment for one kind of block.
struct BlockStyle {
    size: f64,
    bold: bool,
    color: Color,
    space_before: f64,
}

/// Page-aware cursor: accumulates lines, breaking to a new page when
/// the next line would cross into the footer reservation.
struct PageCursor {
    geometry: PageGeometry,
    finished: Vec<Vec<PositionedLine>>,
    current: Vec<PositionedLine>,
    y: f64,
}

impl PageCursor {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            finished: Vec::new(),
            current: Vec::new(),
            y: geometry.margin,
        }
    }

    /// Bottom of the printable area for bounded pages.
    fn printable_bottom(&self) -> Option<f64> {
        self.geometry
            .height
            .map(|h| h - self.geometry.footer_height - self.geometry.margin / 2.0)
    }

    fn advance(&mut self, amount: f64) {
        self.y += amount;
    }

    /// Place one line, breaking the page first if it would overflow.
    /// A line taller than a whole page is still placed (at the top of
    /// a fresh page) so layout always terminates.
    fn place(&mut self, text: String, x: f64, style: &BlockStyle, leading: f64) {
        if let Some(bottom) = self.printable_bottom()
            && self.y + leading > bottom
            && !self.current.is_empty()
        {
            self.break_page();
        }
        self.y += leading;
        self.current.push(PositionedLine {
            text,
            x,
            y: self.y,
            size: style.size,
            bold: style.bold,
            color: style.color,
        });
    }

    fn break_page(&mut self) {
        self.finished.push(std::mem::take(&mut self.current));
        self.y = self.geometry.margin;
    }

    fn into_pages(mut self, footer: &FooterText, footer_color: Color) -> Vec<Page> {
        self.finished.push(std::mem::take(&mut self.current));
        let content_end = self.y;
        let geometry = self.geometry;

        self.finished
            .into_iter()
            .map(|mut lines| {
                let height = geometry.height.unwrap_or_else(|| {
                    // Tall single page: close the page just below the
                    // last content line.
                    content_end + geometry.margin / 2.0 + geometry.footer_height
                });
                let footer_top = height - geometry.footer_height;
                lines.extend(footer.lines(geometry.width, footer_top, geometry.footer_height));
                Page {
                    width: geometry.width,
                    height,
                    lines,
                    footer_top,
                    footer_color,
                }
            })
            .collect()
    }
}

/// The two centered white footer lines.
struct FooterText {
    copyright: String,
    disclaimer: String,
}

impl FooterText {
    const SIZE: f64 = 8.5;

    fn lines(&self, page_width: f64, footer_top: f64, footer_height: f64) -> Vec<PositionedLine> {
        let center = |text: &str| (page_width - text_width(text, Self::SIZE, false)) / 2.0;
        let first_baseline = footer_top + footer_height / 2.0 - 2.0;
        vec![
            PositionedLine {
                text: self.copyright.clone(),
                x: center(&self.copyright),
                y: first_baseline,
                size: Self::SIZE,
                bold: false,
                color: Color::WHITE,
            },
            PositionedLine {
                text: self.disclaimer.clone(),
                x: center(&self.disclaimer),
                y: first_baseline + Self::SIZE * 1.4,
                size: Self::SIZE,
                bold: false,
                color: Color::WHITE,
            },
        ]
    }
}

/// Lay the proposal out as discrete text blocks over one or more
/// pages.
///
/// Follows the same fixed section structure as the HTML template
/// ([`sections`]) with the same placeholder fallbacks, so every export
/// format presents identical content.
#[must_use]
pub fn layout_document(
    content: &ProposalContent,
    style: &StyleConfig,
    geometry: PageGeometry,
    year: i32,
) -> Vec<Page> {
    let primary = Color::from_hex(&style.primary_color);
    let body_color = Color::from_hex(&style.text_color);

    // Point sizes derived from the px-based style values; 0.75 is the
    // CSS px -> pt ratio.
    let scale = 0.75;
    let title_style = BlockStyle {
        size: style.header_font_size * scale,
        bold: true,
        color: primary,
        space_before: 0.0,
    };
    let section_style = BlockStyle {
        size: style.title_font_size * scale,
        bold: true,
        color: primary,
        space_before: style.spacing * scale * 0.8,
    };
    let label_style = BlockStyle {
        size: style.font_size * scale,
        bold: true,
        color: primary,
        space_before: 9.0,
    };
    let body_style = BlockStyle {
        size: style.font_size * scale,
        bold: false,
        color: body_color,
        space_before: 2.0,
    };

    let max_width = geometry.width - 2.0 * geometry.margin;
    let mut cursor = PageCursor::new(geometry);

    // Header: firm wordmark right-aligned, then the uppercase title.
    // The programmatic exporters draw the wordmark as text instead of
    // fetching the remote logo image.
    let wordmark_size = 11.0;
    let wordmark_x =
        geometry.width - geometry.margin - text_width(FIRM_NAME, wordmark_size, true);
    cursor.place(
        FIRM_NAME.to_string(),
        wordmark_x,
        &BlockStyle {
            size: wordmark_size,
            bold: true,
            color: primary,
            space_before: 0.0,
        },
        wordmark_size * 1.2,
    );
    cursor.advance(6.0);

    let title = display_title(content).to_uppercase();
    place_block(
        &mut cursor,
        &title,
        &title_style,
        geometry.margin,
        max_width,
        style.line_height,
    );
    cursor.advance(10.0);

    // The six fixed sections.
    for section in sections(content) {
        cursor.advance(section_style.space_before);
        place_block(
            &mut cursor,
            section.title,
            &section_style,
            geometry.margin,
            max_width,
            style.line_height,
        );
        for field in &section.fields {
            cursor.advance(label_style.space_before);
            place_block(
                &mut cursor,
                field.label,
                &label_style,
                geometry.margin + 8.0,
                max_width - 8.0,
                style.line_height,
            );

            let indent = geometry.margin + 16.0;
            let item_width = max_width - 16.0;
            let lines = non_blank_lines(field.text);
            match field.mode {
                FieldMode::Inline => {
                    let text = if lines.is_empty() {
                        TITLE_PLACEHOLDER
                    } else {
                        field.text.trim()
                    };
                    cursor.advance(body_style.space_before);
                    place_block(
                        &mut cursor,
                        text,
                        &body_style,
                        indent,
                        item_width,
                        style.line_height,
                    );
                }
                FieldMode::List | FieldMode::Paragraphs => {
                    if lines.is_empty() {
                        cursor.advance(body_style.space_before);
                        place_block(
                            &mut cursor,
                            PLACEHOLDER,
                            &body_style,
                            indent,
                            item_width,
                            style.line_height,
                        );
                    } else {
                        for line in lines {
                            let text = if field.mode == FieldMode::List {
                                format!("\u{2022} {line}")
                            } else {
                                line.to_string()
                            };
                            cursor.advance(body_style.space_before);
                            place_block(
                                &mut cursor,
                                &text,
                                &body_style,
                                indent,
                                item_width,
                                style.line_height,
                            );
                        }
                    }
                }
            }
        }
    }

    let footer = FooterText {
        copyright: footer_copyright(year),
        disclaimer: FOOTER_DISCLAIMER.to_string(),
    };
    cursor.into_pages(&footer, primary)
}

/// Wrap `text` and place every resulting line at the same left edge.
fn place_block(
    cursor: &mut PageCursor,
    text: &str,
    style: &BlockStyle,
    x: f64,
    max_width: f64,
    line_height: f64,
) {
    let leading = style.size * line_height;
    for line in wrap(text, style.size, style.bold, max_width) {
        cursor.place(line, x, style, leading);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn defaults() -> (ProposalContent, StyleConfig) {
        (ProposalContent::default(), StyleConfig::default())
    }

    // --- Color ---

    #[test]
    fn color_parses_hex() {
        let c = Color::from_hex("#FF8000");
        assert!((c.r - 1.0).abs() < 1e-9);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-9);
        assert!((c.b - 0.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_hex_falls_back_to_black() {
        assert_eq!(Color::from_hex("#xyz"), Color::BLACK);
        assert_eq!(Color::from_hex(""), Color::BLACK);
    }

    #[test]
    fn color_to_css_round_numbers() {
        assert_eq!(Color::WHITE.to_css(), "rgb(255, 255, 255)");
    }

    // --- wrapping ---

    #[test]
    fn wrap_respects_max_width() {
        let lines = wrap("alpha beta gamma delta epsilon", 12.0, false, 80.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 12.0, false) <= 80.0);
        }
    }

    #[test]
    fn wrap_emits_overlong_single_word_unsplit() {
        let word = "x".repeat(200);
        let lines = wrap(&word, 12.0, false, 50.0);
        assert_eq!(lines, vec![word]);
    }

    #[test]
    fn wrap_empty_text_produces_no_lines() {
        assert!(wrap("   ", 12.0, false, 100.0).is_empty());
    }

    // --- pagination ---

    #[test]
    fn default_content_fits_layout_without_panic() {
        let (content, style) = defaults();
        let pages = layout_document(&content, &style, PageGeometry::A4, 2026);
        assert!(!pages.is_empty());
        for page in &pages {
            assert!(!page.lines.is_empty());
        }
    }

    #[test]
    fn long_content_overflows_to_multiple_pages() {
        let (mut content, style) = defaults();
        content.metodologia = "Etapa detalhada do processo de trabalho.\n".repeat(80);
        let pages = layout_document(&content, &style, PageGeometry::A4, 2026);
        assert!(pages.len() > 1, "expected overflow, got {} page", pages.len());
    }

    #[test]
    fn every_page_carries_footer_text() {
        let (mut content, style) = defaults();
        content.entregaveis = "Entregável de exemplo para forçar paginação.\n".repeat(100);
        let pages = layout_document(&content, &style, PageGeometry::A4, 2027);
        assert!(pages.len() > 1);
        for page in &pages {
            assert!(
                page.lines.iter().any(|l| l.text.contains("© 2027")),
                "page missing copyright footer"
            );
            assert!(
                page.lines
                    .iter()
                    .any(|l| l.text.contains("aconselhamento jurídico")),
                "page missing disclaimer footer"
            );
        }
    }

    #[test]
    fn content_lines_never_cross_the_footer_band() {
        let (mut content, style) = defaults();
        content.pontos_fortes = "Ponto forte repetido para paginação.\n".repeat(120);
        let pages = layout_document(&content, &style, PageGeometry::A4, 2026);
        for page in &pages {
            for line in page.lines.iter().filter(|l| l.color != Color::WHITE) {
                assert!(line.y <= page.footer_top, "content line inside footer band");
            }
        }
    }

    #[test]
    fn tall_geometry_yields_single_page() {
        let (mut content, style) = defaults();
        content.metodologia = "Etapa.\n".repeat(200);
        let pages = layout_document(&content, &style, PageGeometry::tall(800.0), 2026);
        assert_eq!(pages.len(), 1);
        let page = &pages[0];
        assert!(page.height > 800.0);
        assert!(page.footer_top < page.height);
    }

    #[test]
    fn empty_fields_lay_out_placeholders() {
        let style = StyleConfig::default();
        let pages = layout_document(&ProposalContent::empty(), &style, PageGeometry::A4, 2026);
        let all_text: String = pages
            .iter()
            .flat_map(|p| p.lines.iter())
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(all_text.contains(PLACEHOLDER));
        assert!(all_text.contains(TITLE_PLACEHOLDER.to_uppercase().as_str()));
    }
}
