//! Visual styling parameters for the rendered proposal.

use serde::{Deserialize, Serialize};

/// Font families the style controls offer.
///
/// The first entry is the default. The data layer does not reject other
/// values -- an imported backup may carry any string -- but the UI only
/// ever produces one of these.
pub const FONT_FAMILIES: &[&str] = &[
    "Montserrat",
    "Lato",
    "Arial",
    "Helvetica",
    "Times New Roman",
    "Georgia",
    "Roboto",
    "Open Sans",
    "Inter",
];

/// Slider range for the body font size, in px.
pub const FONT_SIZE_RANGE: (f64, f64) = (10.0, 24.0);
/// Slider range for the header font size, in px.
pub const HEADER_FONT_SIZE_RANGE: (f64, f64) = (18.0, 36.0);
/// Slider range for the section-title font size, in px.
pub const TITLE_FONT_SIZE_RANGE: (f64, f64) = (14.0, 28.0);
/// Slider range for the line-height ratio.
pub const LINE_HEIGHT_RANGE: (f64, f64) = (1.2, 2.0);
/// Slider range for the border radius, in px.
pub const BORDER_RADIUS_RANGE: (f64, f64) = (0.0, 20.0);
/// Slider range for the spacing unit, in px (step 4).
pub const SPACING_RANGE: (f64, f64) = (12.0, 48.0);
/// Slider range for the logo size, in px (step 5).
pub const LOGO_SIZE_RANGE: (f64, f64) = (40.0, 120.0);

/// Presentation parameters controlling the rendered appearance.
///
/// All numeric ranges are enforced by the input widgets only; the data
/// layer accepts whatever an imported backup contains. Rendering is a
/// pure function of a snapshot of this struct, so out-of-range values
/// degrade the layout but never fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Font family name, normally one of [`FONT_FAMILIES`].
    pub font_family: String,
    /// Body text size in px.
    pub font_size: f64,
    /// Document header (title) size in px.
    pub header_font_size: f64,
    /// Section title size in px.
    pub title_font_size: f64,
    /// Line height as a ratio of the font size.
    pub line_height: f64,
    /// Logo size unit in px. The rendered logo is `2.5 x` this wide
    /// and `0.6 x` this tall.
    pub logo_size: f64,
    /// Primary brand color (headings, footer band), `#rrggbb`.
    pub primary_color: String,
    /// Secondary accent color (section title underline), `#rrggbb`.
    pub secondary_color: String,
    /// Document background color, `#rrggbb`.
    pub background_color: String,
    /// Body text color, `#rrggbb`.
    pub text_color: String,
    /// Container border radius in px.
    pub border_radius: f64,
    /// Spacing unit in px (section margins, content padding).
    pub spacing: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "Montserrat".into(),
            font_size: 14.0,
            header_font_size: 24.0,
            title_font_size: 18.0,
            line_height: 1.6,
            logo_size: 80.0,
            primary_color: "#2D2E60".into(),
            secondary_color: "#F56F16".into(),
            background_color: "#FFF8F0".into(),
            text_color: "#2D2E60".into(),
            border_radius: 8.0,
            spacing: 24.0,
        }
    }
}

impl StyleConfig {
    /// Rendered logo width in px.
    #[must_use]
    pub fn logo_width(&self) -> f64 {
        (self.logo_size * 2.5).round()
    }

    /// Rendered logo height in px.
    #[must_use]
    pub fn logo_height(&self) -> f64 {
        (self.logo_size * 0.6).round()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_font_is_first_allowed_family() {
        let style = StyleConfig::default();
        assert_eq!(style.font_family, FONT_FAMILIES[0]);
    }

    #[test]
    fn serde_round_trip_preserves_all_fields() {
        let style = StyleConfig::default();
        let json = serde_json::to_string(&style).unwrap();
        assert!(json.contains("\"fontFamily\""));
        assert!(json.contains("\"backgroundColor\""));
        let back: StyleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(style, back);
    }

    #[test]
    fn logo_dimensions_scale_from_logo_size() {
        let style = StyleConfig {
            logo_size: 80.0,
            ..StyleConfig::default()
        };
        assert!((style.logo_width() - 200.0).abs() < f64::EPSILON);
        assert!((style.logo_height() - 48.0).abs() < f64::EPSILON);
    }
}
