//! Rasterized image export via an offscreen canvas.
//!
//! The report is laid out by the shared layout engine as one tall
//! page, drawn onto a hidden `<canvas>` scaled by `devicePixelRatio`,
//! and captured with `toDataURL("image/png")`. The canvas is owned by
//! an RAII guard, so it is removed from the document on every path --
//! success or error.

use proposta_export::layout::{Page, PageGeometry, layout_document};
use proposta_export::{Color, PNG_FILENAME};
use proposta_report::{ProposalContent, StyleConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::SETTLE_DELAY_MS;
use crate::download::{self, DownloadError};

/// CSS-pixel width of the captured document.
const CAPTURE_WIDTH: f64 = 800.0;

/// Errors that can occur during canvas capture.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// A browser API call returned an error or a required object was
    /// missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for CaptureError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<DownloadError> for CaptureError {
    fn from(value: DownloadError) -> Self {
        Self::JsError(value.to_string())
    }
}

/// A hidden canvas appended to the document body, removed on drop.
///
/// The guard owns teardown so an early `?` return cannot leak the
/// element into the page.
struct OffscreenCanvas {
    canvas: HtmlCanvasElement,
}

impl OffscreenCanvas {
    fn new(css_width: f64, css_height: f64, scale: f64) -> Result<Self, CaptureError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CaptureError::JsError("no document".into()))?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|e| CaptureError::JsError(format!("failed to cast element: {e:?}")))?;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            canvas.set_width((css_width * scale).round() as u32);
            canvas.set_height((css_height * scale).round() as u32);
        }

        // Park it off screen rather than display:none — some browsers
        // skip font work for non-rendered elements.
        canvas
            .style()
            .set_property("position", "fixed")
            .and_then(|()| canvas.style().set_property("left", "-10000px"))
            .and_then(|()| canvas.style().set_property("top", "0"))?;

        let body = document
            .body()
            .ok_or_else(|| CaptureError::JsError("no document body".into()))?;
        body.append_child(&canvas)?;

        Ok(Self { canvas })
    }

    fn context_2d(&self) -> Result<CanvasRenderingContext2d, CaptureError> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| CaptureError::JsError("no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| CaptureError::JsError(format!("failed to cast context: {e:?}")))
    }

    fn to_png_data_url(&self) -> Result<String, CaptureError> {
        Ok(self.canvas.to_data_url_with_type("image/png")?)
    }
}

impl Drop for OffscreenCanvas {
    fn drop(&mut self) {
        self.canvas.remove();
    }
}

/// Capture the report as a PNG and trigger its download.
///
/// # Errors
///
/// Returns [`CaptureError::JsError`] if canvas creation, drawing, or
/// the download itself fails. The offscreen canvas is torn down in
/// every case.
#[allow(clippy::future_not_send)] // WASM is single-threaded; canvas is !Send
pub async fn capture_png(content: &ProposalContent, style: &StyleConfig, year: i32) -> Result<(), CaptureError> {
    let pages = layout_document(content, style, PageGeometry::tall(CAPTURE_WIDTH), year);
    let Some(page) = pages.first() else {
        return Err(CaptureError::JsError("layout produced no pages".into()));
    };

    let scale = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio()).max(1.0);

    let surface = OffscreenCanvas::new(page.width, page.height, scale)?;
    let ctx = surface.context_2d()?;
    ctx.scale(scale, scale)?;

    // Settle delay before drawing so the configured web font, loaded
    // by the page itself, is available to the canvas.
    gloo_timers::future::TimeoutFuture::new(SETTLE_DELAY_MS).await;

    draw_page(&ctx, page, style)?;
    let url = surface.to_png_data_url()?;
    download::trigger_download_url(&url, PNG_FILENAME)?;
    Ok(())
}

/// Draw one laid-out page: background, footer band, then text lines.
fn draw_page(
    ctx: &CanvasRenderingContext2d,
    page: &Page,
    style: &StyleConfig,
) -> Result<(), CaptureError> {
    ctx.set_fill_style_str(&Color::from_hex(&style.background_color).to_css());
    ctx.fill_rect(0.0, 0.0, page.width, page.height);

    ctx.set_fill_style_str(&page.footer_color.to_css());
    ctx.fill_rect(0.0, page.footer_top, page.width, page.height - page.footer_top);

    for line in &page.lines {
        let weight = if line.bold { "bold" } else { "400" };
        ctx.set_font(&format!(
            "{weight} {size}px {family}, sans-serif",
            size = line.size,
            family = style.font_family,
        ));
        ctx.set_fill_style_str(&line.color.to_css());
        ctx.fill_text(&line.text, line.x, line.y)?;
    }
    Ok(())
}
