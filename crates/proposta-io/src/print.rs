//! Direct-print flow: open the print document in a popup and trigger
//! the platform print dialog.
//!
//! The document is served to the popup via a Blob URL. After a fixed
//! settle delay (fonts and the logo image loading), the popup's
//! `print()` runs. The Blob URL is revoked on every path, success or
//! failure.

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

use crate::SETTLE_DELAY_MS;

/// Errors that can occur during the popup print flow.
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    /// `window.open` returned no window — a popup blocker intervened.
    #[error("popup blocked — allow popups for this site to print")]
    PopupBlocked,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for PrintError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Open `html` in a popup window and trigger printing after the settle
/// delay.
///
/// # Errors
///
/// Returns [`PrintError::PopupBlocked`] when the popup cannot open and
/// [`PrintError::JsError`] for any other browser API failure. The Blob
/// URL backing the popup is revoked in all cases.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Window is !Send
pub async fn print_html(html: &str) -> Result<(), PrintError> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(html));
    let opts = BlobPropertyBag::new();
    opts.set_type("text/html");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let result = open_and_print(&url).await;

    // Unconditional cleanup; the popup has its own copy of the data.
    let _ = web_sys::Url::revoke_object_url(&url);

    result
}

#[allow(clippy::future_not_send)]
async fn open_and_print(url: &str) -> Result<(), PrintError> {
    let window = web_sys::window().ok_or_else(|| PrintError::JsError("no global window".into()))?;

    let popup = window
        .open_with_url_and_target_and_features(url, "_blank", "width=800,height=1000")?
        .ok_or(PrintError::PopupBlocked)?;

    // Settle delay: let the popup load fonts and the logo before the
    // print dialog snapshots the page.
    gloo_timers::future::TimeoutFuture::new(SETTLE_DELAY_MS).await;

    popup.print()?;
    Ok(())
}
