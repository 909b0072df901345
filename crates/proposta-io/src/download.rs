//! File download via Blob URLs.
//!
//! Dioxus has no built-in file download API.  This module triggers
//! downloads by creating a `Blob`, generating an object URL, and
//! programmatically clicking a temporary `<a>` element.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Trigger a text-file download in the browser.
///
/// Creates a `Blob` from `data`, generates an object URL, and
/// programmatically clicks a temporary `<a download="filename">`
/// element.  The object URL is revoked after the click.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails
/// (e.g., `Blob` creation, `URL.createObjectURL`, element creation).
pub fn trigger_download(data: &str, filename: &str, mime_type: &str) -> Result<(), DownloadError> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(data));

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    download_blob(&blob, filename)
}

/// Trigger a binary-file download (PDF bytes) in the browser.
///
/// Same flow as [`trigger_download`], with the Blob built from a
/// `Uint8Array` instead of a string.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails.
pub fn trigger_download_bytes(
    data: &[u8],
    filename: &str,
    mime_type: &str,
) -> Result<(), DownloadError> {
    let uint8_array = js_sys::Uint8Array::from(data);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;
    download_blob(&blob, filename)
}

/// Trigger a download of a pre-encoded URL (e.g. a canvas data URL).
///
/// No object URL is created, so there is nothing to revoke.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if element creation or insertion
/// fails.
pub fn trigger_download_url(url: &str, filename: &str) -> Result<(), DownloadError> {
    click_anchor(url, filename)?;
    Ok(())
}

fn download_blob(blob: &web_sys::Blob, filename: &str) -> Result<(), DownloadError> {
    let url = web_sys::Url::create_object_url_with_blob(blob)?;

    let result = click_anchor(&url, filename);

    // Best-effort cleanup — if the click succeeded the download is
    // already initiated, and a revoke failure should not be reported
    // as "download failed".
    let _ = web_sys::Url::revoke_object_url(&url);

    result
}

/// Create a temporary `<a href download>` element, click it, remove it.
fn click_anchor(href: &str, filename: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(href);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    Ok(())
}
