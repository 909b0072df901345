//! User-facing notifications for export/import outcomes.
//!
//! Every user-triggered action reports failure through one blocking
//! `alert` and a `console.error` entry for diagnostics; the in-memory
//! form and style state is never touched by a failed action.

use std::fmt::Display;

/// Show a blocking message to the user.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Log a failure for diagnostics and surface it to the user.
pub fn report_failure(action: &str, error: &dyn Display) {
    web_sys::console::error_1(&format!("{action}: {error}").into());
    alert(&format!("{action}. {error}"));
}
