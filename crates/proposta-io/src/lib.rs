//! proposta-io: Browser I/O and Dioxus component library.
//!
//! Handles Blob downloads, the popup print flow, offscreen canvas
//! capture, state backup import, and provides the form, styling,
//! preview, and export UI components for the proposta web application.

pub mod capture;
pub mod clock;
pub mod components;
pub mod download;
pub mod notify;
pub mod print;

pub use components::{ExportPanel, FormSection, ReportPreview, StyleControls};

/// Fixed settle delay before capture or print, in milliseconds.
///
/// Gives the popup or offscreen surface time to load fonts and images
/// before the platform facility runs.
pub const SETTLE_DELAY_MS: u32 = 1_000;
