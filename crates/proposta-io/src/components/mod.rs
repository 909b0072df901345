//! Dioxus UI components for proposta.
//!
//! Provides the proposal form, the style controls, the live report
//! preview, and the export panel with its backup import control.

mod export;
mod form;
mod preview;
mod style_controls;

pub use export::ExportPanel;
pub use form::FormSection;
pub use preview::ReportPreview;
pub use style_controls::StyleControls;
