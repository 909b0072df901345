//! proposta-report: Pure proposal data model and template renderer (sans-IO).
//!
//! Holds the two value objects the whole application revolves around
//! (the form content and the visual style) plus the pure function that
//! turns a snapshot of both into an HTML fragment.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! strings and returns structured data. All browser interaction lives
//! in `proposta-io`, and full-document/PDF serialization in
//! `proposta-export`.

pub mod backup;
pub mod content;
pub mod style;
pub mod template;

pub use backup::{BACKUP_VERSION, Backup};
pub use content::ProposalContent;
pub use style::{FONT_FAMILIES, StyleConfig};
pub use template::{
    Field, FieldMode, PLACEHOLDER, Section, TITLE_PLACEHOLDER, display_title, html_escape,
    non_blank_lines, render_report, sections,
};
