//! proposta-export: Pure format serializers (sans-IO).
//!
//! Converts a proposal snapshot into output artifacts: full HTML
//! documents (download and print shells), a paginated PDF, and the
//! JSON state backup. The shared page layout engine lives here too so
//! the PDF writer and the browser canvas capture draw the exact same
//! blocks.
//!
//! Every function in this crate returns plain `String`/`Vec<u8>` data;
//! all browser/filesystem interaction lives in `proposta-io`.

pub mod backup;
pub mod filename;
pub mod layout;
pub mod pdf;
pub mod shell;

pub use backup::{BackupError, from_json, to_json};
pub use filename::{PNG_FILENAME, artifact_filename, backup_filename, slugify};
pub use layout::{Color, Page, PageGeometry, PositionedLine, layout_document, text_width};
pub use pdf::to_pdf;
pub use shell::{download_document, print_document};
