//! Live report preview.

use dioxus::prelude::*;
use proposta_report::{ProposalContent, StyleConfig, render_report};

use crate::clock;

/// Props for the [`ReportPreview`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ReportPreviewProps {
    /// Content snapshot to render.
    content: ProposalContent,
    /// Style snapshot to render with.
    style: StyleConfig,
}

/// Renders the report HTML fragment inline, exactly as the exporters
/// see it. Blank fields show their placeholder text, so the preview
/// always reflects what an export would produce.
#[component]
pub fn ReportPreview(props: ReportPreviewProps) -> Element {
    let html = render_report(&props.content, &props.style, clock::current_year());

    rsx! {
        div { class: "rounded-lg overflow-hidden shadow-lg",
            div { dangerous_inner_html: "{html}" }
        }
    }
}
