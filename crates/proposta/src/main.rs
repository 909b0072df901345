use dioxus::prelude::*;
use proposta_io::{ExportPanel, FormSection, ReportPreview, StyleControls};
use proposta_report::backup::Backup;
use proposta_report::{ProposalContent, StyleConfig, template};

fn main() {
    dioxus::launch(app);
}

/// The four top-level views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Formulario,
    Formatacao,
    Visualizacao,
    Exportar,
}

impl Tab {
    const ALL: [Self; 4] = [
        Self::Formulario,
        Self::Formatacao,
        Self::Visualizacao,
        Self::Exportar,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Formulario => "Formulário",
            Self::Formatacao => "Formatação",
            Self::Visualizacao => "Visualização",
            Self::Exportar => "Exportar",
        }
    }
}

/// Root application component.
///
/// Holds the two state snapshots (form content and style) in Dioxus
/// signals and wires the form, style controls, preview, and export
/// panel together. A backup import replaces both snapshots wholesale.
fn app() -> Element {
    let mut content = use_signal(ProposalContent::default);
    let mut style = use_signal(StyleConfig::default);
    let mut tab = use_signal(|| Tab::Formulario);

    let on_content_change = move |next: ProposalContent| {
        content.set(next);
    };

    let on_style_change = move |next: StyleConfig| {
        style.set(next);
    };

    let on_import = move |backup: Backup| {
        content.set(backup.form_data);
        style.set(backup.formatacao);
    };

    // The preview and the exported artifacts use the configured web
    // font, so the page itself loads it.
    let font_family = style().font_family;
    let font_query = font_family.split_whitespace().collect::<Vec<_>>().join("+");
    let font_href =
        format!("https://fonts.googleapis.com/css2?family={font_query}:wght@400;500;600;700&display=swap");

    let active_view = match tab() {
        Tab::Formulario => rsx! {
            FormSection {
                content: content(),
                on_change: on_content_change,
            }
        },
        Tab::Formatacao => rsx! {
            StyleControls {
                style: style(),
                on_change: on_style_change,
            }
        },
        Tab::Visualizacao => rsx! {
            ReportPreview {
                content: content(),
                style: style(),
            }
        },
        Tab::Exportar => rsx! {
            ExportPanel {
                content: content(),
                style: style(),
                on_import: on_import,
            }
        },
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/utilities.css") }
        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        link { rel: "preconnect", href: "https://fonts.gstatic.com", crossorigin: "anonymous" }
        link { rel: "stylesheet", href: "{font_href}" }

        div { class: "min-h-screen bg-[var(--bg)] text-[var(--text)] flex flex-col",
            header { class: "px-6 py-4 border-b border-[var(--border)]",
                h1 { class: "text-2xl font-semibold text-[var(--text-heading)]",
                    "{template::FIRM_NAME}"
                }
                p { class: "text-[var(--muted)] text-sm",
                    "Gerador de relatórios de propostas comerciais"
                }
            }

            nav { class: "px-6 pt-4 flex gap-2 border-b border-[var(--border)]",
                for t in Tab::ALL {
                    button {
                        class: if tab() == t {
                            "px-4 py-2 rounded-t border-b-2 border-[var(--btn-primary)] \
                             text-[var(--text-heading)] font-medium cursor-pointer"
                        } else {
                            "px-4 py-2 rounded-t text-[var(--text-secondary)] cursor-pointer"
                        },
                        onclick: move |_| tab.set(t),
                        {t.label()}
                    }
                }
            }

            main { class: "flex-1 p-6 max-w-4xl w-full mx-auto",
                {active_view}
            }
        }
    }
}
