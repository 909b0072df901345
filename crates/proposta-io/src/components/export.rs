//! Export panel with one action per output format, plus backup
//! import/export.
//!
//! Every action works from the snapshots passed in as props, so an
//! edit made while an export is in flight never changes what that
//! export produces. While any action runs, all buttons are disabled.

use dioxus::html::FileData;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdDatabase, LdFileCode, LdFileText, LdImage, LdPrinter, LdUpload,
};
use proposta_export::{
    artifact_filename, backup_filename, download_document, from_json, print_document, to_json,
    to_pdf,
};
use proposta_report::backup::Backup;
use proposta_report::{ProposalContent, StyleConfig, render_report};

use crate::{capture, clock, download, notify, print};

/// Props for the [`ExportPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ExportPanelProps {
    /// Content snapshot exports are produced from.
    content: ProposalContent,
    /// Style snapshot exports are produced with.
    style: StyleConfig,
    /// Fired with the parsed backup after a successful import.
    on_import: EventHandler<Backup>,
}

/// The export panel: print, PDF, PNG, HTML, and backup import/export.
#[component]
#[allow(clippy::too_many_lines)]
pub fn ExportPanel(props: ExportPanelProps) -> Element {
    // Identifier of the action in flight; `Some` disables every button.
    let mut exporting = use_signal(|| Option::<&'static str>::None);
    let busy = exporting().is_some();

    let print_click = {
        let content = props.content.clone();
        let style = props.style.clone();
        move |_| {
            let content = content.clone();
            let style = style.clone();
            async move {
                exporting.set(Some("print"));
                let fragment = render_report(&content, &style, clock::current_year());
                let html = print_document(&fragment, &content, &style);
                if let Err(e) = print::print_html(&html).await {
                    notify::report_failure("Erro ao abrir impressão", &e);
                }
                exporting.set(None);
            }
        }
    };

    let pdf_click = {
        let content = props.content.clone();
        let style = props.style.clone();
        move |_| {
            exporting.set(Some("pdf"));
            let bytes = to_pdf(&content, &style, clock::current_year());
            let name = artifact_filename(&content, "pdf");
            if let Err(e) = download::trigger_download_bytes(&bytes, &name, "application/pdf") {
                notify::report_failure("Erro ao exportar PDF", &e);
            }
            exporting.set(None);
        }
    };

    let png_click = {
        let content = props.content.clone();
        let style = props.style.clone();
        move |_| {
            let content = content.clone();
            let style = style.clone();
            async move {
                exporting.set(Some("png"));
                if let Err(e) = capture::capture_png(&content, &style, clock::current_year()).await
                {
                    notify::report_failure("Erro ao exportar PNG", &e);
                }
                exporting.set(None);
            }
        }
    };

    let html_click = {
        let content = props.content.clone();
        let style = props.style.clone();
        move |_| {
            exporting.set(Some("html"));
            let fragment = render_report(&content, &style, clock::current_year());
            let document = download_document(&fragment, &content, &style);
            let name = artifact_filename(&content, "html");
            if let Err(e) = download::trigger_download(&document, &name, "text/html") {
                notify::report_failure("Erro ao exportar HTML", &e);
            }
            exporting.set(None);
        }
    };

    let data_click = {
        let content = props.content.clone();
        let style = props.style.clone();
        move |_| {
            exporting.set(Some("data"));
            match to_json(&content, &style, clock::now_iso()) {
                Ok(json) => {
                    let name = backup_filename(&content);
                    if let Err(e) = download::trigger_download(&json, &name, "application/json") {
                        notify::report_failure("Erro ao exportar dados", &e);
                    }
                }
                Err(e) => notify::report_failure("Erro ao exportar dados", &e),
            }
            exporting.set(None);
        }
    };

    let import_change = {
        let on_import = props.on_import;
        move |evt: FormEvent| async move {
            let files: Vec<FileData> = evt.files();
            let Some(file) = files.first() else {
                return;
            };
            exporting.set(Some("import"));
            match file.read_bytes().await {
                Ok(bytes) => match String::from_utf8(bytes.to_vec()) {
                    Ok(text) => match from_json(&text) {
                        Ok(backup) => {
                            on_import.call(backup);
                            notify::alert("Dados importados com sucesso!");
                        }
                        Err(e) => notify::report_failure("Erro ao importar dados", &e),
                    },
                    Err(e) => notify::report_failure("Erro ao importar dados", &e),
                },
                Err(e) => notify::report_failure("Erro ao ler o arquivo", &e),
            }
            exporting.set(None);
        }
    };

    let button_class = if busy {
        "w-full px-4 py-2 bg-[var(--btn-disabled)] rounded text-[var(--text-disabled)] \
         cursor-not-allowed font-medium"
    } else {
        "w-full px-4 py-2 bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] rounded \
         text-white font-medium transition-colors cursor-pointer"
    };
    let card_class = "flex flex-col gap-2 p-4 rounded-lg border border-[var(--border)] \
                      bg-[var(--surface)]";

    rsx! {
        div { class: "space-y-4",
            h3 { class: "text-lg font-semibold text-[var(--text-heading)]", "Exportar" }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                div { class: "{card_class}",
                    div { class: "flex items-center gap-2 text-[var(--text-heading)]",
                        Icon { icon: LdPrinter, width: 18, height: 18 }
                        span { class: "font-medium", "Imprimir" }
                    }
                    p { class: "text-sm text-[var(--text-secondary)]",
                        "Abre o relatório em uma nova janela com o diálogo de impressão."
                    }
                    button {
                        class: "{button_class}",
                        disabled: busy,
                        onclick: print_click,
                        if exporting() == Some("print") { "Preparando..." } else { "Imprimir" }
                    }
                }

                div { class: "{card_class}",
                    div { class: "flex items-center gap-2 text-[var(--text-heading)]",
                        Icon { icon: LdFileText, width: 18, height: 18 }
                        span { class: "font-medium", "PDF" }
                    }
                    p { class: "text-sm text-[var(--text-secondary)]",
                        "Documento PDF paginado em formato A4."
                    }
                    button {
                        class: "{button_class}",
                        disabled: busy,
                        onclick: pdf_click,
                        if exporting() == Some("pdf") { "Gerando..." } else { "Exportar PDF" }
                    }
                }

                div { class: "{card_class}",
                    div { class: "flex items-center gap-2 text-[var(--text-heading)]",
                        Icon { icon: LdImage, width: 18, height: 18 }
                        span { class: "font-medium", "PNG" }
                    }
                    p { class: "text-sm text-[var(--text-secondary)]",
                        "Imagem do relatório completo em alta resolução."
                    }
                    button {
                        class: "{button_class}",
                        disabled: busy,
                        onclick: png_click,
                        if exporting() == Some("png") { "Capturando..." } else { "Exportar PNG" }
                    }
                }

                div { class: "{card_class}",
                    div { class: "flex items-center gap-2 text-[var(--text-heading)]",
                        Icon { icon: LdFileCode, width: 18, height: 18 }
                        span { class: "font-medium", "HTML" }
                    }
                    p { class: "text-sm text-[var(--text-secondary)]",
                        "Página HTML autossuficiente para compartilhar."
                    }
                    button {
                        class: "{button_class}",
                        disabled: busy,
                        onclick: html_click,
                        if exporting() == Some("html") { "Gerando..." } else { "Exportar HTML" }
                    }
                }

                div { class: "{card_class}",
                    div { class: "flex items-center gap-2 text-[var(--text-heading)]",
                        Icon { icon: LdDatabase, width: 18, height: 18 }
                        span { class: "font-medium", "Backup" }
                    }
                    p { class: "text-sm text-[var(--text-secondary)]",
                        "Salva o formulário e a formatação em JSON."
                    }
                    button {
                        class: "{button_class}",
                        disabled: busy,
                        onclick: data_click,
                        if exporting() == Some("data") { "Gerando..." } else { "Exportar Dados" }
                    }
                }

                div { class: "{card_class}",
                    div { class: "flex items-center gap-2 text-[var(--text-heading)]",
                        Icon { icon: LdUpload, width: 18, height: 18 }
                        span { class: "font-medium", "Importar" }
                    }
                    p { class: "text-sm text-[var(--text-secondary)]",
                        "Restaura um backup JSON, substituindo o conteúdo atual."
                    }
                    label {
                        class: "{button_class} text-center",
                        input {
                            r#type: "file",
                            accept: ".json",
                            class: "hidden",
                            disabled: busy,
                            onchange: import_change,
                        }
                        if exporting() == Some("import") { "Importando..." } else { "Importar Dados" }
                    }
                }
            }
        }
    }
}
