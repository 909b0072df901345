//! The proposal form: one labelled editor per content field.

use dioxus::prelude::*;
use proposta_report::ProposalContent;

/// Props for the [`FormSection`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FormSectionProps {
    /// Current content snapshot (read-only).
    content: ProposalContent,
    /// Fired with a new snapshot on every edit.
    on_change: EventHandler<ProposalContent>,
}

/// The full proposal form, grouped the way the document sections are.
///
/// Edits never mutate the incoming snapshot: each change clones it,
/// applies one field, and hands the new snapshot to `on_change`.
#[component]
#[allow(clippy::too_many_lines)]
pub fn FormSection(props: FormSectionProps) -> Element {
    // Build a per-field editor callback from a field setter. The
    // setter is a plain fn pointer so one helper serves all 14 fields.
    let edit = {
        let content = props.content.clone();
        let on_change = props.on_change;
        move |apply: fn(&mut ProposalContent, String)| {
            let content = content.clone();
            move |value: String| {
                let mut next = content.clone();
                apply(&mut next, value);
                on_change.call(next);
            }
        }
    };

    let c = &props.content;

    rsx! {
        div { class: "space-y-6",
            div { class: "space-y-4",
                h3 { class: "text-lg font-semibold text-[var(--text-heading)]",
                    "Informações Gerais"
                }
                {field_editor(
                    "nomeProjeto",
                    "Nome do Projeto/Produto",
                    "Ex: Revisão de Teses Tributárias",
                    1,
                    &c.nome_projeto,
                    edit(|c, v| c.nome_projeto = v),
                )}
                {field_editor(
                    "descricaoProjeto",
                    "Descrição do Projeto/Produto",
                    "Descrição detalhada do projeto...",
                    4,
                    &c.descricao_projeto,
                    edit(|c, v| c.descricao_projeto = v),
                )}
                {field_editor(
                    "objetivoProjeto",
                    "Objetivo do Projeto/Produto (um item por linha)",
                    "Objetivo 1\nObjetivo 2\nObjetivo 3",
                    3,
                    &c.objetivo_projeto,
                    edit(|c, v| c.objetivo_projeto = v),
                )}
            }

            div { class: "space-y-4",
                h3 { class: "text-lg font-semibold text-[var(--text-heading)]",
                    "Público-Alvo"
                }
                {field_editor(
                    "perfilCliente",
                    "Perfil do Cliente (um item por linha)",
                    "Perfil 1\nPerfil 2\nPerfil 3",
                    3,
                    &c.perfil_cliente,
                    edit(|c, v| c.perfil_cliente = v),
                )}
                {field_editor(
                    "necessidadesCliente",
                    "Necessidades Específicas do Cliente",
                    "Necessidade 1\nNecessidade 2\nNecessidade 3",
                    3,
                    &c.necessidades_cliente,
                    edit(|c, v| c.necessidades_cliente = v),
                )}
                {field_editor(
                    "setoresAtuacao",
                    "Setores de Atuação",
                    "Setor 1\nSetor 2\nSetor 3",
                    3,
                    &c.setores_atuacao,
                    edit(|c, v| c.setores_atuacao = v),
                )}
            }

            div { class: "space-y-4",
                h3 { class: "text-lg font-semibold text-[var(--text-heading)]",
                    "Detalhes do Projeto"
                }
                {field_editor(
                    "metodologia",
                    "Metodologia",
                    "Etapa 1\nEtapa 2\nEtapa 3",
                    3,
                    &c.metodologia,
                    edit(|c, v| c.metodologia = v),
                )}
                {field_editor(
                    "entregaveis",
                    "Entregáveis",
                    "Entregável 1\nEntregável 2\nEntregável 3",
                    3,
                    &c.entregaveis,
                    edit(|c, v| c.entregaveis = v),
                )}
                {field_editor(
                    "indicadoresSucesso",
                    "Indicadores de Sucesso",
                    "Indicador 1\nIndicador 2\nIndicador 3",
                    3,
                    &c.indicadores_sucesso,
                    edit(|c, v| c.indicadores_sucesso = v),
                )}
            }

            div { class: "space-y-4",
                h3 { class: "text-lg font-semibold text-[var(--text-heading)]",
                    "Benefícios para o Cliente"
                }
                {field_editor(
                    "beneficiosTangiveis",
                    "Benefícios Tangíveis",
                    "Benefício 1\nBenefício 2\nBenefício 3",
                    3,
                    &c.beneficios_tangiveis,
                    edit(|c, v| c.beneficios_tangiveis = v),
                )}
                {field_editor(
                    "beneficiosIntangiveis",
                    "Benefícios Intangíveis",
                    "Benefício 1\nBenefício 2\nBenefício 3",
                    3,
                    &c.beneficios_intangiveis,
                    edit(|c, v| c.beneficios_intangiveis = v),
                )}
            }

            div { class: "space-y-4",
                h3 { class: "text-lg font-semibold text-[var(--text-heading)]",
                    "Diferenciais Competitivos"
                }
                {field_editor(
                    "pontosFortes",
                    "Pontos Fortes",
                    "Ponto forte 1\nPonto forte 2\nPonto forte 3",
                    3,
                    &c.pontos_fortes,
                    edit(|c, v| c.pontos_fortes = v),
                )}
                {field_editor(
                    "casosSucesso",
                    "Casos de Sucesso",
                    "Caso de sucesso 1\nCaso de sucesso 2",
                    3,
                    &c.casos_sucesso,
                    edit(|c, v| c.casos_sucesso = v),
                )}
            }

            div { class: "space-y-4",
                h3 { class: "text-lg font-semibold text-[var(--text-heading)]",
                    "Aspectos Financeiros"
                }
                {field_editor(
                    "modeloPrecificacao",
                    "Modelo de Precificação",
                    "Modelo de precificação detalhado...",
                    3,
                    &c.modelo_precificacao,
                    edit(|c, v| c.modelo_precificacao = v),
                )}
            }
        }
    }
}

/// One labelled field editor: a single-line input for `rows == 1`,
/// otherwise a textarea.
fn field_editor(
    id: &str,
    label: &str,
    placeholder: &str,
    rows: u32,
    value: &str,
    on_input: impl Fn(String) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let placeholder = placeholder.to_string();
    let value = value.to_string();

    let input_class = "w-full px-3 py-2 rounded border border-[var(--border)] \
                       bg-[var(--surface)] text-[var(--text)] text-sm";

    rsx! {
        div { class: "flex flex-col gap-1",
            label { r#for: "{id}",
                class: "text-sm text-[var(--text-heading)] font-medium",
                "{label}"
            }
            if rows == 1 {
                input {
                    r#type: "text",
                    id: "{id}",
                    class: "{input_class}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |e| on_input(e.value()),
                }
            } else {
                textarea {
                    id: "{id}",
                    class: "{input_class}",
                    rows: "{rows}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |e| on_input(e.value()),
                }
            }
        }
    }
}
