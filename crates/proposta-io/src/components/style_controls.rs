//! Style parameter controls.
//!
//! Renders the font select, the size/spacing sliders, and the color
//! pickers. Every change produces a fresh [`StyleConfig`] snapshot via
//! the `on_change` callback.

use dioxus::prelude::*;
use proposta_report::style::{
    BORDER_RADIUS_RANGE, FONT_FAMILIES, FONT_SIZE_RANGE, HEADER_FONT_SIZE_RANGE,
    LINE_HEIGHT_RANGE, LOGO_SIZE_RANGE, SPACING_RANGE, TITLE_FONT_SIZE_RANGE,
};
use proposta_report::StyleConfig;

/// Props for the [`StyleControls`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StyleControlsProps {
    /// Current style configuration (read-only).
    style: StyleConfig,
    /// Callback fired when any parameter changes.
    on_change: EventHandler<StyleConfig>,
}

/// Renders the full set of style controls: typography, dimensions, and
/// colors.
#[component]
#[allow(clippy::too_many_lines)]
pub fn StyleControls(props: StyleControlsProps) -> Element {
    let style = &props.style;
    let on_change = props.on_change;

    let style_family = style.clone();
    let style_font = style.clone();
    let style_header = style.clone();
    let style_title = style.clone();
    let style_line = style.clone();
    let style_radius = style.clone();
    let style_spacing = style.clone();
    let style_logo = style.clone();
    let style_primary = style.clone();
    let style_secondary = style.clone();
    let style_background = style.clone();
    let style_text = style.clone();

    let font_options: Vec<(&str, &str)> =
        FONT_FAMILIES.iter().map(|f| (*f, *f)).collect();

    rsx! {
        div { class: "space-y-6",
            div { class: "space-y-2",
                h3 { class: "text-lg font-semibold text-[var(--text-heading)]",
                    "Tipografia"
                }
                {render_select(
                    "font_family",
                    "Fonte",
                    &font_options,
                    &style.font_family,
                    move |v: String| {
                        let mut s = style_family.clone();
                        s.font_family = v;
                        on_change.call(s);
                    },
                )}
                {render_slider(
                    "font_size",
                    "Tamanho do Texto (px)",
                    style.font_size,
                    FONT_SIZE_RANGE.0,
                    FONT_SIZE_RANGE.1,
                    1.0,
                    0,
                    move |v: f64| {
                        let mut s = style_font.clone();
                        s.font_size = v;
                        on_change.call(s);
                    },
                )}
                {render_slider(
                    "header_font_size",
                    "Tamanho do Cabeçalho (px)",
                    style.header_font_size,
                    HEADER_FONT_SIZE_RANGE.0,
                    HEADER_FONT_SIZE_RANGE.1,
                    1.0,
                    0,
                    move |v: f64| {
                        let mut s = style_header.clone();
                        s.header_font_size = v;
                        on_change.call(s);
                    },
                )}
                {render_slider(
                    "title_font_size",
                    "Tamanho dos Títulos (px)",
                    style.title_font_size,
                    TITLE_FONT_SIZE_RANGE.0,
                    TITLE_FONT_SIZE_RANGE.1,
                    1.0,
                    0,
                    move |v: f64| {
                        let mut s = style_title.clone();
                        s.title_font_size = v;
                        on_change.call(s);
                    },
                )}
                {render_slider(
                    "line_height",
                    "Altura da Linha",
                    style.line_height,
                    LINE_HEIGHT_RANGE.0,
                    LINE_HEIGHT_RANGE.1,
                    0.1,
                    1,
                    move |v: f64| {
                        let mut s = style_line.clone();
                        s.line_height = v;
                        on_change.call(s);
                    },
                )}
            }

            div { class: "space-y-2",
                h3 { class: "text-lg font-semibold text-[var(--text-heading)]",
                    "Dimensões"
                }
                {render_slider(
                    "border_radius",
                    "Raio das Bordas (px)",
                    style.border_radius,
                    BORDER_RADIUS_RANGE.0,
                    BORDER_RADIUS_RANGE.1,
                    1.0,
                    0,
                    move |v: f64| {
                        let mut s = style_radius.clone();
                        s.border_radius = v;
                        on_change.call(s);
                    },
                )}
                {render_slider(
                    "spacing",
                    "Espaçamento (px)",
                    style.spacing,
                    SPACING_RANGE.0,
                    SPACING_RANGE.1,
                    4.0,
                    0,
                    move |v: f64| {
                        let mut s = style_spacing.clone();
                        s.spacing = v;
                        on_change.call(s);
                    },
                )}
                {render_slider(
                    "logo_size",
                    "Tamanho do Logo (px)",
                    style.logo_size,
                    LOGO_SIZE_RANGE.0,
                    LOGO_SIZE_RANGE.1,
                    5.0,
                    0,
                    move |v: f64| {
                        let mut s = style_logo.clone();
                        s.logo_size = v;
                        on_change.call(s);
                    },
                )}
            }

            div { class: "space-y-2",
                h3 { class: "text-lg font-semibold text-[var(--text-heading)]",
                    "Cores"
                }
                {render_color(
                    "primary_color",
                    "Cor Primária",
                    &style.primary_color,
                    move |v: String| {
                        let mut s = style_primary.clone();
                        s.primary_color = v;
                        on_change.call(s);
                    },
                )}
                {render_color(
                    "secondary_color",
                    "Cor Secundária",
                    &style.secondary_color,
                    move |v: String| {
                        let mut s = style_secondary.clone();
                        s.secondary_color = v;
                        on_change.call(s);
                    },
                )}
                {render_color(
                    "background_color",
                    "Cor de Fundo",
                    &style.background_color,
                    move |v: String| {
                        let mut s = style_background.clone();
                        s.background_color = v;
                        on_change.call(s);
                    },
                )}
                {render_color(
                    "text_color",
                    "Cor do Texto",
                    &style.text_color,
                    move |v: String| {
                        let mut s = style_text.clone();
                        s.text_color = v;
                        on_change.call(s);
                    },
                )}
            }
        }
    }
}

/// Render a labeled range slider.
#[allow(clippy::too_many_arguments)]
fn render_slider(
    id: &str,
    label: &str,
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    decimals: usize,
    on_input: impl Fn(f64) + 'static,
) -> Element {
    let display = format!("{value:.decimals$}");
    let id = id.to_string();
    let label = label.to_string();

    rsx! {
        div { class: "flex flex-col gap-1",
            div { class: "flex justify-between text-sm",
                label { r#for: "{id}",
                    class: "text-[var(--text-heading)] font-medium",
                    "{label}"
                }
                span { class: "text-[var(--text-secondary)] tabular-nums",
                    "{display}"
                }
            }
            input {
                r#type: "range",
                id: "{id}",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                class: "w-full accent-[var(--btn-primary)]",
                oninput: move |e| {
                    match e.value().parse::<f64>() {
                        Ok(v) => on_input(v),
                        Err(err) => {
                            web_sys::console::warn_1(
                                &format!("slider parse failure: {err:?} from {:?}", e.value())
                                    .into(),
                            );
                        }
                    }
                },
            }
        }
    }
}

/// Render a labeled select dropdown.
fn render_select(
    id: &str,
    label: &str,
    options: &[(&str, &str)],
    selected: &str,
    on_change: impl Fn(String) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let options: Vec<(String, String)> = options
        .iter()
        .map(|(v, l)| ((*v).to_string(), (*l).to_string()))
        .collect();
    let selected = selected.to_string();

    rsx! {
        div { class: "flex flex-col gap-1",
            label { r#for: "{id}",
                class: "text-sm text-[var(--text-heading)] font-medium",
                "{label}"
            }
            select {
                id: "{id}",
                class: "px-2 py-1 rounded border border-[var(--border)] bg-[var(--surface)]
                        text-[var(--text)] text-sm",
                value: "{selected}",
                onchange: move |e| {
                    on_change(e.value());
                },

                for (value, display) in options.iter() {
                    option {
                        value: "{value}",
                        selected: value == &selected,
                        "{display}"
                    }
                }
            }
        }
    }
}

/// Render a labeled color picker alongside its current hex value.
fn render_color(
    id: &str,
    label: &str,
    value: &str,
    on_input: impl Fn(String) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let value = value.to_string();

    rsx! {
        div { class: "flex items-center justify-between gap-2",
            label { r#for: "{id}",
                class: "text-sm text-[var(--text-heading)] font-medium",
                "{label}"
            }
            div { class: "flex items-center gap-2",
                span { class: "text-xs text-[var(--text-secondary)] tabular-nums",
                    "{value}"
                }
                input {
                    r#type: "color",
                    id: "{id}",
                    value: "{value}",
                    class: "w-8 h-8 rounded border border-[var(--border)] bg-transparent",
                    oninput: move |e| on_input(e.value()),
                }
            }
        }
    }
}
