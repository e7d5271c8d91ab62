use dioxus::prelude::*;

use crate::constants::*;
use crate::utils::parse_f64_input;

/// Floating compensation settings panel (bottom right).
///
/// Sliders preview their value live; Apply persists and triggers a
/// reposition pass, Reset restores the defaults.
#[component]
pub fn SettingsPanel(
    factor: f64,
    exponent: f64,
    on_apply: EventHandler<(f64, f64)>,
    on_reset: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let mut factor_value = use_signal(|| factor);
    let mut exponent_value = use_signal(|| exponent);
    let factor_label = format!("{:.2}", factor_value());
    let exponent_label = format!("{:.2}", exponent_value());

    rsx! {
        div {
            style: "
                position: fixed; bottom: 40px; right: 20px; z-index: 1500;
                width: 300px; background-color: {BG_ELEVATED};
                border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                padding: 15px; box-shadow: 0 2px 10px rgba(0,0,0,0.4);
            ",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid {BORDER_SUBTLE}; padding-bottom: 8px; margin-bottom: 12px;",
                h3 { style: "margin: 0; font-size: 14px; color: {TEXT_PRIMARY};", "Display Settings" }
                button {
                    style: "background: none; border: none; color: {TEXT_MUTED}; font-size: 16px; cursor: pointer;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div {
                style: "margin-bottom: 12px;",
                label {
                    style: "display: block; margin-bottom: 4px; font-size: 12px; color: {TEXT_SECONDARY};",
                    "Compensation factor: "
                    span { style: "color: {TEXT_PRIMARY};", "{factor_label}" }
                }
                input {
                    r#type: "range",
                    style: "width: 100%;",
                    min: "0",
                    max: "1",
                    step: "0.05",
                    value: "{factor_value}",
                    oninput: move |e| factor_value.set(parse_f64_input(&e.value(), DEFAULT_COMPENSATION_FACTOR)),
                }
            }
            div {
                style: "margin-bottom: 12px;",
                label {
                    style: "display: block; margin-bottom: 4px; font-size: 12px; color: {TEXT_SECONDARY};",
                    "Nonlinearity exponent: "
                    span { style: "color: {TEXT_PRIMARY};", "{exponent_label}" }
                }
                input {
                    r#type: "range",
                    style: "width: 100%;",
                    min: "0.8",
                    max: "1.5",
                    step: "0.01",
                    value: "{exponent_value}",
                    oninput: move |e| exponent_value.set(parse_f64_input(&e.value(), DEFAULT_COMPENSATION_EXPONENT)),
                }
            }
            div {
                style: "display: flex; gap: 8px;",
                button {
                    style: "flex: 1; padding: 8px 12px; border: none; border-radius: 4px; background-color: {ACCENT_GRID}; color: white; cursor: pointer; font-size: 13px;",
                    onclick: move |_| on_apply.call((factor_value(), exponent_value())),
                    "Apply"
                }
                button {
                    style: "flex: 1; padding: 8px 12px; border: 1px solid {BORDER_STRONG}; border-radius: 4px; background-color: transparent; color: {TEXT_SECONDARY}; cursor: pointer; font-size: 13px;",
                    onclick: move |_| {
                        factor_value.set(DEFAULT_COMPENSATION_FACTOR);
                        exponent_value.set(DEFAULT_COMPENSATION_EXPONENT);
                        on_reset.call(());
                    },
                    "Reset"
                }
            }
            div {
                style: "margin-top: 12px; font-size: 11px; color: {TEXT_DIM}; font-style: italic; line-height: 1.4;",
                "These settings correct block alignment against cumulative cell-border rounding."
            }
        }
    }
}
