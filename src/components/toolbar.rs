use dioxus::prelude::*;

use crate::constants::*;
use crate::state::Weekday;

/// Top toolbar: schedule actions on the left, day visibility toggles in the
/// middle, the schedule name on the right.
#[component]
pub fn Toolbar(
    schedule_name: String,
    hidden_days: Vec<Weekday>,
    on_new_block: EventHandler<MouseEvent>,
    on_open: EventHandler<MouseEvent>,
    on_save: EventHandler<MouseEvent>,
    on_export: EventHandler<MouseEvent>,
    on_save_final: EventHandler<MouseEvent>,
    on_save_intermediate: EventHandler<MouseEvent>,
    on_toggle_day: EventHandler<Weekday>,
    on_toggle_settings: EventHandler<MouseEvent>,
) -> Element {
    let action_style = format!(
        "background: transparent; border: none; color: {TEXT_PRIMARY}; \
         font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;"
    );

    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 40px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                span { style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY}; margin-right: 12px;", "Gridplan" }
                button { style: "{action_style}", onclick: move |e| on_new_block.call(e), "New Block" }
                button { style: "{action_style}", onclick: move |e| on_open.call(e), "Open" }
                button { style: "{action_style}", onclick: move |e| on_save.call(e), "Save" }
                button {
                    style: "background: {ACCENT_EXPORT}; border: none; color: white; font-size: 12px; cursor: pointer; padding: 4px 10px; border-radius: 4px;",
                    onclick: move |e| on_export.call(e),
                    "Export to Excel"
                }
                button { style: "{action_style}", onclick: move |e| on_save_final.call(e), "Save Final" }
                button { style: "{action_style}", onclick: move |e| on_save_intermediate.call(e), "Save Draft" }
            }
            div {
                style: "display: flex; align-items: center; gap: 4px;",
                for day in Weekday::ORDER {
                    {
                        let hidden = hidden_days.contains(&day);
                        let bg = if hidden { BG_BASE } else { BG_HOVER };
                        let fg = if hidden { TEXT_DIM } else { TEXT_PRIMARY };
                        rsx! {
                            button {
                                key: "day-toggle-{day}",
                                style: "
                                    background: {bg}; border: 1px solid {BORDER_DEFAULT};
                                    color: {fg}; font-size: 11px; cursor: pointer;
                                    padding: 3px 8px; border-radius: 999px;
                                ",
                                onclick: move |_| on_toggle_day.call(day),
                                "{day}"
                            }
                        }
                    }
                }
                button {
                    style: "{action_style} margin-left: 12px;",
                    onclick: move |e| on_toggle_settings.call(e),
                    "⚙"
                }
            }
            span { style: "font-size: 13px; color: {TEXT_MUTED};", "{schedule_name}" }
        }
    }
}
