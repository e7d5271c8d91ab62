use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn StatusBar(block_count: usize, selected_count: usize, message: String) -> Element {
    let status = if message.is_empty() { "Ready".to_string() } else { message };
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span { "{status}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{block_count} blocks" }
                span { "{selected_count} selected" }
            }
        }
    }
}
