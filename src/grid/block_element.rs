use dioxus::prelude::*;

use crate::constants::{
    BG_ELEVATED, BORDER_ACCENT, BORDER_DEFAULT, BORDER_SUBTLE, CLICK_DRAG_DELAY_MS,
    DOUBLE_CLICK_DRAG_SUPPRESS_MS, TEXT_PRIMARY,
};
use crate::core::color::{adjust_color, contrast_text_color};

use super::{MIN_BLOCK_HEIGHT_PX, RESIZE_HANDLE_HEIGHT_PX};

/// Interactive activity block with drag, bottom-edge resize, double-click
/// edit, and a context menu.
///
/// A mouse-down does not drag immediately: a short timer first gives a
/// double-click the chance to claim the event, after which dragging stays
/// suppressed for a moment so the edit dialog opens cleanly.
#[component]
pub(crate) fn BlockElement(
    block: crate::state::ActivityBlock,
    left: f64,
    width: f64,
    is_selected: bool,
    on_select: EventHandler<uuid::Uuid>,
    on_drop: EventHandler<(uuid::Uuid, f64, f64)>, // (id, released left, released top)
    on_resize: EventHandler<(uuid::Uuid, f64)>,    // (id, new height in px)
    on_edit: EventHandler<uuid::Uuid>,
    on_delete: EventHandler<uuid::Uuid>,
) -> Element {
    let mut show_menu = use_signal(|| false);
    let mut menu_pos = use_signal(|| (0.0, 0.0));
    let mut drag_mode = use_signal(|| None::<&'static str>); // None, "move", "resize"
    let mut drag_start = use_signal(|| (0.0, 0.0));
    let mut drag_delta = use_signal(|| (0.0, 0.0));
    // Generation counter: bumping it invalidates a pending drag timer.
    let mut drag_generation = use_signal(|| 0_u64);
    let mut prevent_drag = use_signal(|| false);

    let block_id = block.id;
    let base_top = block.top;
    let base_height = block.height.max(MIN_BLOCK_HEIGHT_PX);

    let (dx, dy) = drag_delta();
    let (render_left, render_top, render_height) = match drag_mode() {
        Some("move") => (left + dx, base_top + dy, base_height),
        Some("resize") => (left, base_top, (base_height + dy).max(MIN_BLOCK_HEIGHT_PX)),
        _ => (left, base_top, base_height),
    };

    let text_color = contrast_text_color(&block.color);
    let border_color = adjust_color(&block.color, -48);
    let is_active = drag_mode().is_some();
    let cursor_style = match drag_mode() {
        Some("resize") => "ns-resize",
        Some("move") => "grabbing",
        _ => "grab",
    };
    let z_index = if is_active { "100" } else { "1" };
    let selection_ring = if is_selected {
        format!("0 0 0 1px {}", BORDER_ACCENT)
    } else {
        "none".to_string()
    };

    let display_lines: Vec<String> = block.display_text().lines().map(str::to_string).collect();

    rsx! {
        div {
            style: "
                position: absolute;
                left: {render_left}px;
                top: {render_top}px;
                width: {width}px;
                height: {render_height}px;
                background-color: {block.color};
                color: {text_color};
                border: 1px solid {border_color};
                box-shadow: {selection_ring};
                border-radius: 3px;
                font-size: 10px;
                line-height: 1.2;
                padding: 1px 3px;
                box-sizing: border-box;
                overflow: hidden;
                cursor: {cursor_style};
                user-select: none;
                z-index: {z_index};
            ",
            onmousedown: move |e| {
                if let Some(btn) = e.trigger_button() {
                    if format!("{:?}", btn) == "Primary" {
                        e.prevent_default();
                        e.stop_propagation();
                        if prevent_drag() {
                            return;
                        }
                        on_select.call(block_id);
                        let coords = e.client_coordinates();
                        drag_start.set((coords.x, coords.y));
                        drag_delta.set((0.0, 0.0));
                        // Wait out the double-click window before dragging.
                        drag_generation.set(drag_generation() + 1);
                        let armed = drag_generation();
                        spawn(async move {
                            tokio::time::sleep(std::time::Duration::from_millis(
                                CLICK_DRAG_DELAY_MS,
                            ))
                            .await;
                            if drag_generation() == armed && !prevent_drag() {
                                drag_mode.set(Some("move"));
                            }
                        });
                    }
                }
            },
            onmouseup: move |_| {
                // Released before the drag timer fired: cancel the pending drag.
                if drag_mode().is_none() {
                    drag_generation.set(drag_generation() + 1);
                }
            },
            ondoubleclick: move |e| {
                e.prevent_default();
                e.stop_propagation();
                // Claim the event from any pending drag timer.
                drag_generation.set(drag_generation() + 1);
                drag_mode.set(None);
                drag_delta.set((0.0, 0.0));
                prevent_drag.set(true);
                spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(
                        DOUBLE_CLICK_DRAG_SUPPRESS_MS,
                    ))
                    .await;
                    prevent_drag.set(false);
                });
                on_edit.call(block_id);
            },
            oncontextmenu: move |e| {
                e.prevent_default();
                e.stop_propagation();
                let coords = e.client_coordinates();
                menu_pos.set((coords.x, coords.y));
                show_menu.set(true);
            },

            for (idx, line) in display_lines.iter().enumerate() {
                {
                    let weight = if idx == 0 { "bold" } else { "normal" };
                    rsx! {
                        div {
                            key: "line-{block_id}-{idx}",
                            style: "font-weight: {weight}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                            "{line}"
                        }
                    }
                }
            }

            // Bottom resize handle
            div {
                style: "
                    position: absolute; left: 0; right: 0; bottom: 0;
                    height: {RESIZE_HANDLE_HEIGHT_PX}px; cursor: ns-resize; z-index: 10;
                ",
                onmousedown: move |e| {
                    if let Some(btn) = e.trigger_button() {
                        if format!("{:?}", btn) == "Primary" {
                            e.prevent_default();
                            e.stop_propagation();
                            on_select.call(block_id);
                            let coords = e.client_coordinates();
                            drag_start.set((coords.x, coords.y));
                            drag_delta.set((0.0, 0.0));
                            drag_generation.set(drag_generation() + 1);
                            drag_mode.set(Some("resize"));
                        }
                    }
                },
            }
        }

        // Global drag overlay - captures all mouse events while active
        if drag_mode().is_some() {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999; cursor: {cursor_style};",
                oncontextmenu: move |e| e.prevent_default(),
                onmousemove: move |e| {
                    let coords = e.client_coordinates();
                    let (start_x, start_y) = drag_start();
                    drag_delta.set((coords.x - start_x, coords.y - start_y));
                },
                onmouseup: move |_| {
                    let (dx, dy) = drag_delta();
                    match drag_mode() {
                        Some("move") => {
                            on_drop.call((block_id, left + dx, base_top + dy));
                        }
                        Some("resize") => {
                            let height = (base_height + dy).max(MIN_BLOCK_HEIGHT_PX);
                            on_resize.call((block_id, height));
                        }
                        _ => {}
                    }
                    drag_mode.set(None);
                    drag_delta.set((0.0, 0.0));
                },
            }
        }

        // Context menu overlay
        if show_menu() {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9998;",
                onclick: move |_| show_menu.set(false),
                oncontextmenu: move |e| {
                    e.prevent_default();
                    show_menu.set(false);
                },
            }
            div {
                style: "
                    position: fixed;
                    left: {menu_pos().0}px;
                    top: {menu_pos().1}px;
                    background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT};
                    border-radius: 6px; padding: 4px 0; min-width: 120px;
                    box-shadow: 0 4px 12px rgba(0,0,0,0.3);
                    z-index: 9999; font-size: 12px;
                ",
                oncontextmenu: move |e| e.prevent_default(),
                div {
                    style: "
                        padding: 6px 12px; color: {TEXT_PRIMARY}; cursor: pointer;
                        transition: background-color 0.1s ease;
                    ",
                    onclick: move |_| {
                        on_edit.call(block_id);
                        show_menu.set(false);
                    },
                    "Edit"
                }
                div {
                    style: "height: 1px; background-color: {BORDER_SUBTLE}; margin: 4px 0;",
                }
                div {
                    style: "
                        padding: 6px 12px; color: #ef4444; cursor: pointer;
                        transition: background-color 0.1s ease;
                    ",
                    onclick: move |_| {
                        on_delete.call(block_id);
                        show_menu.set(false);
                    },
                    "🗑 Delete Block"
                }
            }
        }
    }
}
