use dioxus::prelude::*;

use crate::constants::{BG_BASE, BG_SURFACE, BORDER_DEFAULT, BORDER_SUBTLE, TEXT_MUTED, TEXT_SECONDARY};
use crate::core::geometry::{self, GridMetrics};
use crate::core::timegrid;
use crate::state::{GridSettings, Weekday};

use super::block_element::BlockElement;

/// One building's schedule grid: day/room headers, a time column, click-to-
/// create cell strips, and the block layer.
#[component]
pub fn BuildingPanel(
    building: crate::state::Building,
    blocks: Vec<crate::state::ActivityBlock>,
    settings: GridSettings,
    hidden_days: Vec<Weekday>,
    selected_blocks: Vec<uuid::Uuid>,
    on_cell_click: EventHandler<(uuid::Uuid, Weekday, usize, usize)>, // (building, day, col, row)
    on_block_drop: EventHandler<(uuid::Uuid, f64, f64)>,
    on_block_resize: EventHandler<(uuid::Uuid, f64)>,
    on_block_edit: EventHandler<uuid::Uuid>,
    on_block_delete: EventHandler<uuid::Uuid>,
    on_block_select: EventHandler<uuid::Uuid>,
) -> Element {
    let metrics = GridMetrics::from_settings(&settings);
    let counts = building.visible_column_counts(&hidden_days);
    let spans = geometry::day_spans(&metrics, &counts);
    let row_count = settings.row_count();
    let pitch = metrics.row_pitch();

    let grid_height = row_count as f64 * pitch;
    let total_height = metrics.header_height + grid_height;
    let total_width = metrics.time_col_width + spans.last().map(|s| s.end_px).unwrap_or(0.0);

    let building_id = building.id;
    let header_height = metrics.header_height;
    let time_col_width = metrics.time_col_width;
    let day_col_width = metrics.day_col_width;
    let cell_height = metrics.cell_height;

    // Visible (day, col, left) triples for header and strip rendering.
    let mut columns: Vec<(Weekday, usize, f64)> = Vec::new();
    for &(day, count) in &counts {
        for col in 0..count {
            columns.push((day, col, geometry::left_for_column(&metrics, &spans, day, col)));
        }
    }

    // Quarter-hour time labels down the left edge.
    let time_labels: Vec<(usize, f64, String)> = (0..row_count)
        .filter(|row| settings.minutes_for_row(*row) % 15 == 0)
        .map(|row| {
            (
                row,
                metrics.top_for_row(row),
                timegrid::minutes_to_time(settings.minutes_for_row(row)),
            )
        })
        .collect();

    rsx! {
        div {
            style: "margin-bottom: 24px;",
            h2 {
                style: "margin: 0 0 8px 0; font-size: 15px; color: {TEXT_SECONDARY};",
                "{building.name}"
            }
            div {
                style: "
                    position: relative;
                    width: {total_width}px;
                    height: {total_height}px;
                    background-color: {BG_BASE};
                    border: 1px solid {BORDER_DEFAULT};
                    overflow: hidden;
                ",

                // Header row: one label per visible (day, column).
                for (day, col, left) in columns.iter().copied() {
                    div {
                        key: "head-{building_id}-{day}-{col}",
                        style: "
                            position: absolute; left: {left}px; top: 0;
                            width: {day_col_width}px; height: {header_height}px;
                            border-left: 1px solid {BORDER_SUBTLE};
                            border-bottom: 1px solid {BORDER_DEFAULT};
                            background-color: {BG_SURFACE};
                            display: flex; align-items: center; justify-content: center;
                            font-size: 11px; font-weight: 600; color: {TEXT_SECONDARY};
                            box-sizing: border-box; text-align: center;
                        ",
                        {building.header_label(day, col).unwrap_or_default()}
                    }
                }

                // Time column labels on every quarter hour.
                for (row, top, label) in time_labels.iter() {
                    div {
                        key: "time-{building_id}-{row}",
                        style: "
                            position: absolute; left: 0; top: {top}px;
                            width: {time_col_width}px; height: {cell_height}px;
                            font-size: 9px; color: {TEXT_MUTED}; text-align: right;
                            padding-right: 6px; box-sizing: border-box;
                        ",
                        "{label}"
                    }
                }

                // One click strip per visible column; the row is derived from
                // the click offset within the strip.
                for (day, col, left) in columns.iter().copied() {
                    div {
                        key: "strip-{building_id}-{day}-{col}",
                        style: "
                            position: absolute; left: {left}px; top: {header_height}px;
                            width: {day_col_width}px; height: {grid_height}px;
                            border-left: 1px solid {BORDER_SUBTLE};
                            box-sizing: border-box;
                        ",
                        onclick: move |e| {
                            let row = (e.element_coordinates().y / pitch).floor().max(0.0) as usize;
                            let row = row.min(row_count.saturating_sub(1));
                            on_cell_click.call((building_id, day, col, row));
                        },
                    }
                }

                // Block layer.
                for block in blocks.iter() {
                    BlockElement {
                        key: "{block.id}",
                        block: block.clone(),
                        left: geometry::left_for_column(&metrics, &spans, block.day, block.col_index),
                        width: day_col_width,
                        is_selected: selected_blocks.contains(&block.id),
                        on_select: move |id| on_block_select.call(id),
                        on_drop: move |(id, left, top)| on_block_drop.call((id, left, top)),
                        on_resize: move |(id, height)| on_block_resize.call((id, height)),
                        on_edit: move |id| on_block_edit.call(id),
                        on_delete: move |id| on_block_delete.call(id),
                    }
                }
            }
        }
    }
}
