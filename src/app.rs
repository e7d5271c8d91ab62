//! Root application component
//!
//! This defines the main App component, the signal bank owning all mutable
//! state, and the handlers connecting the grid, dialogs, and export flows.

use dioxus::prelude::*;
use uuid::Uuid;

use crate::components::{
    BlockDialog, BlockForm, ExportModal, ExportStatus, SettingsPanel, StatusBar, Toolbar,
};
use crate::constants::*;
use crate::core::compensation::CompensationSettings;
use crate::core::export;
use crate::core::geometry::{self, GridMetrics};
use crate::core::grid_snap;
use crate::core::snapshot::{self, SnapshotKind};
use crate::core::timegrid;
use crate::grid::BuildingPanel;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{ActivityBlock, Schedule, SelectionState, Weekday};

/// Default length of a freshly created block.
const DEFAULT_BLOCK_MINUTES: u32 = 45;

#[component]
pub fn App() -> Element {
    let mut schedule = use_signal(Schedule::default);
    let mut selection = use_signal(SelectionState::default);
    let mut comp =
        use_signal(|| CompensationSettings::load_from(&CompensationSettings::default_path()));
    let mut show_settings = use_signal(|| false);
    let mut export_status = use_signal(|| None::<ExportStatus>);
    let mut dialog = use_signal(|| None::<BlockForm>);
    let mut status_message = use_signal(String::new);

    // Full reposition pass over every block with the active curve.
    let mut reposition = move || {
        let comp_now = comp();
        schedule.with_mut(|s| {
            let metrics = GridMetrics::from_settings(&s.settings);
            geometry::apply_compensation_pass(&mut s.blocks, &metrics, &comp_now);
        });
    };

    let mut on_block_select = move |id: Uuid| {
        selection.with_mut(|sel| sel.select_block(id));
    };

    let mut on_block_delete = move |id: Uuid| {
        schedule.with_mut(|s| {
            s.remove_block(id);
        });
        selection.with_mut(|sel| sel.remove_block(id));
        status_message.set("Block deleted".to_string());
    };

    // A released drag: snap the dropped pixel position onto the grid and
    // reposition everything.
    let mut on_block_drop = move |(id, left, top): (Uuid, f64, f64)| {
        let comp_now = comp();
        schedule.with_mut(|s| {
            let metrics = GridMetrics::from_settings(&s.settings);
            let row_count = s.settings.row_count();
            let spans = {
                let Some(building_id) = s.find_block(id).map(|b| b.building_id) else {
                    return;
                };
                let Some(building) = s.find_building(building_id) else {
                    return;
                };
                let counts = building.visible_column_counts(&s.hidden_days);
                geometry::day_spans(&metrics, &counts)
            };
            let Some(snap) = grid_snap::snap_to_grid(&metrics, &spans, row_count, left, top)
            else {
                return;
            };
            if let Some(block) = s.block_mut(id) {
                grid_snap::apply_drop(block, &snap);
            }
            geometry::apply_compensation_pass(&mut s.blocks, &metrics, &comp_now);
        });
    };

    // Bottom-edge resize snaps the new height to whole rows.
    let mut on_block_resize = move |(id, height): (Uuid, f64)| {
        schedule.with_mut(|s| {
            let metrics = GridMetrics::from_settings(&s.settings);
            if let Some(block) = s.block_mut(id) {
                let rows = metrics.row_span_for_height(height);
                block.height = metrics.height_for_rows(rows);
            }
        });
    };

    // Open the edit dialog seeded from a block's current state. The time
    // range prefers the displayed label and falls back to geometry.
    let mut on_block_edit = move |id: Uuid| {
        let s = schedule();
        let Some(block) = s.find_block(id) else {
            return;
        };
        let metrics = GridMetrics::from_settings(&s.settings);
        let time_range = match timegrid::parse_time_range_strict(&block.time_label) {
            Some(_) => block.time_label.clone(),
            None => {
                let original = block.original_top.unwrap_or(block.top);
                let row = metrics.row_at(original);
                let start = s.settings.minutes_for_row(row);
                let end = start
                    + metrics.row_span_for_height(block.height) as u32
                        * s.settings.time_interval_min;
                timegrid::format_time_range(start, end)
            }
        };
        let room = if block.room_label.is_empty() {
            s.find_building(block.building_id)
                .and_then(|b| b.room_at(block.day, block.col_index))
                .unwrap_or("")
                .to_string()
        } else {
            block.room_label.clone()
        };
        dialog.set(Some(BlockForm {
            block_id: Some(id),
            building_id: block.building_id,
            day: block.day,
            room,
            time_range,
            subject: block.subject.clone(),
            teacher: block.teacher.clone(),
            students: block.students.clone(),
            color: block.color.clone(),
        }));
    };

    // Click on an empty cell: create dialog preselected to that slot.
    let mut on_cell_click = move |(building_id, day, col, row): (Uuid, Weekday, usize, usize)| {
        let s = schedule();
        let start = s.settings.minutes_for_row(row);
        let room = s
            .find_building(building_id)
            .and_then(|b| b.room_at(day, col))
            .unwrap_or("")
            .to_string();
        dialog.set(Some(BlockForm {
            block_id: None,
            building_id,
            day,
            room,
            time_range: timegrid::format_time_range(start, start + DEFAULT_BLOCK_MINUTES),
            subject: String::new(),
            teacher: String::new(),
            students: String::new(),
            color: DEFAULT_BLOCK_COLOR.to_string(),
        }));
    };

    // Dialog submit: resolve the column (auto-creating it for a new room),
    // write the fields, and derive geometry from the validated time range.
    let mut on_dialog_submit = move |form: BlockForm| {
        let Some((start_min, end_min)) = timegrid::parse_time_range_strict(&form.time_range)
        else {
            // The dialog validates before submitting; a miss here is a bug.
            log::error!("dialog submitted unparseable time range {:?}", form.time_range);
            return;
        };
        let comp_now = comp();
        schedule.with_mut(|s| {
            let metrics = GridMetrics::from_settings(&s.settings);
            let settings = s.settings.clone();
            let Some(col_index) = s.ensure_column(form.building_id, form.day, &form.room)
            else {
                log::error!("no building {} for dialog submit", form.building_id);
                return;
            };
            let room_label = if form.room.is_empty() {
                s.find_building(form.building_id)
                    .and_then(|b| b.room_at(form.day, col_index))
                    .unwrap_or("")
                    .to_string()
            } else {
                form.room.clone()
            };

            let block_id = match form.block_id {
                Some(id) => id,
                None => s.add_block(ActivityBlock::new(
                    form.building_id,
                    form.day,
                    col_index,
                    0.0,
                    0.0,
                    form.subject.clone(),
                )),
            };
            if let Some(block) = s.block_mut(block_id) {
                block.building_id = form.building_id;
                block.day = form.day;
                block.col_index = col_index;
                block.subject = form.subject.clone();
                block.teacher = form.teacher.clone();
                block.students = form.students.clone();
                block.room_label = room_label;
                block.time_label = timegrid::format_time_range(start_min, end_min);
                block.color = form.color.clone();
                geometry::set_block_time_range(block, &metrics, &settings, start_min, end_min);
            }
            geometry::apply_compensation_pass(&mut s.blocks, &metrics, &comp_now);
        });
        dialog.set(None);
        status_message.set("Block saved".to_string());
    };

    let mut save_schedule = move || {
        let existing = schedule().file_path.clone();
        let path = match existing {
            Some(path) => path,
            None => match rfd::FileDialog::new()
                .add_filter("Schedule", &["json"])
                .set_file_name("schedule.json")
                .set_title("Save Schedule")
                .save_file()
            {
                Some(path) => path,
                None => return,
            },
        };
        match schedule.with_mut(|s| s.save_as(&path)) {
            Ok(()) => status_message.set(format!("Saved {}", path.display())),
            Err(err) => {
                log::error!("failed to save schedule to {}: {err}", path.display());
                status_message.set(format!("Save failed: {err}"));
            }
        }
    };

    let mut open_schedule = move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Schedule", &["json", "html"])
            .set_title("Open Schedule")
            .pick_file()
        else {
            return;
        };
        let is_html = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("html"))
            .unwrap_or(false);
        let loaded = if is_html {
            // Intermediate snapshots carry their schedule embedded.
            std::fs::read_to_string(&path)
                .map_err(|err| err.to_string())
                .and_then(|html| {
                    snapshot::extract_embedded_schedule(&html)
                        .ok_or_else(|| "no embedded schedule in this file".to_string())
                })
        } else {
            Schedule::load(&path).map_err(|err| err.to_string())
        };
        match loaded {
            Ok(loaded) => {
                schedule.set(loaded);
                selection.with_mut(|sel| sel.clear());
                reposition();
                status_message.set(format!("Opened {}", path.display()));
            }
            Err(err) => {
                log::error!("failed to open {}: {err}", path.display());
                status_message.set(format!("Open failed: {err}"));
            }
        }
    };

    let mut save_snapshot = move |kind: SnapshotKind| {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("HTML", &["html"])
            .set_file_name(kind.default_file_name())
            .set_title("Save Snapshot")
            .save_file()
        else {
            return;
        };
        let html = snapshot::render_snapshot(&schedule(), &comp(), kind);
        match std::fs::write(&path, html) {
            Ok(()) => status_message.set(format!("Snapshot saved to {}", path.display())),
            Err(err) => {
                log::error!("failed to write snapshot {}: {err}", path.display());
                status_message.set(format!("Snapshot failed: {err}"));
            }
        }
    };

    // Spreadsheet export: probe the service, POST the records, write the
    // returned bytes. The modal tracks every step.
    let mut on_export = move |_: MouseEvent| {
        let records = export::collect_schedule_data(&schedule());
        export_status.set(Some(ExportStatus::InProgress(
            "Preparing data for export...".to_string(),
        )));
        spawn(async move {
            let client = reqwest::Client::new();
            if !export::check_server_availability(&client).await {
                export_status.set(Some(ExportStatus::Failure(
                    "The export service did not answer the liveness probe.".to_string(),
                )));
                return;
            }
            export_status.set(Some(ExportStatus::InProgress(format!(
                "Exporting {} records...",
                records.len()
            ))));
            match export::export_to_excel(&client, &records, "").await {
                Ok(bytes) => {
                    let path = std::path::PathBuf::from(export::EXPORT_FILE_NAME);
                    match tokio::fs::write(&path, &bytes).await {
                        Ok(()) => export_status.set(Some(ExportStatus::Success(format!(
                            "Excel file saved as {}",
                            path.display()
                        )))),
                        Err(err) => export_status.set(Some(ExportStatus::Failure(format!(
                            "Could not write the spreadsheet: {err}"
                        )))),
                    }
                }
                Err(err) => export_status.set(Some(ExportStatus::Failure(err))),
            }
        });
    };

    let mut apply_compensation_settings = move |settings: CompensationSettings| {
        comp.set(settings);
        if let Err(err) = settings.save_to(&CompensationSettings::default_path()) {
            log::warn!("failed to persist compensation settings: {err}");
        }
        reposition();
    };

    let current = schedule();
    let selected_ids = selection().block_ids.clone();
    let comp_now = comp();
    let dialog_form = dialog();

    // Per-building props for the panels, precomputed outside rsx.
    let panels: Vec<(crate::state::Building, Vec<ActivityBlock>)> = current
        .buildings
        .iter()
        .map(|building| {
            let blocks: Vec<ActivityBlock> = current
                .visible_blocks()
                .filter(|block| block.building_id == building.id)
                .cloned()
                .collect();
            (building.clone(), blocks)
        })
        .collect();

    // Rooms per building for the dialog's hint line, keyed by the form's day.
    let dialog_buildings: Vec<(Uuid, String, Vec<String>)> = dialog_form
        .as_ref()
        .map(|form| {
            current
                .buildings
                .iter()
                .map(|b| {
                    (
                        b.id,
                        b.name.clone(),
                        b.rooms_for_day(form.day)
                            .into_iter()
                            .map(str::to_string)
                            .collect(),
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    let dialog_element = match dialog_form {
        Some(form) => {
            let title = if form.block_id.is_some() {
                "Edit Activity".to_string()
            } else {
                "New Activity".to_string()
            };
            let dialog_key = form
                .block_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "new".to_string());
            rsx! {
                BlockDialog {
                    key: "dialog-{dialog_key}",
                    title: title,
                    buildings: dialog_buildings.clone(),
                    initial: form,
                    on_submit: move |form| on_dialog_submit(form),
                    on_cancel: move |_| dialog.set(None),
                }
            }
        }
        None => rsx! {},
    };

    let export_element = match export_status() {
        Some(status) => rsx! {
            ExportModal {
                status: status,
                on_close: move |_| export_status.set(None),
            }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; height: 100vh;
                background-color: {BG_DEEPEST}; color: {TEXT_PRIMARY};
                font-family: 'Segoe UI', Arial, sans-serif;
            ",
            tabindex: "0",
            onkeydown: move |e| {
                let context = HotkeyContext {
                    has_selection: !selection().block_ids.is_empty(),
                    dialog_open: dialog().is_some() || show_settings()
                        || export_status().is_some(),
                    input_focused: dialog().is_some(),
                };
                let modifiers = e.modifiers();
                match handle_hotkey(&e.key(), modifiers.ctrl(), modifiers.meta(), &context) {
                    HotkeyResult::Action(HotkeyAction::SaveSchedule) => {
                        e.prevent_default();
                        save_schedule();
                    }
                    HotkeyResult::Action(HotkeyAction::DeleteSelection) => {
                        e.prevent_default();
                        for id in selection().block_ids.clone() {
                            on_block_delete(id);
                        }
                    }
                    HotkeyResult::Action(HotkeyAction::CloseOverlays) => {
                        dialog.set(None);
                        show_settings.set(false);
                        if !matches!(export_status(), Some(ExportStatus::InProgress(_))) {
                            export_status.set(None);
                        }
                    }
                    _ => {}
                }
            },

            Toolbar {
                schedule_name: current.name.clone(),
                hidden_days: current.hidden_days.clone(),
                on_new_block: move |_| {
                    let first_building = schedule().buildings.first().map(|b| b.id);
                    if let Some(building_id) = first_building {
                        on_cell_click((building_id, Weekday::Mo, 0, 0));
                    }
                },
                on_open: move |_| open_schedule(),
                on_save: move |_| save_schedule(),
                on_export: move |e| on_export(e),
                on_save_final: move |_| save_snapshot(SnapshotKind::Final),
                on_save_intermediate: move |_| save_snapshot(SnapshotKind::Intermediate),
                on_toggle_day: move |day| {
                    schedule.with_mut(|s| {
                        s.toggle_day(day);
                    });
                },
                on_toggle_settings: move |_| show_settings.set(!show_settings()),
            }

            // Scrollable grid area, one panel per building.
            div {
                style: "flex: 1; overflow: auto; padding: 16px;",
                onmousedown: move |_| selection.with_mut(|sel| sel.clear()),
                for (building, blocks) in panels.iter() {
                    BuildingPanel {
                        key: "{building.id}",
                        building: building.clone(),
                        blocks: blocks.clone(),
                        settings: current.settings.clone(),
                        hidden_days: current.hidden_days.clone(),
                        selected_blocks: selected_ids.clone(),
                        on_cell_click: move |args| on_cell_click(args),
                        on_block_drop: move |args| on_block_drop(args),
                        on_block_resize: move |args| on_block_resize(args),
                        on_block_edit: move |id| on_block_edit(id),
                        on_block_delete: move |id| on_block_delete(id),
                        on_block_select: move |id| on_block_select(id),
                    }
                }
            }

            StatusBar {
                block_count: current.blocks.len(),
                selected_count: selected_ids.len(),
                message: status_message(),
            }

            if show_settings() {
                SettingsPanel {
                    factor: comp_now.factor,
                    exponent: comp_now.exponent,
                    on_apply: move |(factor, exponent)| {
                        apply_compensation_settings(CompensationSettings { factor, exponent });
                        status_message.set("Compensation settings applied".to_string());
                    },
                    on_reset: move |_| {
                        apply_compensation_settings(CompensationSettings::default());
                        status_message.set("Compensation settings reset".to_string());
                    },
                    on_close: move |_| show_settings.set(false),
                }
            }

            {dialog_element}
            {export_element}
        }
    }
}
