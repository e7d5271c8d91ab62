use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::*;
use crate::core::color::is_valid_color;
use crate::core::timegrid;
use crate::state::Weekday;

/// The values a create/edit dialog submits. Validation happens inside the
/// dialog; a submitted form always carries a plausible time range and a
/// parseable color.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockForm {
    /// Block being edited, `None` when creating.
    pub block_id: Option<Uuid>,
    pub building_id: Uuid,
    pub day: Weekday,
    pub room: String,
    /// "HH:MM-HH:MM"
    pub time_range: String,
    pub subject: String,
    pub teacher: String,
    pub students: String,
    pub color: String,
}

/// Create/edit dialog for an activity block.
///
/// Rejecting malformed time or color input keeps the dialog open with an
/// inline error; nothing is partially saved.
#[component]
pub fn BlockDialog(
    title: String,
    buildings: Vec<(Uuid, String, Vec<String>)>, // (id, name, rooms for the initial day)
    initial: BlockForm,
    on_submit: EventHandler<BlockForm>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut building_id = use_signal(|| initial.building_id);
    let mut day = use_signal(|| initial.day);
    let mut room = use_signal(|| initial.room.clone());
    let mut time_range = use_signal(|| initial.time_range.clone());
    let mut subject = use_signal(|| initial.subject.clone());
    let mut teacher = use_signal(|| initial.teacher.clone());
    let mut students = use_signal(|| initial.students.clone());
    let mut color = use_signal(|| initial.color.clone());
    let mut error = use_signal(|| None::<String>);

    let block_id = initial.block_id;
    let known_rooms: Vec<String> = buildings
        .iter()
        .find(|(id, _, _)| *id == building_id())
        .map(|(_, _, rooms)| rooms.clone())
        .unwrap_or_default();
    let rooms_hint = if known_rooms.is_empty() {
        "No columns yet; a new one will be created.".to_string()
    } else {
        format!("Existing rooms: {}", known_rooms.join(", "))
    };

    let building_options = buildings.clone();
    let label_style = format!(
        "display: block; margin-bottom: 10px; font-size: 12px; color: {TEXT_SECONDARY};"
    );
    let input_style = format!(
        "width: 100%; margin-top: 3px; padding: 5px 7px; font-size: 12px; \
         background-color: {BG_BASE}; color: {TEXT_PRIMARY}; \
         border: 1px solid {BORDER_STRONG}; border-radius: 4px; box-sizing: border-box;"
    );

    let submit = move |_| {
        let time_input = time_range();
        if timegrid::parse_time_range_strict(&time_input).is_none() {
            error.set(Some("Please enter the time as HH:MM-HH:MM".to_string()));
            return;
        }
        let color_input = color();
        if !is_valid_color(&color_input) {
            error.set(Some(
                "Please enter a valid color as #RRGGBB or rgb(r,g,b)".to_string(),
            ));
            return;
        }
        if subject().trim().is_empty() {
            error.set(Some("Please enter a subject".to_string()));
            return;
        }
        on_submit.call(BlockForm {
            block_id,
            building_id: building_id(),
            day: day(),
            room: room().trim().to_string(),
            time_range: time_input.trim().to_string(),
            subject: subject().trim().to_string(),
            teacher: teacher().trim().to_string(),
            students: students().trim().to_string(),
            color: color_input.trim().to_string(),
        });
    };

    rsx! {
        div {
            style: "
                position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                background-color: rgba(0, 0, 0, 0.5);
                display: flex; align-items: center; justify-content: center;
                z-index: 2000;
            ",
            onclick: move |_| on_cancel.call(()),
            div {
                style: "
                    width: 420px; background-color: {BG_ELEVATED};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                    padding: 24px; box-shadow: 0 10px 25px rgba(0,0,0,0.5);
                ",
                onclick: move |e| e.stop_propagation(),

                h3 { style: "margin: 0 0 16px 0; font-size: 16px; color: {TEXT_PRIMARY};", "{title}" }

                label {
                    style: "{label_style}",
                    "Building:"
                    select {
                        style: "{input_style}",
                        onchange: move |e| {
                            if let Ok(id) = e.value().parse::<Uuid>() {
                                building_id.set(id);
                            }
                        },
                        for (id, name, _) in building_options.iter() {
                            option {
                                key: "building-{id}",
                                value: "{id}",
                                selected: *id == building_id(),
                                "{name}"
                            }
                        }
                    }
                }

                label {
                    style: "{label_style}",
                    "Day:"
                    select {
                        style: "{input_style}",
                        onchange: move |e| {
                            if let Some(parsed) = Weekday::from_code(&e.value()) {
                                day.set(parsed);
                            }
                        },
                        for option_day in Weekday::ORDER {
                            option {
                                key: "day-{option_day}",
                                value: "{option_day}",
                                selected: option_day == day(),
                                "{option_day}"
                            }
                        }
                    }
                }

                label {
                    style: "{label_style}",
                    "Room:"
                    input {
                        style: "{input_style}",
                        value: "{room}",
                        placeholder: "e.g. 101",
                        oninput: move |e| room.set(e.value()),
                    }
                    span { style: "font-size: 10px; color: {TEXT_DIM};", "{rooms_hint}" }
                }

                label {
                    style: "{label_style}",
                    "Time (HH:MM-HH:MM):"
                    input {
                        style: "{input_style}",
                        value: "{time_range}",
                        placeholder: "09:00-10:30",
                        oninput: move |e| time_range.set(e.value()),
                    }
                }

                label {
                    style: "{label_style}",
                    "Subject:"
                    input {
                        style: "{input_style}",
                        value: "{subject}",
                        oninput: move |e| subject.set(e.value()),
                    }
                }

                label {
                    style: "{label_style}",
                    "Teacher:"
                    input {
                        style: "{input_style}",
                        value: "{teacher}",
                        oninput: move |e| teacher.set(e.value()),
                    }
                }

                label {
                    style: "{label_style}",
                    "Students:"
                    input {
                        style: "{input_style}",
                        value: "{students}",
                        oninput: move |e| students.set(e.value()),
                    }
                }

                label {
                    style: "{label_style}",
                    "Color:"
                    div {
                        style: "display: flex; gap: 4px; margin: 4px 0;",
                        for preset in PRESET_BLOCK_COLORS {
                            {
                                let ring = if color() == preset { BORDER_ACCENT } else { BORDER_DEFAULT };
                                rsx! {
                                    div {
                                        key: "preset-{preset}",
                                        style: "
                                            width: 22px; height: 22px; border-radius: 4px; cursor: pointer;
                                            background-color: {preset}; border: 2px solid {ring};
                                        ",
                                        onclick: move |_| color.set(preset.to_string()),
                                    }
                                }
                            }
                        }
                    }
                    input {
                        style: "{input_style}",
                        value: "{color}",
                        placeholder: "#RRGGBB or rgb(r,g,b)",
                        oninput: move |e| color.set(e.value()),
                    }
                }

                if let Some(message) = error() {
                    div {
                        style: "margin: 8px 0; font-size: 12px; color: {ACCENT_DANGER};",
                        "{message}"
                    }
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px;",
                    button {
                        style: "padding: 7px 14px; background: transparent; border: 1px solid {BORDER_STRONG}; border-radius: 4px; color: {TEXT_SECONDARY}; cursor: pointer;",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        style: "padding: 7px 14px; background: {ACCENT_GRID}; border: none; border-radius: 4px; color: white; cursor: pointer;",
                        onclick: submit,
                        "Save"
                    }
                }
            }
        }
    }
}
