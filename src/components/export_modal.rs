use dioxus::prelude::*;

use crate::constants::*;

/// Where an export run currently stands. Drives the modal overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportStatus {
    /// Work in flight; the message names the current step.
    InProgress(String),
    /// Finished; the spreadsheet was written.
    Success(String),
    /// Failed; the message is the diagnostic shown to the user.
    Failure(String),
}

/// Full-window overlay reporting export progress or its outcome.
#[component]
pub fn ExportModal(status: ExportStatus, on_close: EventHandler<()>) -> Element {
    let is_result = !matches!(status, ExportStatus::InProgress(_));

    rsx! {
        div {
            style: "
                position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                background-color: rgba(0, 0, 0, 0.5);
                display: flex; align-items: center; justify-content: center;
                z-index: 3000;
            ",
            onclick: move |_| {
                if is_result {
                    on_close.call(());
                }
            },
            div {
                style: "
                    min-width: 320px; max-width: 520px; background-color: {BG_ELEVATED};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                    padding: 20px; box-shadow: 0 10px 25px rgba(0,0,0,0.5);
                    position: relative;
                ",
                onclick: move |e| e.stop_propagation(),

                if is_result {
                    button {
                        style: "
                            position: absolute; top: 6px; right: 8px; border: none;
                            background: none; font-size: 18px; font-weight: bold;
                            color: {TEXT_MUTED}; cursor: pointer;
                        ",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                match status {
                    ExportStatus::InProgress(ref message) => rsx! {
                        p { style: "margin: 0; text-align: center; color: {TEXT_PRIMARY}; font-size: 13px;", "{message}" }
                    },
                    ExportStatus::Success(ref message) => rsx! {
                        p { style: "margin: 0; text-align: center; color: {ACCENT_GRID}; font-weight: bold; font-size: 13px;", "{message}" }
                    },
                    ExportStatus::Failure(ref message) => rsx! {
                        h4 { style: "margin: 0 0 10px 0; color: {ACCENT_DANGER}; font-size: 14px;", "Export server unreachable" }
                        p { style: "margin: 0 0 8px 0; color: {TEXT_SECONDARY}; font-size: 12px;", "{message}" }
                        p { style: "margin: 0 0 4px 0; color: {TEXT_SECONDARY}; font-size: 12px;", "Possible causes and fixes:" }
                        ol {
                            style: "margin: 0 0 8px 18px; padding: 0; color: {TEXT_SECONDARY}; font-size: 12px; line-height: 1.5;",
                            li { "The export service is not running. Start it and try again." }
                            li { "Port 5000 is taken by another application." }
                            li { "A firewall is blocking the connection." }
                        }
                        p { style: "margin: 0; text-align: center; font-style: italic; color: {TEXT_DIM}; font-size: 11px;",
                            "Press the × to close this message"
                        }
                    },
                }
            }
        }
    }
}
