//! Reusable UI components: toolbar, dialogs, modals, and bars.

mod block_dialog;
mod export_modal;
mod settings_panel;
mod status_bar;
mod toolbar;

pub use block_dialog::{BlockDialog, BlockForm};
pub use export_modal::{ExportModal, ExportStatus};
pub use settings_panel::SettingsPanel;
pub use status_bar::StatusBar;
pub use toolbar::Toolbar;
