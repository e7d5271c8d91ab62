//! The interactive schedule grid: one panel per building, blocks as
//! absolutely positioned draggable elements.

mod block_element;
mod panel;

pub use panel::BuildingPanel;

/// Minimum rendered block height so tiny blocks stay grabbable.
pub(crate) const MIN_BLOCK_HEIGHT_PX: f64 = 10.0;
/// Height of the bottom resize handle.
pub(crate) const RESIZE_HANDLE_HEIGHT_PX: f64 = 6.0;
