//! Selection state shared across views.

use uuid::Uuid;

/// Tracks the currently selected blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selected block IDs.
    pub block_ids: Vec<Uuid>,
}

impl SelectionState {
    /// Clear the selection.
    pub fn clear(&mut self) {
        self.block_ids.clear();
    }

    /// Replace the selection with a single block.
    pub fn select_block(&mut self, block_id: Uuid) {
        self.block_ids.clear();
        self.block_ids.push(block_id);
    }

    /// Remove a block from selection, if present.
    pub fn remove_block(&mut self, block_id: Uuid) {
        self.block_ids.retain(|id| *id != block_id);
    }
}
