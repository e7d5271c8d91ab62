//! Hotkey system
//!
//! Centralized hotkey management for the schedule editor.
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Save the current schedule file.
    SaveSchedule,
    /// Delete the selected blocks.
    DeleteSelection,
    /// Close any open dialog or overlay.
    CloseOverlays,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether any blocks are selected
    pub has_selection: bool,
    /// Whether a dialog is open (Escape closes it; delete is suppressed)
    pub dialog_open: bool,
    /// Whether an input field has focus (should suppress most hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(
    key: &Key,
    ctrl: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Escape works even while typing in a dialog field.
    if matches!(key, Key::Escape) {
        if context.dialog_open {
            return HotkeyResult::Action(HotkeyAction::CloseOverlays);
        }
        return HotkeyResult::NoMatch;
    }

    // Suppress everything else when typing in an input field.
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    match key {
        Key::Character(c) if (ctrl || meta) && (c == "s" || c == "S") => {
            HotkeyResult::Action(HotkeyAction::SaveSchedule)
        }
        Key::Delete | Key::Backspace if context.has_selection && !context.dialog_open => {
            HotkeyResult::Action(HotkeyAction::DeleteSelection)
        }
        _ => HotkeyResult::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_s_saves_schedule() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("s".to_string()), true, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::SaveSchedule)));
    }

    #[test]
    fn test_delete_requires_selection() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Delete, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));

        let ctx = HotkeyContext {
            has_selection: true,
            ..Default::default()
        };
        let result = handle_hotkey(&Key::Delete, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::DeleteSelection)));
    }

    #[test]
    fn test_escape_closes_open_dialog() {
        let ctx = HotkeyContext {
            dialog_open: true,
            input_focused: true,
            ..Default::default()
        };
        let result = handle_hotkey(&Key::Escape, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::CloseOverlays)));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext {
            input_focused: true,
            has_selection: true,
            ..Default::default()
        };
        let result = handle_hotkey(&Key::Delete, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }
}
