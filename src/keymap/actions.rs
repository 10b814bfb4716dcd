//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation (unified across screens) ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    /// Move left (kind/view toggles, input cursor)
    MoveLeft,
    /// Move right (kind/view toggles, input cursor)
    MoveRight,
    /// Jump up by a page
    PageUp,
    /// Jump down by a page
    PageDown,
    /// Go to the first item
    GoToTop,
    /// Go to the last item
    GoToEnd,
    /// Jump to start of line/input
    Home,
    /// Jump to end of line/input
    End,

    // ============ Selection & Confirmation ============
    /// Confirm selection / advance (Enter)
    Confirm,
    /// Cancel / go back (Esc)
    Cancel,

    // ============ Global ============
    /// Quit the application
    Quit,

    // ============ Screen-specific actions ============
    /// Delete the selected listing
    Delete,
    /// Create a new listing
    Create,
    /// Refresh the visible list
    Refresh,
    /// Attach a photo to the form
    Attach,
    /// Submit the form
    Submit,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Tab/Field navigation ============
    /// Move to next tab or field
    NextTab,
    /// Move to previous tab or field
    PrevTab,

    // ============ Yes/No prompts ============
    /// Confirm yes
    Yes,
    /// Confirm no
    No,
}
