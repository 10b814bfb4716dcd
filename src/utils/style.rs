//! Style helpers for input widgets and borders.

use crate::styles::theme;
use ratatui::style::Style;

/// Border style for the focused widget.
pub fn focused_border_style() -> Style {
    theme().border_focused_style()
}

/// Border style for unfocused widgets.
pub fn unfocused_border_style() -> Style {
    theme().border_style()
}

/// Text style inside inputs.
pub fn input_text_style() -> Style {
    theme().text_style()
}

/// Style for placeholder text inside empty inputs.
pub fn input_placeholder_style() -> Style {
    theme().muted_style()
}
