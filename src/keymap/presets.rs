//! Preset keymaps: Standard, Vim, Emacs
//!
//! Each preset provides a complete set of key bindings for all actions.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Standard keyboard navigation (arrows, Enter, Esc)
    #[default]
    Standard,
    /// Vim-style navigation (hjkl, etc.)
    Vim,
    /// Emacs-style navigation (Ctrl+N/P, etc.)
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Standard keyboard bindings (arrows, Enter, Esc)
fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        // Navigation
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("end", Action::GoToEnd),
        // Selection
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        // Global
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        // Actions
        KeyBinding::new("d", Action::Delete),
        KeyBinding::new("c", Action::Create),
        KeyBinding::new("r", Action::Refresh),
        KeyBinding::new("ctrl+a", Action::Attach),
        KeyBinding::new("ctrl+s", Action::Submit),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
        // Tab navigation
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
        // Yes/No prompts
        KeyBinding::new("y", Action::Yes),
        KeyBinding::new("n", Action::No),
    ]
}

/// Vim-style keyboard bindings (hjkl navigation)
fn vim_bindings() -> Vec<KeyBinding> {
    vec![
        // Navigation - vim style + arrows
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("ctrl+u", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+d", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("g", Action::GoToTop), // gg in real vim, but single g works
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("shift+g", Action::GoToEnd),
        KeyBinding::new("end", Action::GoToEnd),
        // Selection
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        // Global - vim uses q to quit
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        // Actions
        KeyBinding::new("d", Action::Delete),
        KeyBinding::new("o", Action::Create), // 'o' for open/new in vim style
        KeyBinding::new("r", Action::Refresh),
        KeyBinding::new("ctrl+a", Action::Attach),
        KeyBinding::new("ctrl+s", Action::Submit),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("x", Action::DeleteChar), // vim style delete char
        KeyBinding::new("delete", Action::DeleteChar),
        // Tab navigation
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
        // Yes/No prompts
        KeyBinding::new("y", Action::Yes),
        KeyBinding::new("n", Action::No),
    ]
}

/// Emacs-style keyboard bindings (Ctrl+N/P navigation)
fn emacs_bindings() -> Vec<KeyBinding> {
    vec![
        // Navigation - emacs style + arrows
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("alt+v", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+v", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("end", Action::GoToEnd),
        // Line movement - ctrl+a/ctrl+e are sacred in emacs
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        // Selection
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("ctrl+g", Action::Cancel),
        KeyBinding::new("esc", Action::Cancel),
        // Global
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        // Actions
        KeyBinding::new("d", Action::Delete),
        KeyBinding::new("ctrl+o", Action::Create),
        KeyBinding::new("r", Action::Refresh),
        KeyBinding::new("alt+a", Action::Attach),
        KeyBinding::new("ctrl+s", Action::Submit),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("ctrl+d", Action::DeleteChar),
        KeyBinding::new("delete", Action::DeleteChar),
        // Tab navigation
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
        // Yes/No prompts
        KeyBinding::new("y", Action::Yes),
        KeyBinding::new("n", Action::No),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_preset_names() {
        assert_eq!(KeymapPreset::Standard.name(), "Standard");
        assert_eq!(KeymapPreset::Vim.name(), "Vim");
        assert_eq!(KeymapPreset::Emacs.name(), "Emacs");
    }

    #[test]
    fn test_standard_has_core_bindings() {
        let bindings = standard_bindings();
        assert!(bindings.iter().any(|b| b.action == Action::Confirm));
        assert!(bindings.iter().any(|b| b.action == Action::Delete));
        assert!(bindings.iter().any(|b| b.action == Action::Submit));
        assert!(bindings.iter().any(|b| b.action == Action::Attach));
    }

    #[test]
    fn test_vim_delete_char() {
        let bindings = vim_bindings();
        let x = bindings
            .iter()
            .find(|b| b.key == "x")
            .expect("vim should bind x");
        assert_eq!(x.action, Action::DeleteChar);
    }

    #[test]
    fn test_emacs_home_end() {
        // Ctrl+A must stay line-start in emacs, so Attach moves to Alt+A
        let bindings = emacs_bindings();
        let ctrl_a = bindings
            .iter()
            .find(|b| b.key == "ctrl+a")
            .expect("emacs should bind ctrl+a");
        assert_eq!(ctrl_a.action, Action::Home);
        let alt_a = bindings
            .iter()
            .find(|b| b.key == "alt+a")
            .expect("emacs should bind alt+a");
        assert_eq!(alt_a.action, Action::Attach);
    }

    #[test]
    fn test_all_preset_keys_parse() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs] {
            for binding in preset.bindings() {
                let parsed = binding.parse();
                assert!(parsed.is_ok(), "unparseable key {:?}", binding.key);
                assert_ne!(parsed.unwrap().code, KeyCode::Null);
            }
        }
    }
}
