use crate::keymap::Action;
use crossterm::event::KeyCode;

/// A text input field with encapsulated state.
///
/// Wraps the text and cursor position, providing a cleaner API for managing
/// text input in forms. An optional maximum length caps insertion; cursor
/// movement and deletion are never capped.
///
/// # Example
/// ```
/// use mimuni::utils::text_input::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('h');
/// input.insert_char('i');
/// assert_eq!(input.text(), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
    max_len: Option<usize>,
}

impl TextInput {
    /// Create a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            max_len: None,
        }
    }

    /// Create an empty text input that refuses insertions past `max_len` chars.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..Self::default()
        }
    }

    /// Get the current text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the trimmed text.
    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Check if the text is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of characters currently entered.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// The configured maximum length, if any.
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Set the text and move cursor to end.
    ///
    /// Text set programmatically is truncated to `max_len` as well.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let mut text = text.into();
        if let Some(max) = self.max_len {
            if text.chars().count() > max {
                text = text.chars().take(max).collect();
            }
        }
        self.cursor = text.chars().count();
        self.text = text;
    }

    /// Clear the text and reset cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    ///
    /// Silently ignored when the input is at its maximum length.
    pub fn insert_char(&mut self, c: char) {
        if let Some(max) = self.max_len {
            if self.text.chars().count() >= max {
                return;
            }
        }
        handle_char_insertion(&mut self.text, &mut self.cursor, c);
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        handle_backspace(&mut self.text, &mut self.cursor);
    }

    /// Delete the character at the cursor position.
    pub fn delete(&mut self) {
        handle_delete(&mut self.text, &mut self.cursor);
    }

    /// Move the cursor left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor right.
    pub fn move_right(&mut self) {
        let char_count = self.text.chars().count();
        if self.cursor < char_count {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Handle a key code event.
    ///
    /// Returns true if the key was handled.
    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => {}
        }
        matches!(
            key_code,
            KeyCode::Char(_)
                | KeyCode::Backspace
                | KeyCode::Delete
                | KeyCode::Left
                | KeyCode::Right
                | KeyCode::Home
                | KeyCode::End
        )
    }

    /// Handle an action from the keymap.
    ///
    /// Returns true if the action was handled.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => {
                self.move_left();
                true
            }
            Action::MoveRight => {
                self.move_right();
                true
            }
            Action::Home => {
                self.move_home();
                true
            }
            Action::End => {
                self.move_end();
                true
            }
            Action::Backspace => {
                self.backspace();
                true
            }
            Action::DeleteChar => {
                self.delete();
                true
            }
            _ => false,
        }
    }

    /// Check if an action is safe to process when a text input is focused.
    ///
    /// Returns true if the action is "safe" (like navigation or text editing) and should
    /// be processed even when the input has focus.
    /// Returns false if the action should be suppressed (like 'Quit' bound to 'q') so that
    /// the key can be treated as text input.
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            // Navigation between fields or exiting input
            Action::Cancel          // Esc
            | Action::Confirm       // Enter
            | Action::NextTab       // Tab
            | Action::PrevTab       // Shift+Tab
            // Modified keys that never collide with typing
            | Action::Attach
            | Action::Submit
            // Text editing actions
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End
            | Action::Backspace
            | Action::DeleteChar
        )
    }
}

/// Handle text input for a single character insertion
fn handle_char_insertion(text: &mut String, cursor_pos: &mut usize, c: char) {
    if c.is_ascii() && !c.is_control() {
        let byte_index = text
            .char_indices()
            .map(|(i, _)| i)
            .nth(*cursor_pos)
            .unwrap_or(text.len());
        text.insert(byte_index, c);
        *cursor_pos = (*cursor_pos + 1).min(text.chars().count());
    }
}

/// Handle character deletion (backspace)
fn handle_backspace(text: &mut String, cursor_pos: &mut usize) {
    if *cursor_pos > 0 {
        let before_cursor = text.chars().take(*cursor_pos - 1);
        let after_cursor = text.chars().skip(*cursor_pos);
        *text = before_cursor.chain(after_cursor).collect();
        *cursor_pos -= 1;
    }
}

/// Handle character deletion (delete key)
fn handle_delete(text: &mut String, cursor_pos: &mut usize) {
    let char_count = text.chars().count();
    if *cursor_pos < char_count {
        let before_cursor = text.chars().take(*cursor_pos);
        let after_cursor = text.chars().skip(*cursor_pos + 1);
        *text = before_cursor.chain(after_cursor).collect();
    }
}
