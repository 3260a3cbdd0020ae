//! Single-line text editor used for the filter

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::constants::FILTER_CHAR_LIMIT;

/// Editable text with a caret, measured in characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    chars: Vec<char>,
    caret: usize,
}

impl TextInput {
    /// Creates an editor holding `text` with the caret at the end.
    pub fn with_value(text: &str) -> Self {
        let chars: Vec<char> = text.chars().take(FILTER_CHAR_LIMIT).collect();
        let caret = chars.len();
        Self { chars, caret }
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Applies an editing key. Returns true if the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => self.insert(c),
            KeyCode::Backspace => {
                if self.caret == 0 {
                    return false;
                }
                self.caret -= 1;
                self.chars.remove(self.caret);
                true
            }
            KeyCode::Delete => {
                if self.caret >= self.chars.len() {
                    return false;
                }
                self.chars.remove(self.caret);
                true
            }
            KeyCode::Left => {
                self.caret = self.caret.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.caret = (self.caret + 1).min(self.chars.len());
                false
            }
            KeyCode::Home => {
                self.caret = 0;
                false
            }
            KeyCode::End => {
                self.caret = self.chars.len();
                false
            }
            _ => false,
        }
    }

    fn insert(&mut self, c: char) -> bool {
        if self.chars.len() >= FILTER_CHAR_LIMIT || c.is_control() {
            return false;
        }
        self.chars.insert(self.caret, c);
        self.caret += 1;
        true
    }
}
