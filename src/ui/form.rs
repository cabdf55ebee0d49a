//! Text-input primitive shared by the form screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{FIELD_LABEL, FOCUS_HIGHLIGHT, TITLE_TEXT};

pub struct InputField {
    label: &'static str,
    value: String,
    masked: bool,
}

impl InputField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: false,
        }
    }

    /// A field whose content renders as dots (passwords).
    pub fn masked(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_char(&mut self, ch: char) {
        self.value.push(ch);
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Applies a key to this field. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.push(ch);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    pub fn line(&self, focused: bool) -> Line<'static> {
        let shown = if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        };
        let value_style = if focused {
            Style::default()
                .fg(FOCUS_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TITLE_TEXT)
        };
        let cursor = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(format!("{:>14}: ", self.label), Style::default().fg(FIELD_LABEL)),
            Span::styled(shown, value_style),
            Span::styled(cursor, value_style),
        ])
    }
}
