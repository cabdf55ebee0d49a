//! The Cyrillic soft keyboard panel embedded in the card-entry screens.
//!
//! Picked characters are not written into a field directly; they go
//! through the keyboard hub so every subscribed screen receives them.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{FOCUS_HIGHLIGHT, PROMPT_TEXT, TITLE_TEXT};

const ROWS: [&str; 4] = ["абвгдеёжз", "ийклмнопр", "стуфхцчшщ", "ъыьэюя"];

pub struct KeyboardPanel {
    row: usize,
    col: usize,
}

impl Default for KeyboardPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardPanel {
    pub fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    pub fn reset(&mut self) {
        self.row = 0;
        self.col = 0;
    }

    fn row_chars(row: usize) -> Vec<char> {
        ROWS[row].chars().collect()
    }

    pub fn selected(&self) -> char {
        let chars = Self::row_chars(self.row);
        chars[self.col.min(chars.len() - 1)]
    }

    /// Applies a key while the panel has focus. Returns the picked
    /// character on Enter or Space.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Up => {
                self.row = self.row.saturating_sub(1);
                self.clamp_col();
                None
            }
            KeyCode::Down => {
                self.row = (self.row + 1).min(ROWS.len() - 1);
                self.clamp_col();
                None
            }
            KeyCode::Left => {
                self.col = self.col.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.col = (self.col + 1).min(Self::row_chars(self.row).len() - 1);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.selected()),
            _ => None,
        }
    }

    fn clamp_col(&mut self) {
        self.col = self.col.min(Self::row_chars(self.row).len() - 1);
    }

    pub fn lines(&self, focused: bool) -> Vec<Line<'static>> {
        let mut lines = vec![prompt()];
        for (row_index, row) in ROWS.iter().enumerate() {
            let mut spans = vec![Span::raw("  ")];
            for (col_index, ch) in row.chars().enumerate() {
                let style = if focused && row_index == self.row && col_index == self.col {
                    Style::default()
                        .fg(FOCUS_HIGHLIGHT)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(TITLE_TEXT)
                };
                spans.push(Span::styled(format!(" {} ", ch), style));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

fn prompt() -> Line<'static> {
    Line::from(Span::styled(
        "  Cyrillic keyboard — arrows move, Enter picks:",
        Style::default().fg(PROMPT_TEXT),
    ))
}
