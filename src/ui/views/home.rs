//! The landing screen: create an account or sign in.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

use crate::registry::ViewId;
use crate::session::SessionContext;
use crate::ui::app::Effect;
use crate::ui::views::{menu_lines, prompt_line, render_panel, step_cursor, Screen};

const ITEMS: [&'static str; 2] = ["Create an account", "Sign in"];

pub struct HomeScreen {
    cursor: usize,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }
}

impl Screen for HomeScreen {
    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn hints(&self) -> &'static str {
        " ↑/↓ select │ Enter choose │ q quit"
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &mut SessionContext) -> Vec<Effect> {
        match key.code {
            KeyCode::Up => {
                self.cursor = step_cursor(self.cursor, ITEMS.len(), true);
                Vec::new()
            }
            KeyCode::Down => {
                self.cursor = step_cursor(self.cursor, ITEMS.len(), false);
                Vec::new()
            }
            KeyCode::Enter => match self.cursor {
                0 => vec![Effect::Navigate(ViewId::SignUp)],
                _ => vec![Effect::Navigate(ViewId::SignIn)],
            },
            KeyCode::Char('q') => vec![Effect::Quit],
            _ => Vec::new(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _session: &SessionContext) {
        let mut lines = vec![
            prompt_line("Study Russian vocabulary with flashcards."),
            Line::default(),
        ];
        lines.extend(menu_lines(&ITEMS, self.cursor));
        render_panel(frame, area, "Welcome", lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn enter_navigates_to_the_selected_entry() {
        let mut screen = HomeScreen::new();
        let mut session = SessionContext::new();

        let effects = screen.handle_key(press(KeyCode::Enter), &mut session);
        assert!(matches!(effects[0], Effect::Navigate(ViewId::SignUp)));

        screen.handle_key(press(KeyCode::Down), &mut session);
        let effects = screen.handle_key(press(KeyCode::Enter), &mut session);
        assert!(matches!(effects[0], Effect::Navigate(ViewId::SignIn)));
    }
}
