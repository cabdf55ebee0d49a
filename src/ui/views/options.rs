//! The signed-in hub: every flashcard operation starts here, and so does
//! signing out.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

use crate::registry::ViewId;
use crate::session::SessionContext;
use crate::ui::app::{ApiCall, ApiOutcome, Effect};
use crate::ui::status::StatusKind;
use crate::ui::views::{menu_lines, prompt_line, render_panel, step_cursor, Screen};

const ITEMS: [&'static str; 6] = [
    "Review flashcards",
    "Create a flashcard",
    "Update a flashcard",
    "Delete a flashcard",
    "Change password",
    "Sign out",
];

pub struct OptionsScreen {
    cursor: usize,
}

impl Default for OptionsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsScreen {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    fn choose(&self) -> Vec<Effect> {
        match self.cursor {
            0 => vec![Effect::Navigate(ViewId::Review)],
            1 => vec![Effect::Navigate(ViewId::CreateCard)],
            2 => vec![Effect::Navigate(ViewId::UpdateCard)],
            3 => vec![Effect::Navigate(ViewId::DeleteCard)],
            4 => vec![Effect::Navigate(ViewId::ChangePassword)],
            _ => vec![Effect::Call(ApiCall::SignOut)],
        }
    }
}

impl Screen for OptionsScreen {
    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn hints(&self) -> &'static str {
        " ↑/↓ select │ Enter choose"
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
            KeyCode::Enter => self.choose(),
            _ => Vec::new(),
        }
    }

    fn on_api(&mut self, outcome: ApiOutcome, session: &mut SessionContext) -> Vec<Effect> {
        match outcome {
            ApiOutcome::SignedOut(Ok(())) => {
                session.clear();
                vec![
                    Effect::ShowStatus(
                        StatusKind::Info,
                        "You have exited the Russian Flashcards app.".to_string(),
                    ),
                    Effect::Navigate(ViewId::Home),
                ]
            }
            ApiOutcome::SignedOut(Err(error)) => {
                tracing::warn!(target: "options", %error, "sign out failed");
                vec![Effect::ShowStatus(
                    StatusKind::Error,
                    "Your attempt to signout failed. Try again.".to_string(),
                )]
            }
            _ => Vec::new(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, session: &SessionContext) {
        let mut lines = vec![prompt_line("Please choose an option below"), Line::default()];
        lines.extend(menu_lines(&ITEMS, self.cursor));
        let title = match &session.user {
            Some(user) => format!("Flashcards — {}", user.email),
            None => "Flashcards".to_string(),
        };
        render_panel(frame, area, &title, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserSession;
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
    fn last_entry_signs_out() {
        let mut screen = OptionsScreen::new();
        let mut session = SessionContext::new();
        screen.handle_key(press(KeyCode::Up), &mut session);
        let effects = screen.handle_key(press(KeyCode::Enter), &mut session);
        assert!(matches!(effects[0], Effect::Call(ApiCall::SignOut)));
    }

    #[test]
    fn sign_out_clears_the_session() {
        let mut screen = OptionsScreen::new();
        let mut session = SessionContext::new();
        session.user = Some(UserSession {
            email: "a@b.c".into(),
            token: "tok".into(),
        });

        let effects = screen.on_api(ApiOutcome::SignedOut(Ok(())), &mut session);
        assert!(!session.is_signed_in());
        assert!(matches!(effects[1], Effect::Navigate(ViewId::Home)));
    }
}
