//! Sign-in form. On success the returned user lands in the session
//! context and the app moves to the options screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

use crate::registry::ViewId;
use crate::session::SessionContext;
use crate::ui::app::{ApiCall, ApiOutcome, Effect};
use crate::ui::form::InputField;
use crate::ui::status::StatusKind;
use crate::ui::views::{prompt_line, render_panel, step_cursor, Screen};

pub struct SignInScreen {
    email: InputField,
    password: InputField,
    focus: usize,
}

impl Default for SignInScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SignInScreen {
    pub fn new() -> Self {
        Self {
            email: InputField::new("Email"),
            password: InputField::masked("Password"),
            focus: 0,
        }
    }

    fn submit(&self) -> Vec<Effect> {
        if self.email.is_empty() || self.password.is_empty() {
            return vec![Effect::ShowStatus(
                StatusKind::Error,
                "Please enter your email and password.".to_string(),
            )];
        }
        vec![Effect::Call(ApiCall::SignIn {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        })]
    }
}

impl Screen for SignInScreen {
    fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.focus = 0;
    }

    fn hints(&self) -> &'static str {
        " Tab next field │ Enter submit │ Esc back"
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &mut SessionContext) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => vec![Effect::Navigate(ViewId::Home)],
            KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => {
                self.focus = step_cursor(self.focus, 2, false);
                Vec::new()
            }
            KeyCode::Enter => self.submit(),
            _ => {
                if self.focus == 0 {
                    self.email.handle_key(&key);
                } else {
                    self.password.handle_key(&key);
                }
                Vec::new()
            }
        }
    }

    fn on_api(&mut self, outcome: ApiOutcome, session: &mut SessionContext) -> Vec<Effect> {
        match outcome {
            ApiOutcome::SignedIn(Ok(user)) => {
                let email = user.email.clone();
                session.user = Some(user);
                vec![
                    Effect::ShowStatus(
                        StatusKind::Info,
                        format!(
                            "Welcome {} to Russian Flashcards / карточки на русском.",
                            email
                        ),
                    ),
                    Effect::Navigate(ViewId::Options),
                ]
            }
            ApiOutcome::SignedIn(Err(error)) => {
                tracing::warn!(target: "sign_in", %error, "sign in failed");
                vec![Effect::ShowStatus(
                    StatusKind::Error,
                    format!("Signin failed {}. Please try again.", self.email.value()),
                )]
            }
            _ => Vec::new(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _session: &SessionContext) {
        let lines = vec![
            prompt_line("Sign in to your account."),
            Line::default(),
            self.email.line(self.focus == 0),
            self.password.line(self.focus == 1),
        ];
        render_panel(frame, area, "Sign in", lines);
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
    fn successful_sign_in_stores_the_user_and_navigates() {
        let mut screen = SignInScreen::new();
        let mut session = SessionContext::new();

        let outcome = ApiOutcome::SignedIn(Ok(UserSession {
            email: "a@b.c".into(),
            token: "tok".into(),
        }));
        let effects = screen.on_api(outcome, &mut session);

        assert_eq!(session.token(), Some("tok"));
        assert!(matches!(effects[1], Effect::Navigate(ViewId::Options)));
    }

    #[test]
    fn submit_requires_both_fields() {
        let mut screen = SignInScreen::new();
        let mut session = SessionContext::new();
        screen.handle_key(press(KeyCode::Char('a')), &mut session);
        let effects = screen.handle_key(press(KeyCode::Enter), &mut session);
        assert!(matches!(
            effects[0],
            Effect::ShowStatus(StatusKind::Error, _)
        ));
    }
}
