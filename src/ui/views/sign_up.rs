//! Account creation form.

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

pub struct SignUpScreen {
    email: InputField,
    password: InputField,
    confirmation: InputField,
    focus: usize,
}

impl Default for SignUpScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpScreen {
    pub fn new() -> Self {
        Self {
            email: InputField::new("Email"),
            password: InputField::masked("Password"),
            confirmation: InputField::masked("Confirm"),
            focus: 0,
        }
    }

    fn fields_mut(&mut self) -> [&mut InputField; 3] {
        [&mut self.email, &mut self.password, &mut self.confirmation]
    }

    fn submit(&self) -> Vec<Effect> {
        if self.email.is_empty() || self.password.is_empty() || self.confirmation.is_empty() {
            return vec![Effect::ShowStatus(
                StatusKind::Error,
                "Please fill in every field.".to_string(),
            )];
        }
        if self.password.value() != self.confirmation.value() {
            return vec![Effect::ShowStatus(
                StatusKind::Error,
                "The passwords do not match.".to_string(),
            )];
        }
        vec![Effect::Call(ApiCall::SignUp {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
            password_confirmation: self.confirmation.value().to_string(),
        })]
    }
}

impl Screen for SignUpScreen {
    fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.confirmation.clear();
        self.focus = 0;
    }

    fn hints(&self) -> &'static str {
        " Tab next field │ Enter submit │ Esc back"
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &mut SessionContext) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => vec![Effect::Navigate(ViewId::Home)],
            KeyCode::Tab | KeyCode::Down => {
                self.focus = step_cursor(self.focus, 3, false);
                Vec::new()
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = step_cursor(self.focus, 3, true);
                Vec::new()
            }
            KeyCode::Enter => self.submit(),
            _ => {
                let focus = self.focus;
                self.fields_mut()[focus].handle_key(&key);
                Vec::new()
            }
        }
    }

    fn on_api(&mut self, outcome: ApiOutcome, _session: &mut SessionContext) -> Vec<Effect> {
        match outcome {
            ApiOutcome::SignedUp(Ok(())) => vec![
                Effect::ShowStatus(
                    StatusKind::Info,
                    "Your account was created. Please sign in.".to_string(),
                ),
                Effect::Navigate(ViewId::SignIn),
            ],
            ApiOutcome::SignedUp(Err(error)) => {
                tracing::warn!(target: "sign_up", %error, "sign up failed");
                vec![Effect::ShowStatus(
                    StatusKind::Error,
                    "Your sign up failed. Please try again.".to_string(),
                )]
            }
            _ => Vec::new(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _session: &SessionContext) {
        let lines = vec![
            prompt_line("Create your account."),
            Line::default(),
            self.email.line(self.focus == 0),
            self.password.line(self.focus == 1),
            self.confirmation.line(self.focus == 2),
        ];
        render_panel(frame, area, "Create account", lines);
    }
}
