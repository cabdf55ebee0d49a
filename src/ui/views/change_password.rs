//! Password change form. Submission is refused until both fields are
//! filled, and the fields are cleared after every attempt, success or not.

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

pub struct ChangePasswordScreen {
    old_password: InputField,
    new_password: InputField,
    focus: usize,
}

impl Default for ChangePasswordScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangePasswordScreen {
    pub fn new() -> Self {
        Self {
            old_password: InputField::masked("Old password"),
            new_password: InputField::masked("New password"),
            focus: 0,
        }
    }

    fn can_submit(&self) -> bool {
        !self.old_password.is_empty() && !self.new_password.is_empty()
    }
}

impl Screen for ChangePasswordScreen {
    fn reset(&mut self) {
        self.old_password.clear();
        self.new_password.clear();
        self.focus = 0;
    }

    fn hints(&self) -> &'static str {
        " Tab next field │ Enter submit │ Esc back"
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &mut SessionContext) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => vec![Effect::Navigate(ViewId::Options)],
            KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => {
                self.focus = step_cursor(self.focus, 2, false);
                Vec::new()
            }
            KeyCode::Enter => {
                if !self.can_submit() {
                    return vec![Effect::ShowStatus(
                        StatusKind::Error,
                        "Enter both your old and new passwords.".to_string(),
                    )];
                }
                vec![Effect::Call(ApiCall::ChangePassword {
                    old: self.old_password.value().to_string(),
                    new: self.new_password.value().to_string(),
                })]
            }
            _ => {
                if self.focus == 0 {
                    self.old_password.handle_key(&key);
                } else {
                    self.new_password.handle_key(&key);
                }
                Vec::new()
            }
        }
    }

    fn on_api(&mut self, outcome: ApiOutcome, _session: &mut SessionContext) -> Vec<Effect> {
        let effects = match outcome {
            ApiOutcome::PasswordChanged(Ok(())) => vec![Effect::ShowStatus(
                StatusKind::Info,
                "Your password was updated successfully.".to_string(),
            )],
            ApiOutcome::PasswordChanged(Err(error)) => {
                tracing::warn!(target: "change_password", %error, "password change failed");
                vec![Effect::ShowStatus(
                    StatusKind::Error,
                    "Your attempt to change your password failed. Please try again.".to_string(),
                )]
            }
            _ => return Vec::new(),
        };
        // Cleared on success and failure alike.
        self.reset();
        effects
    }

    fn render(&self, frame: &mut Frame, area: Rect, _session: &SessionContext) {
        let lines = vec![
            prompt_line("Change your password."),
            Line::default(),
            self.old_password.line(self.focus == 0),
            self.new_password.line(self.focus == 1),
        ];
        render_panel(frame, area, "Change password", lines);
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
    fn submit_refused_until_both_fields_filled() {
        let mut screen = ChangePasswordScreen::new();
        let mut session = SessionContext::new();

        screen.handle_key(press(KeyCode::Char('o')), &mut session);
        let effects = screen.handle_key(press(KeyCode::Enter), &mut session);
        assert!(matches!(
            effects[0],
            Effect::ShowStatus(StatusKind::Error, _)
        ));

        screen.handle_key(press(KeyCode::Tab), &mut session);
        screen.handle_key(press(KeyCode::Char('n')), &mut session);
        let effects = screen.handle_key(press(KeyCode::Enter), &mut session);
        assert!(matches!(effects[0], Effect::Call(ApiCall::ChangePassword { .. })));
    }

    #[test]
    fn fields_clear_after_either_outcome() {
        let mut screen = ChangePasswordScreen::new();
        let mut session = SessionContext::new();
        screen.handle_key(press(KeyCode::Char('o')), &mut session);

        screen.on_api(ApiOutcome::PasswordChanged(Ok(())), &mut session);
        assert!(!screen.can_submit());
        assert!(screen.old_password.is_empty());
    }
}
