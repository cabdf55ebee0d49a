//! Create-flashcard form with the embedded Cyrillic soft keyboard.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

use crate::api::FlashcardFields;
use crate::keyboard::{KeyboardHub, KeyboardSubscription};
use crate::registry::ViewId;
use crate::session::SessionContext;
use crate::ui::app::{ApiCall, ApiOutcome, Effect};
use crate::ui::form::InputField;
use crate::ui::status::StatusKind;
use crate::ui::views::{prompt_line, render_panel, step_cursor, KeyboardPanel, Screen};

const FOCUS_ENGLISH: usize = 0;
const FOCUS_RUSSIAN: usize = 1;
const FOCUS_KEYBOARD: usize = 2;

pub struct CreateCardScreen {
    english: InputField,
    russian: InputField,
    focus: usize,
    panel: KeyboardPanel,
    publisher: KeyboardHub,
    subscription: KeyboardSubscription,
}

impl CreateCardScreen {
    pub fn new(hub: &KeyboardHub) -> Self {
        Self {
            english: InputField::new("English"),
            russian: InputField::new("Russian"),
            focus: FOCUS_ENGLISH,
            panel: KeyboardPanel::new(),
            publisher: hub.clone(),
            subscription: hub.subscribe(),
        }
    }

    fn submit(&self) -> Vec<Effect> {
        if self.english.is_empty() || self.russian.is_empty() {
            return vec![Effect::ShowStatus(
                StatusKind::Error,
                "Enter both the English and Russian words.".to_string(),
            )];
        }
        vec![Effect::Call(ApiCall::CreateCard {
            fields: FlashcardFields {
                english_word: self.english.value().to_string(),
                russian_word: self.russian.value().to_string(),
            },
        })]
    }
}

impl Screen for CreateCardScreen {
    fn reset(&mut self) {
        self.english.clear();
        self.russian.clear();
        self.focus = FOCUS_ENGLISH;
        self.panel.reset();
        // Characters published while another view was visible are stale.
        self.subscription.drain();
    }

    fn hints(&self) -> &'static str {
        " Tab cycle focus │ Enter submit/pick │ Esc back"
    }

    fn handle_key(&mut self, key: KeyEvent, _session: &mut SessionContext) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => return vec![Effect::Navigate(ViewId::Options)],
            KeyCode::Tab => {
                self.focus = step_cursor(self.focus, 3, false);
                return Vec::new();
            }
            KeyCode::BackTab => {
                self.focus = step_cursor(self.focus, 3, true);
                return Vec::new();
            }
            _ => {}
        }

        if self.focus == FOCUS_KEYBOARD {
            if let Some(ch) = self.panel.handle_key(&key) {
                self.publisher.publish(ch);
            }
            return Vec::new();
        }

        if key.code == KeyCode::Enter {
            return self.submit();
        }
        if self.focus == FOCUS_ENGLISH {
            self.english.handle_key(&key);
        } else {
            self.russian.handle_key(&key);
        }
        Vec::new()
    }

    fn on_api(&mut self, outcome: ApiOutcome, _session: &mut SessionContext) -> Vec<Effect> {
        match outcome {
            ApiOutcome::CardCreated(Ok(_)) => vec![Effect::ShowStatus(
                StatusKind::Info,
                "The flashcard was successfully created.".to_string(),
            )],
            ApiOutcome::CardCreated(Err(error)) => {
                tracing::warn!(target: "create_card", %error, "create failed");
                vec![Effect::ShowStatus(
                    StatusKind::Error,
                    "The flashcard creation failed. Please try again.".to_string(),
                )]
            }
            _ => Vec::new(),
        }
    }

    fn on_tick(&mut self) {
        for ch in self.subscription.drain() {
            self.russian.push_char(ch);
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _session: &SessionContext) {
        let mut lines = vec![
            prompt_line("Create a new flashcard."),
            Line::default(),
            self.english.line(self.focus == FOCUS_ENGLISH),
            self.russian.line(self.focus == FOCUS_RUSSIAN),
            Line::default(),
        ];
        lines.extend(self.panel.lines(self.focus == FOCUS_KEYBOARD));
        render_panel(frame, area, "Create flashcard", lines);
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
    fn picked_characters_reach_the_russian_field_on_tick() {
        let hub = KeyboardHub::new();
        let mut screen = CreateCardScreen::new(&hub);
        let mut session = SessionContext::new();

        // Focus the keyboard panel and pick the first letter.
        screen.handle_key(press(KeyCode::Tab), &mut session);
        screen.handle_key(press(KeyCode::Tab), &mut session);
        screen.handle_key(press(KeyCode::Enter), &mut session);

        assert_eq!(screen.russian.value(), "");
        screen.on_tick();
        assert_eq!(screen.russian.value(), "а");
    }

    #[test]
    fn submit_sends_both_words() {
        let hub = KeyboardHub::new();
        let mut screen = CreateCardScreen::new(&hub);
        let mut session = SessionContext::new();

        screen.handle_key(press(KeyCode::Char('c')), &mut session);
        screen.handle_key(press(KeyCode::Tab), &mut session);
        screen.handle_key(press(KeyCode::Char('к')), &mut session);

        let effects = screen.handle_key(press(KeyCode::Enter), &mut session);
        match &effects[0] {
            Effect::Call(ApiCall::CreateCard { fields }) => {
                assert_eq!(fields.english_word, "c");
                assert_eq!(fields.russian_word, "к");
            }
            other => panic!("unexpected effect: {:?}", other),
        }
    }

    #[test]
    fn reset_discards_pending_keyboard_characters() {
        let hub = KeyboardHub::new();
        let mut screen = CreateCardScreen::new(&hub);
        hub.publish('ж');
        screen.reset();
        screen.on_tick();
        assert_eq!(screen.russian.value(), "");
    }
}
