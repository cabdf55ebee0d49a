//! Update-flashcard form.
//!
//! Two-step flow: find the card by typing either word and searching the
//! full list, then edit the populated fields and submit the change against
//! the found card's id.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
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

pub struct UpdateCardScreen {
    english: InputField,
    russian: InputField,
    focus: usize,
    panel: KeyboardPanel,
    publisher: KeyboardHub,
    subscription: KeyboardSubscription,
}

impl UpdateCardScreen {
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

    fn submit(&self, session: &SessionContext) -> Vec<Effect> {
        let Some(card) = &session.current_flashcard else {
            return vec![Effect::ShowStatus(
                StatusKind::Error,
                "Find a flashcard first (Ctrl+F).".to_string(),
            )];
        };
        vec![Effect::Call(ApiCall::UpdateCard {
            id: card.id.clone(),
            fields: FlashcardFields {
                english_word: self.english.value().to_string(),
                russian_word: self.russian.value().to_string(),
            },
        })]
    }
}

impl Screen for UpdateCardScreen {
    fn reset(&mut self) {
        self.english.clear();
        self.russian.clear();
        self.focus = FOCUS_ENGLISH;
        self.panel.reset();
        self.subscription.drain();
    }

    fn hints(&self) -> &'static str {
        " Ctrl+F find │ Tab cycle focus │ Enter submit/pick │ Esc back"
    }

    fn handle_key(&mut self, key: KeyEvent, session: &mut SessionContext) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => return vec![Effect::Navigate(ViewId::Options)],
            KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Effect::Call(ApiCall::ListCards)];
            }
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
            return self.submit(session);
        }
        if self.focus == FOCUS_ENGLISH {
            self.english.handle_key(&key);
        } else {
            self.russian.handle_key(&key);
        }
        Vec::new()
    }

    fn on_api(&mut self, outcome: ApiOutcome, session: &mut SessionContext) -> Vec<Effect> {
        match outcome {
            ApiOutcome::CardsListed(Ok(cards)) => {
                let found = cards
                    .into_iter()
                    .find(|card| card.matches_word(self.english.value(), self.russian.value()));
                match found {
                    Some(card) => {
                        self.english.set_value(card.english_word.clone());
                        self.russian.set_value(card.russian_word.clone());
                        session.current_flashcard = Some(card);
                        vec![Effect::ShowStatus(
                            StatusKind::Info,
                            "The flashcard was found".to_string(),
                        )]
                    }
                    None => vec![Effect::ShowStatus(
                        StatusKind::Error,
                        "The flashcard was not found. Try another word.".to_string(),
                    )],
                }
            }
            ApiOutcome::CardsListed(Err(error)) => {
                tracing::warn!(target: "update_card", %error, "find failed");
                vec![Effect::ShowStatus(
                    StatusKind::Error,
                    "The flashcard update failed. Please try again.".to_string(),
                )]
            }
            ApiOutcome::CardUpdated(Ok(())) => vec![Effect::ShowStatus(
                StatusKind::Info,
                "The flashcard was updated.".to_string(),
            )],
            ApiOutcome::CardUpdated(Err(error)) => {
                tracing::warn!(target: "update_card", %error, "update failed");
                vec![Effect::ShowStatus(
                    StatusKind::Error,
                    "The flashcard update failed. Please try again.".to_string(),
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

    fn render(&self, frame: &mut Frame, area: Rect, session: &SessionContext) {
        let found = match &session.current_flashcard {
            Some(card) => format!("Editing card {}", card.id),
            None => "Type a word on either side, then Ctrl+F to find its card.".to_string(),
        };
        let mut lines = vec![
            prompt_line("Update a flashcard."),
            Line::from(found),
            Line::default(),
            self.english.line(self.focus == FOCUS_ENGLISH),
            self.russian.line(self.focus == FOCUS_RUSSIAN),
            Line::default(),
        ];
        lines.extend(self.panel.lines(self.focus == FOCUS_KEYBOARD));
        render_panel(frame, area, "Update flashcard", lines);
    }
}
