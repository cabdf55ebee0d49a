//! Flashcard review: load the deck, draw cards at random without
//! replacement, answer in the other language, check, repeat.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

use crate::api::Flashcard;
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

/// Which side of the card is shown as the prompt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PromptLanguage {
    English,
    Russian,
}

pub struct ReviewScreen {
    language: PromptLanguage,
    deck: Vec<Flashcard>,
    english: InputField,
    russian: InputField,
    focus: usize,
    panel: KeyboardPanel,
    publisher: KeyboardHub,
    subscription: KeyboardSubscription,
}

impl ReviewScreen {
    pub fn new(hub: &KeyboardHub) -> Self {
        Self {
            language: PromptLanguage::English,
            deck: Vec::new(),
            english: InputField::new("English"),
            russian: InputField::new("Russian"),
            focus: FOCUS_ENGLISH,
            panel: KeyboardPanel::new(),
            publisher: hub.clone(),
            subscription: hub.subscribe(),
        }
    }

    /// Draws the next card from the deck, prompting in the chosen
    /// language. Cards are not replaced; an empty deck announces itself.
    fn next_card(&mut self, session: &mut SessionContext) -> Vec<Effect> {
        self.english.clear();
        self.russian.clear();

        if self.deck.is_empty() {
            // Nothing left to grade against either.
            session.current_flashcard = None;
            return vec![Effect::ShowStatus(
                StatusKind::Info,
                "There are no more flashcards left. Press Ctrl+L to load them again.".to_string(),
            )];
        }

        let index = rand::thread_rng().gen_range(0..self.deck.len());
        let card = self.deck.remove(index);
        match self.language {
            PromptLanguage::English => self.english.set_value(card.english_word.clone()),
            PromptLanguage::Russian => self.russian.set_value(card.russian_word.clone()),
        }
        session.current_flashcard = Some(card);
        Vec::new()
    }

    fn check_answer(&self, session: &SessionContext) -> Vec<Effect> {
        let Some(card) = &session.current_flashcard else {
            return vec![Effect::ShowStatus(
                StatusKind::Error,
                "Load the flashcards first (Ctrl+L).".to_string(),
            )];
        };
        let correct = card.english_word == self.english.value()
            && card.russian_word == self.russian.value();
        if correct {
            vec![Effect::ShowStatus(
                StatusKind::Info,
                "You answered correctly.".to_string(),
            )]
        } else {
            vec![Effect::ShowStatus(
                StatusKind::Error,
                "You answered incorrectly. You need more practice.".to_string(),
            )]
        }
    }
}

impl Screen for ReviewScreen {
    fn reset(&mut self) {
        self.deck.clear();
        self.english.clear();
        self.russian.clear();
        self.focus = FOCUS_ENGLISH;
        self.panel.reset();
        self.subscription.drain();
    }

    fn hints(&self) -> &'static str {
        " Ctrl+L load │ Ctrl+N next │ Ctrl+T language │ Enter check │ Esc back"
    }

    fn handle_key(&mut self, key: KeyEvent, session: &mut SessionContext) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('l') => return vec![Effect::Call(ApiCall::ListCards)],
                KeyCode::Char('n') => return self.next_card(session),
                KeyCode::Char('t') => {
                    self.language = match self.language {
                        PromptLanguage::English => PromptLanguage::Russian,
                        PromptLanguage::Russian => PromptLanguage::English,
                    };
                    return Vec::new();
                }
                _ => return Vec::new(),
            }
        }

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
            return self.check_answer(session);
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
                self.deck = cards;
                let mut effects = vec![Effect::ShowStatus(
                    StatusKind::Info,
                    "The flashcards were loaded.".to_string(),
                )];
                effects.extend(self.next_card(session));
                effects
            }
            ApiOutcome::CardsListed(Err(error)) => {
                tracing::warn!(target: "review", %error, "deck load failed");
                vec![Effect::ShowStatus(
                    StatusKind::Error,
                    "Your flashcards could not be loaded.".to_string(),
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
        let language = match self.language {
            PromptLanguage::English => "Prompts are shown in English.",
            PromptLanguage::Russian => "Prompts are shown in Russian.",
        };
        let mut lines = vec![
            prompt_line("Review your flashcards. Fill in the missing side."),
            Line::from(format!("{} {} cards left in this round.", language, self.deck.len())),
            Line::default(),
            self.english.line(self.focus == FOCUS_ENGLISH),
            self.russian.line(self.focus == FOCUS_RUSSIAN),
            Line::default(),
        ];
        lines.extend(self.panel.lines(self.focus == FOCUS_KEYBOARD));
        render_panel(frame, area, "Review flashcards", lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn card(id: &str, en: &str, ru: &str) -> Flashcard {
        Flashcard {
            id: id.into(),
            english_word: en.into(),
            russian_word: ru.into(),
        }
    }

    #[test]
    fn loading_the_deck_draws_a_card() {
        let hub = KeyboardHub::new();
        let mut screen = ReviewScreen::new(&hub);
        let mut session = SessionContext::new();

        let cards = vec![card("1", "dog", "собака")];
        screen.on_api(ApiOutcome::CardsListed(Ok(cards)), &mut session);

        assert_eq!(screen.english.value(), "dog");
        assert!(screen.deck.is_empty());
        assert!(session.current_flashcard.is_some());
    }

    #[test]
    fn correct_answer_is_recognized() {
        let hub = KeyboardHub::new();
        let mut screen = ReviewScreen::new(&hub);
        let mut session = SessionContext::new();
        session.current_flashcard = Some(card("1", "dog", "собака"));
        screen.english.set_value("dog");
        screen.russian.set_value("собака");

        let effects = screen.handle_key(press(KeyCode::Enter), &mut session);
        assert!(matches!(
            &effects[0],
            Effect::ShowStatus(StatusKind::Info, message) if message == "You answered correctly."
        ));
    }

    #[test]
    fn exhaustion_clears_the_card_under_review() {
        let hub = KeyboardHub::new();
        let mut screen = ReviewScreen::new(&hub);
        let mut session = SessionContext::new();

        // One-card deck: the load draws it, the next draw exhausts.
        let cards = vec![card("1", "dog", "собака")];
        screen.on_api(ApiOutcome::CardsListed(Ok(cards)), &mut session);
        assert!(session.current_flashcard.is_some());

        let mut next = press(KeyCode::Char('n'));
        next.modifiers = KeyModifiers::CONTROL;
        screen.handle_key(next, &mut session);
        assert!(session.current_flashcard.is_none());

        // Enter no longer grades against the card that is gone.
        let effects = screen.handle_key(press(KeyCode::Enter), &mut session);
        assert!(matches!(
            &effects[0],
            Effect::ShowStatus(StatusKind::Error, message) if message.contains("Load the flashcards")
        ));
    }

    #[test]
    fn exhausted_deck_is_announced() {
        let hub = KeyboardHub::new();
        let mut screen = ReviewScreen::new(&hub);
        let mut session = SessionContext::new();

        let mut key = press(KeyCode::Char('n'));
        key.modifiers = KeyModifiers::CONTROL;
        let effects = screen.handle_key(key, &mut session);
        assert!(matches!(
            effects[0],
            Effect::ShowStatus(StatusKind::Info, _)
        ));
    }
}
