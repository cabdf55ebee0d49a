//! Wire types for the flashcards API.
//!
//! Key spelling follows the service exactly: camelCase word fields, a
//! Mongo-style `_id`, and request bodies nested under a named envelope key
//! (`credentials`, `passwords`, `flashcard`).

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `POST /sign-in`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UserSession {
    pub email: String,
    pub token: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Flashcard {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "englishWord")]
    pub english_word: String,
    #[serde(rename = "russianWord")]
    pub russian_word: String,
}

impl Flashcard {
    /// Exact-match lookup used by the update and delete screens: a card is
    /// found when either side matches the typed word.
    pub fn matches_word(&self, english: &str, russian: &str) -> bool {
        (!english.is_empty() && self.english_word == english)
            || (!russian.is_empty() && self.russian_word == russian)
    }
}

/// The two word sides of a card, as sent in create/update bodies.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FlashcardFields {
    #[serde(rename = "englishWord")]
    pub english_word: String,
    #[serde(rename = "russianWord")]
    pub russian_word: String,
}

#[derive(Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: UserSession,
}

#[derive(Deserialize)]
pub(crate) struct FlashcardsEnvelope {
    pub flashcards: Vec<Flashcard>,
}

#[derive(Deserialize)]
pub(crate) struct FlashcardEnvelope {
    pub flashcard: Flashcard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flashcard_uses_service_key_spelling() {
        let card: Flashcard =
            serde_json::from_str(r#"{"_id":"42","englishWord":"cat","russianWord":"кошка"}"#)
                .unwrap();
        assert_eq!(card.id, "42");
        assert_eq!(card.english_word, "cat");
        assert_eq!(card.russian_word, "кошка");

        let body = serde_json::to_value(FlashcardFields {
            english_word: "cat".into(),
            russian_word: "кошка".into(),
        })
        .unwrap();
        assert_eq!(body["englishWord"], "cat");
        assert_eq!(body["russianWord"], "кошка");
    }

    #[test]
    fn matches_word_ignores_empty_sides() {
        let card = Flashcard {
            id: "1".into(),
            english_word: "dog".into(),
            russian_word: "собака".into(),
        };
        assert!(card.matches_word("dog", ""));
        assert!(card.matches_word("", "собака"));
        assert!(!card.matches_word("", ""));
        assert!(!card.matches_word("cat", "кошка"));
    }
}
