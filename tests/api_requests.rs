use kartochki::api::{Flashcard, FlashcardFields, PreparedRequest};
use reqwest::Method;
use serde_json::json;

/// The request URL is the base joined with the resource path, with the id
/// appended as an extra path segment when present.
#[test]
fn url_joins_base_resource_and_id() {
    let prepared = PreparedRequest::new(
        "http://localhost:4741",
        "/flashcards",
        Method::DELETE,
        None,
        Some("token-1"),
        Some("abc123"),
    );
    assert_eq!(prepared.url, "http://localhost:4741/flashcards/abc123");
    assert_eq!(prepared.method, Method::DELETE);
    assert_eq!(prepared.bearer.as_deref(), Some("token-1"));
    assert!(prepared.body.is_none());
}

/// A trailing slash on the configured base URL does not double up.
#[test]
fn trailing_slash_on_base_is_trimmed() {
    let prepared = PreparedRequest::new(
        "http://localhost:4741/",
        "/sign-in",
        Method::POST,
        None,
        None,
        None,
    );
    assert_eq!(prepared.url, "http://localhost:4741/sign-in");
}

/// Anonymous calls carry no bearer token.
#[test]
fn anonymous_requests_have_no_bearer() {
    let body = json!({ "credentials": { "email": "a@b.c", "password": "p" } });
    let prepared = PreparedRequest::new(
        "http://localhost:4741",
        "/sign-in",
        Method::POST,
        Some(body.clone()),
        None,
        None,
    );
    assert_eq!(prepared.bearer, None);
    assert_eq!(prepared.body, Some(body));
}

/// Flashcard payloads keep the service's camel-case key spelling.
#[test]
fn flashcard_fields_serialize_with_service_keys() {
    let fields = FlashcardFields {
        english_word: "dog".to_string(),
        russian_word: "собака".to_string(),
    };
    let value = serde_json::to_value(&fields).unwrap();
    assert_eq!(
        value,
        json!({ "englishWord": "dog", "russianWord": "собака" })
    );
}

/// Flashcards decode from the wire shape the service actually sends,
/// Mongo-style `_id` included.
#[test]
fn flashcard_decodes_from_service_response() {
    let card: Flashcard = serde_json::from_value(json!({
        "_id": "5d2f8a",
        "englishWord": "cat",
        "russianWord": "кошка",
        "__v": 0
    }))
    .unwrap();
    assert_eq!(card.id, "5d2f8a");
    assert_eq!(card.english_word, "cat");
    assert_eq!(card.russian_word, "кошка");
}

/// Word matching works from either side and ignores an empty side.
#[test]
fn matches_word_checks_both_sides() {
    let card = Flashcard {
        id: "1".to_string(),
        english_word: "dog".to_string(),
        russian_word: "собака".to_string(),
    };
    assert!(card.matches_word("dog", ""));
    assert!(card.matches_word("", "собака"));
    assert!(!card.matches_word("cat", ""));
    assert!(!card.matches_word("", ""));
}
