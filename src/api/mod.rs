//! HTTP client for the remote flashcards service.

mod client;
mod error;
mod types;

pub use client::{ApiClient, PreparedRequest};
pub use error::ApiError;
pub use types::{Flashcard, FlashcardFields, UserSession};
