//! Cross-view session state.
//!
//! An explicit context owned by the app and passed by reference into every
//! screen, so the "set here, read there" flow stays auditable. Writes are
//! last-write-wins; overlapping network calls may overwrite each other's
//! entries.

use crate::api::{Flashcard, UserSession};

#[derive(Debug, Default)]
pub struct SessionContext {
    /// The authenticated user, set by the sign-in screen and cleared on
    /// sign-out.
    pub user: Option<UserSession>,
    /// The flashcard currently under review or staged for update.
    pub current_flashcard: Option<Flashcard>,
    /// The flashcard staged for deletion by the delete screen's find step.
    pub flashcard_to_delete: Option<Flashcard>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bearer token for authenticated calls, if signed in.
    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.token.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Drops everything tied to the authenticated session.
    pub fn clear(&mut self) {
        self.user = None;
        self.current_flashcard = None;
        self.flashcard_to_delete = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserSession;

    #[test]
    fn token_follows_user() {
        let mut session = SessionContext::new();
        assert_eq!(session.token(), None);

        session.user = Some(UserSession {
            email: "a@b.c".into(),
            token: "abc".into(),
        });
        assert_eq!(session.token(), Some("abc"));

        session.clear();
        assert!(!session.is_signed_in());
    }
}
