//! In-memory session holding the bearer token.
//!
//! The token lives only for the lifetime of the process. It is set by a
//! successful `login` (or seeded from configuration at start) and replaced by
//! a later login. There is no persistence and no refresh.

use std::sync::RwLock;

use tracing::debug;

/// Session state shared between the dispatcher and its callers.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
}

impl Session {
    /// Create an unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session pre-seeded with a token, if one is given.
    ///
    /// Empty tokens are treated as absent.
    pub fn with_token(token: Option<String>) -> Self {
        let session = Self::new();
        if let Some(token) = token {
            session.set_token(token);
        }
        session
    }

    /// Store a token, replacing any previous one.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        if token.is_empty() {
            return;
        }
        // A poisoned lock only means a writer panicked mid-assignment of an
        // Option, which cannot leave it half-written.
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token);
        debug!("Session token stored");
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Whether a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_set_and_replace_token() {
        let session = Session::new();

        session.set_token("first");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("first".to_string()));

        session.set_token("second");
        assert_eq!(session.token(), Some("second".to_string()));
    }

    #[test]
    fn test_with_token() {
        let session = Session::with_token(Some("seeded".to_string()));
        assert_eq!(session.token(), Some("seeded".to_string()));

        let session = Session::with_token(None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_empty_token_ignored() {
        let session = Session::with_token(Some(String::new()));
        assert!(!session.is_authenticated());

        session.set_token("kept");
        session.set_token("");
        assert_eq!(session.token(), Some("kept".to_string()));
    }
}
