//! # Session State
//!
//! Who is signed in and the bearer token their requests carry. Memory
//! only: the store is rebuilt from the backend each session, and token
//! issuance itself happens entirely server-side.

use repick_core::{UserId, Watchable, Watcher};
use serde::{Deserialize, Serialize};

/// Signed-in user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub id: UserId,
    /// Display nickname
    pub nickname: String,
    /// Account email
    pub email: String,
    /// Avatar URL, when set
    pub profile_image: Option<String>,
}

/// Session state for the current app run.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Profile of the signed-in user
    pub user: Option<UserProfile>,
    /// Bearer token for authenticated requests
    pub token: Option<String>,
}

impl SessionState {
    /// Whether a user is signed in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Shared handle over [`SessionState`].
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Watchable<SessionState>,
}

impl SessionStore {
    /// Empty (signed-out) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.inner.read(SessionState::is_logged_in)
    }

    /// Current bearer token, if signed in.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.read(|state| state.token.clone())
    }

    /// Current user profile, if signed in.
    #[must_use]
    pub fn current_user(&self) -> Option<UserProfile> {
        self.inner.read(|state| state.user.clone())
    }

    /// Install a signed-in session.
    pub fn log_in(&self, user: UserProfile, token: String) {
        self.inner.update(|state| {
            state.user = Some(user);
            state.token = Some(token);
        });
    }

    /// Clear the session.
    pub fn log_out(&self) {
        self.inner.update(|state| {
            state.user = None;
            state.token = None;
        });
    }

    /// Subscribe to session changes.
    #[must_use]
    pub fn watch(&self) -> Watcher<SessionState> {
        self.inner.watch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: UserId(7),
            nickname: "체리".to_string(),
            email: "fan@example.com".to_string(),
            profile_image: None,
        }
    }

    #[test]
    fn test_starts_signed_out() {
        let store = SessionStore::new();
        assert!(!store.is_logged_in());
        assert!(store.token().is_none());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_login_then_logout() {
        let store = SessionStore::new();
        store.log_in(profile(), "tok".to_string());
        assert!(store.is_logged_in());
        assert_eq!(store.token().as_deref(), Some("tok"));

        store.log_out();
        assert!(!store.is_logged_in());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_watchers_see_session_changes() {
        let store = SessionStore::new();
        let mut watcher = store.watch();
        store.log_in(profile(), "tok".to_string());
        let state = watcher.poll().expect("login publishes");
        assert!(state.is_logged_in());
    }
}
