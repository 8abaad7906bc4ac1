//! Persisted login state
//!
//! Token and user are opaque to the UI: they are stored after login, attached
//! to authenticated calls and dropped on logout.

use crate::config::AuthConfig;
use crate::platform::KeyValueStore;
use folio_types::{AuthResponse, User};
use tracing::{info, warn};

pub struct AuthSession {
    config: AuthConfig,
    store: Box<dyn KeyValueStore>,
    user: Option<User>,
}

impl AuthSession {
    /// Restore any session left in the store
    pub fn new(config: AuthConfig, store: Box<dyn KeyValueStore>) -> Self {
        let user = store
            .get(&config.user_key)
            .and_then(|json| match serde_json::from_str::<User>(&json) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Discarding unreadable stored user: {e}");
                    None
                }
            });
        Self {
            config,
            store,
            user,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store
            .get(&self.config.token_key)
            .filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a successful login or registration
    pub fn establish(&mut self, response: AuthResponse) {
        info!("Logged in as {}", response.user.email);
        self.store.set(&self.config.token_key, &response.token);
        match serde_json::to_string(&response.user) {
            Ok(json) => self.store.set(&self.config.user_key, &json),
            Err(e) => warn!("Could not persist user: {e}"),
        }
        self.user = Some(response.user);
    }

    /// Refresh the cached user after `GET /auth/me`
    pub fn set_user(&mut self, user: User) {
        if let Ok(json) = serde_json::to_string(&user) {
            self.store.set(&self.config.user_key, &json);
        }
        self.user = Some(user);
    }

    pub fn clear(&mut self) {
        if self.user.is_some() {
            info!("Logged out");
        }
        self.store.remove(&self.config.token_key);
        self.store.remove(&self.config.user_key);
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    fn response() -> AuthResponse {
        AuthResponse {
            token: "tok".to_string(),
            user: User {
                id: "1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_establish_and_clear() {
        let mut session = AuthSession::new(AuthConfig::default(), Box::new(MemoryStore::new()));
        assert!(!session.is_logged_in());

        session.establish(response());
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Ada"));

        session.clear();
        assert!(!session.is_logged_in());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_restores_from_store() {
        let config = AuthConfig::default();
        let mut store = MemoryStore::new();
        store.set(&config.token_key, "tok");
        store.set(
            &config.user_key,
            r#"{"id":"9","name":"Grace","email":"grace@example.com"}"#,
        );

        let session = AuthSession::new(config, Box::new(store));
        assert!(session.is_logged_in());
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("9"));
    }

    #[test]
    fn test_corrupt_user_is_dropped() {
        let config = AuthConfig::default();
        let mut store = MemoryStore::new();
        store.set(&config.user_key, "{not json");

        let session = AuthSession::new(config, Box::new(store));
        assert!(session.user().is_none());
    }
}
