use std::sync::RwLock;

/// Source of the bearer token for the calculations endpoints. In the
/// deployed system this is the locally persisted login session; tests
/// substitute the mock.
#[mockall::automock]
pub trait SessionStore: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// In-memory session state, set at login and cleared at logout.
#[derive(Debug, Default)]
pub struct SessionState {
    token: RwLock<Option<String>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_in(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    pub fn log_out(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}

impl SessionStore for SessionState {
    fn bearer_token(&self) -> Option<String> {
        // A poisoned lock reads as logged out rather than panicking the
        // submission path.
        self.token.read().ok().and_then(|slot| slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_a_token() {
        assert_eq!(SessionState::new().bearer_token(), None);
    }

    #[test]
    fn login_and_logout_update_the_token() {
        let session = SessionState::new();

        session.log_in("jwt-abc");
        assert_eq!(session.bearer_token(), Some("jwt-abc".to_owned()));

        session.log_in("jwt-def");
        assert_eq!(session.bearer_token(), Some("jwt-def".to_owned()));

        session.log_out();
        assert_eq!(session.bearer_token(), None);
    }
}
