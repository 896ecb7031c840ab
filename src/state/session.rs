#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Authentication flag for the current browser session.
///
/// Owned by the app root and shared through a `RwSignal` context. The flag
/// lives as long as the page: a full reload starts over unauthenticated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    authenticated: bool,
}

impl SessionState {
    /// Fresh, unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session authenticated. Idempotent.
    ///
    /// Callers are expected to have already decided the login succeeded;
    /// no credential check happens here.
    pub fn authenticate(&mut self) {
        if !self.authenticated {
            log::info!("session: authenticated");
        }
        self.authenticated = true;
    }

    /// Mark the session unauthenticated. Idempotent.
    pub fn signout(&mut self) {
        if self.authenticated {
            log::info!("session: signed out");
        }
        self.authenticated = false;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
