#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session state: a single in-memory flag, reset on every page load.
///
/// There is no token, no expiry, and no refresh — the backend tracks the
/// real session in a cookie, and this flag only selects which screen the
/// router shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
}

impl SessionState {
    /// Transition to the authenticated state after a successful login.
    pub fn log_in(&mut self) {
        self.authenticated = true;
    }

    /// Transition back to the unauthenticated state.
    pub fn log_out(&mut self) {
        self.authenticated = false;
    }
}
