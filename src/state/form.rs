#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::api::AuthError;

/// Message shown after a successful registration flips the form back to login.
pub const REGISTERED_MESSAGE: &str = "Registration successful! Please log in.";

/// Which of the two auth request shapes the form currently sends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Backend endpoint path for this mode.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }

    /// Form heading and submit button label.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    /// Label on the secondary button that switches to the other mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "Need an account? Register",
            Self::Register => "Have an account? Login",
        }
    }
}

/// Auth form state: the active mode, both input fields, the status line,
/// and the in-flight guard that refuses overlapping submits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
    pub status: Option<String>,
    pub in_flight: bool,
}

impl AuthFormState {
    /// Switch between login and register. Clears nothing else; a stale
    /// status message stays visible until the next submit.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Start a submission: clears the status line and raises the in-flight
    /// guard. Returns `false` (and changes nothing) if a request is already
    /// in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.status = None;
        self.in_flight = true;
        true
    }

    /// Record a successful response.
    ///
    /// Returns `true` when the submission was a login and the caller should
    /// fire the success callback. A successful registration instead flips
    /// the form back to login mode and shows [`REGISTERED_MESSAGE`].
    pub fn submit_succeeded(&mut self) -> bool {
        self.in_flight = false;
        match self.mode {
            AuthMode::Login => true,
            AuthMode::Register => {
                self.mode = AuthMode::Login;
                self.status = Some(REGISTERED_MESSAGE.to_owned());
                false
            }
        }
    }

    /// Record a failed response: the rendered error becomes the status line.
    pub fn submit_failed(&mut self, error: &AuthError) {
        self.in_flight = false;
        self.status = Some(error.to_string());
    }
}
