//! REST API helpers for the auth endpoints.
//!
//! The backend is a separate service listening on port 5000 of whatever host
//! served this page, so the request URL is derived from `window.location`
//! at call time. Requests carry credentials so the backend's session cookie
//! is set and sent.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a two-variant [`AuthError`] instead of a raw transport error.
//! Both variants render to the plain-text line the form displays; the split
//! only exists so tests can pin the display contract and so the real
//! transport cause can be logged to the console.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::net::types::{ApiMessage, Credentials};
use crate::state::form::AuthMode;

/// Port the backend API listens on.
const BACKEND_PORT: u16 = 5000;

/// An auth submission that did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server answered with a non-success status. `message` is the
    /// body's `message` field when the body was readable JSON.
    #[error("{}", .message.as_deref().unwrap_or("An error occurred."))]
    Rejected { message: Option<String> },

    /// No response arrived at all (connection refused, DNS, CORS, ...).
    #[error("Failed to fetch. Is the backend server running?")]
    Unreachable,
}

/// Origin of the backend API, derived from the page's own hostname.
pub fn backend_origin() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_else(|| "localhost".to_owned());
    backend_origin_for(&hostname)
}

fn backend_origin_for(hostname: &str) -> String {
    format!("http://{hostname}:{BACKEND_PORT}")
}

/// Submit credentials to `/login` or `/register` depending on `mode`.
///
/// Any 2xx status is success; the response body is only consulted on
/// failure, for its `message` field.
///
/// # Errors
///
/// [`AuthError::Rejected`] for a non-success status,
/// [`AuthError::Unreachable`] when no response arrived.
pub async fn authenticate(mode: AuthMode, credentials: &Credentials) -> Result<(), AuthError> {
    let url = format!("{}{}", backend_origin(), mode.endpoint());

    let resp = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(credentials)
        .map_err(|e| {
            leptos::logging::warn!("auth request build failed: {e}");
            AuthError::Unreachable
        })?
        .send()
        .await
        .map_err(|e| {
            leptos::logging::warn!("auth request failed: {e}");
            AuthError::Unreachable
        })?;

    if resp.ok() {
        return Ok(());
    }

    // The request reached the server, so an unreadable body still counts as
    // a rejection, not a transport failure.
    let body: ApiMessage = resp.json().await.unwrap_or_default();
    Err(AuthError::Rejected { message: body.message })
}
