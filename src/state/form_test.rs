use super::*;

// =============================================================
// AuthFormState defaults
// =============================================================

#[test]
fn form_defaults_to_login_mode_with_empty_fields() {
    let form = AuthFormState::default();
    assert_eq!(form.mode, AuthMode::Login);
    assert!(form.username.is_empty());
    assert!(form.password.is_empty());
    assert!(form.status.is_none());
    assert!(!form.in_flight);
}

// =============================================================
// Mode toggling
// =============================================================

#[test]
fn toggle_twice_returns_to_original_view() {
    let mut form = AuthFormState::default();
    form.toggle_mode();
    assert_eq!(form.mode, AuthMode::Register);
    form.toggle_mode();
    assert_eq!(form, AuthFormState::default());
}

#[test]
fn toggle_keeps_fields_and_status() {
    let mut form = AuthFormState {
        username: "alice".to_owned(),
        password: "hunter2".to_owned(),
        status: Some("An error occurred.".to_owned()),
        ..AuthFormState::default()
    };
    form.toggle_mode();
    assert_eq!(form.username, "alice");
    assert_eq!(form.password, "hunter2");
    assert_eq!(form.status.as_deref(), Some("An error occurred."));
}

// =============================================================
// Submit guard
// =============================================================

#[test]
fn begin_submit_clears_status_and_raises_guard() {
    let mut form = AuthFormState {
        status: Some("stale".to_owned()),
        ..AuthFormState::default()
    };
    assert!(form.begin_submit());
    assert!(form.status.is_none());
    assert!(form.in_flight);
}

#[test]
fn begin_submit_refused_while_in_flight() {
    let mut form = AuthFormState::default();
    assert!(form.begin_submit());
    assert!(!form.begin_submit());
    assert!(form.in_flight);
}

// =============================================================
// Success paths
// =============================================================

#[test]
fn login_success_requests_callback() {
    let mut form = AuthFormState::default();
    form.begin_submit();
    assert!(form.submit_succeeded());
    assert_eq!(form.mode, AuthMode::Login);
    assert!(form.status.is_none());
    assert!(!form.in_flight);
}

#[test]
fn register_success_switches_to_login_with_confirmation() {
    let mut form = AuthFormState {
        mode: AuthMode::Register,
        ..AuthFormState::default()
    };
    form.begin_submit();
    assert!(!form.submit_succeeded());
    assert_eq!(form.mode, AuthMode::Login);
    assert_eq!(form.status.as_deref(), Some(REGISTERED_MESSAGE));
    assert!(!form.in_flight);
}

// =============================================================
// Failure path
// =============================================================

#[test]
fn failure_shows_server_message() {
    let mut form = AuthFormState::default();
    form.begin_submit();
    form.submit_failed(&AuthError::Rejected {
        message: Some("Invalid credentials".to_owned()),
    });
    assert_eq!(form.status.as_deref(), Some("Invalid credentials"));
    assert!(!form.in_flight);
}

#[test]
fn failure_without_message_shows_fallback() {
    let mut form = AuthFormState::default();
    form.begin_submit();
    form.submit_failed(&AuthError::Rejected { message: None });
    assert_eq!(form.status.as_deref(), Some("An error occurred."));
}

#[test]
fn transport_failure_shows_connectivity_hint() {
    let mut form = AuthFormState::default();
    form.begin_submit();
    form.submit_failed(&AuthError::Unreachable);
    assert_eq!(
        form.status.as_deref(),
        Some("Failed to fetch. Is the backend server running?")
    );
    assert!(!form.in_flight);
}

#[test]
fn next_submit_clears_previous_failure_message() {
    let mut form = AuthFormState::default();
    form.begin_submit();
    form.submit_failed(&AuthError::Unreachable);
    assert!(form.begin_submit());
    assert!(form.status.is_none());
}
