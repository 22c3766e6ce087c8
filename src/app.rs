//! Root application component with routing, guards, and shared state.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{auth::AuthPage, dashboard::DashboardPage};
use crate::state::session::SessionState;
use crate::state::ui::Theme;
use crate::util::theme;

/// Root application component.
///
/// Owns the session and theme state, provides both as contexts, and sets up
/// client-side routing. Which of the two screens a route shows is decided
/// entirely by the session flag; every unknown path lands on the auth form.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let theme = RwSignal::new(Theme::default());

    provide_context(session);
    provide_context(theme);

    // Reflect the active theme on <body> for the lifetime of the page.
    Effect::new(move || theme::apply(theme.get()));

    view! {
        <Title text="ColorCloud Trading Tool"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                <Route path=StaticSegment("login") view=LoginRoute/>
                <Route path=StaticSegment("dashboard") view=DashboardRoute/>
            </Routes>
        </Router>
    }
}

/// `/login` binding: the auth form, or a redirect to the dashboard once
/// authenticated.
#[component]
fn LoginRoute() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Redirect to the dashboard whenever the session becomes authenticated.
    Effect::new(move || {
        if session.get().authenticated {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let on_success = Callback::new(move |()| session.update(SessionState::log_in));

    view! { <AuthPage on_success=on_success/> }
}

/// `/dashboard` binding: the dashboard, or a redirect to the auth form when
/// unauthenticated (including right after logout).
#[component]
fn DashboardRoute() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !session.get().authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_logout = Callback::new(move |()| session.update(SessionState::log_out));

    view! { <DashboardPage on_logout=on_logout/> }
}
