//! Post-authentication dashboard shell.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

/// Dashboard page shown once authenticated.
///
/// The trading data views live behind the backend's authenticated endpoints
/// and are outside this crate; the shell renders the page chrome, the theme
/// toggle, and logout.
#[component]
pub fn DashboardPage(on_logout: Callback<()>) -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"☁️ ColorCloud Trading Tool"</h1>
                <div class="dashboard-page__actions">
                    <ThemeToggle/>
                    <button class="btn dashboard-page__logout" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </div>
            </header>
        </div>
    }
}
