//! Theme toggle button for the post-auth screens.

use leptos::prelude::*;

use crate::state::ui::Theme;

/// Button that flips the app theme. The label names the theme it switches to.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    let label = move || format!("Switch to {} mode", theme.get().toggled().label());

    view! {
        <button class="btn theme-toggle" on:click=move |_| theme.update(|t| *t = t.toggled())>
            {label}
        </button>
    }
}
