//! Login/registration form posting to the backend auth endpoints.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Credentials;
use crate::state::form::AuthFormState;

/// Login/registration form.
///
/// `on_success` fires exactly once per successful login submission. A
/// successful registration never fires it; the form switches back to login
/// mode with a confirmation message instead. While a request is in flight,
/// further submits are refused and the submit button is disabled.
#[component]
pub fn AuthPage(on_success: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(AuthFormState::default());

    let do_submit = move || {
        let mut accepted = false;
        form.update(|f| accepted = f.begin_submit());
        if !accepted {
            return;
        }

        let snapshot = form.get_untracked();
        let mode = snapshot.mode;
        let credentials = Credentials {
            username: snapshot.username,
            password: snapshot.password,
        };

        leptos::task::spawn_local(async move {
            let result = api::authenticate(mode, &credentials).await;
            form.update(|f| match result {
                Ok(()) => {
                    if f.submit_succeeded() {
                        on_success.run(());
                    }
                }
                Err(e) => f.submit_failed(&e),
            });
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_submit();
    };

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <h1>"☁️ ColorCloud Trading Tool"</h1>
            </header>

            <div class="auth-form">
                <h2>{move || form.get().mode.submit_label()}</h2>
                <form on:submit=on_submit>
                    <input
                        class="auth-form__input"
                        type="text"
                        placeholder="Username"
                        required
                        prop:value=move || form.get().username
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        class="auth-form__input"
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || form.get().in_flight
                    >
                        {move || form.get().mode.submit_label()}
                    </button>
                </form>

                <Show when=move || form.get().status.is_some()>
                    <p class="auth-form__message">
                        {move || form.get().status.unwrap_or_default()}
                    </p>
                </Show>

                <button
                    class="auth-form__toggle"
                    on:click=move |_| form.update(AuthFormState::toggle_mode)
                >
                    {move || form.get().mode.toggle_label()}
                </button>
            </div>
        </div>
    }
}
