//! Token Form
//!
//! Shown when there is no valid admin token in `localStorage`.

use leptos::prelude::*;

use crate::commands;

#[component]
pub fn TokenForm(
    /// Why the form is showing, if it isn't the first visit
    #[prop(into)]
    reason: Signal<Option<String>>,
    /// Called after the token is stored
    #[prop(into)]
    on_saved: Callback<()>,
) -> impl IntoView {
    let (token, set_token) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = token.get();
        if value.trim().is_empty() {
            return;
        }
        match commands::save_token(&value) {
            Ok(()) => {
                set_token.set(String::new());
                set_error.set(None);
                on_saved.run(());
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <form class="token-form" on:submit=submit>
            <h2>"Sign in"</h2>
            {move || reason.get().map(|r| view! { <p class="token-reason">{r}</p> })}
            <input
                type="password"
                placeholder="Admin token"
                prop:value=move || token.get()
                on:input=move |ev| set_token.set(event_target_value(&ev))
            />
            <button type="submit">"Continue"</button>
            {move || error.get().map(|e| view! { <p class="token-error">{e}</p> })}
            <p class="token-hint">{format!("API: {}", commands::api_base())}</p>
        </form>
    }
}
