//! Delete Confirm Button
//!
//! Second click guard for removing a portfolio item or client logo from its
//! list. Deleting leaves a gap in the collection's orders; nothing is renumbered.

use leptos::prelude::*;

/// × button that turns into a "Delete <label>?" prompt.
///
/// Clicks never reach the row, so confirming cannot start a drag or toggle
/// visibility. While `disabled` is true the prompt cannot be opened.
#[component]
pub fn DeleteConfirmButton(
    /// Shown in the prompt and the tooltip, e.g. the item title
    #[prop(into)]
    label: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let confirming = RwSignal::new(false);
    let tooltip = format!("Delete {}", label);
    let prompt = format!("Delete \"{}\"?", label);

    let idle_button = move || {
        view! {
            <button
                class=button_class.clone()
                disabled=move || disabled.get()
                title=tooltip.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    confirming.set(true);
                }
            >
                "×"
            </button>
        }
    };

    view! {
        <Show when=move || confirming.get() fallback=idle_button>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
