//! Client Logo Admin
//!
//! Same sortable list as the portfolio, for the "trusted by" strip.
//! New logos are appended by the server.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    make_on_item_mouseenter, make_on_item_mousemove, make_on_mousedown, make_on_mouseleave, row_class,
};

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{ClientLogo, ClientLogoInput, CLIENTS};
use crate::reorder::{use_ordered_collection, OrderedCollection};

#[component]
pub fn ClientAdmin() -> impl IntoView {
    let ctx = use_app_context();
    let can_edit = ctx.can_reorder(CLIENTS);
    let list = use_ordered_collection(CLIENTS, can_edit, ctx.reload_trigger, ctx.toasts, commands::list_clients);

    let (new_name, set_new_name) = signal(String::new());
    let (new_logo, set_new_logo) = signal(String::new());
    let (new_site, set_new_site) = signal(String::new());

    let create_client = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.trim().is_empty() {
            return;
        }
        let input = ClientLogoInput {
            name,
            logo_url: Some(new_logo.get()).filter(|l| !l.trim().is_empty()),
            website_url: Some(new_site.get()).filter(|s| !s.trim().is_empty()),
            is_visible: Some(true),
        };
        spawn_local(async move {
            match commands::create_client(&input).await {
                Ok(logo) => {
                    log::info!("client {} created", logo.id);
                    set_new_name.set(String::new());
                    set_new_logo.set(String::new());
                    set_new_site.set(String::new());
                    list.refresh();
                }
                Err(e) => ctx.toasts.error(format!("Could not add client: {}", e.message)),
            }
        });
    };

    view! {
        <section class="admin-section">
            <header class="admin-section-header">
                <h2>"Clients"</h2>
                <span class="admin-count">{move || format!("{} logos", list.len())}</span>
            </header>

            <Show when=move || can_edit.get()>
                <form class="new-entity-form" on:submit=create_client>
                    <input
                        type="text"
                        placeholder="Client name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    />
                    <input
                        type="url"
                        placeholder="Logo URL"
                        prop:value=move || new_logo.get()
                        on:input=move |ev| set_new_logo.set(event_target_value(&ev))
                    />
                    <input
                        type="url"
                        placeholder="Website"
                        prop:value=move || new_site.get()
                        on:input=move |ev| set_new_site.set(event_target_value(&ev))
                    />
                    <button type="submit">"Add"</button>
                </form>
            </Show>

            {move || list.load_error.get().map(|e| view! { <p class="load-error">{e}</p> })}

            <ul class="sortable-list" class:locked=move || !can_edit.get()>
                <For
                    each=move || list.items()
                    key=|logo| (logo.id, logo.is_visible, logo.name.clone())
                    children=move |logo| view! { <ClientRow logo=logo list=list /> }
                />
            </ul>
        </section>
    }
}

#[component]
fn ClientRow(logo: ClientLogo, list: OrderedCollection<ClientLogo>) -> impl IntoView {
    let ctx = use_app_context();
    let id = logo.id;
    let dnd = list.dnd;
    let can_edit = list.can_reorder;

    let class = row_class(dnd, id, "sortable-row");
    let on_mousedown = make_on_mousedown(dnd, id, can_edit);
    let on_mouseenter = make_on_item_mouseenter(dnd, id);
    let on_mousemove = make_on_item_mousemove(dnd, id);
    let on_mouseleave = make_on_mouseleave(dnd, id);

    let visible = logo.is_visible;
    let input = ClientLogoInput::from(&logo);
    let toggle_visibility = move |_| {
        if dnd.drag_just_ended.get_untracked() {
            return;
        }
        let input = ClientLogoInput { is_visible: Some(!visible), ..input.clone() };
        spawn_local(async move {
            match commands::update_client(id, &input).await {
                Ok(_) => list.refresh(),
                Err(e) => ctx.toasts.error(format!("Could not update client: {}", e.message)),
            }
        });
    };

    let on_delete = Callback::new(move |_| {
        spawn_local(async move {
            match commands::delete_client(id).await {
                Ok(()) => {
                    log::info!("client {} deleted", id);
                    list.refresh();
                }
                Err(e) => ctx.toasts.error(format!("Could not delete client: {}", e.message)),
            }
        });
    });

    view! {
        <li
            class=class
            class:hidden-entity=!visible
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mousemove=on_mousemove
            on:mouseleave=on_mouseleave
        >
            <span class="drag-handle" class:disabled=move || !can_edit.get()>"⋮⋮"</span>
            {match logo.logo_url.clone() {
                Some(src) => view! { <img class="row-logo" src=src alt=logo.name.clone() /> }.into_any(),
                None => view! { <span class="row-logo placeholder">{logo.name.chars().next().unwrap_or('?').to_string()}</span> }.into_any(),
            }}
            <span class="row-title">{logo.name.clone()}</span>
            {logo.website_url.clone().map(|href| {
                let text = href.clone();
                view! { <a class="row-link" href=href target="_blank" rel="noopener">{text}</a> }
            })}
            <button
                class="visibility-btn"
                disabled=move || !can_edit.get()
                on:click=toggle_visibility
            >
                {if visible { "Visible" } else { "Hidden" }}
            </button>
            <DeleteConfirmButton
                label=logo.name.clone()
                button_class="delete-btn"
                disabled=Signal::derive(move || !can_edit.get())
                on_confirm=on_delete
            />
        </li>
    }
}
