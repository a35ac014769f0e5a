//! Portfolio Admin
//!
//! Sortable list of every portfolio item with create, visibility toggle
//! and delete. Dragging is enabled only with `manage_portfolio`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    make_on_item_mouseenter, make_on_item_mousemove, make_on_mousedown, make_on_mouseleave, row_class,
};

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{PortfolioItem, PortfolioItemInput, PORTFOLIO};
use crate::reorder::{use_ordered_collection, OrderedCollection};

#[component]
pub fn PortfolioAdmin() -> impl IntoView {
    let ctx = use_app_context();
    let can_edit = ctx.can_reorder(PORTFOLIO);
    let list = use_ordered_collection(
        PORTFOLIO,
        can_edit,
        ctx.reload_trigger,
        ctx.toasts,
        commands::list_portfolio,
    );

    let (new_title, set_new_title) = signal(String::new());
    let (new_category, set_new_category) = signal(String::new());
    let (new_media, set_new_media) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.trim().is_empty() {
            return;
        }
        let input = PortfolioItemInput {
            title,
            category: Some(new_category.get()).filter(|c| !c.trim().is_empty()),
            media_url: Some(new_media.get()).filter(|m| !m.trim().is_empty()),
            ..Default::default()
        };
        spawn_local(async move {
            match commands::create_portfolio_item(&input).await {
                Ok(item) => {
                    log::info!("portfolio item {} created", item.id);
                    set_new_title.set(String::new());
                    set_new_category.set(String::new());
                    set_new_media.set(String::new());
                    list.refresh();
                }
                Err(e) => ctx.toasts.error(format!("Could not add item: {}", e.message)),
            }
        });
    };

    view! {
        <section class="admin-section">
            <header class="admin-section-header">
                <h2>"Portfolio"</h2>
                <span class="admin-count">{move || format!("{} items", list.len())}</span>
            </header>

            <Show when=move || can_edit.get()>
                <form class="new-entity-form" on:submit=create_item>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || new_title.get()
                        on:input=move |ev| set_new_title.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Category"
                        prop:value=move || new_category.get()
                        on:input=move |ev| set_new_category.set(event_target_value(&ev))
                    />
                    <input
                        type="url"
                        placeholder="Cover image URL"
                        prop:value=move || new_media.get()
                        on:input=move |ev| set_new_media.set(event_target_value(&ev))
                    />
                    <button type="submit">"Add"</button>
                </form>
            </Show>

            {move || list.load_error.get().map(|e| view! { <p class="load-error">{e}</p> })}

            <ul class="sortable-list" class:locked=move || !can_edit.get()>
                <For
                    each=move || list.items()
                    key=|item| (item.id, item.is_visible, item.title.clone())
                    children=move |item| view! { <PortfolioRow item=item list=list /> }
                />
            </ul>
        </section>
    }
}

#[component]
fn PortfolioRow(item: PortfolioItem, list: OrderedCollection<PortfolioItem>) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let dnd = list.dnd;
    let can_edit = list.can_reorder;

    let class = row_class(dnd, id, "sortable-row");
    let on_mousedown = make_on_mousedown(dnd, id, can_edit);
    let on_mouseenter = make_on_item_mouseenter(dnd, id);
    let on_mousemove = make_on_item_mousemove(dnd, id);
    let on_mouseleave = make_on_mouseleave(dnd, id);

    let visible = item.is_visible;
    let input = PortfolioItemInput::from(&item);
    let toggle_visibility = move |_| {
        if dnd.drag_just_ended.get_untracked() {
            return;
        }
        let input = PortfolioItemInput { is_visible: Some(!visible), ..input.clone() };
        spawn_local(async move {
            match commands::update_portfolio_item(id, &input).await {
                Ok(_) => list.refresh(),
                Err(e) => ctx.toasts.error(format!("Could not update item: {}", e.message)),
            }
        });
    };

    let on_delete = Callback::new(move |_| {
        spawn_local(async move {
            match commands::delete_portfolio_item(id).await {
                Ok(()) => {
                    log::info!("portfolio item {} deleted", id);
                    list.refresh();
                }
                Err(e) => ctx.toasts.error(format!("Could not delete item: {}", e.message)),
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
            {item.media_url.clone().map(|src| view! { <img class="row-thumb" src=src alt="" /> })}
            <span class="row-title">{item.title.clone()}</span>
            {item.category.clone().map(|c| view! { <span class="row-chip">{c}</span> })}
            {item.video_url.is_some().then(|| view! { <span class="row-chip">"Video"</span> })}
            <button
                class="visibility-btn"
                disabled=move || !can_edit.get()
                on:click=toggle_visibility
            >
                {if visible { "Visible" } else { "Hidden" }}
            </button>
            <DeleteConfirmButton
                label=item.title.clone()
                button_class="delete-btn"
                disabled=Signal::derive(move || !can_edit.get())
                on_confirm=on_delete
            />
        </li>
    }
}
