//! Work Gallery Preview
//!
//! What visitors see: visible portfolio items, in persisted order.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reorder_core::sort_by_order;

use crate::commands;
use crate::context::use_app_context;
use crate::models::PortfolioItem;

#[component]
pub fn WorkGallery() -> impl IntoView {
    let ctx = use_app_context();
    let (items, set_items) = signal(Vec::<PortfolioItem>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match commands::list_public_portfolio().await {
                // The server sorts already; re-sort so a stale cache can't scramble it
                Ok(loaded) => set_items.set(sort_by_order(&loaded)),
                Err(e) => log::warn!("failed to load gallery: {}", e),
            }
        });
    });

    view! {
        <section class="work-gallery">
            <Show
                when=move || !items.get().is_empty()
                fallback=|| view! { <p class="gallery-empty">"Nothing published yet."</p> }
            >
                <div class="gallery-grid">
                    <For
                        each=move || items.get()
                        key=|item| item.id
                        children=move |item| {
                            view! {
                                <article class="gallery-card">
                                    {item.media_url.clone().map(|src| view! {
                                        <img class="gallery-media" src=src alt=item.title.clone() />
                                    })}
                                    <h3>{item.title.clone()}</h3>
                                    {item.category.clone().map(|c| view! { <span class="gallery-chip">{c}</span> })}
                                    <p>{item.description.clone()}</p>
                                </article>
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
