//! Folio Admin App
//!
//! Loads the admin session, then shows the sortable collections and a
//! preview of the public gallery.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ClientAdmin, PortfolioAdmin, ToastStack, TokenForm, WorkGallery};
use crate::context::AppContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Portfolio,
    Clients,
    Gallery,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Portfolio, Tab::Clients, Tab::Gallery];

    fn label(&self) -> &'static str {
        match self {
            Tab::Portfolio => "Portfolio",
            Tab::Clients => "Clients",
            Tab::Gallery => "Gallery preview",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let (tab, set_tab) = signal(Tab::Portfolio);
    let (session_epoch, set_session_epoch) = signal(0u32);
    let (signed_out_reason, set_signed_out_reason) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    // Load the session whenever the token changes
    Effect::new(move |_| {
        let _ = session_epoch.get();
        if commands::stored_token().is_none() {
            ctx.session.set(None);
            set_loading.set(false);
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match commands::load_session().await {
                Ok(session) => {
                    log::info!("signed in as {}", session.email);
                    set_signed_out_reason.set(None);
                    ctx.session.set(Some(session));
                }
                Err(e) if e.is_unauthorized() => {
                    log::warn!("stored token rejected");
                    commands::clear_token();
                    ctx.session.set(None);
                    set_signed_out_reason.set(Some("That token was not accepted.".to_string()));
                }
                Err(e) => {
                    log::error!("failed to load session: {}", e);
                    ctx.session.set(None);
                    set_signed_out_reason.set(Some(format!("Could not reach the server ({}).", e)));
                }
            }
            set_loading.set(false);
        });
    });

    let sign_out = move |_| {
        commands::clear_token();
        set_signed_out_reason.set(None);
        set_session_epoch.update(|n| *n += 1);
    };

    view! {
        <div class="app-layout">
            <Show
                when=move || ctx.session.with(|s| s.is_some())
                fallback=move || view! {
                    <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                        <TokenForm
                            reason=signed_out_reason
                            on_saved=move |_| set_session_epoch.update(|n| *n += 1)
                        />
                    </Show>
                }
            >
                <header class="app-header">
                    <h1>"Folio"</h1>
                    <nav class="tab-bar">
                        {Tab::ALL
                            .into_iter()
                            .map(|t| view! {
                                <button
                                    class="tab"
                                    class:active=move || tab.get() == t
                                    on:click=move |_| set_tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            })
                            .collect_view()}
                    </nav>
                    <span class="session-name">
                        {move || ctx.session.with(|s| s.as_ref().map(|s| s.display_name.clone()).unwrap_or_default())}
                    </span>
                    <button class="refresh-btn" on:click=move |_| ctx.reload()>"Refresh"</button>
                    <button class="sign-out-btn" on:click=sign_out>"Sign out"</button>
                </header>

                <main class="main-content">
                    {move || match tab.get() {
                        Tab::Portfolio => view! { <PortfolioAdmin /> }.into_any(),
                        Tab::Clients => view! { <ClientAdmin /> }.into_any(),
                        Tab::Gallery => view! { <WorkGallery /> }.into_any(),
                    }}
                </main>
            </Show>
            <ToastStack sink=ctx.toasts />
        </div>
    }
}
