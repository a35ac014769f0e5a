//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use reorder_core::PermissionGate;

use crate::components::ToastSink;
use crate::models::{AdminSession, Permissions};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in admin; `None` until the session loads
    pub session: RwSignal<Option<AdminSession>>,
    pub toasts: ToastSink,
    /// Bumped to make every list reload from the server
    pub reload_trigger: RwSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            toasts: ToastSink::new(),
            reload_trigger: RwSignal::new(0),
        }
    }

    pub fn reload(&self) {
        self.reload_trigger.update(|v| *v += 1);
    }

    pub fn permissions(&self) -> Permissions {
        self.session.with(|s| s.as_ref().map(|s| s.permissions).unwrap_or_default())
    }

    /// Reactive Permission Gate for one collection
    pub fn can_reorder(&self, collection: &'static str) -> Signal<bool> {
        let ctx = *self;
        Signal::derive(move || ctx.permissions().can_reorder(collection))
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
