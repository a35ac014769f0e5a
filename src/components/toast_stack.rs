//! Toast Stack
//!
//! The Notification Sink: notices from the reorder committer (and any other
//! caller) are stacked in the corner and dismissed after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reorder_core::{Notice, NoticeKind, NotificationSink};

const TOAST_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastSink {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastSink {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.try_update(|t| t.retain(|toast| toast.id != id));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notice::error(message));
    }
}

impl Default for ToastSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for ToastSink {
    fn notify(&self, notice: Notice) {
        let Some(id) = self.next_id.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };
        self.toasts.try_update(|t| {
            t.push(Toast { id, kind: notice.kind, message: notice.message })
        });

        let sink = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            sink.dismiss(id);
        });
    }
}

#[component]
pub fn ToastStack(sink: ToastSink) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || sink.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class on:click=move |_| sink.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
