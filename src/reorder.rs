//! Reorder Wiring
//!
//! Connects the reorder core to Leptos: the Local Ordered View lives in a
//! signal, batches go to folio-server over HTTP and notices become toasts.
//! Each admin list gets one `OrderedCollection`.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, DndSignals, DropAction};
use reorder_core::{
    BatchWriter, LocalOrderedView, NotificationSink, OrderBatch, Orderable, ReorderCommitter,
    ViewCell, WriteError,
};

use crate::commands::{self, CommandError, OrderBatchResult};
use crate::components::ToastSink;

/// Snapshots are re-fetched this often while a list is mounted
const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Local Ordered View held in a signal so rows re-render on every change
pub struct SignalView<T: Orderable + Send + Sync + 'static>(pub RwSignal<LocalOrderedView<T>>);

impl<T: Orderable + Send + Sync + 'static> Clone for SignalView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Orderable + Send + Sync + 'static> Copy for SignalView<T> {}

impl<T: Orderable + Send + Sync + 'static> ViewCell<T> for SignalView<T> {
    fn update_view<R>(&self, f: impl FnOnce(&mut LocalOrderedView<T>) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Batch writer backed by `POST /api/order-batches`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpBatchWriter;

#[async_trait(?Send)]
impl BatchWriter<u32> for HttpBatchWriter {
    async fn write_orders(&self, batch: &OrderBatch<u32>) -> Result<(), WriteError> {
        confirm_write(commands::apply_order_batch(batch).await)
    }
}

/// Collapse the store's reply into the two outcomes the committer knows
fn confirm_write(reply: Result<OrderBatchResult, CommandError>) -> Result<(), WriteError> {
    let result = reply.map_err(CommandError::into_write_error)?;
    log::debug!("{}: store wrote {} orders", result.collection, result.written);
    Ok(())
}

/// One sortable admin list
pub struct OrderedCollection<T: Orderable + Send + Sync + 'static> {
    pub view: SignalView<T>,
    pub dnd: DndSignals<u32>,
    pub can_reorder: Signal<bool>,
    /// Last load failure, cleared by the next successful load
    pub load_error: RwSignal<Option<String>>,
    refresh: RwSignal<u32>,
}

impl<T: Orderable + Send + Sync + 'static> Clone for OrderedCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Orderable + Send + Sync + 'static> Copy for OrderedCollection<T> {}

impl<T: Orderable<Id = u32> + Send + Sync + 'static> OrderedCollection<T> {
    /// Current rows in display order (tracked)
    pub fn items(&self) -> Vec<T> {
        self.view.0.with(|v| v.items().to_vec())
    }

    pub fn len(&self) -> usize {
        self.view.0.with(|v| v.len())
    }

    /// Fetch a fresh snapshot
    pub fn refresh(&self) {
        self.refresh.update(|n| *n += 1);
    }
}

/// Stage a drop, unless reordering was revoked while the drag was in progress
fn stage_drop<T, W, N>(
    committer: &ReorderCommitter<W, N>,
    view: &SignalView<T>,
    allowed: bool,
    action: &DropAction<u32>,
) -> Option<OrderBatch<u32>>
where
    T: Orderable<Id = u32> + Send + Sync + 'static,
    N: NotificationSink,
{
    if !allowed {
        log::debug!("drop on {} ignored: reordering not allowed", committer.collection());
        return None;
    }
    committer.stage::<T, _>(view, &action.source, &action.target)
}

/// Create the view, drag bindings and snapshot subscription for `collection`.
///
/// `load` fetches the full collection; it runs on mount, whenever
/// `reload_trigger` changes, after every committed reorder and on a timer.
pub fn use_ordered_collection<T, L, Fut>(
    collection: &'static str,
    can_reorder: Signal<bool>,
    reload_trigger: RwSignal<u32>,
    toasts: ToastSink,
    load: L,
) -> OrderedCollection<T>
where
    T: Orderable<Id = u32> + Send + Sync + 'static,
    L: Fn() -> Fut + Copy + 'static,
    Fut: Future<Output = Result<Vec<T>, CommandError>> + 'static,
{
    let view = SignalView(RwSignal::new(LocalOrderedView::<T>::new()));
    let dnd = create_dnd_signals::<u32>();
    let load_error = RwSignal::new(None);
    let refresh = RwSignal::new(0u32);

    // Snapshot subscription
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let _ = refresh.get();
        spawn_local(async move {
            match load().await {
                Ok(snapshot) => {
                    log::debug!("{} snapshot: {} entities", collection, snapshot.len());
                    view.update_view(|v| v.apply_snapshot(&snapshot));
                    load_error.try_set(None);
                }
                Err(e) => {
                    log::warn!("failed to load {}: {}", collection, e);
                    load_error.try_set(Some(e.to_string()));
                }
            }
        });
    });

    match set_interval_with_handle(
        move || {
            let idle = dnd.session.try_with_untracked(|s| !s.is_dragging()).unwrap_or(false);
            if idle {
                refresh.try_update(|n| *n += 1);
            }
        },
        POLL_INTERVAL,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("snapshot polling disabled for {}: {:?}", collection, e),
    }

    let committer = ReorderCommitter::new(collection, HttpBatchWriter, toasts);
    bind_global_mouseup(dnd, move |action: DropAction<u32>| {
        let allowed = can_reorder.try_get_untracked().unwrap_or(false);
        let Some(batch) = stage_drop(&committer, &view, allowed, &action) else {
            return;
        };
        let committer = committer.clone();
        spawn_local(async move {
            if committer.submit::<T, _>(&view, batch).await.is_committed() {
                refresh.try_update(|n| *n += 1);
            }
        });
    });

    OrderedCollection { view, dnd, can_reorder, load_error, refresh }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_dragdrop::InsertSide;
    use reorder_core::{Notice, NoticeKind, OrderWrite};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        order: i32,
    }

    impl Orderable for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn order(&self) -> i32 {
            self.order
        }

        fn set_order(&mut self, order: i32) {
            self.order = order;
        }
    }

    struct FailingWriter {
        err: WriteError,
        calls: RefCell<usize>,
    }

    #[async_trait(?Send)]
    impl BatchWriter<u32> for FailingWriter {
        async fn write_orders(&self, _batch: &OrderBatch<u32>) -> Result<(), WriteError> {
            *self.calls.borrow_mut() += 1;
            Err(self.err.clone())
        }
    }

    #[derive(Default, Clone)]
    struct RecordingSink {
        notices: Rc<RefCell<Vec<Notice>>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    fn rows_view() -> SignalView<Row> {
        let snapshot = [Row { id: 2, order: 1 }, Row { id: 3, order: 2 }, Row { id: 1, order: 0 }];
        SignalView(RwSignal::new(LocalOrderedView::from_snapshot(&snapshot)))
    }

    fn shown(view: SignalView<Row>) -> Vec<u32> {
        view.0.with_untracked(|v| v.items().iter().map(|r| r.id).collect())
    }

    fn drop_of(source: u32, target: u32) -> DropAction<u32> {
        DropAction { source, target, side: InsertSide::Top }
    }

    #[tokio::test]
    async fn test_failed_drop_rolls_signal_back() {
        let owner = Owner::new();
        owner.set();

        let view = rows_view();
        let sink = RecordingSink::default();
        let writer = FailingWriter {
            err: WriteError::PermissionDenied("rules".to_string()),
            calls: RefCell::new(0),
        };
        let committer = ReorderCommitter::new("clients", writer, sink.clone());

        let batch = stage_drop(&committer, &view, true, &drop_of(3, 1)).unwrap();
        assert_eq!(shown(view), vec![3, 1, 2]);
        assert_eq!(batch.writes[0], OrderWrite { id: 3, order: 0 });

        let outcome = committer.submit::<Row, _>(&view, batch).await;

        assert!(!outcome.is_committed());
        assert_eq!(shown(view), vec![1, 2, 3]);
        let notices = sink.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
    }

    #[test]
    fn test_revoked_permission_stages_nothing() {
        let owner = Owner::new();
        owner.set();

        let view = rows_view();
        let writer = FailingWriter {
            err: WriteError::Unavailable("offline".to_string()),
            calls: RefCell::new(0),
        };
        let committer = ReorderCommitter::new("portfolio", writer, RecordingSink::default());

        assert!(stage_drop(&committer, &view, false, &drop_of(3, 1)).is_none());
        assert_eq!(shown(view), vec![1, 2, 3]);
        assert!(!view.0.with_untracked(|v| v.is_speculative()));
    }

    #[test]
    fn test_disposed_view_is_skipped() {
        let owner = Owner::new();
        owner.set();

        let view = rows_view();
        view.0.dispose();

        assert_eq!(view.update_view(|v| v.len()), None);
    }

    #[test]
    fn test_store_reply_maps_to_write_outcome() {
        let ok = confirm_write(Ok(OrderBatchResult { collection: "clients".to_string(), written: 2 }));
        assert_eq!(ok, Ok(()));

        let forbidden = CommandError { status: Some(403), message: "no".to_string() };
        assert_eq!(confirm_write(Err(forbidden)).unwrap_err().kind(), "permission_denied");

        let offline = CommandError::network("offline");
        assert_eq!(confirm_write(Err(offline)).unwrap_err().kind(), "unavailable");
    }
}
