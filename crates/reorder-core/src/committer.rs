//! Reorder Committer
//!
//! Applies a drop optimistically, submits one atomic batch and either keeps
//! the new order or rolls the view back to the last persisted snapshot.
//! Failures stop here: callers only ever see an outcome value.

use crate::{
    plan_move, BatchWriter, Notice, NotificationSink, OrderBatch, Orderable, ViewCell, WriteError,
};

/// User-facing wording for the two notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessages {
    pub committed: String,
    pub rolled_back: String,
}

impl Default for CommitMessages {
    fn default() -> Self {
        Self {
            committed: "Order saved".to_string(),
            rolled_back: "Could not save the new order. Please try again.".to_string(),
        }
    }
}

/// What happened to a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Degenerate drag, nothing written
    Noop,
    Committed { written: usize },
    RolledBack(WriteError),
}

impl CommitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, CommitOutcome::Committed { .. })
    }
}

/// Reorder committer for one collection
#[derive(Clone)]
pub struct ReorderCommitter<W, N> {
    collection: String,
    writer: W,
    sink: N,
    messages: CommitMessages,
}

impl<W, N: NotificationSink> ReorderCommitter<W, N> {
    pub fn new(collection: impl Into<String>, writer: W, sink: N) -> Self {
        Self {
            collection: collection.into(),
            writer,
            sink,
            messages: CommitMessages::default(),
        }
    }

    pub fn with_messages(mut self, messages: CommitMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Synchronous half of a drop: plan the move and show it immediately.
    ///
    /// Returns the batch to submit, or `None` when the drop is a no-op.
    pub fn stage<T, V>(&self, view: &V, source: &T::Id, target: &T::Id) -> Option<OrderBatch<T::Id>>
    where
        T: Orderable,
        V: ViewCell<T>,
    {
        view.update_view(|v| {
            let plan = plan_move(v.items(), source, target)?;
            v.apply_optimistic(plan.sequence);
            Some(OrderBatch::new(self.collection.clone(), plan.writes))
        })
        .flatten()
    }

    /// Asynchronous half: write the batch, roll back and notify on failure.
    pub async fn submit<T, V>(&self, view: &V, batch: OrderBatch<T::Id>) -> CommitOutcome
    where
        T: Orderable,
        V: ViewCell<T>,
        W: BatchWriter<T::Id>,
    {
        match self.writer.write_orders(&batch).await {
            Ok(()) => {
                log::info!(
                    "reorder committed: collection={} documents={}",
                    self.collection,
                    batch.len()
                );
                view.update_view(|v| v.promote());
                self.sink.notify(Notice::success(self.messages.committed.clone()));
                CommitOutcome::Committed { written: batch.len() }
            }
            Err(err) => {
                log::warn!(
                    "reorder rolled back: collection={} documents={} kind={}",
                    self.collection,
                    batch.len(),
                    err.kind()
                );
                if view.update_view(|v| v.rollback()).is_none() {
                    log::debug!("reorder rollback skipped: view for {} is gone", self.collection);
                }
                self.sink.notify(Notice::error(self.messages.rolled_back.clone()));
                CommitOutcome::RolledBack(err)
            }
        }
    }

    /// Stage and submit in one go
    pub async fn commit<T, V>(&self, view: &V, source: &T::Id, target: &T::Id) -> CommitOutcome
    where
        T: Orderable,
        V: ViewCell<T>,
        W: BatchWriter<T::Id>,
    {
        match self.stage(view, source, target) {
            Some(batch) => self.submit(view, batch).await,
            None => CommitOutcome::Noop,
        }
    }
}
