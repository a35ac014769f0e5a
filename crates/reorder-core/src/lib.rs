//! Reorder Core
//!
//! Drag-to-reorder for collections whose entities carry an integer `order`.
//! - orderable: the entity contract and the order write triple
//! - view: the always-sorted local copy of the latest snapshot
//! - plan: splice-move and the minimal write diff
//! - ports: the batch writer, notification sink and permission gate seams
//! - committer: optimistic apply, batch submit, rollback on failure

mod orderable;
mod view;
mod plan;
mod ports;
mod error;
mod committer;

pub use orderable::{Orderable, OrderWrite, OrderBatch};
pub use view::{sort_by_order, LocalOrderedView, ViewCell};
pub use plan::{splice_move, diff_orders, plan_move, ReorderPlan};
pub use ports::{BatchWriter, NotificationSink, Notice, NoticeKind, PermissionGate};
pub use error::WriteError;
pub use committer::{ReorderCommitter, CommitOutcome, CommitMessages};

#[cfg(test)]
mod test_support;
