//! Collaborator Seams
//!
//! The core talks to the store, the toast UI and the permission model only
//! through these traits.

use async_trait::async_trait;

use crate::{OrderBatch, WriteError};

/// Commits a batch of order writes all-or-nothing
#[async_trait(?Send)]
pub trait BatchWriter<Id> {
    async fn write_orders(&self, batch: &OrderBatch<Id>) -> Result<(), WriteError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-facing, fire-and-forget notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// Toast / alert surface
pub trait NotificationSink {
    fn notify(&self, notice: Notice);
}

/// Capability check consulted before a drag session may start
pub trait PermissionGate {
    fn can_reorder(&self, collection: &str) -> bool;
}
