//! Orderable Entity Contract
//!
//! Anything persisted in a user-sortable list: portfolio items, client logos.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// An entity that takes part in a user-sortable collection
pub trait Orderable: Clone {
    /// Stable, server-assigned identifier
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;

    /// Persisted sort key. Not required to be contiguous or unique.
    fn order(&self) -> i32;

    fn set_order(&mut self, order: i32);
}

/// One staged `order = value` write for a single entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderWrite<Id> {
    pub id: Id,
    pub order: i32,
}

/// Writes for one collection, committed all-or-nothing by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBatch<Id> {
    pub collection: String,
    pub writes: Vec<OrderWrite<Id>>,
}

impl<Id> OrderBatch<Id> {
    pub fn new(collection: impl Into<String>, writes: Vec<OrderWrite<Id>>) -> Self {
        Self {
            collection: collection.into(),
            writes,
        }
    }

    /// Number of documents the batch touches
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}
