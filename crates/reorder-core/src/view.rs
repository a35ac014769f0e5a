//! Local Ordered View
//!
//! Client-held copy of a collection, always sorted by `order`.
//! Rebuilt from scratch on every snapshot, never patched.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Orderable;

/// Stable ascending sort by `order`; ties keep snapshot iteration order
pub fn sort_by_order<T: Orderable>(snapshot: &[T]) -> Vec<T> {
    let mut sorted = snapshot.to_vec();
    sorted.sort_by_key(|entity| entity.order());
    sorted
}

/// Displayed items plus the last persisted snapshot they may be rolled back to
#[derive(Debug, Clone)]
pub struct LocalOrderedView<T: Orderable> {
    /// Last snapshot received from the store, already sorted
    snapshot: Vec<T>,
    /// What the UI renders; may be ahead of the store while a batch is in flight
    items: Vec<T>,
}

impl<T: Orderable> Default for LocalOrderedView<T> {
    fn default() -> Self {
        Self {
            snapshot: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl<T: Orderable> LocalOrderedView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: &[T]) -> Self {
        let mut view = Self::new();
        view.apply_snapshot(snapshot);
        view
    }

    /// Replace everything with a fresh sort of `snapshot`.
    /// Any speculative order in flight is overwritten.
    pub fn apply_snapshot(&mut self, snapshot: &[T]) {
        self.snapshot = sort_by_order(snapshot);
        self.items = self.snapshot.clone();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn snapshot(&self) -> &[T] {
        &self.snapshot
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position_of(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|entity| &entity.id() == id)
    }

    /// True while the displayed items differ from the last snapshot
    pub fn is_speculative(&self) -> bool {
        self.items.len() != self.snapshot.len()
            || self
                .items
                .iter()
                .zip(&self.snapshot)
                .any(|(a, b)| a.id() != b.id() || a.order() != b.order())
    }

    /// Show `sequence` before the store has confirmed it
    pub fn apply_optimistic(&mut self, sequence: Vec<T>) {
        self.items = sequence;
    }

    /// The store accepted the displayed order; make it the rollback target
    pub fn promote(&mut self) {
        self.snapshot = self.items.clone();
    }

    /// Drop speculative state and rederive from the last snapshot
    pub fn rollback(&mut self) {
        self.items = self.snapshot.clone();
    }
}

/// Shared handle to a view that outlives the event handler which staged a batch.
///
/// Implemented for `RefCell` here and for reactive signals by the UI.
pub trait ViewCell<T: Orderable> {
    /// Run `f` against the view. `None` once the view is gone.
    fn update_view<R>(&self, f: impl FnOnce(&mut LocalOrderedView<T>) -> R) -> Option<R>;
}

impl<T: Orderable> ViewCell<T> for RefCell<LocalOrderedView<T>> {
    fn update_view<R>(&self, f: impl FnOnce(&mut LocalOrderedView<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Orderable> ViewCell<T> for Rc<RefCell<LocalOrderedView<T>>> {
    fn update_view<R>(&self, f: impl FnOnce(&mut LocalOrderedView<T>) -> R) -> Option<R> {
        self.as_ref().update_view(f)
    }
}
