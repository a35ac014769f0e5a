//! Reorder Planning
//!
//! Turns "move source onto target" into a new sequence and the minimal set
//! of `order` writes that persists it.

use crate::{Orderable, OrderWrite};

/// A computed move: the new top-to-bottom sequence and the writes it needs
#[derive(Debug, Clone)]
pub struct ReorderPlan<T: Orderable> {
    /// New sequence; every entity carries `order == index`
    pub sequence: Vec<T>,
    pub writes: Vec<OrderWrite<T::Id>>,
}

/// Remove at `from`, then insert at `to` on the shortened array.
///
/// `to` indexes the array *after* removal, so moving down lands one slot
/// further than the target's original index would suggest.
pub fn splice_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next = items.to_vec();
    if from >= next.len() {
        return next;
    }
    let moved = next.remove(from);
    let to = to.min(next.len());
    next.insert(to, moved);
    next
}

/// Writes for every entity whose index differs from its persisted `order`
pub fn diff_orders<T: Orderable>(sequence: &[T]) -> Vec<OrderWrite<T::Id>> {
    sequence
        .iter()
        .enumerate()
        .filter(|(index, entity)| entity.order() != *index as i32)
        .map(|(index, entity)| OrderWrite {
            id: entity.id(),
            order: index as i32,
        })
        .collect()
}

/// Plan dropping `source` onto `target`.
///
/// `None` for degenerate drags: fewer than two entities, self-drop,
/// unknown ids, or a move that changes nothing persisted.
pub fn plan_move<T: Orderable>(items: &[T], source: &T::Id, target: &T::Id) -> Option<ReorderPlan<T>> {
    if items.len() < 2 || source == target {
        return None;
    }
    let from = items.iter().position(|e| &e.id() == source)?;
    let to = items.iter().position(|e| &e.id() == target)?;

    let mut sequence = splice_move(items, from, to);
    let writes = diff_orders(&sequence);
    if writes.is_empty() {
        return None;
    }
    for (index, entity) in sequence.iter_mut().enumerate() {
        entity.set_order(index as i32);
    }

    Some(ReorderPlan { sequence, writes })
}
