//! Sort Order Operations
//!
//! Shared by every ordered table: initial placement of new rows and the
//! all-or-nothing application of an order batch.

use reorder_core::OrderWrite;
use rusqlite::{params, Connection};

use crate::domain::{DomainError, DomainResult, Placement};

pub(super) fn db_err(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}

/// Order for a row about to be inserted into `table`.
/// An empty table starts at 0.
pub(super) fn next_order(conn: &Connection, table: &str, placement: Placement) -> DomainResult<i32> {
    let query = match placement {
        Placement::First => format!("SELECT MIN(sort_order) - 1 FROM {}", table),
        Placement::Last => format!("SELECT MAX(sort_order) + 1 FROM {}", table),
    };
    let order: Option<i32> = conn
        .query_row(&query, [], |row| row.get(0))
        .map_err(db_err)?;
    Ok(order.unwrap_or(0))
}

/// Write every `(id, order)` pair inside one transaction.
/// An unknown id aborts the whole batch with `NotFound`.
pub(super) fn apply_order_writes(
    conn: &mut Connection,
    table: &str,
    writes: &[OrderWrite<u32>],
) -> DomainResult<usize> {
    if writes.is_empty() {
        return Ok(0);
    }

    let tx = conn.transaction().map_err(db_err)?;
    let now = chrono::Utc::now().timestamp_millis();
    {
        let mut stmt = tx
            .prepare(&format!("UPDATE {} SET sort_order = ?, updated_at = ? WHERE id = ?", table))
            .map_err(db_err)?;
        for write in writes {
            let changed = stmt.execute(params![write.order, now, write.id]).map_err(db_err)?;
            if changed == 0 {
                // Dropping the transaction rolls it back
                return Err(DomainError::NotFound(format!("{} {} not found", table, write.id)));
            }
        }
    }
    tx.commit().map_err(db_err)?;

    Ok(writes.len())
}
