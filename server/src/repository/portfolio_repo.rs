//! Portfolio Repository
//!
//! SQLite-backed CRUD for portfolio items. New items are placed first.

use async_trait::async_trait;
use reorder_core::OrderWrite;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{Collection, DomainError, DomainResult, PortfolioItem};
use super::db::DbConn;
use super::ordering::{apply_order_writes, db_err, next_order};
use super::traits::{OrderedRepository, Repository};

const COLUMNS: &str =
    "id, title, description, category, media_url, video_url, is_visible, sort_order, created_at, updated_at";

pub struct PortfolioRepository {
    conn: DbConn,
}

impl PortfolioRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    fn select(conn: &Connection, filter: &str) -> DomainResult<Vec<PortfolioItem>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM portfolio_items {} ORDER BY sort_order, id",
                COLUMNS, filter
            ))
            .map_err(db_err)?;
        let mut rows = stmt.query([]).map_err(db_err)?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            items.push(row_to_item(row)?);
        }
        Ok(items)
    }

    fn find(conn: &Connection, id: u32) -> DomainResult<Option<PortfolioItem>> {
        conn.query_row(
            &format!("SELECT {} FROM portfolio_items WHERE id = ?", COLUMNS),
            params![id],
            |row| Ok(row_to_item(row)),
        )
        .optional()
        .map_err(db_err)?
        .transpose()
    }
}

#[async_trait]
impl Repository<PortfolioItem> for PortfolioRepository {
    async fn create(&self, entity: &PortfolioItem) -> DomainResult<PortfolioItem> {
        entity.validate()?;
        let conn = self.conn.lock().await;

        let order = next_order(&conn, Collection::Portfolio.table(), Collection::Portfolio.placement())?;
        let now = chrono::Utc::now().timestamp_millis();
        conn.execute(
            "INSERT INTO portfolio_items
                (title, description, category, media_url, video_url, is_visible, sort_order, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.title,
                entity.description,
                entity.category,
                entity.media_url,
                entity.video_url,
                entity.is_visible,
                order,
                now,
                now,
            ],
        )
        .map_err(db_err)?;

        let mut item = entity.clone();
        item.id = conn.last_insert_rowid() as u32;
        item.order = order;
        item.created_at = now;
        item.updated_at = now;
        Ok(item)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<PortfolioItem>> {
        let conn = self.conn.lock().await;
        Self::find(&conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<PortfolioItem>> {
        let conn = self.conn.lock().await;
        Self::select(&conn, "")
    }

    /// Updates the editable fields; the sort order is left alone
    async fn update(&self, entity: &PortfolioItem) -> DomainResult<PortfolioItem> {
        entity.validate()?;
        let conn = self.conn.lock().await;

        let changed = conn
            .execute(
                "UPDATE portfolio_items
                 SET title = ?, description = ?, category = ?, media_url = ?, video_url = ?,
                     is_visible = ?, updated_at = ?
                 WHERE id = ?",
                params![
                    entity.title,
                    entity.description,
                    entity.category,
                    entity.media_url,
                    entity.video_url,
                    entity.is_visible,
                    chrono::Utc::now().timestamp_millis(),
                    entity.id,
                ],
            )
            .map_err(db_err)?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Portfolio item {} not found", entity.id)));
        }

        Self::find(&conn, entity.id)?
            .ok_or_else(|| DomainError::NotFound(format!("Portfolio item {} not found", entity.id)))
    }

    /// Remaining items keep their orders; gaps are fine
    async fn delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let changed = conn
            .execute("DELETE FROM portfolio_items WHERE id = ?", params![id])
            .map_err(db_err)?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Portfolio item {} not found", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderedRepository<PortfolioItem> for PortfolioRepository {
    async fn list_visible(&self) -> DomainResult<Vec<PortfolioItem>> {
        let conn = self.conn.lock().await;
        Self::select(&conn, "WHERE is_visible = 1")
    }

    async fn apply_order_batch(&self, writes: &[OrderWrite<u32>]) -> DomainResult<usize> {
        let mut conn = self.conn.lock().await;
        apply_order_writes(&mut conn, Collection::Portfolio.table(), writes)
    }
}

fn row_to_item(row: &Row) -> DomainResult<PortfolioItem> {
    Ok(PortfolioItem {
        id: row.get(0).map_err(db_err)?,
        title: row.get(1).map_err(db_err)?,
        description: row.get(2).map_err(db_err)?,
        category: row.get(3).map_err(db_err)?,
        media_url: row.get(4).map_err(db_err)?,
        video_url: row.get(5).map_err(db_err)?,
        is_visible: row.get(6).map_err(db_err)?,
        order: row.get(7).map_err(db_err)?,
        created_at: row.get(8).map_err(db_err)?,
        updated_at: row.get(9).map_err(db_err)?,
    })
}
