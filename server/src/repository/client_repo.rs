//! Client Logo Repository
//!
//! SQLite-backed CRUD for client logos. New logos are appended.

use async_trait::async_trait;
use reorder_core::OrderWrite;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{ClientLogo, Collection, DomainError, DomainResult};
use super::db::DbConn;
use super::ordering::{apply_order_writes, db_err, next_order};
use super::traits::{OrderedRepository, Repository};

const COLUMNS: &str = "id, name, logo_url, website_url, is_visible, sort_order, created_at, updated_at";

pub struct ClientRepository {
    conn: DbConn,
}

impl ClientRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    fn select(conn: &Connection, filter: &str) -> DomainResult<Vec<ClientLogo>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM client_logos {} ORDER BY sort_order, id",
                COLUMNS, filter
            ))
            .map_err(db_err)?;
        let mut rows = stmt.query([]).map_err(db_err)?;

        let mut logos = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            logos.push(row_to_logo(row)?);
        }
        Ok(logos)
    }

    fn find(conn: &Connection, id: u32) -> DomainResult<Option<ClientLogo>> {
        conn.query_row(
            &format!("SELECT {} FROM client_logos WHERE id = ?", COLUMNS),
            params![id],
            |row| Ok(row_to_logo(row)),
        )
        .optional()
        .map_err(db_err)?
        .transpose()
    }
}

#[async_trait]
impl Repository<ClientLogo> for ClientRepository {
    async fn create(&self, entity: &ClientLogo) -> DomainResult<ClientLogo> {
        entity.validate()?;
        let conn = self.conn.lock().await;

        let order = next_order(&conn, Collection::Clients.table(), Collection::Clients.placement())?;
        let now = chrono::Utc::now().timestamp_millis();
        conn.execute(
            "INSERT INTO client_logos
                (name, logo_url, website_url, is_visible, sort_order, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.name,
                entity.logo_url,
                entity.website_url,
                entity.is_visible,
                order,
                now,
                now,
            ],
        )
        .map_err(db_err)?;

        let mut logo = entity.clone();
        logo.id = conn.last_insert_rowid() as u32;
        logo.order = order;
        logo.created_at = now;
        logo.updated_at = now;
        Ok(logo)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<ClientLogo>> {
        let conn = self.conn.lock().await;
        Self::find(&conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<ClientLogo>> {
        let conn = self.conn.lock().await;
        Self::select(&conn, "")
    }

    async fn update(&self, entity: &ClientLogo) -> DomainResult<ClientLogo> {
        entity.validate()?;
        let conn = self.conn.lock().await;

        let changed = conn
            .execute(
                "UPDATE client_logos
                 SET name = ?, logo_url = ?, website_url = ?, is_visible = ?, updated_at = ?
                 WHERE id = ?",
                params![
                    entity.name,
                    entity.logo_url,
                    entity.website_url,
                    entity.is_visible,
                    chrono::Utc::now().timestamp_millis(),
                    entity.id,
                ],
            )
            .map_err(db_err)?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Client {} not found", entity.id)));
        }

        Self::find(&conn, entity.id)?
            .ok_or_else(|| DomainError::NotFound(format!("Client {} not found", entity.id)))
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let changed = conn
            .execute("DELETE FROM client_logos WHERE id = ?", params![id])
            .map_err(db_err)?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Client {} not found", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderedRepository<ClientLogo> for ClientRepository {
    async fn list_visible(&self) -> DomainResult<Vec<ClientLogo>> {
        let conn = self.conn.lock().await;
        Self::select(&conn, "WHERE is_visible = 1")
    }

    async fn apply_order_batch(&self, writes: &[OrderWrite<u32>]) -> DomainResult<usize> {
        let mut conn = self.conn.lock().await;
        apply_order_writes(&mut conn, Collection::Clients.table(), writes)
    }
}

fn row_to_logo(row: &Row) -> DomainResult<ClientLogo> {
    Ok(ClientLogo {
        id: row.get(0).map_err(db_err)?,
        name: row.get(1).map_err(db_err)?,
        logo_url: row.get(2).map_err(db_err)?,
        website_url: row.get(3).map_err(db_err)?,
        is_visible: row.get(4).map_err(db_err)?,
        order: row.get(5).map_err(db_err)?,
        created_at: row.get(6).map_err(db_err)?,
        updated_at: row.get(7).map_err(db_err)?,
    })
}
