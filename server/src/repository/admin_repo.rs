//! Admin Repository
//!
//! Token lookup for the auth extractor, the owner bootstrap and admin creation.

use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};

use crate::domain::{Admin, DomainError, DomainResult, Permissions};
use super::db::DbConn;
use super::ordering::db_err;

const COLUMNS: &str =
    "id, email, display_name, token, manage_portfolio, manage_clients, manage_settings, manage_admins, created_at";

pub struct AdminRepository {
    conn: DbConn,
}

impl AdminRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    fn find_where(conn: &Connection, column: &str, value: impl ToSql) -> DomainResult<Option<Admin>> {
        conn.query_row(
            &format!("SELECT {} FROM admins WHERE {} = ?", COLUMNS, column),
            params![value],
            |row| Ok(row_to_admin(row)),
        )
        .optional()
        .map_err(db_err)?
        .transpose()
    }

    /// Admin owning `token`, if any
    pub async fn find_by_token(&self, token: &str) -> DomainResult<Option<Admin>> {
        if token.is_empty() {
            return Ok(None);
        }
        let conn = self.conn.lock().await;
        Self::find_where(&conn, "token", token)
    }

    /// Make sure the bootstrap owner exists with every permission and `token`
    pub async fn upsert_owner(&self, email: &str, token: &str) -> DomainResult<Admin> {
        if token.is_empty() {
            return Err(DomainError::InvalidInput("owner token must not be empty".to_string()));
        }
        let owner = Admin::new(email.to_string(), token.to_string(), Permissions::all());
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO admins
                (email, display_name, token, manage_portfolio, manage_clients, manage_settings, manage_admins, created_at)
             VALUES (?, ?, ?, 1, 1, 1, 1, ?)
             ON CONFLICT(email) DO UPDATE SET
                token = excluded.token,
                manage_portfolio = 1, manage_clients = 1, manage_settings = 1, manage_admins = 1",
            params![owner.email, owner.display_name, owner.token, owner.created_at],
        )
        .map_err(db_err)?;

        Self::find_where(&conn, "email", email)?
            .ok_or_else(|| DomainError::Internal("owner vanished after upsert".to_string()))
    }

    /// Insert a new admin; a taken email is a conflict
    pub async fn create(&self, entity: &Admin) -> DomainResult<Admin> {
        let conn = self.conn.lock().await;
        let p = entity.permissions;
        conn.execute(
            "INSERT INTO admins
                (email, display_name, token, manage_portfolio, manage_clients, manage_settings, manage_admins, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.email,
                entity.display_name,
                entity.token,
                p.manage_portfolio,
                p.manage_clients,
                p.manage_settings,
                p.manage_admins,
                entity.created_at,
            ],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(err, _) if err.code == rusqlite::ErrorCode::ConstraintViolation => {
                DomainError::Conflict(format!("Admin {} already exists", entity.email))
            }
            other => db_err(other),
        })?;

        let mut admin = entity.clone();
        admin.id = conn.last_insert_rowid() as u32;
        Ok(admin)
    }
}

fn row_to_admin(row: &Row) -> DomainResult<Admin> {
    Ok(Admin {
        id: row.get(0).map_err(db_err)?,
        email: row.get(1).map_err(db_err)?,
        display_name: row.get(2).map_err(db_err)?,
        token: row.get(3).map_err(db_err)?,
        permissions: Permissions {
            manage_portfolio: row.get(4).map_err(db_err)?,
            manage_clients: row.get(5).map_err(db_err)?,
            manage_settings: row.get(6).map_err(db_err)?,
            manage_admins: row.get(7).map_err(db_err)?,
        },
        created_at: row.get(8).map_err(db_err)?,
    })
}
