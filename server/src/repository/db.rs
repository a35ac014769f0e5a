//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared connection handed to every repository
pub type DbConn = Arc<Mutex<Connection>>;

const MIGRATIONS: &str = "
    CREATE TABLE IF NOT EXISTS portfolio_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        category TEXT,
        media_url TEXT,
        video_url TEXT,
        is_visible INTEGER NOT NULL DEFAULT 1,
        sort_order INTEGER NOT NULL DEFAULT 0,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_portfolio_items_order ON portfolio_items(sort_order);

    CREATE TABLE IF NOT EXISTS client_logos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        logo_url TEXT,
        website_url TEXT,
        is_visible INTEGER NOT NULL DEFAULT 1,
        sort_order INTEGER NOT NULL DEFAULT 0,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_client_logos_order ON client_logos(sort_order);

    CREATE TABLE IF NOT EXISTS admins (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        display_name TEXT NOT NULL DEFAULT '',
        token TEXT NOT NULL UNIQUE,
        manage_portfolio INTEGER NOT NULL DEFAULT 0,
        manage_clients INTEGER NOT NULL DEFAULT 0,
        manage_settings INTEGER NOT NULL DEFAULT 0,
        manage_admins INTEGER NOT NULL DEFAULT 0,
        created_at INTEGER NOT NULL
    );
";

/// Open (or create) the database at `db_path` and run migrations.
/// `:memory:` gives a throwaway database.
pub async fn init_db(db_path: &Path) -> Result<DbConn, String> {
    let conn = if db_path.as_os_str() == ":memory:" {
        Connection::open_in_memory()
    } else {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create db directory: {}", e))?;
        }
        Connection::open(db_path)
    }
    .map_err(|e| format!("Failed to open db: {}", e))?;

    run_migrations(&conn)?;
    log::info!("database ready at {}", db_path.display());

    Ok(Arc::new(Mutex::new(conn)))
}

/// Fresh migrated in-memory database
pub fn open_in_memory() -> Result<DbConn, String> {
    let conn = Connection::open_in_memory().map_err(|e| format!("Failed to open db: {}", e))?;
    run_migrations(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(MIGRATIONS)
        .map_err(|e| format!("Migration failed: {}", e))
}
