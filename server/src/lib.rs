//! Folio Server
//!
//! Store and admin API behind the portfolio CMS: sortable portfolio items
//! and client logos, bearer-token admins, and the atomic order batch
//! endpoint the admin UI commits drag-and-drop reorders through.

pub mod auth;
pub mod config;
pub mod domain;
pub mod repository;
pub mod routes;

use std::sync::Arc;

use repository::{AdminRepository, ClientRepository, DbConn, PortfolioRepository};

pub use config::Config;
pub use routes::build_router;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<PortfolioRepository>,
    pub clients: Arc<ClientRepository>,
    pub admins: Arc<AdminRepository>,
}

impl AppState {
    pub fn new(conn: DbConn) -> Self {
        Self {
            portfolio: Arc::new(PortfolioRepository::new(conn.clone())),
            clients: Arc::new(ClientRepository::new(conn.clone())),
            admins: Arc::new(AdminRepository::new(conn)),
        }
    }
}
