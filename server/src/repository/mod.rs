//! Repository Layer
//!
//! Data access abstractions and SQLite implementations.

mod traits;
mod db;
mod ordering;
mod portfolio_repo;
mod client_repo;
mod admin_repo;

#[cfg(test)]
mod tests;

pub use traits::{OrderedRepository, Repository};
pub use db::{init_db, open_in_memory, DbConn};
pub use portfolio_repo::PortfolioRepository;
pub use client_repo::ClientRepository;
pub use admin_repo::AdminRepository;
