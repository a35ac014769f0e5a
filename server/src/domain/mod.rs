//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod collection;
mod portfolio_item;
mod client_logo;
mod admin;

pub use entity::{Entity, DomainError, DomainResult};
pub use collection::{Collection, Placement};
pub use portfolio_item::{PortfolioItem, PortfolioItemInput};
pub use client_logo::{ClientLogo, ClientLogoInput};
pub use admin::{Admin, Permissions};
