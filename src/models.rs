//! Frontend Models
//!
//! Data structures matching folio-server entities.

use reorder_core::{Orderable, PermissionGate};
use serde::{Deserialize, Serialize};

pub const PORTFOLIO: &str = "portfolio";
pub const CLIENTS: &str = "clients";

/// Portfolio item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    pub media_url: Option<String>,
    pub video_url: Option<String>,
    pub is_visible: bool,
    pub order: i32,
}

impl Orderable for PortfolioItem {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

/// Client logo (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientLogo {
    pub id: u32,
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub is_visible: bool,
    pub order: i32,
}

impl Orderable for ClientLogo {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

/// Editable portfolio fields sent on create/update
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioItemInput {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub media_url: Option<String>,
    pub video_url: Option<String>,
    pub is_visible: Option<bool>,
}

impl From<&PortfolioItem> for PortfolioItemInput {
    fn from(item: &PortfolioItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            media_url: item.media_url.clone(),
            video_url: item.video_url.clone(),
            is_visible: Some(item.is_visible),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientLogoInput {
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub is_visible: Option<bool>,
}

impl From<&ClientLogo> for ClientLogoInput {
    fn from(logo: &ClientLogo) -> Self {
        Self {
            name: logo.name.clone(),
            logo_url: logo.logo_url.clone(),
            website_url: logo.website_url.clone(),
            is_visible: Some(logo.is_visible),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub manage_portfolio: bool,
    #[serde(default)]
    pub manage_clients: bool,
    #[serde(default)]
    pub manage_settings: bool,
    #[serde(default)]
    pub manage_admins: bool,
}

impl PermissionGate for Permissions {
    fn can_reorder(&self, collection: &str) -> bool {
        match collection {
            PORTFOLIO => self.manage_portfolio,
            CLIENTS => self.manage_clients,
            _ => false,
        }
    }
}

/// Signed-in admin as reported by `/api/session`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub id: u32,
    pub email: String,
    pub display_name: String,
    pub permissions: Permissions,
}
