//! Admin Entity
//!
//! An authenticated operator of the CMS and the flat permission set that
//! decides what they may edit and reorder.

use serde::{Deserialize, Serialize};
use super::collection::Collection;
use super::entity::Entity;

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

impl Permissions {
    pub fn all() -> Self {
        Self {
            manage_portfolio: true,
            manage_clients: true,
            manage_settings: true,
            manage_admins: true,
        }
    }

    /// Create, update and delete entities of `collection`
    pub fn can_edit(&self, collection: Collection) -> bool {
        match collection {
            Collection::Portfolio => self.manage_portfolio,
            Collection::Clients => self.manage_clients,
        }
    }

    /// Submit order batches for `collection`
    pub fn can_reorder(&self, collection: Collection) -> bool {
        self.can_edit(collection)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: u32,
    pub email: String,
    pub display_name: String,
    /// Bearer token; never serialized back out
    #[serde(skip_serializing, default)]
    pub token: String,
    pub permissions: Permissions,
    pub created_at: i64,
}

impl Admin {
    pub fn new(email: String, token: String, permissions: Permissions) -> Self {
        Self {
            id: 0,
            display_name: email.split('@').next().unwrap_or_default().to_string(),
            email,
            token,
            permissions,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl Entity for Admin {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
