//! Client Logo Entity

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// A client shown in the "trusted by" strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientLogo {
    pub id: u32,
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub is_visible: bool,
    pub order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ClientLogo {
    pub fn new(name: String) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: 0,
            name,
            logo_url: None,
            website_url: None,
            is_visible: true,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("name must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Entity for ClientLogo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientLogoInput {
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}

impl ClientLogoInput {
    pub fn into_new(self) -> ClientLogo {
        let mut logo = ClientLogo::new(self.name);
        logo.logo_url = self.logo_url;
        logo.website_url = self.website_url;
        logo.is_visible = self.is_visible.unwrap_or(true);
        logo
    }

    pub fn apply_to(self, existing: &mut ClientLogo) {
        existing.name = self.name;
        existing.logo_url = self.logo_url;
        existing.website_url = self.website_url;
        if let Some(visible) = self.is_visible {
            existing.is_visible = visible;
        }
    }
}
