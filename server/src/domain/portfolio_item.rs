//! Portfolio Item Entity
//!
//! A piece of work shown in the public gallery. `order` is the persisted
//! sort key; the gallery and the admin list both render ascending.

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Free-form grouping shown as a chip ("Branding", "Motion", ...)
    pub category: Option<String>,
    /// Cover image
    pub media_url: Option<String>,
    /// Optional showreel embed
    pub video_url: Option<String>,
    /// Hidden items stay sortable in the admin list
    pub is_visible: bool,
    pub order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl PortfolioItem {
    pub fn new(title: String) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: 0,
            title,
            description: String::new(),
            category: None,
            media_url: None,
            video_url: None,
            is_visible: true,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidInput("title must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Entity for PortfolioItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Editable fields accepted from the admin UI. `order` is not among them;
/// it only changes through an order batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioItemInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub is_visible: Option<bool>,
}

impl PortfolioItemInput {
    /// Build a fresh entity; placement is decided by the repository
    pub fn into_new(self) -> PortfolioItem {
        let mut item = PortfolioItem::new(self.title);
        item.description = self.description;
        item.category = self.category;
        item.media_url = self.media_url;
        item.video_url = self.video_url;
        item.is_visible = self.is_visible.unwrap_or(true);
        item
    }

    /// Overwrite the editable fields of `existing`
    pub fn apply_to(self, existing: &mut PortfolioItem) {
        existing.title = self.title;
        existing.description = self.description;
        existing.category = self.category;
        existing.media_url = self.media_url;
        existing.video_url = self.video_url;
        if let Some(visible) = self.is_visible {
            existing.is_visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_is_rejected() {
        assert!(PortfolioItem::new("  ".to_string()).validate().is_err());
        assert!(PortfolioItem::new("Rebrand".to_string()).validate().is_ok());
    }

    #[test]
    fn test_apply_keeps_order_and_visibility_when_omitted() {
        let mut item = PortfolioItem::new("Old".to_string());
        item.order = 7;
        item.is_visible = false;

        PortfolioItemInput { title: "New".to_string(), ..Default::default() }.apply_to(&mut item);

        assert_eq!(item.title, "New");
        assert_eq!(item.order, 7);
        assert!(!item.is_visible);
    }
}
