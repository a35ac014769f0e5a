//! Sortable Collections
//!
//! The two user-sortable lists and where new entries land in each.

use serde::{Deserialize, Serialize};

/// Where a newly created entity is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `order = min - 1`
    First,
    /// `order = max + 1`
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Portfolio,
    Clients,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Portfolio => "portfolio",
            Collection::Clients => "clients",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "portfolio" => Some(Collection::Portfolio),
            "clients" => Some(Collection::Clients),
            _ => None,
        }
    }

    /// Backing table
    pub fn table(&self) -> &'static str {
        match self {
            Collection::Portfolio => "portfolio_items",
            Collection::Clients => "client_logos",
        }
    }

    /// Newest work leads the gallery; clients are listed in the order added
    pub fn placement(&self) -> Placement {
        match self {
            Collection::Portfolio => Placement::First,
            Collection::Clients => Placement::Last,
        }
    }
}
