//! Bearer Token Authentication
//!
//! `CurrentAdmin` resolves the `Authorization: Bearer <token>` header to a
//! stored admin. Handlers that take it are protected; the public routes
//! simply don't.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::domain::{Admin, Collection};
use crate::routes::ApiError;
use crate::AppState;

/// The authenticated admin making the request
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub Admin);

impl CurrentAdmin {
    pub fn require_edit(&self, collection: Collection) -> Result<(), ApiError> {
        if self.0.permissions.can_edit(collection) {
            Ok(())
        } else {
            log::warn!("admin {} may not edit {}", self.0.id, collection.as_str());
            Err(ApiError::forbidden(format!("You may not edit {}", collection.as_str())))
        }
    }

    pub fn require_reorder(&self, collection: Collection) -> Result<(), ApiError> {
        if self.0.permissions.can_reorder(collection) {
            Ok(())
        } else {
            log::warn!("admin {} may not reorder {}", self.0.id, collection.as_str());
            Err(ApiError::forbidden(format!("You may not reorder {}", collection.as_str())))
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            log::warn!("Missing or malformed Authorization header");
            return Err(ApiError::unauthorized());
        };

        match state.admins.find_by_token(token).await? {
            Some(admin) => Ok(CurrentAdmin(admin)),
            None => {
                log::warn!("Unknown admin token attempted");
                Err(ApiError::unauthorized())
            }
        }
    }
}
