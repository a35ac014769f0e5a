//! Portfolio admin routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::auth::CurrentAdmin;
use crate::domain::{Collection, DomainError, PortfolioItem, PortfolioItemInput};
use crate::repository::Repository;
use crate::AppState;
use super::ApiError;

/// Every item, hidden ones included, in display order
pub async fn list_items(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
) -> Result<Json<Vec<PortfolioItem>>, ApiError> {
    Ok(Json(state.portfolio.list().await?))
}

pub async fn create_item(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(payload): Json<PortfolioItemInput>,
) -> Result<(StatusCode, Json<PortfolioItem>), ApiError> {
    admin.require_edit(Collection::Portfolio)?;
    let item = state.portfolio.create(&payload.into_new()).await?;
    log::info!("portfolio item {} created at order {}", item.id, item.order);
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(id): Path<u32>,
    Json(payload): Json<PortfolioItemInput>,
) -> Result<Json<PortfolioItem>, ApiError> {
    admin.require_edit(Collection::Portfolio)?;
    let mut item = state
        .portfolio
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Portfolio item {} not found", id)))?;
    payload.apply_to(&mut item);
    Ok(Json(state.portfolio.update(&item).await?))
}

pub async fn delete_item(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiError> {
    admin.require_edit(Collection::Portfolio)?;
    state.portfolio.delete(id).await?;
    log::info!("portfolio item {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/portfolio", get(list_items).post(create_item))
        .route("/api/portfolio/:id", put(update_item).delete(delete_item))
}
