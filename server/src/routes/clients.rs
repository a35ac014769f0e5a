//! Client logo admin routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::auth::CurrentAdmin;
use crate::domain::{ClientLogo, ClientLogoInput, Collection, DomainError};
use crate::repository::Repository;
use crate::AppState;
use super::ApiError;

pub async fn list_clients(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
) -> Result<Json<Vec<ClientLogo>>, ApiError> {
    Ok(Json(state.clients.list().await?))
}

pub async fn create_client(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(payload): Json<ClientLogoInput>,
) -> Result<(StatusCode, Json<ClientLogo>), ApiError> {
    admin.require_edit(Collection::Clients)?;
    let logo = state.clients.create(&payload.into_new()).await?;
    log::info!("client {} created at order {}", logo.id, logo.order);
    Ok((StatusCode::CREATED, Json(logo)))
}

pub async fn update_client(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(id): Path<u32>,
    Json(payload): Json<ClientLogoInput>,
) -> Result<Json<ClientLogo>, ApiError> {
    admin.require_edit(Collection::Clients)?;
    let mut logo = state
        .clients
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Client {} not found", id)))?;
    payload.apply_to(&mut logo);
    Ok(Json(state.clients.update(&logo).await?))
}

pub async fn delete_client(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiError> {
    admin.require_edit(Collection::Clients)?;
    state.clients.delete(id).await?;
    log::info!("client {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/clients", get(list_clients).post(create_client))
        .route("/api/clients/:id", put(update_client).delete(delete_client))
}
