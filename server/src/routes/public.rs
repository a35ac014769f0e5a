//! Public site routes. Visible entities only, no auth.

use axum::{extract::State, routing::get, Json, Router};

use crate::domain::{ClientLogo, PortfolioItem};
use crate::repository::OrderedRepository;
use crate::AppState;
use super::ApiError;

pub async fn public_portfolio(State(state): State<AppState>) -> Result<Json<Vec<PortfolioItem>>, ApiError> {
    Ok(Json(state.portfolio.list_visible().await?))
}

pub async fn public_clients(State(state): State<AppState>) -> Result<Json<Vec<ClientLogo>>, ApiError> {
    Ok(Json(state.clients.list_visible().await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/public/portfolio", get(public_portfolio))
        .route("/api/public/clients", get(public_clients))
}
