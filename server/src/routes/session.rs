//! Session route: who the token belongs to and what they may do

use axum::{routing::get, Json, Router};

use crate::auth::CurrentAdmin;
use crate::domain::Admin;
use crate::AppState;

pub async fn current_session(CurrentAdmin(admin): CurrentAdmin) -> Json<Admin> {
    Json(admin)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/session", get(current_session))
}
