//! Order batch route
//!
//! The single write path for sort orders. A batch targets one collection
//! and is applied atomically: either every listed order is persisted or
//! none is.

use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use reorder_core::OrderBatch;
use serde::{Deserialize, Serialize};

use crate::auth::CurrentAdmin;
use crate::domain::Collection;
use crate::repository::OrderedRepository;
use crate::AppState;
use super::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBatchResponse {
    pub collection: Collection,
    pub written: usize,
}

pub async fn apply_order_batch(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    Json(batch): Json<OrderBatch<u32>>,
) -> Result<Json<OrderBatchResponse>, ApiError> {
    let collection = Collection::parse(&batch.collection)
        .ok_or_else(|| ApiError::bad_request(format!("Unknown collection {:?}", batch.collection)))?;
    admin.require_reorder(collection)?;

    let mut seen = HashSet::with_capacity(batch.len());
    if let Some(dup) = batch.writes.iter().find(|w| !seen.insert(w.id)) {
        return Err(ApiError::bad_request(format!("Entity {} listed twice", dup.id)));
    }

    let written = match collection {
        Collection::Portfolio => state.portfolio.apply_order_batch(&batch.writes).await,
        Collection::Clients => state.clients.apply_order_batch(&batch.writes).await,
    }
    .map_err(|e| {
        log::warn!(
            "order batch rejected: collection={} documents={} error={}",
            collection.as_str(),
            batch.len(),
            e
        );
        ApiError::from(e)
    })?;

    log::info!(
        "order batch applied: collection={} documents={} admin={}",
        collection.as_str(),
        written,
        admin.0.id
    );
    Ok(Json(OrderBatchResponse { collection, written }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/order-batches", post(apply_order_batch))
}
