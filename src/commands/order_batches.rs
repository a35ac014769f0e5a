//! Order Batch Commands

use reorder_core::OrderBatch;
use reqwest::Method;
use serde::Deserialize;

use super::{send_json, CommandError};

#[derive(Debug, Clone, Deserialize)]
pub struct OrderBatchResult {
    pub collection: String,
    pub written: usize,
}

/// Submit one atomic batch of order writes
pub async fn apply_order_batch(batch: &OrderBatch<u32>) -> Result<OrderBatchResult, CommandError> {
    send_json(Method::POST, "/api/order-batches", batch).await
}
