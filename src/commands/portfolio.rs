//! Portfolio Commands

use reqwest::Method;

use crate::models::{PortfolioItem, PortfolioItemInput};
use super::{get_json, send_empty, send_json, CommandError};

pub async fn list_portfolio() -> Result<Vec<PortfolioItem>, CommandError> {
    get_json("/api/portfolio").await
}

pub async fn list_public_portfolio() -> Result<Vec<PortfolioItem>, CommandError> {
    get_json("/api/public/portfolio").await
}

pub async fn create_portfolio_item(input: &PortfolioItemInput) -> Result<PortfolioItem, CommandError> {
    send_json(Method::POST, "/api/portfolio", input).await
}

pub async fn update_portfolio_item(id: u32, input: &PortfolioItemInput) -> Result<PortfolioItem, CommandError> {
    send_json(Method::PUT, &format!("/api/portfolio/{}", id), input).await
}

pub async fn delete_portfolio_item(id: u32) -> Result<(), CommandError> {
    send_empty(Method::DELETE, &format!("/api/portfolio/{}", id)).await
}
