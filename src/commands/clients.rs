//! Client Logo Commands

use reqwest::Method;

use crate::models::{ClientLogo, ClientLogoInput};
use super::{get_json, send_empty, send_json, CommandError};

pub async fn list_clients() -> Result<Vec<ClientLogo>, CommandError> {
    get_json("/api/clients").await
}

pub async fn create_client(input: &ClientLogoInput) -> Result<ClientLogo, CommandError> {
    send_json(Method::POST, "/api/clients", input).await
}

pub async fn update_client(id: u32, input: &ClientLogoInput) -> Result<ClientLogo, CommandError> {
    send_json(Method::PUT, &format!("/api/clients/{}", id), input).await
}

pub async fn delete_client(id: u32) -> Result<(), CommandError> {
    send_empty(Method::DELETE, &format!("/api/clients/{}", id)).await
}
