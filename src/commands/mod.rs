//! HTTP Command Wrappers
//!
//! Frontend bindings to folio-server routes, organized by domain.
//! The API base URL and bearer token live in `localStorage`.

mod clients;
mod order_batches;
mod portfolio;
mod session;

use reorder_core::WriteError;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use clients::*;
pub use order_batches::*;
pub use portfolio::*;
pub use session::*;

const API_BASE_KEY: &str = "folio.apiBase";
const TOKEN_KEY: &str = "folio.token";
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8787";

/// A failed command. `status` is `None` when no response arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandError {
    pub status: Option<u16>,
    pub message: String,
}

impl CommandError {
    pub fn network(message: impl Into<String>) -> Self {
        Self { status: None, message: message.into() }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    /// 401/403 are permission problems, everything else counts as the
    /// store being unavailable
    pub fn into_write_error(self) -> WriteError {
        match self.status {
            Some(401) | Some(403) => WriteError::PermissionDenied(self.message),
            _ => WriteError::Unavailable(self.message),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {}: {}", status, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn api_base() -> String {
    storage()
        .and_then(|s| s.get_item(API_BASE_KEY).ok().flatten())
        .map(|base| base.trim().trim_end_matches('/').to_string())
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

pub fn stored_token() -> Option<String> {
    storage()
        .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        .filter(|t| !t.is_empty())
}

pub fn save_token(token: &str) -> Result<(), String> {
    let storage = storage().ok_or("localStorage unavailable")?;
    storage
        .set_item(TOKEN_KEY, token.trim())
        .map_err(|e| format!("Failed to store token: {:?}", e))
}

pub fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

fn request(method: Method, path: &str) -> RequestBuilder {
    let req = reqwest::Client::new().request(method, format!("{}{}", api_base(), path));
    match stored_token() {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}

async fn execute(req: RequestBuilder) -> Result<Response, CommandError> {
    let res = req
        .send()
        .await
        .map_err(|e| CommandError::network(e.to_string()))?;
    if res.status().is_success() {
        return Ok(res);
    }

    let status = res.status().as_u16();
    let message = match res.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed with status {}", status),
    };
    Err(CommandError { status: Some(status), message })
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, CommandError> {
    res.json::<T>()
        .await
        .map_err(|e| CommandError::network(format!("Unexpected response: {}", e)))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, CommandError> {
    decode(execute(request(Method::GET, path)).await?).await
}

pub(crate) async fn send_json<B, T>(method: Method, path: &str, body: &B) -> Result<T, CommandError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    decode(execute(request(method, path).json(body)).await?).await
}

pub(crate) async fn send_empty(method: Method, path: &str) -> Result<(), CommandError> {
    execute(request(method, path)).await.map(|_| ())
}
