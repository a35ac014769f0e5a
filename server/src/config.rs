//! Server configuration from the environment (and `.env` when present)

use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};

pub const OWNER_EMAIL: &str = "owner@localhost";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// SQLite file, or `:memory:`
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    /// Bootstrap owner token; no owner is created when unset
    pub admin_token: Option<String>,
    /// CORS origin of the admin UI; any origin when unset
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: try_load("FOLIO_BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 8787))),
            db_path: try_load("FOLIO_DB_PATH", PathBuf::from("folio.db")),
            log_dir: try_load("FOLIO_LOG_DIR", PathBuf::from("logs")),
            admin_token: optional("FOLIO_ADMIN_TOKEN"),
            allowed_origin: optional("FOLIO_ALLOWED_ORIGIN"),
        }
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse `key`, falling back to `default` when unset or malformed
fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    let Some(raw) = optional(key) else {
        log::info!("{} not set, using default: {:?}", key, default);
        return default;
    };
    raw.parse().unwrap_or_else(|e| {
        log::warn!("Invalid {} value {:?}: {}, using default {:?}", key, raw, e, default);
        default
    })
}
