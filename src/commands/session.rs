//! Session Commands

use crate::models::AdminSession;
use super::{get_json, CommandError};

pub async fn load_session() -> Result<AdminSession, CommandError> {
    get_json("/api/session").await
}
