//! Batch Write Errors

use serde::{Deserialize, Serialize};

/// Why the store rejected an order batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteError {
    /// The caller lacks permission for this collection
    PermissionDenied(String),
    /// Connectivity loss or any other failure
    Unavailable(String),
}

impl WriteError {
    /// Short label for diagnostics; never shown to the user
    pub fn kind(&self) -> &'static str {
        match self {
            WriteError::PermissionDenied(_) => "permission_denied",
            WriteError::Unavailable(_) => "unavailable",
        }
    }
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            WriteError::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
        }
    }
}

impl std::error::Error for WriteError {}
