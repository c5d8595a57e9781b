//! Inventory construction and ingestion errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while building or reading an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Server name '{0}' appears more than once")]
    DuplicateServerName(String),

    #[error("Inventory has no header row")]
    MissingHeader,

    #[error("Inventory could not be read: {0}")]
    Unreadable(String),
}

impl InventoryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            InventoryError::DuplicateServerName(_) => ErrorCode::DuplicateServerName,
            InventoryError::MissingHeader | InventoryError::Unreadable(_) => {
                ErrorCode::InventoryUnreadable
            }
        }
    }
}

impl From<InventoryError> for DomainError {
    fn from(err: InventoryError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            InventoryError::DuplicateServerName(name) => domain.with_detail("server_name", name),
            _ => domain,
        }
    }
}
