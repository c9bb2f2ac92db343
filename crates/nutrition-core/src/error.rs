//! Error types for nutrition ledger operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-facing messages.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Bad input: negative or non-finite number, empty food name, missing date
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation referenced an entry id the ledger does not hold
    #[error("Entry not found: {0}")]
    NotFound(Uuid),

    /// Persistence collaborator failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl LedgerError {
    /// True for errors caused by caller input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::NotFound(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Validation(err.to_string())
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(err: rusqlite::Error) -> Self {
        LedgerError::Storage(format!("SQLite error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_includes_id() {
        let id = Uuid::nil();
        let err = LedgerError::NotFound(id);
        assert_eq!(
            err.to_string(),
            "Entry not found: 00000000-0000-0000-0000-000000000000"
        );
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_json_error_maps_to_validation() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let mapped: LedgerError = err.into();
        assert!(mapped.is_validation());
    }
}
