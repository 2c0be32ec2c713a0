//! # Errors
//!
//! Failure categories surfaced by the menu core: user cancellation, menu
//! construction problems, and secret store failures. Cancellation is its own
//! variant so it can never be absorbed as an ordinary operation failure.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for menu sessions and navigation.
#[derive(Debug, Error)]
pub enum Error {
    /// The user quit (Exit entry, Esc, Ctrl+C, Ctrl+Q). Not a failure.
    #[error("Cancelled by user")]
    Cancelled,

    #[error("Invalid menu: {0}")]
    Construction(#[from] ConstructionError),

    #[error("Secret store error: {0}")]
    Store(StoreError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl Error {
    /// Whether this is a user-initiated cancellation.
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Interrupted => Self::Cancelled,
            other => Self::Store(other),
        }
    }
}

/// Raised when a menu is built from an unusable choice set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("menu has no selectable entries")]
    NoChoices,

    #[error("default {0} does not match any entry")]
    UnknownDefault(String),
}

/// Failures reported by a [`SecretStore`](crate::store::SecretStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("secret '{0}' not found")]
    NotFound(String),

    #[error("secret '{0}' already exists")]
    AlreadyExists(String),

    /// Transport or storage failure inside the backend.
    #[error("{0}")]
    Backend(String),

    /// The user interrupted a pending backend call.
    #[error("interrupted")]
    Interrupted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_store_call_becomes_cancellation() {
        let err: Error = StoreError::Interrupted.into();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_store_failures_stay_store_errors() {
        let err: Error = StoreError::NotFound("db".to_string()).into();
        assert!(!err.is_cancelled());
        assert_eq!(err.to_string(), "Secret store error: secret 'db' not found");
    }
}
