//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ContactId;
use thiserror::Error;

/// Errors that can occur inside a contact repository backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The lock guarding the store was poisoned by a panicking writer
    #[error("Repository lock poisoned")]
    Poisoned,

    /// Backend-specific storage failure
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Errors returned by the contact service to its callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Malformed or conflicting input (empty name, duplicate email)
    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    /// The referenced contact does not exist
    #[error("Contact not found: {id}")]
    NotFound { id: ContactId },

    /// The storage backend failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ContactError {
    /// Build a validation error from a reason.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Whether this error reports a missing contact.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Error raised by a single observer while handling a notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    /// The observer could not write its output
    #[error("Observer output failed: {0}")]
    Output(String),

    /// The observer could not read fresh state from its subject
    #[error("Observer could not refresh: {0}")]
    Refresh(String),

    /// Generic observer failure
    #[error("Observer failed: {0}")]
    Other(String),
}

impl From<std::io::Error> for ObserverError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<ContactError> for ObserverError {
    fn from(err: ContactError) -> Self {
        Self::Refresh(err.to_string())
    }
}

/// Failures collected during one notification pass.
///
/// Every attached observer is invoked even when an earlier one fails; each
/// failure is recorded with the observer's position in attachment order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} of {attempted} observers failed", failures.len())]
pub struct NotifyError {
    /// Number of observers that were invoked
    pub attempted: usize,

    /// `(position, error)` for every observer that failed
    pub failures: Vec<(usize, ObserverError)>,
}

/// Errors from the MVC list model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The item was empty
    #[error("Item must be a non-empty string.")]
    EmptyItem,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for a single observer's outcome
pub type ObserverResult = Result<(), ObserverError>;

/// Convenience type alias for Results with ListError
pub type ListResult<T> = Result<T, ListError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
