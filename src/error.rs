//! Error types for the progression engine.
//!
//! questline uses a hierarchical error system:
//! - `ProgressionError` is the top-level error returned by all public APIs
//! - Specific error types (`NotFoundError`, `ValidationError`, `StoreError`)
//!   provide detail
//!
//! # Error Handling Pattern
//! ```rust,ignore
//! use questline::{Config, MemoryStore, ProgressionEngine, Result};
//!
//! fn example() -> Result<()> {
//!     let engine = ProgressionEngine::new(Box::new(MemoryStore::new()), Config::default())?;
//!     // ... operations that may fail ...
//!     Ok(())
//! }
//! ```
//!
//! Persistence failures reported by the store are wrapped in
//! [`ProgressionError::Store`] and propagate to the caller unmodified;
//! the engine performs no silent retries. A failed `on_activity` call is
//! safe to replay as a whole: already-unlocked achievements are no-ops.

use thiserror::Error;

/// Result type alias for progression engine operations.
pub type Result<T> = std::result::Result<T, ProgressionError>;

/// Top-level error enum for all progression engine operations.
///
/// This is the only error type returned by public APIs.
/// Use pattern matching to handle specific error cases.
#[derive(Debug, Error)]
pub enum ProgressionError {
    /// Requested entity not found.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// Input or stored-state validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Error reported by the backing store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Achievement catalog failed its structural invariants.
    #[error("Catalog error: {reason}")]
    Catalog {
        /// Description of the violated invariant.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of what's wrong with the configuration.
        reason: String,
    },
}

impl ProgressionError {
    /// Creates a catalog error with the given reason.
    pub fn catalog(reason: impl Into<String>) -> Self {
        Self::Catalog {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error with the given reason.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a store error.
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

/// Not found errors for specific entity types.
#[derive(Debug, Error)]
pub enum NotFoundError {
    /// User with given ID not found in the store.
    #[error("User not found: {0}")]
    User(String),

    /// Achievement definition with given ID not found in the catalog.
    ///
    /// Note: during ledger recompute a missing definition is skipped with
    /// a warning rather than surfaced; this variant is for direct lookups.
    #[error("Achievement not found: {0}")]
    Achievement(String),
}

impl NotFoundError {
    /// Creates a user not found error.
    pub fn user(id: impl ToString) -> Self {
        Self::User(id.to_string())
    }

    /// Creates an achievement not found error.
    pub fn achievement(id: impl ToString) -> Self {
        Self::Achievement(id.to_string())
    }
}

/// Validation errors for input data and stored state.
///
/// These errors indicate problems with data provided by the caller or
/// read back from the store. The engine rejects malformed state before
/// any mutation rather than silently corrupting it further.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A field has an invalid value.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// Name of the invalid field.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },

    /// A user's level state violates the leveling invariants.
    ///
    /// Covers zero `next_level_xp`, zero `current_level`,
    /// `current_xp >= next_level_xp`, and `current_xp > total_xp`.
    #[error("Invalid level state: {reason}")]
    InvalidLevelState {
        /// Which invariant is violated.
        reason: String,
    },

    /// A required field is missing or empty.
    #[error("Required field missing: {field}")]
    RequiredField {
        /// Name of the missing field.
        field: String,
    },
}

impl ValidationError {
    /// Creates an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid level state error.
    pub fn invalid_level_state(reason: impl Into<String>) -> Self {
        Self::InvalidLevelState {
            reason: reason.into(),
        }
    }

    /// Creates a required field error.
    pub fn required_field(field: impl Into<String>) -> Self {
        Self::RequiredField {
            field: field.into(),
        }
    }
}

/// Errors reported by a [`ProgressStore`](crate::store::ProgressStore)
/// implementation.
///
/// The engine never interprets these beyond wrapping them in
/// [`ProgressionError::Store`]; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend failure (connection loss, I/O error, transaction abort).
    #[error("Backend failure: {0}")]
    Backend(String),

    /// Serialization/deserialization error in the store.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A write conflicted with existing state (e.g. duplicate record batch).
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    /// Creates a backend failure error with the given message.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Creates a serialization error with the given message.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates a conflict error with the given message.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProgressionError::config("growth factor below 1.0");
        assert_eq!(
            err.to_string(),
            "Configuration error: growth factor below 1.0"
        );
    }

    #[test]
    fn test_not_found_error_display() {
        let err = NotFoundError::user("abc-123");
        assert_eq!(err.to_string(), "User not found: abc-123");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::invalid_level_state("next_level_xp must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid level state: next_level_xp must be at least 1"
        );
    }

    #[test]
    fn test_store_error_display() {
        let err: ProgressionError = StoreError::backend("connection reset").into();
        assert_eq!(err.to_string(), "Store error: Backend failure: connection reset");
    }

    #[test]
    fn test_is_not_found() {
        let err: ProgressionError = NotFoundError::user("test").into();
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_is_validation() {
        let err: ProgressionError = ValidationError::required_field("user_id").into();
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_store() {
        let err: ProgressionError = StoreError::conflict("duplicate record batch").into();
        assert!(err.is_store());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_error_conversion_chain() {
        // Simulate a store error propagating up
        fn inner() -> Result<()> {
            Err(StoreError::backend("test failure"))?
        }

        let result = inner();
        assert!(result.is_err());
        assert!(result.unwrap_err().is_store());
    }
}
