//! Unified error system for Readian crates
//!
//! A single error type shared by the policy, guard, and client crates.
//! Access denials are never errors: they are ordinary [`AccessVerdict`]
//! values produced by the policy crate. Errors here mean a broken input
//! contract or a failed collaborator call.
//!
//! [`AccessVerdict`]: https://docs.rs/readian-policy

use serde::{Deserialize, Serialize};

/// Unified error type for all Readian operations
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum ReadianError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// No authenticated session is available
    #[error("Unauthenticated: {message}")]
    Unauthenticated {
        /// Error message describing the missing session
        message: String,
    },

    /// Network or transport error from a backend call
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message describing the serialization failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl ReadianError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an unauthenticated error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Standard Result type for Readian operations
pub type Result<T> = std::result::Result<T, ReadianError>;

impl From<std::io::Error> for ReadianError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            std::io::ErrorKind::PermissionDenied => Self::unauthenticated(err.to_string()),
            _ => Self::internal(err.to_string()),
        }
    }
}
