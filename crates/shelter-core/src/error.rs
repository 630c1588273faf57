// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Shelter record store.

use thiserror::Error;

/// The primary error type used across the facade trait and storage layer.
#[derive(Debug, Error)]
pub enum ShelterError {
    /// The resource URI matches none of the registered shapes.
    #[error("cannot {operation} unrecognized uri {uri}")]
    UnsupportedUri { operation: String, uri: String },

    /// The resource URI is a known shape, but the operation does not accept it
    /// (e.g. inserting at a single-record URI).
    #[error("{operation} is not supported for {uri}")]
    UnsupportedOperation { operation: String, uri: String },

    /// A write payload failed field validation. The caller is expected to
    /// correct the payload and resubmit.
    #[error("invalid pet record: {0}")]
    InvalidRecord(String),

    /// Storage engine errors (connection, query failure, constraint violation).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ShelterError {
    /// Shorthand for an [`ShelterError::UnsupportedUri`] carrying the
    /// attempted operation and the offending URI.
    pub fn unsupported_uri(operation: &str, uri: impl ToString) -> Self {
        ShelterError::UnsupportedUri {
            operation: operation.to_string(),
            uri: uri.to_string(),
        }
    }

    /// Shorthand for an [`ShelterError::UnsupportedOperation`].
    pub fn unsupported_operation(operation: &str, uri: impl ToString) -> Self {
        ShelterError::UnsupportedOperation {
            operation: operation.to_string(),
            uri: uri.to_string(),
        }
    }
}
