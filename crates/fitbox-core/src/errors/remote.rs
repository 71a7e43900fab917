// ABOUTME: Transport-level error type returned by remote backends
// ABOUTME: Covers connect failures, timeouts, HTTP statuses, rejections and schema mismatches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use thiserror::Error;

/// Result alias for backend calls
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Failure of a single remote call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Connection could not be established or was interrupted
    #[error("transport error: {0}")]
    Transport(String),

    /// No response within the allotted time
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the body, or a body excerpt
        message: String,
    },

    /// Service answered but reported `success: false`
    #[error("service rejected the request: {0}")]
    Rejected(String),

    /// Response body did not match the expected schema
    #[error("malformed response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Create a transport error
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a schema mismatch error
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create a rejection error
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

#[cfg(feature = "remote-errors")]
impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::transport(err.to_string())
        }
    }
}
