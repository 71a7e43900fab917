// ABOUTME: Client error conditions surfaced by the FitBox orchestration core
// ABOUTME: Failure taxonomy for compute, chat, connectivity and precondition violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Client Error Types
//!
//! Every remote-call failure is caught at the orchestrator boundary and turned
//! into one of the conditions below, so callers only ever see data:
//! - `ClientError` - conditions the caller can render or retry
//! - `RemoteError` - transport-level failures produced by backends

/// Transport-level errors produced by remote backends
pub mod remote;

pub use remote::{RemoteError, RemoteResult};

use thiserror::Error;

use crate::models::{OperationKind, PlanKind};

/// Result alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Conditions reported by the orchestration core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Health probe could not reach the service
    #[error("remote service unreachable: {reason}")]
    ConnectivityFailure {
        /// Underlying cause
        reason: String,
    },

    /// Profile computation failed or was rejected; any existing profile is unchanged
    #[error("profile computation failed: {reason}")]
    ComputationFailed {
        /// Underlying cause
        reason: String,
    },

    /// Chat request failed; the conversation advanced with the fallback notice
    #[error("chat delivery failed: {reason}")]
    ChatDeliveryFailed {
        /// Underlying cause
        reason: String,
    },

    /// Workout or nutrition plan could not be generated
    #[error("{kind} plan generation failed: {reason}")]
    PlanGenerationFailed {
        /// Requested plan
        kind: PlanKind,
        /// Underlying cause
        reason: String,
    },

    /// Activity level or goal catalog could not be fetched
    #[error("catalog unavailable: {reason}")]
    CatalogUnavailable {
        /// Underlying cause
        reason: String,
    },

    /// Input field outside its domain
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Chat message empty after trimming
    #[error("message is empty")]
    EmptyMessage,

    /// Operation requires a computed profile
    #[error("a computed profile is required before this operation")]
    ProfileRequired,

    /// Re-entrant call rejected while the same operation is pending
    #[error("a {0} request is already in flight")]
    OperationInFlight(OperationKind),

    /// Invalid or missing configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Translate a health probe failure
    #[must_use]
    pub fn connectivity(err: &RemoteError) -> Self {
        Self::ConnectivityFailure {
            reason: err.to_string(),
        }
    }

    /// Translate a compute failure
    #[must_use]
    pub fn computation_failed(err: &RemoteError) -> Self {
        Self::ComputationFailed {
            reason: err.to_string(),
        }
    }

    /// Translate a chat failure
    #[must_use]
    pub fn chat_delivery_failed(err: &RemoteError) -> Self {
        Self::ChatDeliveryFailed {
            reason: err.to_string(),
        }
    }

    /// Translate a plan generation failure
    #[must_use]
    pub fn plan_generation_failed(kind: PlanKind, err: &RemoteError) -> Self {
        Self::PlanGenerationFailed {
            kind,
            reason: err.to_string(),
        }
    }

    /// Translate a catalog lookup failure
    #[must_use]
    pub fn catalog_unavailable(err: &RemoteError) -> Self {
        Self::CatalogUnavailable {
            reason: err.to_string(),
        }
    }

    /// Stable machine-readable code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ConnectivityFailure { .. } => "CONNECTIVITY_FAILURE",
            Self::ComputationFailed { .. } => "COMPUTATION_FAILED",
            Self::ChatDeliveryFailed { .. } => "CHAT_DELIVERY_FAILED",
            Self::PlanGenerationFailed { .. } => "PLAN_GENERATION_FAILED",
            Self::CatalogUnavailable { .. } => "CATALOG_UNAVAILABLE",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::ProfileRequired => "PROFILE_REQUIRED",
            Self::OperationInFlight(_) => "OPERATION_IN_FLIGHT",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether repeating the same call later may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectivityFailure { .. }
                | Self::ComputationFailed { .. }
                | Self::ChatDeliveryFailed { .. }
                | Self::PlanGenerationFailed { .. }
                | Self::CatalogUnavailable { .. }
                | Self::OperationInFlight(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_translation_keeps_remote_reason() {
        let err = ClientError::computation_failed(&RemoteError::Timeout(Duration::from_secs(10)));
        assert_eq!(err.code(), "COMPUTATION_FAILED");
        assert!(err.to_string().contains("timed out after 10s"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_precondition_errors_are_not_retryable() {
        assert!(!ClientError::EmptyMessage.is_retryable());
        assert!(!ClientError::ProfileRequired.is_retryable());
        assert!(!ClientError::invalid_input("age").is_retryable());
    }

    #[test]
    fn test_in_flight_message_names_operation() {
        let err = ClientError::OperationInFlight(OperationKind::Compute);
        assert_eq!(err.to_string(), "a compute request is already in flight");
    }
}
