// ABOUTME: Remote FitBox service abstraction consumed by the request orchestrator
// ABOUTME: Defines the backend contract (health, calculate, chat, plans, catalog) and chat payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Remote Backend Interface
//!
//! The orchestrator never talks HTTP directly. It drives a `FitnessBackend`,
//! which keeps the request lifecycle (in-flight tracking, timeouts, failure
//! translation) independent of the transport and lets tests substitute a
//! scripted backend.
//!
//! Backends report transport-level `RemoteError`s; turning those into
//! `ClientError` conditions is the orchestrator's job.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitbox_client::remote::{FitnessBackend, HttpFitnessBackend};
//! use fitbox_core::models::ProfileInput;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = HttpFitnessBackend::new("http://localhost:5000");
//! let profile = backend.calculate(&ProfileInput::default()).await?;
//! println!("TDEE: {:.0} kcal/day", profile.tdee.value);
//! # Ok(())
//! # }
//! ```

mod http;

pub use http::HttpFitnessBackend;

use async_trait::async_trait;
use fitbox_core::errors::RemoteResult;
use fitbox_core::models::{
    Catalog, DerivedProfile, GeneratedPlan, HistoryExchange, PlanKind, ProfileInput,
};
use serde::{Deserialize, Serialize};

/// Body of a chat request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Biometric inputs the assistant should take into account
    pub user_data: ProfileInput,
    /// New user message
    pub message: String,
    /// Session identifier for the service's own correlation
    pub conversation_id: String,
    /// Completed exchanges from the windowed context preceding `message`
    pub history: Vec<HistoryExchange>,
}

/// Contract of the remote FitBox service
#[async_trait]
pub trait FitnessBackend: Send + Sync {
    /// Short backend identifier for logs
    fn name(&self) -> &'static str;

    /// Probe reachability; `Ok(false)` means the service answered with a non-success status
    async fn health(&self) -> RemoteResult<bool>;

    /// Compute the derived profile for `input`
    async fn calculate(&self, input: &ProfileInput) -> RemoteResult<DerivedProfile>;

    /// Send one chat turn and return the assistant's reply
    async fn chat(&self, request: &ChatRequest) -> RemoteResult<String>;

    /// Generate a workout or nutrition plan for `input`
    async fn generate_plan(&self, kind: PlanKind, input: &ProfileInput)
        -> RemoteResult<GeneratedPlan>;

    /// Fetch the activity levels and goals the service supports
    async fn catalog(&self) -> RemoteResult<Catalog>;
}
