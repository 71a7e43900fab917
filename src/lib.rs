// ABOUTME: Main library entry point for the FitBox client orchestration core
// ABOUTME: Profile computation, bounded-context chat and session gating over a remote service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitBox Client
//!
//! Client-side core of FitBox: it sends a user's biometric inputs to the
//! FitBox service, keeps the derived profile (BMI, BMR, TDEE, macro split),
//! and lets the user chat with the service's assistant about it.
//!
//! The calculations themselves happen remotely. This crate owns the request
//! lifecycle around them and the session state a front end renders.
//!
//! ## Architecture
//!
//! - **Remote**: `FitnessBackend` contract and its reqwest implementation
//! - **Conversation**: append-only chat log and the context window policy
//! - **Session**: session phase, profile slot with staleness tickets, affordance gating
//! - **Orchestrator**: the single owner of session state and all remote calls
//! - **Config**: environment-based settings
//!
//! Foundation types (`ProfileInput`, `DerivedProfile`, errors) live in `fitbox_core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitbox_client::config::ClientConfig;
//! use fitbox_client::orchestrator::RequestOrchestrator;
//! use fitbox_core::models::ProfileInput;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = RequestOrchestrator::from_config(ClientConfig::from_env()?);
//!     let input = ProfileInput::default();
//!
//!     orchestrator.compute_profile(&input).await?;
//!     let receipt = orchestrator.submit_chat(&input, "How much protein should I eat?").await?;
//!     println!("{}", receipt.reply.text);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Chat log and context windowing
pub mod conversation;

/// Shared reqwest client
pub mod http_client;

/// Tracing subscriber setup
pub mod logging;

/// Request lifecycle and session ownership
pub mod orchestrator;

/// Remote service contract and HTTP backend
pub mod remote;

/// Session phase, affordances and snapshots
pub mod session;
