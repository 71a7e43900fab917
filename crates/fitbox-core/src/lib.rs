// ABOUTME: Core types and constants for the FitBox client orchestration core
// ABOUTME: Foundation crate with profile models, chat turns, error taxonomy, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitBox Core
//!
//! Foundation crate providing the shared types of the FitBox client. It holds
//! no I/O: the remote backend, session state and request orchestration live in
//! the `fitbox_client` crate and build on the types defined here.
//!
//! ## Modules
//!
//! - **models**: Biometric inputs, derived profile, chat turns, plans and catalog entries
//! - **errors**: `ClientError` conditions and transport-level `RemoteError`
//! - **constants**: Endpoint paths, default timeouts and the chat fallback notice

/// Client error conditions and transport errors
pub mod errors;

/// Endpoint paths, timeouts and other fixed values
pub mod constants;

/// Core data models (profile input, derived profile, conversation turns)
pub mod models;
