// ABOUTME: Configuration management module for the FitBox client
// ABOUTME: Loads remote endpoint, timeout, and concurrency settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the FitBox client
//!
//! Configuration is environment-only: every setting has a default and can be
//! overridden with a `FITBOX_*` variable.

/// Environment-based client configuration
pub mod environment;

pub use environment::{ClientConfig, ComputePolicy, TimeoutConfig};
