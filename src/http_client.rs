// ABOUTME: Shared HTTP client with connection pooling for FitBox service calls
// ABOUTME: Process-wide singleton with configurable timeouts set once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

use crate::config::TimeoutConfig;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(Duration, Duration)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration
///
/// Must be called before the first `shared_client()` call to take effect.
/// The request ceiling is the longest per-operation timeout; the orchestrator
/// enforces the tighter per-operation bounds itself.
pub fn initialize_shared_client(timeouts: &TimeoutConfig) {
    let _ = CLIENT_TIMEOUTS.set((timeouts.longest(), timeouts.connect));
}

/// Get the shared HTTP client
///
/// Falls back to the default timeouts if `initialize_shared_client()` was not called.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS.get().copied().unwrap_or_else(|| {
            let defaults = TimeoutConfig::default();
            (defaults.longest(), defaults.connect)
        });

        build_client(timeout, connect_timeout)
    })
}

/// Build a dedicated client with the given timeouts
#[must_use]
pub fn build_client(timeout: Duration, connect_timeout: Duration) -> Client {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(concat!("fitbox-client/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}
