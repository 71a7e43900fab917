// ABOUTME: Environment-based configuration for the FitBox client
// ABOUTME: Remote base URL, per-operation timeouts, history window, and compute concurrency policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use fitbox_core::constants::{timeouts, DEFAULT_API_URL, DEFAULT_HISTORY_WINDOW};
use fitbox_core::errors::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// How `compute_profile` treats a call made while another is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputePolicy {
    /// Fail the new call with `OperationInFlight` without touching state
    #[default]
    RejectWhileInFlight,
    /// Let calls overlap; only the most recently issued request may commit
    LatestWins,
}

impl FromStr for ComputePolicy {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" | "reject_while_in_flight" => Ok(Self::RejectWhileInFlight),
            "latest" | "latest_wins" => Ok(Self::LatestWins),
            other => Err(ClientError::config(format!(
                "unknown compute policy '{other}' (expected reject or latest)"
            ))),
        }
    }
}

impl fmt::Display for ComputePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RejectWhileInFlight => f.write_str("reject"),
            Self::LatestWins => f.write_str("latest"),
        }
    }
}

/// Upper bounds for each remote operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Health probe
    pub health: Duration,
    /// Profile computation
    pub calculate: Duration,
    /// Chat turn
    pub chat: Duration,
    /// Plan generation
    pub plan: Duration,
    /// Catalog lookup
    pub catalog: Duration,
    /// TCP connect for the shared HTTP client
    pub connect: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            health: Duration::from_secs(timeouts::HEALTH_TIMEOUT_SECS),
            calculate: Duration::from_secs(timeouts::CALCULATE_TIMEOUT_SECS),
            chat: Duration::from_secs(timeouts::CHAT_TIMEOUT_SECS),
            plan: Duration::from_secs(timeouts::PLAN_TIMEOUT_SECS),
            catalog: Duration::from_secs(timeouts::CATALOG_TIMEOUT_SECS),
            connect: Duration::from_secs(timeouts::HTTP_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl TimeoutConfig {
    /// Longest per-operation timeout, used as the HTTP client's global ceiling
    #[must_use]
    pub fn longest(&self) -> Duration {
        [
            self.health,
            self.calculate,
            self.chat,
            self.plan,
            self.catalog,
        ]
        .into_iter()
        .max()
        .unwrap_or(self.chat)
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the FitBox service, without trailing slash
    pub api_url: String,
    /// Per-operation timeouts
    pub timeouts: TimeoutConfig,
    /// Number of most recent turns sent with each chat request
    pub history_window: usize,
    /// Re-entrancy policy for profile computation
    pub compute_policy: ComputePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            timeouts: TimeoutConfig::default(),
            history_window: DEFAULT_HISTORY_WINDOW,
            compute_policy: ComputePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if a variable is set to an unparseable value
    pub fn from_env() -> ClientResult<Self> {
        info!("Loading client configuration from environment variables");

        let defaults = TimeoutConfig::default();
        let config = Self {
            api_url: normalize_url(&env_var_or("FITBOX_API_URL", DEFAULT_API_URL)),
            timeouts: TimeoutConfig {
                health: env_secs_or("FITBOX_HEALTH_TIMEOUT_SECS", defaults.health)?,
                calculate: env_secs_or("FITBOX_CALCULATE_TIMEOUT_SECS", defaults.calculate)?,
                chat: env_secs_or("FITBOX_CHAT_TIMEOUT_SECS", defaults.chat)?,
                plan: env_secs_or("FITBOX_PLAN_TIMEOUT_SECS", defaults.plan)?,
                catalog: env_secs_or("FITBOX_CATALOG_TIMEOUT_SECS", defaults.catalog)?,
                connect: env_secs_or("FITBOX_HTTP_CONNECT_TIMEOUT_SECS", defaults.connect)?,
            },
            history_window: parse_env("FITBOX_HISTORY_WINDOW", DEFAULT_HISTORY_WINDOW)?,
            compute_policy: env::var("FITBOX_COMPUTE_POLICY")
                .ok()
                .map(|raw| raw.parse())
                .transpose()?
                .unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Override the base URL
    #[must_use]
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = normalize_url(api_url);
        self
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` when the URL is not http(s) or a timeout is zero
    pub fn validate(&self) -> ClientResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ClientError::config(format!(
                "FITBOX_API_URL must start with http:// or https:// (got '{}')",
                self.api_url
            )));
        }

        let t = &self.timeouts;
        if [t.health, t.calculate, t.chat, t.plan, t.catalog, t.connect]
            .iter()
            .any(Duration::is_zero)
        {
            return Err(ClientError::config("timeouts must be at least one second"));
        }

        if self.history_window == 0 {
            warn!("FITBOX_HISTORY_WINDOW is 0; chat requests will carry no history");
        }

        Ok(())
    }

    /// Human-readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FitBox Client Configuration:\n\
             - API URL: {}\n\
             - Timeouts (s): health={} calculate={} chat={} plan={} catalog={} connect={}\n\
             - History Window: {}\n\
             - Compute Policy: {}",
            self.api_url,
            self.timeouts.health.as_secs(),
            self.timeouts.calculate.as_secs(),
            self.timeouts.chat.as_secs(),
            self.timeouts.plan.as_secs(),
            self.timeouts.catalog.as_secs(),
            self.timeouts.connect.as_secs(),
            self.history_window,
            self.compute_policy,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> ClientResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ClientError::config(format!("invalid {key}='{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

/// Parse a whole-second duration from the environment
fn env_secs_or(key: &str, default: Duration) -> ClientResult<Duration> {
    parse_env(key, default.as_secs()).map(Duration::from_secs)
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}
