// ABOUTME: Application-wide constants for the FitBox client
// ABOUTME: Endpoint paths, per-operation timeout defaults, history window and fallback text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Remote service endpoint paths
pub mod endpoints {
    /// Reachability probe
    pub const HEALTH: &str = "/health";
    /// Profile computation
    pub const CALCULATE: &str = "/calculate";
    /// Conversational assistant turn
    pub const CHAT: &str = "/chat";
    /// Weekly workout plan generation
    pub const GENERATE_WORKOUT: &str = "/generate_workout";
    /// Daily meal plan generation
    pub const GENERATE_NUTRITION: &str = "/generate_nutrition";
    /// Activity level catalog
    pub const ACTIVITY_LEVELS: &str = "/activity_levels";
    /// Goal catalog
    pub const GOALS: &str = "/goals";
}

/// Default timeouts, in seconds
pub mod timeouts {
    /// Health probe timeout
    pub const HEALTH_TIMEOUT_SECS: u64 = 2;
    /// Profile computation timeout
    pub const CALCULATE_TIMEOUT_SECS: u64 = 10;
    /// Chat turn timeout (assistant generation can be slow)
    pub const CHAT_TIMEOUT_SECS: u64 = 120;
    /// Plan generation timeout
    pub const PLAN_TIMEOUT_SECS: u64 = 120;
    /// Catalog lookup timeout
    pub const CATALOG_TIMEOUT_SECS: u64 = 10;
    /// TCP connect timeout for the shared HTTP client
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;
}

/// Default remote service base URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Number of most recent turns sent as context with each chat request
pub const DEFAULT_HISTORY_WINDOW: usize = 6;

/// Assistant turn appended when a chat request cannot be delivered
pub const CHAT_FALLBACK_MESSAGE: &str = "Connection error: unable to reach the FitBox server.";

/// Service name used in structured logs
pub const SERVICE_NAME: &str = "fitbox-client";
