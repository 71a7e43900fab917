// ABOUTME: Kinds of remote operations issued by the client
// ABOUTME: Used for in-flight tracking, mutual exclusion errors, and log fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// A remote operation the orchestrator can have pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Reachability probe
    Health,
    /// Profile computation
    Compute,
    /// Chat turn
    Chat,
    /// Workout or nutrition plan generation
    Plan,
    /// Activity level and goal catalog lookup
    Catalog,
}

impl OperationKind {
    /// Stable name used in logs and error messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Compute => "compute",
            Self::Chat => "chat",
            Self::Plan => "plan",
            Self::Catalog => "catalog",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
