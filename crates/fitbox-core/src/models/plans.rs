// ABOUTME: Generated workout/nutrition plans and activity/goal catalog entries
// ABOUTME: Results of the plan generation and catalog lookup endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of plan the assistant can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// Weekly training program
    Workout,
    /// Typical day of meals respecting the macro split
    Nutrition,
}

impl PlanKind {
    /// Wire name of the variant
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Workout => "workout",
            Self::Nutrition => "nutrition",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plan text produced by the assistant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Which plan this is
    pub kind: PlanKind,
    /// Plan body as returned by the service
    pub content: String,
    /// Generation time reported by the service, if parseable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

/// A selectable option advertised by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Wire key (e.g. `moderately_active`)
    pub key: String,
    /// Display text
    pub description: String,
}

/// Activity levels and goals supported by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Supported activity levels
    pub activity_levels: Vec<CatalogEntry>,
    /// Supported goals
    pub goals: Vec<CatalogEntry>,
}
