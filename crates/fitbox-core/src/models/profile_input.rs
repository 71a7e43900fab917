// ABOUTME: Biometric input model submitted to the profile computation service
// ABOUTME: Gender, ActivityLevel and Goal enums plus domain validation of numeric fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ClientError, ClientResult};

/// Biological sex used by the BMR equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    #[default]
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Wire name of the variant
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(ClientError::invalid_input(format!(
                "unknown gender '{other}' (expected male or female)"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily physical activity level, mapped to a TDEE multiplier by the service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days per week
    LightlyActive,
    /// Moderate exercise 3-5 days per week
    #[default]
    ModeratelyActive,
    /// Hard exercise 6-7 days per week
    VeryActive,
    /// Very hard exercise or a physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Every activity level, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Wire name of the variant
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little or no exercise)",
            Self::LightlyActive => "Lightly active (1-3 days/week)",
            Self::ModeratelyActive => "Moderately active (3-5 days/week)",
            Self::VeryActive => "Very active (6-7 days/week)",
            Self::ExtraActive => "Extra active (physical job or twice daily training)",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| ClientError::invalid_input(format!("unknown activity level '{s}'")))
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body composition goal, mapped to a calorie adjustment by the service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Aggressive deficit
    WeightLoss,
    /// Mild deficit
    ModerateWeightLoss,
    /// Maintain current weight
    Maintenance,
    /// Lean surplus
    #[default]
    MuscleGain,
    /// Large surplus
    Bulking,
}

impl Goal {
    /// Every goal, largest deficit to largest surplus
    pub const ALL: [Self; 5] = [
        Self::WeightLoss,
        Self::ModerateWeightLoss,
        Self::Maintenance,
        Self::MuscleGain,
        Self::Bulking,
    ];

    /// Wire name of the variant
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::ModerateWeightLoss => "moderate_weight_loss",
            Self::Maintenance => "maintenance",
            Self::MuscleGain => "muscle_gain",
            Self::Bulking => "bulking",
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight loss",
            Self::ModerateWeightLoss => "Moderate weight loss",
            Self::Maintenance => "Maintenance",
            Self::MuscleGain => "Muscle gain",
            Self::Bulking => "Bulking",
        }
    }
}

impl FromStr for Goal {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == normalized)
            .ok_or_else(|| ClientError::invalid_input(format!("unknown goal '{s}'")))
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biometric inputs collected from the user
///
/// Serialized as the `/calculate` request body and as `user_data` in chat
/// requests. The service reads `weight` and `height`, so the metric suffixes
/// only exist on the Rust side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub gender: Gender,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Height in meters
    #[serde(rename = "height")]
    pub height_m: f64,
    /// Daily activity level
    pub activity_level: ActivityLevel,
    /// Body composition goal
    pub goal: Goal,
}

impl Default for ProfileInput {
    fn default() -> Self {
        Self {
            age: 25,
            gender: Gender::Male,
            weight_kg: 75.0,
            height_m: 1.75,
            activity_level: ActivityLevel::ModeratelyActive,
            goal: Goal::MuscleGain,
        }
    }
}

impl ProfileInput {
    /// Check that every field holds a value from its domain
    ///
    /// Only domain membership is checked; plausibility of the values is left
    /// to the computation service.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidInput` naming the first offending field
    pub fn validate(&self) -> ClientResult<()> {
        if self.age == 0 {
            return Err(ClientError::invalid_input("age must be greater than zero"));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(ClientError::invalid_input(
                "weight_kg must be a positive number",
            ));
        }
        if !self.height_m.is_finite() || self.height_m <= 0.0 {
            return Err(ClientError::invalid_input(
                "height_m must be a positive number",
            ));
        }
        Ok(())
    }
}
