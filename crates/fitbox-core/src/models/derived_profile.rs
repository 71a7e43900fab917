// ABOUTME: Derived physiological profile returned by the computation service
// ABOUTME: BMI, BMR, TDEE and nutrition target types with strict all-or-nothing deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Body-mass index with its category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value (the service names this key `bmi`)
    #[serde(alias = "bmi")]
    pub value: f64,
    /// Category label (e.g. "Normal", "Overweight")
    pub category: String,
    /// Advice associated with the category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// A single energy figure in kcal/day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyValue {
    /// kcal per day
    pub value: f64,
}

/// Target grams per macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

impl MacroSplit {
    /// Energy implied by the split (4/4/9 kcal per gram)
    #[must_use]
    pub fn implied_calories(&self) -> f64 {
        self.protein_g
            .mul_add(4.0, self.carbs_g.mul_add(4.0, self.fat_g * 9.0))
    }
}

/// Daily calorie target and its macro split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTarget {
    /// Target kcal per day
    pub target_calories: f64,
    /// Macro split composing the target
    pub macros: MacroSplit,
}

/// Computed physiological profile
///
/// Every sub-object is required: a payload missing any of them fails to
/// deserialize, so a partially populated profile can never be constructed
/// from a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedProfile {
    /// Body-mass index
    pub bmi: BmiResult,
    /// Basal metabolic rate
    pub bmr: EnergyValue,
    /// Total daily energy expenditure
    pub tdee: EnergyValue,
    /// Nutrition targets
    pub nutrition: NutritionTarget,
}
