// ABOUTME: Core data models for the FitBox client
// ABOUTME: Re-exports biometric input, derived profile, conversation and plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Chat turn types shared by the conversation store and the chat wire format
pub mod conversation;
/// Derived physiological profile returned by the computation service
pub mod derived_profile;
/// Remote operation kinds
pub mod operation;
/// Generated plans and catalog entries
pub mod plans;
/// User biometric inputs
pub mod profile_input;

pub use conversation::{ChatTurn, HistoryExchange, TurnOutcome, TurnRole};
pub use derived_profile::{BmiResult, DerivedProfile, EnergyValue, MacroSplit, NutritionTarget};
pub use operation::OperationKind;
pub use plans::{Catalog, CatalogEntry, GeneratedPlan, PlanKind};
pub use profile_input::{ActivityLevel, Gender, Goal, ProfileInput};
