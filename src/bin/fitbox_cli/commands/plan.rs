// ABOUTME: Workout and nutrition plan commands for fitbox-cli
// ABOUTME: Computes the profile first since plans require one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fitbox_client::orchestrator::RequestOrchestrator;
use fitbox_core::models::ProfileInput;

use super::session::compute;
use crate::helpers::display::display_plan;

/// Generate and display a workout plan
pub async fn workout(orchestrator: &RequestOrchestrator, input: &ProfileInput) -> Result<()> {
    compute(orchestrator, input).await?;
    let plan = orchestrator.generate_workout_plan(input).await?;
    display_plan(&plan);
    Ok(())
}

/// Generate and display a nutrition plan
pub async fn nutrition(orchestrator: &RequestOrchestrator, input: &ProfileInput) -> Result<()> {
    compute(orchestrator, input).await?;
    let plan = orchestrator.generate_nutrition_plan(input).await?;
    display_plan(&plan);
    Ok(())
}
