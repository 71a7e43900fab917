// ABOUTME: Health, calculate, catalog and export commands for fitbox-cli
// ABOUTME: One-shot operations that print their result and exit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use fitbox_client::orchestrator::{ComputeOutcome, RequestOrchestrator};
use fitbox_core::models::{DerivedProfile, ProfileInput};
use std::sync::Arc;
use tracing::info;

use crate::helpers::display::{display_catalog, display_profile};

/// Probe the service and report reachability
pub async fn health(orchestrator: &RequestOrchestrator) -> Result<()> {
    let api_url = &orchestrator.config().api_url;
    if orchestrator.probe_health().await {
        println!("FitBox service reachable at {api_url}");
        Ok(())
    } else {
        bail!("FitBox service unreachable at {api_url}")
    }
}

/// Compute and display the derived profile
pub async fn calculate(orchestrator: &RequestOrchestrator, input: &ProfileInput) -> Result<()> {
    let profile = compute(orchestrator, input).await?;
    display_profile(input, &profile);
    Ok(())
}

/// Fetch and display the catalog
pub async fn catalog(orchestrator: &RequestOrchestrator) -> Result<()> {
    let catalog = orchestrator.fetch_catalog().await?;
    display_catalog(&catalog);
    Ok(())
}

/// Compute the profile, then print the session snapshot as JSON
pub async fn export(orchestrator: &RequestOrchestrator, input: &ProfileInput) -> Result<()> {
    orchestrator.probe_health().await;
    compute(orchestrator, input).await?;

    if !orchestrator.affordances("").export {
        bail!("export is unavailable without a computed profile");
    }

    let snapshot = orchestrator.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Compute the profile, failing if the response was not committed
pub async fn compute(
    orchestrator: &RequestOrchestrator,
    input: &ProfileInput,
) -> Result<Arc<DerivedProfile>> {
    info!(age = input.age, goal = %input.goal, "Computing profile");
    match orchestrator.compute_profile(input).await? {
        ComputeOutcome::Committed(profile) => Ok(profile),
        ComputeOutcome::Superseded => bail!("profile computation was superseded"),
    }
}
