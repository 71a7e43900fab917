// ABOUTME: Interactive chat command for fitbox-cli
// ABOUTME: Reads one message per stdin line and prints the assistant's replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fitbox_client::orchestrator::RequestOrchestrator;
use fitbox_core::errors::ClientError;
use fitbox_core::models::ProfileInput;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::debug;

use super::session::compute;
use crate::helpers::display::{display_profile, display_reply};

/// Compute the profile, then chat until EOF or `/quit`
///
/// `/new` starts a new session (recomputing the profile) and `/export`
/// prints the session snapshot.
pub async fn run(orchestrator: &RequestOrchestrator, input: &ProfileInput) -> Result<()> {
    if !orchestrator.probe_health().await {
        eprintln!("warning: FitBox service did not answer the health probe");
    }

    let profile = compute(orchestrator, input).await?;
    display_profile(input, &profile);
    println!("\nType a message and press Enter (/new, /export, /quit).");

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => break,
            "/new" => {
                orchestrator.start_new_session();
                compute(orchestrator, input).await?;
                println!("Started session {}", orchestrator.conversation_id());
            }
            "/export" => {
                println!("{}", serde_json::to_string_pretty(&orchestrator.snapshot())?);
            }
            text => match orchestrator.submit_chat(input, text).await {
                Ok(receipt) => display_reply(&receipt),
                Err(ClientError::EmptyMessage) => debug!("Ignoring empty line"),
                Err(e) => return Err(e.into()),
            },
        }
    }

    Ok(())
}
