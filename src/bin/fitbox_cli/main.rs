// ABOUTME: fitbox-cli - command-line front end for the FitBox client core
// ABOUTME: Health probe, profile computation, interactive chat, plans, catalog and session export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Check that the FitBox service is reachable
//! fitbox-cli health
//!
//! # Compute BMI, BMR, TDEE and macros
//! fitbox-cli calculate --age 30 --gender female --weight 62 --height 1.68 --goal maintenance
//!
//! # Chat with the assistant about the computed profile (one message per line)
//! fitbox-cli chat --age 30 --weight 62 --height 1.68
//!
//! # Generate a workout or nutrition plan
//! fitbox-cli plan workout --activity-level very_active
//!
//! # List supported activity levels and goals
//! fitbox-cli catalog
//!
//! # Print the session snapshot as JSON
//! fitbox-cli export --age 41 --weight 88
//!
//! # Talk to a remote service with debug logs
//! fitbox-cli --api-url https://fitbox.example.com --verbose health
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fitbox_client::config::ClientConfig;
use fitbox_client::logging::LoggingConfig;
use fitbox_client::orchestrator::RequestOrchestrator;
use fitbox_core::models::{ActivityLevel, Gender, Goal, ProfileInput};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitbox-cli",
    about = "FitBox client",
    long_about = "Compute a body-metrics profile with the FitBox service and chat with its assistant."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// FitBox service base URL (overrides `FITBOX_API_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Probe service reachability
    Health,

    /// Compute the derived profile
    Calculate {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Interactive chat about the computed profile, reading messages from stdin
    Chat {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Generate a plan for the computed profile
    Plan {
        #[command(subcommand)]
        kind: PlanCommand,
    },

    /// List supported activity levels and goals
    Catalog,

    /// Compute the profile and print the session snapshot as JSON
    Export {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Weekly training program
    Workout {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Typical day of meals
    Nutrition {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

/// Biometric inputs; unset flags take the session defaults
#[derive(Args, Clone)]
struct ProfileArgs {
    /// Age in years
    #[arg(long, default_value_t = ProfileInput::default().age)]
    age: u32,

    /// male or female
    #[arg(long, default_value_t = Gender::default())]
    gender: Gender,

    /// Weight in kilograms
    #[arg(long, default_value_t = ProfileInput::default().weight_kg)]
    weight: f64,

    /// Height in meters
    #[arg(long, default_value_t = ProfileInput::default().height_m)]
    height: f64,

    /// sedentary, lightly_active, moderately_active, very_active or extra_active
    #[arg(long, default_value_t = ActivityLevel::default())]
    activity_level: ActivityLevel,

    /// weight_loss, moderate_weight_loss, maintenance, muscle_gain or bulking
    #[arg(long, default_value_t = Goal::default())]
    goal: Goal,
}

impl From<ProfileArgs> for ProfileInput {
    fn from(args: ProfileArgs) -> Self {
        Self {
            age: args.age,
            gender: args.gender,
            weight_kg: args.weight,
            height_m: args.height,
            activity_level: args.activity_level,
            goal: args.goal,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    logging.init()?;

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.with_api_url(api_url);
        config.validate()?;
    }
    debug!("{}", config.summary());

    let orchestrator = RequestOrchestrator::from_config(config);

    match cli.command {
        Command::Health => commands::session::health(&orchestrator).await,
        Command::Calculate { profile } => {
            commands::session::calculate(&orchestrator, &profile.into()).await
        }
        Command::Chat { profile } => commands::chat::run(&orchestrator, &profile.into()).await,
        Command::Plan { kind } => match kind {
            PlanCommand::Workout { profile } => {
                commands::plan::workout(&orchestrator, &profile.into()).await
            }
            PlanCommand::Nutrition { profile } => {
                commands::plan::nutrition(&orchestrator, &profile.into()).await
            }
        },
        Command::Catalog => commands::session::catalog(&orchestrator).await,
        Command::Export { profile } => {
            commands::session::export(&orchestrator, &profile.into()).await
        }
    }
}
