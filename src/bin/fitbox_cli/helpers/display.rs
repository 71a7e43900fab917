// ABOUTME: Output formatting helpers for fitbox-cli
// ABOUTME: Renders profiles, plans, catalogs and chat replies on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitbox_client::orchestrator::ChatReceipt;
use fitbox_core::models::{Catalog, DerivedProfile, GeneratedPlan, PlanKind, ProfileInput};

/// Display a computed profile alongside the inputs it was computed from
pub fn display_profile(input: &ProfileInput, profile: &DerivedProfile) {
    let macros = &profile.nutrition.macros;

    println!("\nProfile");
    println!("{}", "=".repeat(50));
    println!("   Activity: {}", input.activity_level.description());
    println!("   Goal: {}", input.goal.description());
    println!("   BMI: {:.1} ({})", profile.bmi.value, profile.bmi.category);
    if let Some(recommendation) = &profile.bmi.recommendation {
        println!("        {recommendation}");
    }
    println!("   BMR: {:.0} kcal/day", profile.bmr.value);
    println!("   TDEE: {:.0} kcal/day", profile.tdee.value);
    println!(
        "   Target: {:.0} kcal/day",
        profile.nutrition.target_calories
    );
    println!(
        "   Macros: protein {:.0} g, carbs {:.0} g, fat {:.0} g ({:.0} kcal)",
        macros.protein_g,
        macros.carbs_g,
        macros.fat_g,
        macros.implied_calories()
    );
}

/// Display a generated plan
pub fn display_plan(plan: &GeneratedPlan) {
    let title = match plan.kind {
        PlanKind::Workout => "Workout Plan",
        PlanKind::Nutrition => "Nutrition Plan",
    };
    println!("\n{title}");
    println!("{}", "=".repeat(50));
    if let Some(generated_at) = plan.generated_at {
        println!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC"));
    }
    println!("{}", plan.content);
}

/// Display the activity level and goal catalog
pub fn display_catalog(catalog: &Catalog) {
    println!("\nActivity levels");
    println!("{}", "=".repeat(50));
    for entry in &catalog.activity_levels {
        println!("   {:<22} {}", entry.key, entry.description);
    }

    println!("\nGoals");
    println!("{}", "=".repeat(50));
    for entry in &catalog.goals {
        println!("   {:<22} {}", entry.key, entry.description);
    }
}

/// Display the assistant side of a chat exchange
pub fn display_reply(receipt: &ChatReceipt) {
    println!("\n{}> {}\n", receipt.reply.role.as_str(), receipt.reply.text);
    if let Err(e) = &receipt.delivery {
        eprintln!("({e})");
    }
}
