// ABOUTME: Unit tests for FitBox core models
// ABOUTME: Validates profile input domain checks, wire names, and strict profile decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;

use fitbox_core::errors::ClientError;
use fitbox_core::models::{
    ActivityLevel, ChatTurn, DerivedProfile, Gender, Goal, HistoryExchange, ProfileInput, TurnRole,
};
use serde_json::json;

// =============================================================================
// ProfileInput
// =============================================================================

#[test]
fn test_default_input_matches_session_start_values() {
    let input = ProfileInput::default();

    assert_eq!(input.age, 25);
    assert_eq!(input.gender, Gender::Male);
    assert!((input.weight_kg - 75.0).abs() < f64::EPSILON);
    assert!((input.height_m - 1.75).abs() < f64::EPSILON);
    assert_eq!(input.activity_level, ActivityLevel::ModeratelyActive);
    assert_eq!(input.goal, Goal::MuscleGain);
    assert!(input.validate().is_ok());
}

#[test]
fn test_input_serializes_with_service_field_names() {
    let value = serde_json::to_value(ProfileInput::default()).unwrap();

    assert_eq!(
        value,
        json!({
            "age": 25,
            "gender": "male",
            "weight": 75.0,
            "height": 1.75,
            "activity_level": "moderately_active",
            "goal": "muscle_gain"
        })
    );
}

#[test]
fn test_validate_rejects_out_of_domain_values() {
    let zero_age = ProfileInput {
        age: 0,
        ..ProfileInput::default()
    };
    assert!(matches!(
        zero_age.validate(),
        Err(ClientError::InvalidInput(msg)) if msg.contains("age")
    ));

    let negative_weight = ProfileInput {
        weight_kg: -3.0,
        ..ProfileInput::default()
    };
    assert!(matches!(
        negative_weight.validate(),
        Err(ClientError::InvalidInput(msg)) if msg.contains("weight_kg")
    ));

    let nan_height = ProfileInput {
        height_m: f64::NAN,
        ..ProfileInput::default()
    };
    assert!(matches!(
        nan_height.validate(),
        Err(ClientError::InvalidInput(msg)) if msg.contains("height_m")
    ));
}

#[test]
fn test_enum_parsing_accepts_wire_names() {
    assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
    assert_eq!(
        "very-active".parse::<ActivityLevel>().unwrap(),
        ActivityLevel::VeryActive
    );
    assert_eq!(
        "Moderate Weight Loss".parse::<Goal>().unwrap(),
        Goal::ModerateWeightLoss
    );
    assert!("couch".parse::<ActivityLevel>().is_err());
    assert!("shred".parse::<Goal>().is_err());
}

#[test]
fn test_enum_display_round_trips_through_from_str() {
    for level in ActivityLevel::ALL {
        assert_eq!(level.to_string().parse::<ActivityLevel>().unwrap(), level);
    }
    for goal in Goal::ALL {
        assert_eq!(goal.to_string().parse::<Goal>().unwrap(), goal);
    }
}

#[test]
fn test_descriptions_are_distinct_per_variant() {
    let levels: HashSet<&str> = ActivityLevel::ALL
        .iter()
        .map(ActivityLevel::description)
        .collect();
    assert_eq!(levels.len(), ActivityLevel::ALL.len());
    let goals: HashSet<&str> = Goal::ALL.iter().map(Goal::description).collect();
    assert_eq!(goals.len(), Goal::ALL.len());
}

// =============================================================================
// DerivedProfile
// =============================================================================

#[test]
fn test_profile_decodes_service_payload() {
    let payload = json!({
        "user_info": { "age": 25 },
        "bmi": { "bmi": 24.5, "category": "Normal" },
        "bmr": { "value": 1800 },
        "tdee": { "value": 2790 },
        "nutrition": {
            "target_calories": 3090,
            "macros": { "protein_g": 180, "carbs_g": 350, "fat_g": 95 }
        }
    });

    let profile: DerivedProfile = serde_json::from_value(payload).unwrap();

    assert!((profile.bmi.value - 24.5).abs() < f64::EPSILON);
    assert_eq!(profile.bmi.category, "Normal");
    assert!(profile.bmi.recommendation.is_none());
    assert!((profile.bmr.value - 1800.0).abs() < f64::EPSILON);
    assert!((profile.tdee.value - 2790.0).abs() < f64::EPSILON);
    assert!((profile.nutrition.target_calories - 3090.0).abs() < f64::EPSILON);
    assert!((profile.nutrition.macros.fat_g - 95.0).abs() < f64::EPSILON);
}

#[test]
fn test_profile_missing_section_fails_to_decode() {
    let payload = json!({
        "bmi": { "value": 22.0, "category": "Normal" },
        "bmr": { "value": 1500 },
        "tdee": { "value": 2000 }
    });

    assert!(serde_json::from_value::<DerivedProfile>(payload).is_err());
}

#[test]
fn test_macro_split_implied_calories() {
    let payload = json!({
        "bmi": { "value": 22.0, "category": "Normal", "recommendation": "Keep it up" },
        "bmr": { "value": 1500 },
        "tdee": { "value": 2000 },
        "nutrition": {
            "target_calories": 2000,
            "macros": { "protein_g": 100, "carbs_g": 250, "fat_g": 50 }
        }
    });
    let profile: DerivedProfile = serde_json::from_value(payload).unwrap();

    assert!((profile.nutrition.macros.implied_calories() - 1850.0).abs() < 1e-9);
    assert_eq!(profile.bmi.recommendation.as_deref(), Some("Keep it up"));
}

// =============================================================================
// Chat turns
// =============================================================================

#[test]
fn test_history_exchange_serializes_as_user_assistant_pair() {
    let turns = [
        ChatTurn::user("How much protein?"),
        ChatTurn::assistant("About 2 g per kg."),
    ];
    let history = HistoryExchange::pair(&turns);

    assert_eq!(
        serde_json::to_value(&history).unwrap(),
        json!([{ "user": "How much protein?", "assistant": "About 2 g per kg." }])
    );
}

#[test]
fn test_history_exchange_ignores_consecutive_user_turns() {
    let turns = [
        ChatTurn::user("first"),
        ChatTurn::user("second"),
        ChatTurn::assistant("reply"),
    ];
    let history = HistoryExchange::pair(&turns);

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].user, "second");
}

#[test]
fn test_turn_role_str_matches_wire_name() {
    for role in [TurnRole::User, TurnRole::Assistant] {
        assert_eq!(serde_json::to_value(role).unwrap(), json!(role.as_str()));
    }
}

#[test]
fn test_fallback_turn_is_flagged() {
    assert!(ChatTurn::fallback("offline").is_fallback());
    assert!(!ChatTurn::assistant("hello").is_fallback());
    assert!(ChatTurn::user("hi").outcome.is_none());
}
