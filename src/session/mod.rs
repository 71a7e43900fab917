// ABOUTME: Session phase, affordance gating, and the exportable session snapshot
// ABOUTME: Pure derivations over orchestrator state deciding which actions are enabled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session State
//!
//! A session starts in `NoProfile` and moves to `ProfileReady` on the first
//! committed compute. There is no transition back within a session; only
//! `start_new_session` returns it to `NoProfile`.
//!
//! Which actions a front end may offer is a pure function of the phase, the
//! in-flight set and the current draft text (see [`Affordances::derive`]).

mod profile_slot;

pub use profile_slot::{ProfileSlot, ProfileTicket};

use chrono::{DateTime, Utc};
use fitbox_core::models::{ChatTurn, DerivedProfile};
use serde::{Deserialize, Serialize};

use crate::orchestrator::InFlight;

/// Coarse session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No profile computed yet
    NoProfile,
    /// A profile is available; chat, export and plans are unlocked
    ProfileReady,
}

impl SessionPhase {
    /// Phase implied by profile presence
    #[must_use]
    pub const fn from_profile_present(present: bool) -> Self {
        if present {
            Self::ProfileReady
        } else {
            Self::NoProfile
        }
    }
}

/// Actions a front end may currently offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affordances {
    /// Send the current draft as a chat message
    pub chat: bool,
    /// Export the session snapshot
    pub export: bool,
    /// Submit a profile computation
    pub compute: bool,
    /// Generate a workout or nutrition plan
    pub plan: bool,
}

impl Affordances {
    /// Derive enabled actions from session state
    #[must_use]
    pub fn derive(phase: SessionPhase, in_flight: InFlight, draft: &str) -> Self {
        let ready = phase == SessionPhase::ProfileReady;
        Self {
            chat: ready && !in_flight.contains(InFlight::CHAT) && !draft.trim().is_empty(),
            export: ready,
            compute: !in_flight.contains(InFlight::COMPUTE),
            plan: ready && !in_flight.contains(InFlight::PLAN),
        }
    }
}

/// Point-in-time copy of the session, serializable for export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Session identifier sent with chat requests
    pub conversation_id: String,
    /// Phase at capture time
    pub phase: SessionPhase,
    /// Last known reachability of the service
    pub connectivity: bool,
    /// Current profile, if any
    pub profile: Option<DerivedProfile>,
    /// Full conversation, oldest first
    pub conversation: Vec<ChatTurn>,
    /// Capture time
    pub captured_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_profile_disables_chat_and_export() {
        let a = Affordances::derive(SessionPhase::NoProfile, InFlight::empty(), "hello");
        assert!(!a.chat);
        assert!(!a.export);
        assert!(!a.plan);
        assert!(a.compute);
    }

    #[test]
    fn test_pending_chat_disables_chat_only() {
        let a = Affordances::derive(SessionPhase::ProfileReady, InFlight::CHAT, "hello");
        assert!(!a.chat);
        assert!(a.export);
        assert!(a.compute);
        assert!(a.plan);
    }

    #[test]
    fn test_whitespace_draft_disables_chat() {
        let a = Affordances::derive(SessionPhase::ProfileReady, InFlight::empty(), " \t\n");
        assert!(!a.chat);
    }

    #[test]
    fn test_pending_compute_disables_compute() {
        let a = Affordances::derive(
            SessionPhase::ProfileReady,
            InFlight::COMPUTE | InFlight::PLAN,
            "hi",
        );
        assert!(!a.compute);
        assert!(!a.plan);
        assert!(a.chat);
    }
}
