// ABOUTME: Holder of the current derived profile with per-request sequence tickets
// ABOUTME: Only the most recently issued compute ticket may replace the stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use fitbox_core::models::DerivedProfile;

/// Sequence number issued to one compute request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProfileTicket(u64);

impl ProfileTicket {
    /// Raw sequence number
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// Current profile plus the staleness guard
///
/// The profile is either absent or a complete `DerivedProfile`, replaced
/// wholesale on commit.
#[derive(Debug, Default)]
pub struct ProfileSlot {
    profile: Option<Arc<DerivedProfile>>,
    issued: u64,
}

impl ProfileSlot {
    /// Create an empty slot
    #[must_use]
    pub const fn new() -> Self {
        Self {
            profile: None,
            issued: 0,
        }
    }

    /// Issue a ticket for a new compute request
    pub fn begin(&mut self) -> ProfileTicket {
        self.issued += 1;
        ProfileTicket(self.issued)
    }

    /// Whether `ticket` is the latest one issued
    #[must_use]
    pub const fn is_current(&self, ticket: ProfileTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Store `profile` if `ticket` is still current; returns whether it was stored
    pub fn commit(&mut self, ticket: ProfileTicket, profile: Arc<DerivedProfile>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.profile = Some(profile);
        true
    }

    /// Clear the profile and invalidate every outstanding ticket
    pub fn reset(&mut self) {
        self.profile = None;
        self.issued += 1;
    }

    /// Current profile, if any
    #[must_use]
    pub fn profile(&self) -> Option<Arc<DerivedProfile>> {
        self.profile.clone()
    }

    /// Whether a profile has been committed
    #[must_use]
    pub const fn has_profile(&self) -> bool {
        self.profile.is_some()
    }
}
