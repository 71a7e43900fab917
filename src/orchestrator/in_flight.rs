// ABOUTME: Tracking of pending remote operations by kind
// ABOUTME: Per-kind counters with RAII guards, exposed as an InFlight bitflags set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bitflags::bitflags;
use fitbox_core::models::OperationKind;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of operation kinds with at least one pending request
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct InFlight: u8 {
        /// Health probe pending
        const HEALTH = 0b0_0001;
        /// Profile computation pending
        const COMPUTE = 0b0_0010;
        /// Chat turn pending
        const CHAT = 0b0_0100;
        /// Plan generation pending
        const PLAN = 0b0_1000;
        /// Catalog lookup pending
        const CATALOG = 0b1_0000;
    }
}

impl From<OperationKind> for InFlight {
    fn from(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Health => Self::HEALTH,
            OperationKind::Compute => Self::COMPUTE,
            OperationKind::Chat => Self::CHAT,
            OperationKind::Plan => Self::PLAN,
            OperationKind::Catalog => Self::CATALOG,
        }
    }
}

const KINDS: [OperationKind; 5] = [
    OperationKind::Health,
    OperationKind::Compute,
    OperationKind::Chat,
    OperationKind::Plan,
    OperationKind::Catalog,
];

const fn slot(kind: OperationKind) -> usize {
    match kind {
        OperationKind::Health => 0,
        OperationKind::Compute => 1,
        OperationKind::Chat => 2,
        OperationKind::Plan => 3,
        OperationKind::Catalog => 4,
    }
}

/// Counts pending requests per operation kind
#[derive(Debug, Default)]
pub(crate) struct InFlightTracker {
    counters: [AtomicUsize; 5],
}

impl InFlightTracker {
    /// Mark one `kind` request as pending until the guard drops
    pub(crate) fn enter(self: &Arc<Self>, kind: OperationKind) -> InFlightGuard {
        self.counters[slot(kind)].fetch_add(1, Ordering::AcqRel);
        InFlightGuard {
            tracker: Arc::clone(self),
            kind,
        }
    }

    /// Mark `kind` as pending only if no other `kind` request is
    pub(crate) fn try_enter_exclusive(
        self: &Arc<Self>,
        kind: OperationKind,
    ) -> Option<InFlightGuard> {
        self.counters[slot(kind)]
            .compare_exchange(0, 1, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                tracker: Arc::clone(self),
                kind,
            })
    }

    /// Snapshot of the pending set
    pub(crate) fn snapshot(&self) -> InFlight {
        KINDS
            .iter()
            .filter(|kind| self.counters[slot(**kind)].load(Ordering::Acquire) > 0)
            .fold(InFlight::empty(), |set, kind| set | InFlight::from(*kind))
    }
}

/// Clears one pending mark on drop, including on timeout or cancellation
#[derive(Debug)]
pub(crate) struct InFlightGuard {
    tracker: Arc<InFlightTracker>,
    kind: OperationKind,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.tracker.counters[slot(self.kind)].fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_drop_clears_flag() {
        let tracker = Arc::new(InFlightTracker::default());
        {
            let _guard = tracker.enter(OperationKind::Chat);
            assert_eq!(tracker.snapshot(), InFlight::CHAT);
        }
        assert!(tracker.snapshot().is_empty());
    }

    #[test]
    fn test_overlapping_guards_keep_flag_until_last_drop() {
        let tracker = Arc::new(InFlightTracker::default());
        let first = tracker.enter(OperationKind::Chat);
        let second = tracker.enter(OperationKind::Chat);
        drop(first);
        assert!(tracker.snapshot().contains(InFlight::CHAT));
        drop(second);
        assert!(!tracker.snapshot().contains(InFlight::CHAT));
    }

    #[test]
    fn test_exclusive_entry_is_refused_while_pending() {
        let tracker = Arc::new(InFlightTracker::default());
        let guard = tracker.try_enter_exclusive(OperationKind::Compute);
        assert!(guard.is_some());
        assert!(tracker.try_enter_exclusive(OperationKind::Compute).is_none());
        drop(guard);
        assert!(tracker.try_enter_exclusive(OperationKind::Compute).is_some());
    }
}
