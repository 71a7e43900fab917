// ABOUTME: Append-only chat log and the bounded-context windowing policy
// ABOUTME: Turns are appended only by the orchestrator; readers get snapshots and windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Conversation Store
//!
//! Ordered log of chat turns for one session. The store never holds a pending
//! turn: assistant turns are appended once a reply (or the fallback notice) is
//! available, already settled.
//!
//! The context sent with each chat request is a window over the most recent
//! turns, computed on demand from the full log. Older turns are dropped from
//! the window, never summarized. On the wire the window travels as
//! user/assistant exchange pairs, so a default window of six turns carries
//! the last three exchanges.

use fitbox_core::models::{ChatTurn, HistoryExchange};
use serde::{Deserialize, Serialize};

/// Ordered, append-only sequence of chat turns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationStore {
    turns: Vec<ChatTurn>,
}

impl ConversationStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Append a turn and return its index
    pub(crate) fn append(&mut self, turn: ChatTurn) -> usize {
        self.turns.push(turn);
        self.turns.len() - 1
    }

    /// Drop every turn (session reset only)
    pub(crate) fn clear(&mut self) {
        self.turns.clear();
    }

    /// All turns in chronological order
    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Number of turns
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turn has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent `min(len, max_turns)` turns, oldest first
    #[must_use]
    pub fn windowed_context(&self, max_turns: usize) -> WindowedContext {
        let start = self.turns.len().saturating_sub(max_turns);
        WindowedContext {
            turns: self.turns[start..].to_vec(),
        }
    }
}

/// Bounded suffix of the conversation sent along with a chat message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowedContext {
    turns: Vec<ChatTurn>,
}

impl WindowedContext {
    /// Turns in the window, oldest first
    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Number of turns in the window
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the window is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Wire representation (`[{user, assistant}]`)
    #[must_use]
    pub fn to_history(&self) -> Vec<HistoryExchange> {
        HistoryExchange::pair(&self.turns)
    }
}

impl From<Vec<ChatTurn>> for WindowedContext {
    fn from(turns: Vec<ChatTurn>) -> Self {
        Self { turns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(n: usize) -> ConversationStore {
        let mut store = ConversationStore::new();
        for i in 0..n {
            let turn = if i % 2 == 0 {
                ChatTurn::user(format!("turn {i}"))
            } else {
                ChatTurn::assistant(format!("turn {i}"))
            };
            store.append(turn);
        }
        store
    }

    #[test]
    fn test_append_returns_sequential_indices() {
        let mut store = ConversationStore::new();
        assert_eq!(store.append(ChatTurn::user("a")), 0);
        assert_eq!(store.append(ChatTurn::assistant("b")), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_window_returns_most_recent_in_order() {
        for n in [0, 1, 5, 6, 7, 10] {
            let store = store_with(n);
            let window = store.windowed_context(6);
            assert_eq!(window.len(), n.min(6));
            let expected: Vec<String> = (n.saturating_sub(6)..n)
                .map(|i| format!("turn {i}"))
                .collect();
            let actual: Vec<String> = window.turns().iter().map(|t| t.text.clone()).collect();
            assert_eq!(actual, expected, "window over {n} turns");
        }
    }

    #[test]
    fn test_window_does_not_mutate_store() {
        let store = store_with(10);
        let _ = store.windowed_context(3);
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_history_pairs_user_with_following_reply() {
        let history = store_with(6).windowed_context(6).to_history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].user, "turn 0");
        assert_eq!(history[0].assistant, "turn 1");
        assert_eq!(history[2].assistant, "turn 5");
    }

    #[test]
    fn test_history_skips_unpaired_turns() {
        // turns 3..=6 start with a reply and end with an unanswered question
        let history = store_with(7).windowed_context(4).to_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user, "turn 4");
        assert_eq!(history[0].assistant, "turn 5");
    }

    #[test]
    fn test_history_skips_fallback_exchanges() {
        let mut store = ConversationStore::new();
        store.append(ChatTurn::user("first"));
        store.append(ChatTurn::fallback("unavailable"));
        store.append(ChatTurn::user("second"));
        store.append(ChatTurn::assistant("answer"));

        let history = store.windowed_context(6).to_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user, "second");
    }
}
