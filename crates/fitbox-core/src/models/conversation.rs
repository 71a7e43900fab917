// ABOUTME: Chat turn types for the session conversation log
// ABOUTME: Role, settled outcome, and wire conversion for the chat history payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Author of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// Message typed by the user
    User,
    /// Reply from the assistant (or the fallback notice)
    Assistant,
}

impl TurnRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// How an assistant turn was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Text came from the remote assistant
    Delivered,
    /// Delivery failed and the fixed fallback notice was stored instead
    Fallback,
}

/// A single entry in the conversation log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Author of the turn
    pub role: TurnRole,
    /// Turn text
    pub text: String,
    /// Settlement of assistant turns; always `None` for user turns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<TurnOutcome>,
}

impl ChatTurn {
    /// Create a user turn
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
            outcome: None,
        }
    }

    /// Create an assistant turn carrying a delivered reply
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            text: text.into(),
            outcome: Some(TurnOutcome::Delivered),
        }
    }

    /// Create an assistant turn carrying the fallback notice
    #[must_use]
    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            text: text.into(),
            outcome: Some(TurnOutcome::Fallback),
        }
    }

    /// Whether this turn is a fallback notice rather than a real reply
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.outcome == Some(TurnOutcome::Fallback)
    }
}

/// One completed user/assistant exchange as sent in the chat `history` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryExchange {
    /// Text the user sent
    pub user: String,
    /// Reply the assistant delivered
    pub assistant: String,
}

impl HistoryExchange {
    /// Pair consecutive turns into exchanges, oldest first
    ///
    /// A user turn forms an exchange only with the assistant turn directly
    /// after it. Assistant turns without a preceding user turn, user turns
    /// without a reply, and exchanges settled with the fallback notice are
    /// left out.
    #[must_use]
    pub fn pair(turns: &[ChatTurn]) -> Vec<Self> {
        turns
            .windows(2)
            .filter_map(|pair| match pair {
                [question, answer]
                    if question.role == TurnRole::User
                        && answer.role == TurnRole::Assistant
                        && !answer.is_fallback() =>
                {
                    Some(Self {
                        user: question.text.clone(),
                        assistant: answer.text.clone(),
                    })
                }
                _ => None,
            })
            .collect()
    }
}
