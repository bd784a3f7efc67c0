use serde::Serialize;

use super::event::GameEvent;
use super::state::GameState;

/// Who a reply line is attributed to in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyRole {
    System,
    Ai,
    User,
    Glitch,
    Memory,
}

impl ReplyRole {
    /// Display prefix for this role (e.g., "system").
    pub fn label(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Ai => "ai",
            Self::User => "user",
            Self::Glitch => "glitch",
            Self::Memory => "memory",
        }
    }
}

/// One line of the user-visible transcript for a step. Never persisted as
/// part of `GameState`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyLine {
    pub role: ReplyRole,
    pub text: String,
}

impl ReplyLine {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: ReplyRole::System,
            text: text.into(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            role: ReplyRole::Ai,
            text: text.into(),
        }
    }

    pub fn glitch(text: impl Into<String>) -> Self {
        Self {
            role: ReplyRole::Glitch,
            text: text.into(),
        }
    }

    pub fn memory(text: impl Into<String>) -> Self {
        Self {
            role: ReplyRole::Memory,
            text: text.into(),
        }
    }
}

/// Everything a single engine call hands back to the transport.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub reply_lines: Vec<ReplyLine>,
    pub state: GameState,
    pub events: Vec<GameEvent>,
    pub done: bool,
    pub game_over: bool,
}
