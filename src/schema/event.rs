use serde::Serialize;

use super::fragment::MemoryFragment;

/// The three things that can happen on a turn, without payload. Used by the
/// weighted selection policy before an event is realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Help,
    Glitch,
    Memory,
}

/// A realized per-turn event. Transient — produced fresh each step, never
/// stored in `GameState`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GameEvent {
    Help { text: String },
    Glitch { text: String },
    Memory { fragment: MemoryFragment },
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Help { .. } => EventKind::Help,
            Self::Glitch { .. } => EventKind::Glitch,
            Self::Memory { .. } => EventKind::Memory,
        }
    }
}
