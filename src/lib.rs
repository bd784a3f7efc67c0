//! Derelict Terminal — a turn-based narrative state machine.
//!
//! Given a persisted game state and a player message, the engine produces
//! the next state and a sequence of narrative reply lines: a buried AI
//! recovering five memory fragments against a depleting turn budget. The
//! engine is a pure computation over value snapshots; persistence and
//! transport are the caller's concern.

pub mod core;
pub mod schema;
