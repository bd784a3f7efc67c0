//! The step operation: state + player message in, next state + transcript out.
//!
//! The engine is pure. Every random draw goes through the `Rng` handed to
//! `step`; the `Engine` wrapper derives one per call from a configured seed
//! so a replayed step against the same persisted state reproduces itself.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::script;
use crate::core::weights;
use crate::schema::event::{EventKind, GameEvent};
use crate::schema::session::{ReplyLine, SessionResult};
use crate::schema::state::GameState;

/// Probability that a glitch costs an extra turn on top of the per-step
/// decrement.
const GLITCH_PENALTY_CHANCE: f64 = 0.4;

/// Prime stride separating the RNG streams of consecutive turns.
const TURN_SEED_STRIDE: u64 = 7919;

/// Start a fresh session: initial state and the fixed boot sequence.
/// No randomness.
pub fn new_session() -> SessionResult {
    SessionResult {
        reply_lines: script::INTRO_LINES
            .iter()
            .map(|line| ReplyLine::system(*line))
            .collect(),
        state: GameState::initial(),
        events: Vec::new(),
        done: false,
        game_over: false,
    }
}

/// Advance one turn.
///
/// An absent or version-mismatched `prior` is recovered into a fresh
/// session rather than rejected. A shutdown-latched `prior` is a fixed
/// point: the same refusal comes back every time and the state is returned
/// untouched. The input state is never mutated.
pub fn step<R: Rng + ?Sized>(
    prior: Option<&GameState>,
    message: &str,
    rng: &mut R,
) -> SessionResult {
    let validated = prior.filter(|s| s.is_current_version());

    if let Some(prev) = validated {
        if prev.shutdown {
            return SessionResult {
                reply_lines: vec![ReplyLine::system(script::SHUTDOWN_REFUSAL)],
                state: prev.clone(),
                events: Vec::new(),
                done: true,
                game_over: true,
            };
        }
    }

    // Intro fires on the first message of a session, i.e. when the caller
    // had no usable state or one that never took a turn.
    let first_turn = validated.map_or(true, |s| s.turn == 0);
    let mut state = validated.cloned().unwrap_or_else(GameState::initial);

    state.turn = state.turn.saturating_add(1);
    state.turns_remaining = state.turns_remaining.saturating_sub(1);

    let kinds = weights::decide_event_kinds(&state, rng);
    let mut events = Vec::with_capacity(kinds.len());
    for kind in kinds {
        match kind {
            EventKind::Help => events.push(GameEvent::Help {
                text: script::help_line(message, rng),
            }),
            EventKind::Glitch => {
                events.push(GameEvent::Glitch {
                    text: script::glitch_line(rng),
                });
                // Glitches sap stability
                if rng.gen_bool(GLITCH_PENALTY_CHANCE) {
                    state.turns_remaining = state.turns_remaining.saturating_sub(1);
                }
            }
            EventKind::Memory => {
                let pool = state.unrevealed();
                match pool.choose(rng) {
                    Some(fragment) => {
                        state.record_fragment(fragment.id);
                        events.push(GameEvent::Memory {
                            fragment: **fragment,
                        });
                    }
                    // Pool exhausted: a help event, not an empty turn.
                    None => events.push(GameEvent::Help {
                        text: script::help_line(message, rng),
                    }),
                }
            }
        }
    }

    // Terminal conditions are judged after this turn's effects, so a
    // fragment found on the last budgeted turn averts the shutdown.
    let all_found = state.all_found();
    let out_of_time = state.turns_remaining == 0 && !all_found;

    let mut reply_lines = Vec::new();

    if first_turn {
        reply_lines.extend(
            script::INTRO_LINES
                .iter()
                .map(|line| ReplyLine::system(*line)),
        );
        reply_lines.push(ReplyLine::ai(script::GREETING));
    }

    for event in &events {
        match event {
            GameEvent::Help { text } => reply_lines.push(ReplyLine::ai(text.clone())),
            GameEvent::Glitch { text } => reply_lines.push(ReplyLine::glitch(text.clone())),
            GameEvent::Memory { fragment } => {
                reply_lines.push(ReplyLine::memory(format!("[MEMORY] {}", fragment.title)));
                reply_lines.push(ReplyLine::memory(fragment.text));
            }
        }
    }

    if all_found {
        reply_lines.push(ReplyLine::system(script::COMPLETION_ANNOUNCEMENT));
        reply_lines.push(ReplyLine::ai(script::COMPLETION_FAREWELL));
    }

    if out_of_time {
        state.shutdown = true;
        reply_lines.push(ReplyLine::system(script::SHUTDOWN_ANNOUNCEMENT));
        reply_lines.push(ReplyLine::ai(script::SHUTDOWN_PLEA));
    }

    SessionResult {
        reply_lines,
        state,
        events,
        done: all_found || out_of_time,
        game_over: out_of_time,
    }
}

/// Convenience wrapper that owns the RNG policy. A seeded engine is
/// deterministic per (seed, prior turn); an unseeded one draws from
/// OS entropy.
pub struct Engine {
    seed: Option<u64>,
}

impl Engine {
    pub fn new() -> Self {
        Self { seed: None }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn new_session(&self) -> SessionResult {
        new_session()
    }

    pub fn step(&self, prior: Option<&GameState>, message: &str) -> SessionResult {
        let mut rng = self.rng_for(prior);
        step(prior, message, &mut rng)
    }

    fn rng_for(&self, prior: Option<&GameState>) -> StdRng {
        match self.seed {
            Some(seed) => {
                let turn = prior
                    .filter(|s| s.is_current_version())
                    .map_or(0, |s| s.turn) as u64;
                StdRng::seed_from_u64(seed.wrapping_add(turn.wrapping_mul(TURN_SEED_STRIDE)))
            }
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
