//! Event-kind probability model.
//!
//! Each turn draws one event kind from a three-way weighted distribution.
//! Base weights shift with session progress and urgency before being
//! normalized: help fades as fragments are recovered, glitches ramp up as
//! the budget drains, and memory reveals are pushed hardest when time is
//! running out early or mid-game.

use rand::Rng;

use crate::schema::event::EventKind;
use crate::schema::state::GameState;

const BASE_HELP: f64 = 0.55;
const BASE_GLITCH: f64 = 0.20;
const BASE_MEMORY: f64 = 0.25;

/// Progress threshold past which urgency stops boosting memory reveals.
const LATE_GAME_PROGRESS: f64 = 0.6;

/// Normalized selection weights for one turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindWeights {
    pub help: f64,
    pub glitch: f64,
    pub memory: f64,
}

impl KindWeights {
    /// Compute the adjusted, normalized weights for the given state. The
    /// state is the post-decrement state for the turn being played.
    pub fn for_state(state: &GameState) -> Self {
        let progress = state.progress();
        let urgency = state.urgency();

        let help = BASE_HELP + 0.10 * (1.0 - progress);
        let glitch = BASE_GLITCH + 0.10 * urgency;
        let memory = BASE_MEMORY
            + 0.15
                * if progress < LATE_GAME_PROGRESS {
                    urgency
                } else {
                    0.05
                };

        let total = help + glitch + memory;
        Self {
            help: help / total,
            glitch: glitch / total,
            memory: memory / total,
        }
    }

    /// Map a uniform roll in [0, 1) onto a kind. Bands are cumulative in
    /// memory, glitch, help order; help is the fall-through.
    pub fn pick(&self, roll: f64) -> EventKind {
        if roll < self.memory {
            EventKind::Memory
        } else if roll < self.memory + self.glitch {
            EventKind::Glitch
        } else {
            EventKind::Help
        }
    }
}

/// Select the event kinds for one turn. The current policy always yields
/// exactly one kind, but callers realize whatever list comes back, in order.
pub fn decide_event_kinds<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Vec<EventKind> {
    let weights = KindWeights::for_state(state);
    vec![weights.pick(rng.gen::<f64>())]
}
