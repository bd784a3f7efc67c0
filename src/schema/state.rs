use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fragment::{self, FragmentId, MemoryFragment, CATALOG};

/// The state format tag this engine reads and writes. Any persisted state
/// carrying a different version is treated as absent and replaced with a
/// fresh one.
pub const STATE_VERSION: u32 = 1;

/// Turn budget granted to a fresh session.
pub const MAX_TURNS: u32 = 15;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("RON deserialization error: {0}")]
    Decode(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    Encode(#[from] ron::Error),
}

/// The sole piece of caller-persisted data. Field names on the wire are
/// camelCase, matching the blob the session store persists verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub version: u32,
    pub turn: u32,
    pub turns_remaining: u32,
    /// Discovery order matters for replay, so this is a vec with set
    /// semantics enforced at insert time.
    pub found_fragment_ids: Vec<FragmentId>,
    pub shutdown: bool,
}

impl GameState {
    /// A fresh session: turn 0, full budget, nothing found, not shut down.
    pub fn initial() -> Self {
        Self {
            version: STATE_VERSION,
            turn: 0,
            turns_remaining: MAX_TURNS,
            found_fragment_ids: Vec::new(),
            shutdown: false,
        }
    }

    pub fn is_current_version(&self) -> bool {
        self.version == STATE_VERSION
    }

    /// Set-insert a revealed fragment id. Returns false if it was already
    /// recorded, leaving the state untouched.
    pub fn record_fragment(&mut self, id: FragmentId) -> bool {
        if self.found_fragment_ids.contains(&id) {
            return false;
        }
        self.found_fragment_ids.push(id);
        true
    }

    /// Catalog fragments not yet revealed, in canonical order.
    pub fn unrevealed(&self) -> Vec<&'static MemoryFragment> {
        CATALOG
            .iter()
            .filter(|f| !self.found_fragment_ids.contains(&f.id))
            .collect()
    }

    pub fn all_found(&self) -> bool {
        self.found_fragment_ids.len() >= CATALOG.len()
    }

    /// Fraction of the catalog recovered, 0.0..=1.0.
    pub fn progress(&self) -> f64 {
        self.found_fragment_ids.len() as f64 / CATALOG.len() as f64
    }

    /// How depleted the turn budget is, 0.0 (full) ..= 1.0 (empty).
    pub fn urgency(&self) -> f64 {
        1.0 - self.turns_remaining as f64 / MAX_TURNS as f64
    }

    /// Encode this state as a RON snapshot for the session store.
    pub fn to_ron_string(&self) -> Result<String, SnapshotError> {
        Ok(ron::to_string(self)?)
    }

    /// Decode a RON snapshot. Version checking is deliberately not done
    /// here; the step operation recovers from stale versions itself.
    pub fn parse_ron(input: &str) -> Result<GameState, SnapshotError> {
        Ok(ron::from_str(input)?)
    }

    /// Full fragments for the found ids, in discovery order.
    pub fn found_fragments(&self) -> Vec<&'static MemoryFragment> {
        self.found_fragment_ids
            .iter()
            .filter_map(|id| fragment::fragment_by_id(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_shape() {
        let state = GameState::initial();
        assert_eq!(state.version, STATE_VERSION);
        assert_eq!(state.turn, 0);
        assert_eq!(state.turns_remaining, MAX_TURNS);
        assert!(state.found_fragment_ids.is_empty());
        assert!(!state.shutdown);
        assert!(state.is_current_version());
    }

    #[test]
    fn record_fragment_deduplicates() {
        let mut state = GameState::initial();
        assert!(state.record_fragment(FragmentId(3)));
        assert!(!state.record_fragment(FragmentId(3)));
        assert!(state.record_fragment(FragmentId(1)));
        // Discovery order preserved
        assert_eq!(
            state.found_fragment_ids,
            vec![FragmentId(3), FragmentId(1)]
        );
    }

    #[test]
    fn unrevealed_shrinks_as_fragments_found() {
        let mut state = GameState::initial();
        assert_eq!(state.unrevealed().len(), 5);
        state.record_fragment(FragmentId(2));
        state.record_fragment(FragmentId(5));
        let remaining: Vec<_> = state.unrevealed().iter().map(|f| f.id).collect();
        assert_eq!(
            remaining,
            vec![FragmentId(1), FragmentId(3), FragmentId(4)]
        );
        assert!(!state.all_found());
    }

    #[test]
    fn progress_and_urgency() {
        let mut state = GameState::initial();
        assert_eq!(state.progress(), 0.0);
        assert_eq!(state.urgency(), 0.0);

        state.record_fragment(FragmentId(1));
        assert_eq!(state.progress(), 0.2);

        state.turns_remaining = 0;
        assert_eq!(state.urgency(), 1.0);
    }

    #[test]
    fn ron_snapshot_round_trip() {
        let mut state = GameState::initial();
        state.turn = 7;
        state.turns_remaining = 6;
        state.record_fragment(FragmentId(4));
        state.record_fragment(FragmentId(1));

        let encoded = state.to_ron_string().unwrap();
        let decoded = GameState::parse_ron(&encoded).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(GameState::parse_ron("not a state").is_err());
    }

    #[test]
    fn found_fragments_follow_discovery_order() {
        let mut state = GameState::initial();
        state.record_fragment(FragmentId(5));
        state.record_fragment(FragmentId(2));
        let titles: Vec<_> = state.found_fragments().iter().map(|f| f.title).collect();
        assert_eq!(titles, vec!["The Why", "The Creator"]);
    }
}
