//! WASM bindings for derelict-terminal — powers the browser terminal game.
//!
//! The browser holds the persisted state blob; each call hands it back in
//! and receives the next one. Malformed request JSON is the one error this
//! layer reports — the engine itself never fails.

use wasm_bindgen::prelude::*;

use derelict_terminal::core::engine::Engine;
use derelict_terminal::schema::state::GameState;

/// Wire shape of a respond call: the player message plus whatever state
/// blob the browser last stored. Absent, malformed, or stale state is the
/// engine's recovery case, not an error here — only an unparseable body
/// is rejected.
#[derive(serde::Deserialize)]
struct RespondRequest {
    #[serde(default)]
    message: String,
    #[serde(default, deserialize_with = "lenient_state")]
    state: Option<GameState>,
}

/// Accept any JSON value in the `state` field; whatever fails to decode as
/// a `GameState` is treated as absent so the engine starts over.
fn lenient_state<'de, D>(deserializer: D) -> Result<Option<GameState>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[wasm_bindgen]
pub struct Terminal {
    engine: Engine,
}

#[wasm_bindgen]
impl Terminal {
    /// A terminal drawing randomness from the host.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Terminal {
        Terminal {
            engine: Engine::new(),
        }
    }

    /// A deterministic terminal for replays and demos.
    pub fn seeded(seed: u64) -> Terminal {
        Terminal {
            engine: Engine::with_seed(seed),
        }
    }

    /// Start a fresh game. Returns the serialized `SessionResult`.
    pub fn new_game(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.engine.new_session())
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Step the game with a JSON request `{ "message": "...", "state": {...} }`.
    /// Returns the serialized `SessionResult`; rejects malformed JSON.
    pub fn respond(&self, request_json: &str) -> Result<String, JsError> {
        let request: RespondRequest = serde_json::from_str(request_json)
            .map_err(|e| JsError::new(&format!("Invalid request JSON: {e}")))?;
        let result = self.engine.step(request.state.as_ref(), &request.message);
        serde_json::to_string(&result)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
