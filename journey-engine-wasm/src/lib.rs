//! WASM bindings for journey-engine — powers the interactive web demo.
//!
//! The web layer renders published snapshots and forwards the user's
//! "begin" and "continue" actions; all state lives in the core engine.

use wasm_bindgen::prelude::*;

use journey_engine::core::catalog::TextCatalog;
use journey_engine::core::engine::{ProgressionEngine, Step};
use journey_engine::schema::mood::Mood;
use journey_engine::schema::stage::Stage;

// ---------------------------------------------------------------------------
// Embedded atmosphere data — compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const ATMOSPHERE: &str = include_str!("../../journey_data/atmosphere.ron");
}

fn step_label(step: Step) -> &'static str {
    match step {
        Step::Stage => "stage",
        Step::NewDay => "new_day",
        Step::Finished => "finished",
        Step::Ignored => "ignored",
    }
}

// ---------------------------------------------------------------------------
// JourneySession — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct JourneySession {
    engine: ProgressionEngine,
}

#[wasm_bindgen]
impl JourneySession {
    /// Create a session over the embedded atmosphere catalog. The session
    /// starts in the not-started phase; call `start()` to begin.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<JourneySession, JsError> {
        let catalog = TextCatalog::parse_ron(data::ATMOSPHERE)
            .map_err(|e| JsError::new(&format!("Catalog parse error: {e}")))?;

        let engine = ProgressionEngine::builder()
            .seed(seed)
            .with_catalog(catalog)
            .build()
            .map_err(|e| JsError::new(&format!("Engine build error: {e}")))?;

        Ok(JourneySession { engine })
    }

    /// Begin (or restart) the journey. Emits the day-1 sunrise entry.
    pub fn start(&mut self) {
        self.engine.start();
    }

    /// Advance one stage. Returns the step label: "stage", "new_day",
    /// "finished", or "ignored".
    pub fn advance(&mut self) -> String {
        step_label(self.engine.advance()).to_string()
    }

    /// The published state as JSON:
    /// `{ day, stage, log: [{ id, text }], started, finished }`.
    pub fn snapshot(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.engine.snapshot())
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// The text of the most recent log entry, or the empty string before
    /// the first emission.
    pub fn latest_line(&self) -> String {
        self.engine
            .log()
            .last()
            .map(|entry| entry.text.clone())
            .unwrap_or_default()
    }

    pub fn day(&self) -> u8 {
        self.engine.day()
    }

    pub fn stage(&self) -> String {
        self.engine.stage().title().to_string()
    }

    pub fn mood(&self) -> String {
        self.engine.mood().tag().to_string()
    }

    pub fn started(&self) -> bool {
        self.engine.started()
    }

    pub fn finished(&self) -> bool {
        self.engine.finished()
    }

    /// Replace this session with a fresh engine using a new seed.
    pub fn reset(&mut self, seed: u64) -> Result<(), JsError> {
        let new_session = JourneySession::new(seed)?;
        self.engine = new_session.engine;
        Ok(())
    }

    /// Return JSON array of stage names in day order.
    pub fn stages() -> String {
        let names: Vec<&str> = Stage::ALL.iter().map(|s| s.title()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of mood tags in day order.
    pub fn moods() -> String {
        let tags: Vec<&str> = Mood::ALL.iter().map(|m| m.tag()).collect();
        serde_json::to_string(&tags).unwrap_or_else(|_| "[]".to_string())
    }
}
