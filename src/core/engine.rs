/// The progression engine: the day/stage state machine and its journey log.
///
/// Owns all mutable session state. A display layer triggers `start()` and
/// `advance()` and reads back published snapshots; it never mutates state
/// directly.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::Path;

use crate::core::catalog::{CatalogError, TextCatalog};
use crate::schema::log::{EntryId, LogEntry};
use crate::schema::mood::Mood;
use crate::schema::stage::Stage;

/// The last day of the journey.
pub const FINAL_DAY: u8 = 7;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

/// What a single `advance()` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the next stage of the same day.
    Stage,
    /// Rolled over into the sunrise of the next day.
    NewDay,
    /// Reached the end of day 7; the session is now finished.
    Finished,
    /// The call was invalid for the current phase and changed nothing.
    Ignored,
}

/// Read-only view of the published session state, for polling display
/// layers. Log order is emission order.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub day: u8,
    pub stage: Stage,
    pub log: Vec<LogEntry>,
    pub started: bool,
    pub finished: bool,
}

/// The seven-day progression engine. Built via
/// `ProgressionEngine::builder()`.
pub struct ProgressionEngine {
    catalog: TextCatalog,
    seed: u64,
    day: u8,
    stage: Stage,
    log: Vec<LogEntry>,
    started: bool,
    finished: bool,
    emission_count: u64,
}

/// Builder for constructing a `ProgressionEngine`.
pub struct ProgressionEngineBuilder {
    catalog_path: Option<String>,
    seed: u64,
    /// Directly provided catalog (for testing without files).
    catalog: Option<TextCatalog>,
}

impl ProgressionEngine {
    pub fn builder() -> ProgressionEngineBuilder {
        ProgressionEngineBuilder {
            catalog_path: None,
            seed: 0,
            catalog: None,
        }
    }

    /// Begin a fresh session, replacing any prior one.
    ///
    /// Resets to day 1 at sunrise, clears the log, and emits the opening
    /// entry. Valid in every phase — calling mid-journey discards the
    /// current session.
    pub fn start(&mut self) {
        self.day = 1;
        self.stage = Stage::Sunrise;
        self.log.clear();
        self.started = true;
        self.finished = false;
        self.emission_count = 0;
        self.emit_atmosphere();
    }

    /// Advance one stage in response to a "continue" action.
    ///
    /// Exactly one log entry is appended per accepted call: the next stage's
    /// atmosphere line, the next day's sunrise line, or — when day 7's
    /// sunset has already been reached — one terminal line from the
    /// catalog's finish pool. Outside `InProgress` the call is a benign
    /// no-op reported as `Step::Ignored`; it never mutates state and never
    /// appends to the log.
    pub fn advance(&mut self) -> Step {
        if self.phase() != Phase::InProgress {
            return Step::Ignored;
        }

        if let Some(next) = self.stage.next() {
            self.stage = next;
            self.emit_atmosphere();
            Step::Stage
        } else if self.day < FINAL_DAY {
            self.day += 1;
            self.stage = Stage::Sunrise;
            self.emit_atmosphere();
            Step::NewDay
        } else {
            self.finished = true;
            self.emit_finish();
            Step::Finished
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::NotStarted
        } else if self.finished {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }

    /// Current day, 1-based. Meaningful once started.
    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The current day's mood.
    pub fn mood(&self) -> Mood {
        Mood::for_day(self.day)
    }

    /// The journey log in emission order.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Published read-only state for a display layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            day: self.day,
            stage: self.stage,
            log: self.log.clone(),
            started: self.started,
            finished: self.finished,
        }
    }

    fn emit_atmosphere(&mut self) {
        let mut rng = self.emission_rng();
        let text = self.catalog.text_for(self.mood(), self.stage, &mut rng);
        self.append(text);
    }

    fn emit_finish(&mut self) {
        let mut rng = self.emission_rng();
        let text = self.catalog.finish_text(&mut rng);
        self.append(text);
    }

    // Each emission gets its own RNG derived from the seed and the emission
    // index, so a session replays identically for the same seed.
    fn emission_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(self.emission_count))
    }

    fn append(&mut self, text: String) {
        self.log.push(LogEntry::new(EntryId(self.emission_count), text));
        self.emission_count += 1;
    }
}

impl ProgressionEngineBuilder {
    /// Load the catalog from a RON file at build time.
    pub fn catalog_path(mut self, path: &str) -> Self {
        self.catalog_path = Some(path.to_string());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Provide a catalog directly (for testing without files).
    pub fn with_catalog(mut self, catalog: TextCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the engine in the `NotStarted` phase. Without a catalog source
    /// the engine runs against an empty catalog and every lookup falls back.
    pub fn build(self) -> Result<ProgressionEngine, CatalogError> {
        let catalog = match (self.catalog, self.catalog_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => TextCatalog::load_from_ron(Path::new(&path))?,
            (None, None) => TextCatalog::new(),
        };

        Ok(ProgressionEngine {
            catalog,
            seed: self.seed,
            day: 1,
            stage: Stage::Sunrise,
            log: Vec::new(),
            started: false,
            finished: false,
            emission_count: 0,
        })
    }
}
