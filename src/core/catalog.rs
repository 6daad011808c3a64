/// Atmosphere catalog — static (mood, stage) text pools, parsing, and lookup.

use rand::rngs::StdRng;
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::schema::mood::Mood;
use crate::schema::stage::Stage;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Static registry of atmosphere lines keyed by (mood, stage), plus a
/// dedicated pool for the journey's terminal entry.
///
/// Registrations are configuration: the engine only reads from the catalog
/// at runtime. Lookups are infallible — any missing or empty pool degrades
/// to the empty string.
#[derive(Debug, Clone, Default)]
pub struct TextCatalog {
    pools: FxHashMap<(Mood, Stage), Vec<String>>,
    finish: Vec<String>,
}

// RON deserialization helpers — the RON format stores pools as a flat list,
// so we need intermediate structs.

#[derive(Debug, Deserialize)]
#[serde(rename = "Pool")]
struct RonPool {
    mood: Mood,
    stage: Stage,
    lines: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename = "Atmosphere")]
struct RonAtmosphere {
    pools: Vec<RonPool>,
    #[serde(default)]
    finish: Vec<String>,
}

impl TextCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<TextCatalog, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a catalog from a RON string. Pools listed more than once for
    /// the same (mood, stage) accumulate their lines.
    pub fn parse_ron(input: &str) -> Result<TextCatalog, CatalogError> {
        let raw: RonAtmosphere = ron::from_str(input)?;
        let mut catalog = TextCatalog::new();
        for pool in raw.pools {
            for line in pool.lines {
                catalog.register(pool.mood, pool.stage, line);
            }
        }
        for line in raw.finish {
            catalog.register_finish(line);
        }
        Ok(catalog)
    }

    /// Add one candidate line for a (mood, stage) pair.
    pub fn register(&mut self, mood: Mood, stage: Stage, line: impl Into<String>) {
        self.pools.entry((mood, stage)).or_default().push(line.into());
    }

    /// Add one candidate line to the terminal pool.
    pub fn register_finish(&mut self, line: impl Into<String>) {
        self.finish.push(line.into());
    }

    /// One atmosphere line for the given (mood, stage) pair, chosen
    /// uniformly among the registered candidates.
    ///
    /// A pair with no candidates yields the empty string — the documented
    /// fallback. Lookups never error.
    pub fn text_for(&self, mood: Mood, stage: Stage, rng: &mut StdRng) -> String {
        Self::pick(self.pools.get(&(mood, stage)).map(Vec::as_slice), rng)
    }

    /// One line from the terminal pool, with the same fallback contract as
    /// [`text_for`](Self::text_for).
    pub fn finish_text(&self, rng: &mut StdRng) -> String {
        Self::pick(Some(self.finish.as_slice()), rng)
    }

    fn pick(candidates: Option<&[String]>, rng: &mut StdRng) -> String {
        match candidates {
            Some(lines) if !lines.is_empty() => lines[rng.gen_range(0..lines.len())].clone(),
            _ => String::new(),
        }
    }

    /// Number of candidates registered for a pair.
    pub fn candidate_count(&self, mood: Mood, stage: Stage) -> usize {
        self.pools.get(&(mood, stage)).map_or(0, Vec::len)
    }

    /// Whether the terminal pool has at least one candidate.
    pub fn has_finish_pool(&self) -> bool {
        !self.finish.is_empty()
    }

    /// Every (mood, stage) pair with no registered candidates, in day
    /// order. Used by the catalog linter.
    pub fn missing_pairs(&self) -> Vec<(Mood, Stage)> {
        let mut missing = Vec::new();
        for mood in Mood::ALL {
            for stage in Stage::ALL {
                if self.candidate_count(mood, stage) == 0 {
                    missing.push((mood, stage));
                }
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn single_candidate_is_always_returned() {
        let mut catalog = TextCatalog::new();
        catalog.register(Mood::Wonder, Stage::Noon, "The sun stands still.");
        let mut rng = rng();
        for _ in 0..10 {
            assert_eq!(
                catalog.text_for(Mood::Wonder, Stage::Noon, &mut rng),
                "The sun stands still."
            );
        }
    }

    #[test]
    fn selection_stays_within_the_pool() {
        let mut catalog = TextCatalog::new();
        catalog.register(Mood::Doubt, Stage::Evening, "a");
        catalog.register(Mood::Doubt, Stage::Evening, "b");
        catalog.register(Mood::Doubt, Stage::Evening, "c");
        let mut rng = rng();
        for _ in 0..50 {
            let text = catalog.text_for(Mood::Doubt, Stage::Evening, &mut rng);
            assert!(["a", "b", "c"].contains(&text.as_str()));
        }
    }

    #[test]
    fn missing_pair_falls_back_to_empty_string() {
        let catalog = TextCatalog::new();
        let mut rng = rng();
        for _ in 0..5 {
            assert_eq!(catalog.text_for(Mood::Despair, Stage::Sunset, &mut rng), "");
        }
    }

    #[test]
    fn empty_finish_pool_falls_back_to_empty_string() {
        let catalog = TextCatalog::new();
        assert!(!catalog.has_finish_pool());
        assert_eq!(catalog.finish_text(&mut rng()), "");
    }

    #[test]
    fn parse_ron_accumulates_pools() {
        let input = r#"Atmosphere(
            pools: [
                Pool(mood: Anticipation, stage: Sunrise, lines: ["First light."]),
                Pool(mood: Anticipation, stage: Sunrise, lines: ["The road waits."]),
            ],
            finish: ["The journey ends here."],
        )"#;
        let catalog = TextCatalog::parse_ron(input).unwrap();
        assert_eq!(catalog.candidate_count(Mood::Anticipation, Stage::Sunrise), 2);
        assert!(catalog.has_finish_pool());
    }

    #[test]
    fn parse_ron_finish_defaults_empty() {
        let input = r#"Atmosphere(
            pools: [
                Pool(mood: Hope, stage: Sunset, lines: ["The sky softens."]),
            ],
        )"#;
        let catalog = TextCatalog::parse_ron(input).unwrap();
        assert!(!catalog.has_finish_pool());
    }

    #[test]
    fn parse_ron_rejects_unknown_mood() {
        let input = r#"Atmosphere(
            pools: [
                Pool(mood: Jubilation, stage: Sunrise, lines: ["x"]),
            ],
        )"#;
        assert!(TextCatalog::parse_ron(input).is_err());
    }

    #[test]
    fn load_fixture_catalog_from_ron() {
        let path = std::path::PathBuf::from("tests/fixtures/test_atmosphere.ron");
        let catalog = TextCatalog::load_from_ron(&path).unwrap();
        assert!(catalog.candidate_count(Mood::Anticipation, Stage::Sunrise) >= 1);
        assert!(catalog.has_finish_pool());
    }

    #[test]
    fn missing_pairs_reports_uncovered_combinations() {
        let mut catalog = TextCatalog::new();
        for mood in Mood::ALL {
            for stage in Stage::ALL {
                catalog.register(mood, stage, "line");
            }
        }
        assert!(catalog.missing_pairs().is_empty());

        let mut partial = TextCatalog::new();
        partial.register(Mood::Anticipation, Stage::Sunrise, "line");
        let missing = partial.missing_pairs();
        assert_eq!(missing.len(), 27);
        assert!(!missing.contains(&(Mood::Anticipation, Stage::Sunrise)));
    }
}
