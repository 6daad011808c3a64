/// Atmosphere catalog integration tests — shipped data coverage and the
/// lookup fallback contract.

use journey_engine::core::catalog::TextCatalog;
use journey_engine::schema::mood::Mood;
use journey_engine::schema::stage::Stage;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn shipped_atmosphere_covers_every_pair() {
    let path = std::path::Path::new("journey_data/atmosphere.ron");
    let catalog = TextCatalog::load_from_ron(path).unwrap();

    assert!(
        catalog.missing_pairs().is_empty(),
        "Uncovered pairs: {:?}",
        catalog.missing_pairs()
    );
    assert!(catalog.has_finish_pool());
}

#[test]
fn shipped_atmosphere_has_minimum_variety() {
    let path = std::path::Path::new("journey_data/atmosphere.ron");
    let catalog = TextCatalog::load_from_ron(path).unwrap();

    for mood in Mood::ALL {
        for stage in Stage::ALL {
            assert!(
                catalog.candidate_count(mood, stage) >= 2,
                "Pool ({}, {}) has only {} candidates (minimum 2 expected)",
                mood.tag(),
                stage.title(),
                catalog.candidate_count(mood, stage)
            );
        }
    }
}

#[test]
fn shipped_atmosphere_has_no_blank_lines() {
    let path = std::path::Path::new("journey_data/atmosphere.ron");
    let catalog = TextCatalog::load_from_ron(path).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    for mood in Mood::ALL {
        for stage in Stage::ALL {
            for _ in 0..20 {
                let text = catalog.text_for(mood, stage, &mut rng);
                assert!(
                    !text.trim().is_empty(),
                    "Blank line in pool ({}, {})",
                    mood.tag(),
                    stage.title()
                );
            }
        }
    }
}

#[test]
fn fixture_catalog_loads_with_partial_coverage() {
    let path = std::path::Path::new("tests/fixtures/test_atmosphere.ron");
    let catalog = TextCatalog::load_from_ron(path).unwrap();

    assert_eq!(catalog.candidate_count(Mood::Anticipation, Stage::Sunrise), 2);
    assert_eq!(catalog.candidate_count(Mood::Anticipation, Stage::Noon), 1);
    assert_eq!(catalog.candidate_count(Mood::Acceptance, Stage::Sunset), 1);
    // 3 of 28 pairs covered.
    assert_eq!(catalog.missing_pairs().len(), 25);
}

#[test]
fn unregistered_pair_falls_back_deterministically() {
    let path = std::path::Path::new("tests/fixtures/test_atmosphere.ron");
    let catalog = TextCatalog::load_from_ron(path).unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..10 {
        assert_eq!(catalog.text_for(Mood::Despair, Stage::Noon, &mut rng), "");
    }
}

#[test]
fn missing_catalog_file_is_an_error() {
    let path = std::path::Path::new("journey_data/does_not_exist.ron");
    assert!(TextCatalog::load_from_ron(path).is_err());
}
