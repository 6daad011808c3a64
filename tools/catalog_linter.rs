/// Catalog Linter — validates atmosphere pool coverage and quality.
///
/// Usage: catalog_linter <catalog.ron>

use journey_engine::core::catalog::TextCatalog;
use journey_engine::schema::mood::Mood;
use journey_engine::schema::stage::Stage;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: catalog_linter <catalog.ron>");
        process::exit(0);
    }

    let catalog_path = Path::new(&args[1]);
    if !catalog_path.is_file() {
        eprintln!("ERROR: Path '{}' does not exist", args[1]);
        process::exit(1);
    }

    let catalog = match TextCatalog::load_from_ron(catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("ERROR: Failed to load catalog file: {}", e);
            process::exit(1);
        }
    };

    let (errors, warnings) = lint_catalog(&catalog);

    println!("=== Catalog Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_catalog(catalog: &TextCatalog) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Coverage: the engine visits every (mood, stage) pair once per journey.
    for (mood, stage) in catalog.missing_pairs() {
        errors.push(format!(
            "No pool for ({}, {}) — the engine will fall back to an empty line",
            mood.tag(),
            stage.title()
        ));
    }

    // Variety: single-candidate pools always repeat across seeds.
    for mood in Mood::ALL {
        for stage in Stage::ALL {
            if catalog.candidate_count(mood, stage) == 1 {
                warnings.push(format!(
                    "Pool ({}, {}) has only 1 candidate (minimum 2 recommended)",
                    mood.tag(),
                    stage.title()
                ));
            }
        }
    }

    if !catalog.has_finish_pool() {
        errors.push(
            "No finish pool — the terminal entry will fall back to an empty line".to_string(),
        );
    }

    (errors, warnings)
}
