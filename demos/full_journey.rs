/// Full Journey example — one complete seven-day session with the shipped
/// atmosphere catalog.
///
/// Run with: cargo run --example full_journey

use journey_engine::core::engine::{ProgressionEngine, Step};

fn main() {
    let mut engine = ProgressionEngine::builder()
        .seed(2026)
        .catalog_path("journey_data/atmosphere.ron")
        .build()
        .expect("Failed to load atmosphere catalog");

    engine.start();
    print_latest(&engine);

    loop {
        let step = engine.advance();
        match step {
            Step::Ignored => break,
            Step::NewDay => {
                println!("--- day {} ---", engine.day());
                print_latest(&engine);
            }
            _ => print_latest(&engine),
        }
    }

    println!();
    println!(
        "Journey complete: {} entries over {} days.",
        engine.log().len(),
        engine.day()
    );
}

fn print_latest(engine: &ProgressionEngine) {
    if let Some(entry) = engine.log().last() {
        println!("[{:>7}] {}", engine.stage().title(), entry.text);
    }
}
