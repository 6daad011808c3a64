/// Preview — interactive session runner for testing atmosphere catalogs.
///
/// Usage: preview --catalog <path> [--seed <n>] [--auto]
///
/// Commands:
///   (empty line)  — advance one stage
///   state         — print the current snapshot
///   restart       — start a fresh session
///   quit          — exit

use journey_engine::core::engine::{ProgressionEngine, Step};
use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut catalog_path = None;
    let mut seed: u64 = 42;
    let mut auto = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" if i + 1 < args.len() => {
                i += 1;
                catalog_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--auto" => auto = true,
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                return;
            }
        }
        i += 1;
    }

    let mut builder = ProgressionEngine::builder().seed(seed);
    if let Some(ref path) = catalog_path {
        builder = builder.catalog_path(path);
    }
    let mut engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    engine.start();
    print_latest(&engine);

    if auto {
        while engine.advance() != Step::Ignored {
            print_latest(&engine);
        }
        return;
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match line.trim() {
            "quit" | "q" => break,
            "restart" => {
                engine.start();
                print_latest(&engine);
            }
            "state" => print_state(&engine),
            "" => match engine.advance() {
                Step::Ignored => {
                    println!("(journey finished — 'restart' to begin again)");
                }
                _ => print_latest(&engine),
            },
            other => println!("Unknown command: {}", other),
        }
    }
}

fn print_latest(engine: &ProgressionEngine) {
    if let Some(entry) = engine.log().last() {
        println!(
            "[day {} / {}] {}",
            engine.day(),
            engine.stage().title(),
            entry.text
        );
    }
}

fn print_state(engine: &ProgressionEngine) {
    let snapshot = engine.snapshot();
    println!(
        "day {} / {} — {} entries, started: {}, finished: {}",
        snapshot.day,
        snapshot.stage.title(),
        snapshot.log.len(),
        snapshot.started,
        snapshot.finished
    );
}

fn print_usage() {
    println!("Usage: preview --catalog <path> [--seed <n>] [--auto]");
    println!();
    println!("Interactive commands:");
    println!("  (empty line)  advance one stage");
    println!("  state         print the current snapshot");
    println!("  restart       start a fresh session");
    println!("  quit          exit");
}
