//! Battle balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # 10000 battles at difficulty 1
//!   cargo run --bin simulate -- -n 500 -d 5        # 500 battles at difficulty 5
//!   cargo run --bin simulate -- --lang Rust -r Mythic --seed 42
//!   RUST_LOG=codecards=debug cargo run --bin simulate -- -n 10

use codecards::cards::{Language, Rarity};
use codecards::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              CODECARDS BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Battles:        {}", config.num_runs);
    match config.difficulty {
        Some(d) => println!("  Difficulty:     {}", d),
        None => println!("  Difficulty:     random"),
    }
    if let Some(language) = config.language {
        println!("  Language:       {}", language);
    }
    if let Some(rarity) = config.rarity {
        println!("  Rarity:         {}", rarity);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                tracing::error!("failed to write {filename}: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(10_000);
                    i += 1;
                }
            }
            "-d" | "--difficulty" => {
                if i + 1 < args.len() {
                    config.difficulty = args[i + 1].parse().ok().filter(|d: &u32| *d > 0);
                    i += 1;
                }
            }
            "-l" | "--lang" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<Language>() {
                        Ok(language) => config.language = Some(language),
                        Err(e) => eprintln!("{e}, using random languages"),
                    }
                    i += 1;
                }
            }
            "-r" | "--rarity" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<Rarity>() {
                        Ok(rarity) => config.rarity = Some(rarity),
                        Err(e) => eprintln!("{e}, using rolled rarities"),
                    }
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--sweep" => {
                config.difficulty = None;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Codecards Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>         Number of battles (default: 10000)");
    println!("    -d, --difficulty <D>   Opponent difficulty, 1 or higher (default: 1)");
    println!("        --sweep            Random difficulty 1-10 per battle");
    println!("    -l, --lang <NAME>      Fix the player's language");
    println!("    -r, --rarity <NAME>    Fix the player's rarity");
    println!("    -s, --seed <S>         Random seed for reproducibility");
    println!("    -v, --verbose          Log every battle (set RUST_LOG=info)");
    println!("    -q, --quiet            No summary log line");
    println!("        --quick            500 seeded battles");
    println!("        --json             Save JSON report to file");
    println!("    -h, --help             Show this help");
}
