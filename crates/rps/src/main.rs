//! Rock-paper-scissors duel
//!
//! Main entry point for the game.

mod terminal;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use rps_core::{GameConfig, GameRng, SCORES_FILENAME, ScoreStore, app};
use terminal::StdConsole;

/// Rock-paper-scissors against an endless line of enemies
#[derive(Parser, Debug)]
#[command(name = "rps")]
#[command(author, version, about = "Rock, paper, scissors - how long can you last?", long_about = None)]
struct Args {
    /// Score file location
    #[arg(long = "scores-file", default_value = SCORES_FILENAME)]
    scores_file: PathBuf,

    /// View high scores and exit
    #[arg(short = 's', long = "scores")]
    scores: bool,

    /// Print high scores as JSON (with --scores)
    #[arg(long = "json", requires = "scores")]
    json: bool,

    /// Seed for the enemy's moves
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = GameConfig::with_scores_path(&args.scores_file);

    let result = if args.scores {
        display_high_scores(&config, args.json)
    } else {
        play(&config, args.seed)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "game aborted");
            eprintln!("rps: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn play(config: &GameConfig, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
    debug!(seed = rng.seed(), "enemy rng ready");

    let mut console = StdConsole::new();
    app::run(&mut console, config, &mut rng)?;
    Ok(())
}

fn display_high_scores(config: &GameConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = ScoreStore::open(config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(store.board().records())?);
    } else {
        print!("{}", store.board().render_table());
    }
    Ok(())
}
