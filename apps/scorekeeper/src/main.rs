//! Scorekeeper CLI - terminal front end for the round scorekeeper.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use scorekeeper::render::{scoreboard_text, stats_text};
use scorekeeper::storage::file::slot_exists;
use scorekeeper::storage::record::encode;
use scorekeeper::telemetry::init_tracing;
use scorekeeper::{
    AppError, GameStore, JsonFileStore, LogFormat, RoundSubmission, ScoreSession, StorageConfig,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Keep score across rounds of a card game")]
struct Args {
    /// Directory holding save slots (env: SCOREKEEPER_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Save slot name (env: SCOREKEEPER_SLOT)
    #[arg(long, global = true)]
    slot: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new game
    New {
        /// Number of players (defaults to the number of names given)
        #[arg(short, long)]
        players: Option<usize>,

        /// Target score, shown on the board only
        #[arg(short, long)]
        target: Option<String>,

        /// Replace a game already in progress
        #[arg(long)]
        force: bool,

        /// Player names in seating order; blanks become P1, P2, ...
        names: Vec<String>,
    },
    /// Record one round: one entry per player in seating order
    Round {
        /// Raw entries; blank or missing entries count as 0
        #[arg(allow_hyphen_values = true)]
        entries: Vec<String>,
    },
    /// Show standings, dealer and round
    Board,
    /// Show end-of-game statistics and the round history
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the stored record as JSON
    Export,
    /// Delete the saved game
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let format = match LogFormat::from_env() {
        Ok(f) => f,
        Err(e) => return report(&e),
    };
    init_tracing(format, args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(err: &AppError) -> ExitCode {
    match err.zero_count() {
        Some(n) => eprintln!(
            "Rule violation: {n} players have 0 points (or blank entries). Only one may."
        ),
        None => eprintln!("error [{}]: {err}", err.code()),
    }
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}

fn run(args: Args) -> Result<(), AppError> {
    let config = StorageConfig::resolve(args.data_dir, args.slot)?;
    debug!(data_dir = %config.data_dir.display(), slot = %config.slot, "using save slot");

    let store = JsonFileStore::new(&config.data_dir, &config.slot);

    match args.command {
        Command::New {
            players,
            target,
            force,
            names,
        } => {
            let mut session = ScoreSession::bootstrap(store)?;
            let count = players.unwrap_or(names.len());
            session.start_game(count, target.as_deref(), &names, force)?;
            print!("{}", scoreboard_text(&session.scoreboard()?));
        }
        Command::Round { entries } => {
            let mut session = ScoreSession::bootstrap(store)?;
            session.submit_round(&RoundSubmission::from_ordered(entries))?;
            print!("{}", scoreboard_text(&session.scoreboard()?));
        }
        Command::Board => {
            let session = ScoreSession::bootstrap(store)?;
            print!("{}", scoreboard_text(&session.scoreboard()?));
        }
        Command::Stats { json } => {
            let report = ScoreSession::bootstrap(store)?.stats()?;
            if json {
                let text = serde_json::to_string_pretty(&report)
                    .map_err(|e| AppError::Store(e.into()))?;
                println!("{text}");
            } else {
                print!("{}", stats_text(&report));
            }
        }
        Command::Export => {
            let session = ScoreSession::bootstrap(store)?;
            let state = session
                .state()
                .ok_or_else(|| AppError::no_game("nothing to export"))?;
            let bytes = encode(state)?;
            println!("{}", String::from_utf8_lossy(&bytes));
        }
        // Works on the raw slot so an unreadable record can still be cleared.
        Command::Reset { yes } => reset_slot(store, &config, yes)?,
    }

    Ok(())
}

fn reset_slot(mut store: JsonFileStore, config: &StorageConfig, yes: bool) -> Result<(), AppError> {
    if !yes {
        println!("Refusing to delete the saved game without --yes.");
    } else if !slot_exists(&config.data_dir, &config.slot) {
        println!("No saved game.");
    } else {
        store.reset()?;
        println!("Saved game deleted.");
    }
    Ok(())
}
