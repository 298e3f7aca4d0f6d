//! draw-game binary.
//!
//! # Usage
//!
//! ```bash
//! # One game with the standard roster
//! draw-game
//!
//! # Reproduce a game
//! draw-game --seed 1234
//!
//! # Compare strategies over many games
//! draw-game --games 10000 --seed 7
//! ```

use clap::Parser;
use draw_game::{
    default_roster, run_tournament, GameConfig, GameHandle, StrategyKind, TournamentConfig,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Number-draw elimination game
#[derive(Parser, Debug)]
#[command(name = "draw-game")]
#[command(about = "Draw numbers until a player's strategy wins")]
#[command(version)]
struct Args {
    /// Seed for the draw RNG (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up after this many draws
    #[arg(long)]
    max_draws: Option<u64>,

    /// Play this many games and print win tallies instead of a single game
    #[arg(short, long)]
    games: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match args.games {
        Some(games) => play_tournament(&args, games),
        None => play_single(&args),
    }
}

fn play_single(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GameConfig::new();
    config.seed = args.seed;
    config.max_draws = args.max_draws;

    let handle = GameHandle::init_global(config)?;
    if let Some(seed) = handle.with(|game| game.seed()) {
        tracing::info!(seed, "game seeded");
    }

    for participant in default_roster() {
        if handle.register(participant)?.started() {
            let winner = handle.with(|game| game.run_with(|outcome| println!("{outcome}")))?;
            println!("{winner}");
        }
    }

    Ok(())
}

fn play_tournament(args: &Args, games: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = TournamentConfig::new().with_games(games);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.max_draws.is_some() {
        config = config.with_max_draws(args.max_draws);
    }

    let stats = run_tournament(&config)?;

    println!("Games played: {}", stats.games());
    for kind in StrategyKind::ALL {
        println!(
            "{:<18} {:>8} wins ({:5.1}%)",
            kind.name(),
            stats.wins_for(kind),
            stats.win_rate(kind) * 100.0
        );
    }
    if stats.unfinished > 0 {
        println!("Unfinished: {}", stats.unfinished);
    }
    println!("Average draws per game: {:.2}", stats.average_draws());

    Ok(())
}
