use clap::Parser;
use log::error;

use console_observer::{ConsoleObserver, OutputFormat};
use war_core::{run_game, settings::GameSettings};

mod console_observer;

/// Plays one game of War between two computer players.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the shuffle, to replay a game.
    #[arg(long)]
    seed: Option<u64>,
    /// Call the game a draw after this many rounds.
    #[arg(long)]
    round_limit: Option<usize>,
    /// Print events as JSON lines instead of text.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let settings = GameSettings {
        seed: args.seed,
        round_limit: args.round_limit,
        ..GameSettings::default()
    };
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    if let Err(e) = run_game(&settings, &mut ConsoleObserver::new(format)) {
        error!("game aborted: {}", e);
        std::process::exit(1);
    }
}
