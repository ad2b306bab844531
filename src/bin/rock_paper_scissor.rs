use clap::Parser;

use workshop_kit::input::Terminal;
use workshop_kit::logging;
use workshop_kit::opponent::RandomOpponent;
use workshop_kit::scripts::run_game;

/// One round of rock-paper-scissors against a random opponent.
#[derive(Parser, Debug)]
#[command(name = "rock-paper-scissor", version, about)]
struct Cli {
    /// Seed for the opponent's move; omit for a fresh random draw
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    let mut opponent = match cli.seed {
        Some(seed) => RandomOpponent::new(seed),
        None => RandomOpponent::from_entropy(),
    };
    tracing::debug!(seed = opponent.seed(), "opponent ready");

    let mut terminal = Terminal::stdio();
    if let Err(err) = run_game(&mut terminal, &mut std::io::stdout(), &mut opponent) {
        tracing::debug!(error = ?err, "game failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
