use clap::Parser;

use workshop_kit::input::Terminal;
use workshop_kit::logging;
use workshop_kit::scripts::run_mark_sheet;

/// Averages the marks of three subjects and assigns a letter grade.
#[derive(Parser, Debug)]
#[command(name = "mark-sheet", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init();

    let mut terminal = Terminal::stdio();
    if let Err(err) = run_mark_sheet(&mut terminal, &mut std::io::stdout()) {
        tracing::debug!(error = ?err, "grading failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
