use clap::Parser;

use workshop_kit::input::Terminal;
use workshop_kit::logging;
use workshop_kit::scripts::run_converter;

/// Converts a temperature typed in Celsius to Fahrenheit.
#[derive(Parser, Debug)]
#[command(name = "cal-to-fahr", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init();

    let mut terminal = Terminal::stdio();
    if let Err(err) = run_converter(&mut terminal, &mut std::io::stdout()) {
        tracing::debug!(error = ?err, "temperature conversion failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
