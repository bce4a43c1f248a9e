use std::env;
use std::process::ExitCode;

use passforge::settings::Settings;
use passforge::{cli, exits, logging, tui};

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    logging::init(args.iter().any(|a| a == "--verbose"));

    match args.len() {
        1 if !Settings::has_saved_command() => {
            tui::run();
            ExitCode::SUCCESS
        }
        _ => cli::run(args),
    }
}
