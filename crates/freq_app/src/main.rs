use std::process::ExitCode;

use clap::Parser;

use freq_app::cli::Cli;
use freq_app::{logging, runner};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(cli.log_destination(), cli.verbose);

    match runner::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
