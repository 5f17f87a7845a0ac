mod cli;
mod clock;
mod config;
mod fetch;
mod logging;
mod model;
mod navigation;
mod schedule;
mod table;
mod tui;
mod view;

use std::process;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    match Config::home() {
        Some(home) => {
            if let Err(e) = logging::init(&config.log_filter, &home) {
                eprintln!("Logging disabled: {e}");
            }
        }
        None => eprintln!("Logging disabled: could not determine home directory."),
    }

    if let Err(e) = cli::run(&cli, &config) {
        tracing::error!(error = %e, "docket exited with an error");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
