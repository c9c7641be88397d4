mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::config::AmlichToml;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let file = AmlichToml::load(cli.config.as_deref())?;
    let config = file.calendar_config(cli.tz)?;
    debug!(time_zone_hours = config.time_zone_hours, "calendar config");

    match cli.command {
        Command::Lunar { date } => commands::lunar(&date, &config),
        Command::Solar {
            day,
            month,
            year,
            leap,
        } => commands::solar(day, month, year, leap, &config),
        Command::Year { year } => commands::year(year, &config),
        Command::Month { year, month } => commands::month(year, month, &config),
        Command::Festivals { year } => commands::festivals(year, &config),
    }
}
