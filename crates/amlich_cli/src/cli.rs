use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vietnamese lunar calendar converter.
#[derive(Parser, Debug)]
#[command(name = "amlich", version, about = "Vietnamese lunar calendar converter")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: amlich.toml, if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the UTC offset in hours (default 7 for Vietnam).
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub tz: Option<f64>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Lunar date and names of a solar date
    Lunar {
        /// Solar date (YYYY-MM-DD)
        date: String,
    },
    /// Solar date of a lunar date
    Solar {
        /// Lunar day (1-30)
        day: u32,
        /// Lunar month (1-12)
        month: u32,
        /// Lunar year
        #[arg(allow_negative_numbers = true)]
        year: i32,
        /// The month is the leap month
        #[arg(long)]
        leap: bool,
    },
    /// Month table of a lunar year
    Year {
        /// Lunar year
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
    /// Solar month grid with lunar days
    Month {
        /// Solar year
        #[arg(allow_negative_numbers = true)]
        year: i32,
        /// Solar month (1-12)
        month: u32,
    },
    /// Solar dates of the festivals of a lunar year
    Festivals {
        /// Lunar year
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lunar() {
        let cli = Cli::try_parse_from(["amlich", "lunar", "2024-02-10"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Lunar {
                date: "2024-02-10".into()
            }
        );
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.tz, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn parses_solar_with_leap() {
        let cli = Cli::try_parse_from(["amlich", "solar", "1", "2", "2023", "--leap"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Solar {
                day: 1,
                month: 2,
                year: 2023,
                leap: true
            }
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["amlich", "year", "2024", "-vv", "--tz", "-5"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.tz, Some(-5.0));
        assert_eq!(cli.command, Command::Year { year: 2024 });
    }

    #[test]
    fn parses_config_path() {
        let cli = Cli::try_parse_from(["amlich", "-c", "cal.toml", "festivals", "2025"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cal.toml")));
        assert_eq!(cli.command, Command::Festivals { year: 2025 });
    }

    #[test]
    fn rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["amlich"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
