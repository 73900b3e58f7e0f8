use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Epidemiological week converter.
#[derive(Parser)]
#[command(
    name = "epiweek",
    version,
    about = "Convert between calendar dates and WHO/CDC epidemiological weeks"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Turn (year, week, weekday) values into dates.
    Compose(ComposeArgs),
    /// Turn dates into epidemiological weeks.
    Decompose(DecomposeArgs),
}

/// Arguments for the `compose` subcommand.
///
/// List arguments are comma separated. `NA` or an empty entry marks a
/// missing value.
#[derive(clap::Args)]
pub struct ComposeArgs {
    /// Path to TOML configuration file (default: ./epiweek.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Epidemiological year(s).
    #[arg(short, long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub year: Vec<String>,

    /// Week number(s), 1..=53.
    #[arg(short, long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub week: Vec<String>,

    /// Weekday number(s), 1..=7. Overrides `[compose].weekday` from config.
    #[arg(short = 'd', long, value_delimiter = ',', allow_hyphen_values = true)]
    pub weekday: Vec<String>,

    /// Week-numbering convention: `who` or `cdc`.
    #[arg(long)]
    pub convention: Option<String>,

    /// Broadcast policy for lists of different lengths: `recycle` or `exact`.
    #[arg(long)]
    pub broadcast: Option<String>,

    /// Reject week 53 in years that only have 52 weeks.
    #[arg(long)]
    pub strict_week53: bool,
}

/// Arguments for the `decompose` subcommand.
#[derive(clap::Args)]
pub struct DecomposeArgs {
    /// Dates as YYYY-MM-DD. `NA` marks a missing value.
    #[arg(required = true)]
    pub dates: Vec<String>,

    /// Print the full year-week-weekday triple under this convention
    /// (`who` or `cdc`) instead of the ISO year-week.
    #[arg(long)]
    pub convention: Option<String>,
}
