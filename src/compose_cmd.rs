//! Compose command: (year, week, weekday) lists to dates.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use epiweek_calendar::compose_batch;

use crate::cli::ComposeArgs;
use crate::config;
use crate::convert;

/// Run the compose command, printing one date (or `NA`) per line.
pub fn run(args: ComposeArgs) -> Result<()> {
    let _cmd = info_span!("compose").entered();

    let cfg = config::load(args.config.as_deref())?;
    let options = convert::build_compose_options(&cfg.compose, &args)?;
    let years = convert::parse_column("year", &args.year)?;
    let weeks = convert::parse_column("week", &args.week)?;
    let weekdays = convert::build_weekday_column(&cfg.compose, &args)?;
    info!(
        convention = %options.convention(),
        broadcast = %options.broadcast(),
        week53 = %options.week53(),
        "composing dates"
    );

    let dates = compose_batch(&years, &weeks, &weekdays, &options)
        .context("failed to compose dates")?;

    let mut out = BufWriter::new(io::stdout().lock());
    for date in &dates {
        match date {
            Some(d) => writeln!(out, "{d}")?,
            None => writeln!(out, "NA")?,
        }
    }
    out.flush()?;
    info!(n = dates.len(), "done");
    Ok(())
}
