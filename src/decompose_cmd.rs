//! Decompose command: dates to epidemiological weeks.

use std::fmt::Display;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use epiweek_calendar::{decompose_batch, locate_batch, parse_batch};

use crate::cli::DecomposeArgs;
use crate::convert;

/// Run the decompose command, printing one week per input date.
///
/// Without `--convention` each line is the WHO/ISO `YYYY-Www`; with it,
/// the full `YYYY-Www-d` triple under that convention.
pub fn run(args: DecomposeArgs) -> Result<()> {
    let _cmd = info_span!("decompose").entered();

    let cells: Vec<Option<&str>> = args
        .dates
        .iter()
        .map(|s| (!convert::is_missing(s)).then_some(s.as_str()))
        .collect();
    let dates = parse_batch(&cells).context("failed to parse dates")?;
    info!(n = dates.len(), "decomposing dates");

    match args.convention.as_deref() {
        None => print_all(&decompose_batch(&dates)),
        Some(token) => {
            let convention = convert::parse_convention(token)?;
            let refs = locate_batch(&dates, convention).context("failed to locate dates")?;
            print_all(&refs)
        }
    }
}

fn print_all<T: Display>(values: &[Option<T>]) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for value in values {
        match value {
            Some(v) => writeln!(out, "{v}")?,
            None => writeln!(out, "NA")?,
        }
    }
    out.flush()?;
    Ok(())
}
