use tracing_subscriber::EnvFilter;

/// Workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["epiweek", "epiweek_calendar"];

/// Initialize tracing based on CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` env var overrides the CLI flag if set. Logs go to stderr so
/// stdout stays clean for results.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_levels() {
        assert_eq!(default_filter(0), "epiweek=warn,epiweek_calendar=warn");
        assert_eq!(default_filter(2), "epiweek=debug,epiweek_calendar=debug");
        assert_eq!(default_filter(7), "epiweek=trace,epiweek_calendar=trace");
    }
}
