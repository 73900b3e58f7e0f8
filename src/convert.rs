//! Pure conversion functions: TOML config and CLI strings -> library types.

use anyhow::{Result, bail};

use epiweek_calendar::{BroadcastPolicy, Column, ComposeOptions, Convention, Week53Policy};

use crate::cli::ComposeArgs;
use crate::config::ComposeToml;

/// Parses a convention token (`who`/`iso`, `cdc`/`mmwr`).
pub fn parse_convention(s: &str) -> Result<Convention> {
    Ok(s.parse::<Convention>()?)
}

/// Parses a broadcast policy name (`recycle`, `exact`).
pub fn parse_broadcast(s: &str) -> Result<BroadcastPolicy> {
    match s.trim().to_lowercase().as_str() {
        "recycle" => Ok(BroadcastPolicy::Recycle),
        "exact" => Ok(BroadcastPolicy::Exact),
        other => bail!("unknown broadcast policy: {other:?}"),
    }
}

/// Parses a week-53 policy name (`roll`, `strict`).
pub fn parse_week53(s: &str) -> Result<Week53Policy> {
    match s.trim().to_lowercase().as_str() {
        "roll" => Ok(Week53Policy::Roll),
        "strict" => Ok(Week53Policy::Strict),
        other => bail!("unknown week-53 policy: {other:?}"),
    }
}

/// Returns `true` for the textual missing-value markers `NA` and empty.
pub fn is_missing(s: &str) -> bool {
    let s = s.trim();
    s.is_empty() || s.eq_ignore_ascii_case("na")
}

/// Parses one integer cell, with `NA`/empty as missing.
pub fn parse_cell(field: &str, s: &str) -> Result<Option<i32>> {
    if is_missing(s) {
        return Ok(None);
    }
    match s.trim().parse::<i32>() {
        Ok(v) => Ok(Some(v)),
        Err(_) => bail!("invalid {field} value: {s:?}"),
    }
}

/// Parses a list of cells into a column. A single cell becomes a scalar.
pub fn parse_column(field: &str, values: &[String]) -> Result<Column<i32>> {
    let cells = values
        .iter()
        .map(|v| parse_cell(field, v))
        .collect::<Result<Vec<_>>>()?;
    Ok(match cells.as_slice() {
        [single] => Column::Scalar(*single),
        _ => Column::with_missing(cells),
    })
}

/// Builds [`ComposeOptions`] from the TOML compose table and CLI overrides.
pub fn build_compose_options(cfg: &ComposeToml, args: &ComposeArgs) -> Result<ComposeOptions> {
    let convention = parse_convention(args.convention.as_deref().unwrap_or(&cfg.convention))?;
    let broadcast = parse_broadcast(args.broadcast.as_deref().unwrap_or(&cfg.broadcast))?;
    let week53 = if args.strict_week53 {
        Week53Policy::Strict
    } else {
        parse_week53(&cfg.week53)?
    };
    Ok(ComposeOptions::new(convention)
        .with_broadcast(broadcast)
        .with_week53(week53))
}

/// Builds the weekday column: CLI values if given, else the config default.
pub fn build_weekday_column(cfg: &ComposeToml, args: &ComposeArgs) -> Result<Column<i32>> {
    if args.weekday.is_empty() {
        Ok(Column::scalar(cfg.weekday))
    } else {
        parse_column("weekday", &args.weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(convention: Option<&str>, strict: bool) -> ComposeArgs {
        ComposeArgs {
            config: None,
            year: vec!["2017".to_string()],
            week: vec!["1".to_string()],
            weekday: Vec::new(),
            convention: convention.map(str::to_string),
            broadcast: None,
            strict_week53: strict,
        }
    }

    #[test]
    fn policies() {
        assert_eq!(parse_week53("ROLL").unwrap(), Week53Policy::Roll);
        assert_eq!(parse_week53(" strict ").unwrap(), Week53Policy::Strict);
        assert_eq!(
            parse_week53("reject").unwrap_err().to_string(),
            "unknown week-53 policy: \"reject\""
        );
        assert_eq!(parse_broadcast("recycle").unwrap(), BroadcastPolicy::Recycle);
        assert_eq!(parse_broadcast("Exact").unwrap(), BroadcastPolicy::Exact);
        for p in [BroadcastPolicy::Recycle, BroadcastPolicy::Exact] {
            assert_eq!(parse_broadcast(&p.to_string()).unwrap(), p);
        }
        for p in [Week53Policy::Roll, Week53Policy::Strict] {
            assert_eq!(parse_week53(&p.to_string()).unwrap(), p);
        }
    }

    #[test]
    fn cells() {
        assert_eq!(parse_cell("week", "5").unwrap(), Some(5));
        assert_eq!(parse_cell("week", " -3 ").unwrap(), Some(-3));
        assert_eq!(parse_cell("week", "NA").unwrap(), None);
        assert_eq!(parse_cell("week", "na").unwrap(), None);
        assert_eq!(parse_cell("week", "").unwrap(), None);
        let err = parse_cell("week", "five").unwrap_err();
        assert_eq!(err.to_string(), "invalid week value: \"five\"");
    }

    #[test]
    fn columns() {
        let single = parse_column("year", &["2017".to_string()]).unwrap();
        assert_eq!(single, Column::scalar(2017));
        let missing = parse_column("year", &["NA".to_string()]).unwrap();
        assert_eq!(missing, Column::missing());
        let many = parse_column("week", &["1".to_string(), "".to_string()]).unwrap();
        assert_eq!(many, Column::with_missing([Some(1), None]));
    }

    #[test]
    fn options_from_config() {
        let cfg = ComposeToml {
            convention: "cdc".to_string(),
            week53: "strict".to_string(),
            ..ComposeToml::default()
        };
        let opts = build_compose_options(&cfg, &args(None, false)).unwrap();
        assert_eq!(opts.convention(), Convention::Cdc);
        assert_eq!(opts.week53(), Week53Policy::Strict);
        assert_eq!(opts.broadcast(), BroadcastPolicy::Recycle);
    }

    #[test]
    fn cli_overrides_config() {
        let cfg = ComposeToml::default();
        let opts = build_compose_options(&cfg, &args(Some("mmwr"), true)).unwrap();
        assert_eq!(opts.convention(), Convention::Cdc);
        assert_eq!(opts.week53(), Week53Policy::Strict);
    }

    #[test]
    fn bad_tokens() {
        let cfg = ComposeToml::default();
        let err = build_compose_options(&cfg, &args(Some("paho"), false)).unwrap_err();
        assert!(err.to_string().contains("invalid convention"));

        let cfg = ComposeToml {
            broadcast: "zip".to_string(),
            ..ComposeToml::default()
        };
        let err = build_compose_options(&cfg, &args(None, false)).unwrap_err();
        assert_eq!(err.to_string(), "unknown broadcast policy: \"zip\"");
    }

    #[test]
    fn weekday_column_defaults_to_config() {
        let cfg = ComposeToml {
            weekday: 3,
            ..ComposeToml::default()
        };
        assert_eq!(
            build_weekday_column(&cfg, &args(None, false)).unwrap(),
            Column::scalar(3)
        );
        let mut a = args(None, false);
        a.weekday = vec!["1".to_string(), "7".to_string()];
        assert_eq!(
            build_weekday_column(&cfg, &a).unwrap(),
            Column::sequence([1, 7])
        );
    }
}
