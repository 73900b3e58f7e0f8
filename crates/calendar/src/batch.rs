//! Element-wise batch evaluation with missing-value propagation.

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::debug;

use crate::broadcast::{Column, broadcast_len};
use crate::compose::compose_with;
use crate::config::ComposeOptions;
use crate::convention::Convention;
use crate::decompose::{decompose, locate, parse_date};
use crate::error::CalendarError;
use crate::week::{EpiWeek, EpiWeekRef};

/// Composes aligned `(year, week, weekday)` columns into dates.
///
/// Columns are aligned according to [`ComposeOptions::broadcast`]. An
/// element with any missing component yields `None`. If any present
/// element is invalid the whole batch fails; the error reports the first
/// failing position.
///
/// # Errors
///
/// Returns [`CalendarError::LengthMismatch`] if the columns cannot be
/// aligned, or [`CalendarError::Element`] wrapping the first per-element
/// failure.
///
/// # Example
///
/// ```
/// use epiweek_calendar::{Column, ComposeOptions, compose_batch};
///
/// let dates = compose_batch(
///     &Column::with_missing([Some(2017), None]),
///     &Column::scalar(1),
///     &Column::scalar(1),
///     &ComposeOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(dates.len(), 2);
/// assert!(dates[0].is_some());
/// assert!(dates[1].is_none());
/// ```
#[tracing::instrument(skip_all, fields(convention = %options.convention()))]
pub fn compose_batch(
    years: &Column<i32>,
    weeks: &Column<i32>,
    weekdays: &Column<i32>,
    options: &ComposeOptions,
) -> Result<Vec<Option<NaiveDate>>, CalendarError> {
    let n = broadcast_len(
        options.broadcast(),
        &[
            ("year", years.len()),
            ("week", weeks.len()),
            ("weekday", weekdays.len()),
        ],
    )?;

    let results: Vec<Result<Option<NaiveDate>, CalendarError>> = (0..n)
        .into_par_iter()
        .map(|i| match (years.get(i), weeks.get(i), weekdays.get(i)) {
            (Some(year), Some(week), Some(weekday)) => {
                compose_with(year, week, weekday, options)
                    .map(Some)
                    .map_err(|e| e.at(i))
            }
            _ => Ok(None),
        })
        .collect();
    let dates = results.into_iter().collect::<Result<Vec<_>, _>>()?;

    debug!(n, missing = count_missing(&dates), "composed batch");
    Ok(dates)
}

/// Decomposes dates into WHO/ISO epidemiological weeks, element-wise.
///
/// Output has the same length and order as the input. Missing dates map
/// to `None`.
#[tracing::instrument(skip_all, fields(n = dates.len()))]
pub fn decompose_batch(dates: &[Option<NaiveDate>]) -> Vec<Option<EpiWeek>> {
    let weeks: Vec<Option<EpiWeek>> = dates.par_iter().map(|d| d.map(decompose)).collect();
    debug!(missing = count_missing(&weeks), "decomposed batch");
    weeks
}

/// Parses and decomposes `YYYY-MM-DD` text, element-wise.
///
/// Missing entries map to `None`.
///
/// # Errors
///
/// Returns [`CalendarError::Element`] wrapping
/// [`CalendarError::InvalidDate`] for the first unparseable entry.
#[tracing::instrument(skip_all, fields(n = dates.len()))]
pub fn decompose_str_batch(
    dates: &[Option<&str>],
) -> Result<Vec<Option<EpiWeek>>, CalendarError> {
    let parsed = parse_batch(dates)?;
    Ok(decompose_batch(&parsed))
}

/// Locates dates as full `(year, week, weekday)` triples under `convention`.
///
/// # Errors
///
/// Returns [`CalendarError::Element`] for the first date at the edge of
/// the representable range.
#[tracing::instrument(skip_all, fields(n = dates.len(), convention = %convention))]
pub fn locate_batch(
    dates: &[Option<NaiveDate>],
    convention: Convention,
) -> Result<Vec<Option<EpiWeekRef>>, CalendarError> {
    let results: Vec<Result<Option<EpiWeekRef>, CalendarError>> = dates
        .par_iter()
        .enumerate()
        .map(|(i, d)| match d {
            Some(date) => locate(*date, convention).map(Some).map_err(|e| e.at(i)),
            None => Ok(None),
        })
        .collect();
    let refs = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    debug!(missing = count_missing(&refs), "located batch");
    Ok(refs)
}

/// Parses `YYYY-MM-DD` text, element-wise. Missing entries stay `None`.
///
/// # Errors
///
/// Returns [`CalendarError::Element`] wrapping
/// [`CalendarError::InvalidDate`] for the first unparseable entry.
pub fn parse_batch(dates: &[Option<&str>]) -> Result<Vec<Option<NaiveDate>>, CalendarError> {
    dates
        .iter()
        .enumerate()
        .map(|(i, s)| match s {
            Some(text) => parse_date(text).map(Some).map_err(|e| e.at(i)),
            None => Ok(None),
        })
        .collect()
}

fn count_missing<T>(values: &[Option<T>]) -> usize {
    values.iter().filter(|v| v.is_none()).count()
}
