//! Epidemiological (year, week, weekday) to calendar date.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::config::{ComposeOptions, Week53Policy};
use crate::convention::Convention;
use crate::error::CalendarError;
use crate::week::{check_week, check_weekday};

/// Returns the first day of epidemiological week 1 of `year`.
///
/// Week 1 is the first week holding at least four days of the new year,
/// so it starts between Dec 29 and Jan 4. Let `w` be the convention
/// weekday number of Jan 1: for `w <= 4` the week starts `w - 1` days
/// before Jan 1, otherwise `8 - w` days after it.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the date is not representable.
pub fn week1_start(year: i32, convention: Convention) -> Result<NaiveDate, CalendarError> {
    let (jan1, to_add) = week1_offset(year, convention)?;
    shift(jan1, to_add, year)
}

/// Returns Jan 1 of `year` and the signed day offset of week 1 from it.
fn week1_offset(year: i32, convention: Convention) -> Result<(NaiveDate, i64), CalendarError> {
    let jan1 =
        NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::YearOutOfRange { year })?;
    let w = i64::from(convention.weekday_number(jan1.weekday()));
    Ok((jan1, if w <= 4 { 1 - w } else { 8 - w }))
}

/// Returns the number of epidemiological weeks (52 or 53) in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if either year boundary is
/// not representable.
pub fn weeks_in_year(year: i32, convention: Convention) -> Result<u8, CalendarError> {
    let next = year
        .checked_add(1)
        .ok_or(CalendarError::YearOutOfRange { year })?;
    let span = week1_start(next, convention)? - week1_start(year, convention)?;
    Ok((span.num_days() / 7) as u8)
}

/// Returns the calendar date of `(year, week, weekday)` under `convention`.
///
/// Week 53 is accepted for every year. In a 52-week year it names the
/// first week of the following year; use [`compose_with`] with
/// [`Week53Policy::Strict`] to reject it instead.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidWeek`] if `week` is not in 1..=53,
/// [`CalendarError::InvalidWeekday`] if `weekday` is not in 1..=7, and
/// [`CalendarError::YearOutOfRange`] if the result is not representable.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use epiweek_calendar::{Convention, compose};
///
/// // Jan 1 2017 is a Sunday: it closes ISO week 2016-W52.
/// let date = compose(2017, 1, 1, Convention::Who).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2017, 1, 2).unwrap());
/// ```
pub fn compose(
    year: i32,
    week: i32,
    weekday: i32,
    convention: Convention,
) -> Result<NaiveDate, CalendarError> {
    let week = check_week(week)?;
    let weekday = check_weekday(weekday)?;
    compose_checked(year, week, weekday, convention)
}

/// Like [`compose`], honouring the week-53 policy in `options`.
///
/// # Errors
///
/// As [`compose`], plus [`CalendarError::WeekNotInYear`] when the policy is
/// [`Week53Policy::Strict`] and `year` has only 52 weeks.
pub fn compose_with(
    year: i32,
    week: i32,
    weekday: i32,
    options: &ComposeOptions,
) -> Result<NaiveDate, CalendarError> {
    let week = check_week(week)?;
    let weekday = check_weekday(weekday)?;
    let convention = options.convention();
    match options.week53() {
        Week53Policy::Roll => {}
        Week53Policy::Strict => {
            if week == 53 {
                let weeks_in_year = weeks_in_year(year, convention)?;
                if weeks_in_year < 53 {
                    return Err(CalendarError::WeekNotInYear {
                        year,
                        week,
                        weeks_in_year,
                    });
                }
            }
        }
    }
    compose_checked(year, week, weekday, convention)
}

fn compose_checked(
    year: i32,
    week: u8,
    weekday: u8,
    convention: Convention,
) -> Result<NaiveDate, CalendarError> {
    // Shift from Jan 1 in one step: week 1 may start before the first
    // representable day while the target date does not.
    let (jan1, to_add) = week1_offset(year, convention)?;
    let offset = 7 * (i64::from(week) - 1) + (i64::from(weekday) - 1);
    shift(jan1, to_add + offset, year)
}

fn shift(date: NaiveDate, days: i64, year: i32) -> Result<NaiveDate, CalendarError> {
    date.checked_add_signed(TimeDelta::days(days))
        .ok_or(CalendarError::YearOutOfRange { year })
}
