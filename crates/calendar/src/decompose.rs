//! Calendar date to epidemiological week.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::convention::Convention;
use crate::error::CalendarError;
use crate::week::{EpiWeek, EpiWeekRef};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the WHO/ISO-8601 epidemiological week of `date`.
///
/// The epidemiological year can differ from the calendar year near
/// January 1: Dec 29..31 may fall in week 1 of the next year and
/// Jan 1..3 in week 52 or 53 of the previous one.
pub fn decompose(date: NaiveDate) -> EpiWeek {
    let iso = date.iso_week();
    EpiWeek::from_parts(iso.year(), iso.week() as u8)
}

/// Parses `YYYY-MM-DD` text into a date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] for empty or malformed input.
pub fn parse_date(input: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = || CalendarError::InvalidDate {
        input: input.to_string(),
    };
    let text = input.trim();
    // chrono's `%Y` also takes short and signed years.
    if !has_date_shape(text) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}

fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses `YYYY-MM-DD` text and returns its WHO/ISO epidemiological week.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] for empty or malformed input.
pub fn decompose_str(input: &str) -> Result<EpiWeek, CalendarError> {
    parse_date(input).map(decompose)
}

/// Returns the full (year, week, weekday) triple of `date` under `convention`.
///
/// This is the inverse of [`compose`](crate::compose): for every
/// representable date `d`, `locate(d, c)?.to_date(c)? == d`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] at the edges of the
/// representable date range.
pub fn locate(date: NaiveDate, convention: Convention) -> Result<EpiWeekRef, CalendarError> {
    let weekday = convention.weekday_number(date.weekday());
    // A week belongs to the year holding its fourth day.
    let offset = 4 - i64::from(weekday);
    let fourth = date
        .checked_add_signed(TimeDelta::days(offset))
        .ok_or(CalendarError::YearOutOfRange {
            year: date.year() + offset.signum() as i32,
        })?;
    let week = (fourth.ordinal0() / 7 + 1) as u8;
    Ok(EpiWeekRef::from_parts(fourth.year(), week, weekday))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn wk(year: i32, week: i32) -> EpiWeek {
        EpiWeek::new(year, week).unwrap()
    }

    #[test]
    fn decompose_year_boundaries() {
        assert_eq!(decompose(ymd(2016, 12, 31)), wk(2016, 52));
        assert_eq!(decompose(ymd(2017, 1, 1)), wk(2016, 52));
        assert_eq!(decompose(ymd(2017, 1, 2)), wk(2017, 1));
        assert_eq!(decompose(ymd(2019, 12, 30)), wk(2020, 1));
        assert_eq!(decompose(ymd(2020, 12, 31)), wk(2020, 53));
        assert_eq!(decompose(ymd(2021, 1, 3)), wk(2020, 53));
    }

    #[test]
    fn decompose_mid_year() {
        assert_eq!(decompose(ymd(2018, 5, 16)), wk(2018, 20));
    }

    #[test]
    fn decompose_str_valid() {
        assert_eq!(decompose_str("2016-12-31").unwrap(), wk(2016, 52));
        assert_eq!(decompose_str(" 2021-01-04 ").unwrap(), wk(2021, 1));
    }

    #[test]
    fn decompose_str_invalid() {
        for input in [
            "",
            "NA",
            "2017-02-30",
            "31/12/2016",
            "2017-13-01",
            "17-01-02",
            "2017-1-2",
            "+2017-01-02",
            "2017-01-02T00",
        ] {
            assert_eq!(
                decompose_str(input).unwrap_err(),
                CalendarError::InvalidDate {
                    input: input.to_string()
                },
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_leap_day() {
        assert_eq!(parse_date("2020-02-29").unwrap(), ymd(2020, 2, 29));
        assert!(parse_date("2019-02-29").is_err());
    }

    #[test]
    fn locate_who_matches_decompose() {
        let mut date = ymd(2014, 12, 1);
        while date <= ymd(2021, 2, 1) {
            let r = locate(date, Convention::Who).unwrap();
            assert_eq!(r.epi_week(), decompose(date), "{date}");
            assert_eq!(
                u32::from(r.weekday()),
                date.weekday().number_from_monday(),
                "{date}"
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn locate_cdc_boundaries() {
        let cdc = Convention::Cdc;
        let r = |y, w, d| EpiWeekRef::new(y, w, d).unwrap();
        assert_eq!(locate(ymd(2017, 1, 1), cdc).unwrap(), r(2017, 1, 1));
        assert_eq!(locate(ymd(2016, 12, 31), cdc).unwrap(), r(2016, 52, 7));
        assert_eq!(locate(ymd(2014, 12, 31), cdc).unwrap(), r(2014, 53, 4));
        assert_eq!(locate(ymd(2015, 1, 3), cdc).unwrap(), r(2014, 53, 7));
        assert_eq!(locate(ymd(2019, 12, 29), cdc).unwrap(), r(2020, 1, 1));
    }

    #[test]
    fn locate_mid_year_at_range_edges() {
        for year in [NaiveDate::MIN.year(), NaiveDate::MAX.year()] {
            let date = ymd(year, 6, 1);
            for c in [Convention::Who, Convention::Cdc] {
                let r = locate(date, c).unwrap();
                assert_eq!(r.year(), year, "{date} {c}");
                assert_eq!(r.to_date(c).unwrap(), date, "{date} {c}");
            }
            assert_eq!(locate(date, Convention::Who).unwrap().epi_week(), decompose(date));
        }
    }

    #[test]
    fn locate_fails_only_past_the_range() {
        // The last day either round-trips or names the year it spills into.
        let last = NaiveDate::MAX;
        for c in [Convention::Who, Convention::Cdc] {
            match locate(last, c) {
                Ok(r) => assert_eq!(r.to_date(c).unwrap(), last),
                Err(e) => assert_eq!(e, CalendarError::YearOutOfRange { year: last.year() + 1 }),
            }
        }
    }
}
