//! Epidemiological week values.

use std::fmt;

use chrono::NaiveDate;

use crate::compose::compose;
use crate::convention::Convention;
use crate::error::CalendarError;

/// An epidemiological (year, week) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpiWeek {
    year: i32,
    week: u8,
}

impl EpiWeek {
    /// Creates a new `EpiWeek`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeek`] if `week` is not in 1..=53.
    pub fn new(year: i32, week: i32) -> Result<Self, CalendarError> {
        Ok(Self {
            year,
            week: check_week(week)?,
        })
    }

    /// Builds from components that are already known to be in range.
    pub(crate) fn from_parts(year: i32, week: u8) -> Self {
        debug_assert!((1..=53).contains(&week));
        Self { year, week }
    }

    /// Returns the epidemiological year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the week number (1..=53).
    pub fn week(self) -> u8 {
        self.week
    }

    /// Attaches a weekday, producing a full [`EpiWeekRef`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`] if `weekday` is not in 1..=7.
    pub fn with_weekday(self, weekday: i32) -> Result<EpiWeekRef, CalendarError> {
        Ok(EpiWeekRef {
            year: self.year,
            week: self.week,
            weekday: check_weekday(weekday)?,
        })
    }
}

impl fmt::Display for EpiWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

/// An epidemiological (year, week, weekday) triple.
///
/// What weekday 1 means depends on the [`Convention`] the triple is read
/// under: Monday for WHO, Sunday for CDC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpiWeekRef {
    year: i32,
    week: u8,
    weekday: u8,
}

impl EpiWeekRef {
    /// Creates a new `EpiWeekRef`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeek`] or
    /// [`CalendarError::InvalidWeekday`] for out-of-range components.
    pub fn new(year: i32, week: i32, weekday: i32) -> Result<Self, CalendarError> {
        EpiWeek::new(year, week)?.with_weekday(weekday)
    }

    pub(crate) fn from_parts(year: i32, week: u8, weekday: u8) -> Self {
        debug_assert!((1..=53).contains(&week) && (1..=7).contains(&weekday));
        Self {
            year,
            week,
            weekday,
        }
    }

    /// Returns the epidemiological year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the week number (1..=53).
    pub fn week(self) -> u8 {
        self.week
    }

    /// Returns the weekday number (1..=7).
    pub fn weekday(self) -> u8 {
        self.weekday
    }

    /// Drops the weekday.
    pub fn epi_week(self) -> EpiWeek {
        EpiWeek::from_parts(self.year, self.week)
    }

    /// Returns the calendar date this triple names under `convention`.
    ///
    /// Week 53 of a 52-week year rolls forward; see
    /// [`compose_with`](crate::compose_with) for the strict variant.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the date is not representable.
    pub fn to_date(self, convention: Convention) -> Result<NaiveDate, CalendarError> {
        compose(
            self.year,
            i32::from(self.week),
            i32::from(self.weekday),
            convention,
        )
    }
}

impl fmt::Display for EpiWeekRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.epi_week(), self.weekday)
    }
}

pub(crate) fn check_week(week: i32) -> Result<u8, CalendarError> {
    if !(1..=53).contains(&week) {
        return Err(CalendarError::InvalidWeek { week });
    }
    Ok(week as u8)
}

pub(crate) fn check_weekday(weekday: i32) -> Result<u8, CalendarError> {
    if !(1..=7).contains(&weekday) {
        return Err(CalendarError::InvalidWeekday { weekday });
    }
    Ok(weekday as u8)
}
