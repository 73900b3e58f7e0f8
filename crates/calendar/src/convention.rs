//! Week-numbering conventions.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::error::CalendarError;

/// Epidemiological week-numbering convention.
///
/// Both conventions place week 1 at the first week with at least four days
/// in the new year. They differ in which weekday opens the week, and so in
/// what weekday number 1 means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Convention {
    /// WHO / ISO-8601: weeks run Monday..Sunday, weekday 1 = Monday.
    #[default]
    Who,
    /// CDC / MMWR: weeks run Sunday..Saturday, weekday 1 = Sunday.
    Cdc,
}

impl Convention {
    /// Returns the weekday that opens a week under this convention.
    pub fn first_weekday(self) -> Weekday {
        match self {
            Convention::Who => Weekday::Mon,
            Convention::Cdc => Weekday::Sun,
        }
    }

    /// Returns the 1..=7 number of `weekday` under this convention.
    pub fn weekday_number(self, weekday: Weekday) -> u8 {
        let n = match self {
            Convention::Who => weekday.number_from_monday(),
            Convention::Cdc => weekday.number_from_sunday(),
        };
        n as u8
    }

    /// Returns the lowercase token used in configuration and on the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Convention::Who => "who",
            Convention::Cdc => "cdc",
        }
    }
}

impl FromStr for Convention {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "who" | "iso" => Ok(Convention::Who),
            "cdc" | "mmwr" => Ok(Convention::Cdc),
            _ => Err(CalendarError::InvalidConvention {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
