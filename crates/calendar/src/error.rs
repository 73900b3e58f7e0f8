//! Error types for the epiweek-calendar crate.

/// Error type for all fallible operations in the epiweek-calendar crate.
///
/// Every variant is an invalid-input condition raised at the call that
/// receives the bad value. A missing element in a batch is never an error;
/// it propagates as `None`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a week number is outside the valid range 1..=53.
    #[error("invalid week: {week} (must be 1..=53)")]
    InvalidWeek {
        /// The invalid week number that was provided.
        week: i32,
    },

    /// Returned when a weekday number is outside the valid range 1..=7.
    #[error("invalid weekday: {weekday} (must be 1..=7)")]
    InvalidWeekday {
        /// The invalid weekday number that was provided.
        weekday: i32,
    },

    /// Returned when a convention token is neither WHO nor CDC.
    #[error("invalid convention: {token:?} (expected \"who\" or \"cdc\")")]
    InvalidConvention {
        /// The unrecognised token.
        token: String,
    },

    /// Returned when date text cannot be parsed as `YYYY-MM-DD`.
    #[error("invalid date: {input:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when a year falls outside the representable date range.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The year that could not be represented.
        year: i32,
    },

    /// Returned under the strict week-53 policy when the requested week
    /// does not exist in the requested year.
    #[error("week {week} does not exist in {year} (year has {weeks_in_year} weeks)")]
    WeekNotInYear {
        /// The requested epidemiological year.
        year: i32,
        /// The requested week.
        week: u8,
        /// Number of weeks the year actually has.
        weeks_in_year: u8,
    },

    /// Returned when batch argument lengths cannot be aligned.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched argument.
        field: &'static str,
        /// Length the argument must have (or divide, when recycling).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// A per-element failure inside a batch, tagged with its position.
    #[error("element {index}: {source}")]
    Element {
        /// Zero-based position in the aligned batch.
        index: usize,
        /// The underlying failure.
        source: Box<CalendarError>,
    },
}

impl CalendarError {
    /// Wraps this error with the batch position it occurred at.
    pub(crate) fn at(self, index: usize) -> Self {
        Self::Element {
            index,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_week() {
        let err = CalendarError::InvalidWeek { week: 54 };
        assert_eq!(err.to_string(), "invalid week: 54 (must be 1..=53)");
    }

    #[test]
    fn error_invalid_weekday() {
        let err = CalendarError::InvalidWeekday { weekday: 0 };
        assert_eq!(err.to_string(), "invalid weekday: 0 (must be 1..=7)");
    }

    #[test]
    fn error_invalid_convention() {
        let err = CalendarError::InvalidConvention {
            token: "paho".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid convention: \"paho\" (expected \"who\" or \"cdc\")"
        );
    }

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            input: "2017-13-01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date: \"2017-13-01\" (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn error_week_not_in_year() {
        let err = CalendarError::WeekNotInYear {
            year: 2017,
            week: 53,
            weeks_in_year: 52,
        };
        assert_eq!(
            err.to_string(),
            "week 53 does not exist in 2017 (year has 52 weeks)"
        );
    }

    #[test]
    fn error_length_mismatch() {
        let err = CalendarError::LengthMismatch {
            field: "week",
            expected: 6,
            got: 4,
        };
        assert_eq!(err.to_string(), "week: expected 6 elements, got 4");
    }

    #[test]
    fn error_element_carries_position() {
        let err = CalendarError::InvalidWeekday { weekday: 9 }.at(3);
        assert_eq!(
            err.to_string(),
            "element 3: invalid weekday: 9 (must be 1..=7)"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidWeek { week: 0 };
        let b = CalendarError::InvalidWeek { week: 0 };
        assert_eq!(a, b);
        assert_ne!(a, CalendarError::InvalidWeek { week: 54 });
    }
}
