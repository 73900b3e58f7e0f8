//! Options for composing epidemiological weeks into dates.

use std::fmt;

use crate::convention::Convention;

/// How week 53 is treated in years that only have 52 weeks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Week53Policy {
    /// Compute the date arithmetically. Week 53 of a short year lands on
    /// week 1 of the following year.
    #[default]
    Roll,
    /// Reject with [`CalendarError::WeekNotInYear`](crate::CalendarError::WeekNotInYear).
    Strict,
}

/// How differently sized batch arguments are aligned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BroadcastPolicy {
    /// Shorter sequences repeat cyclically up to the longest length. Every
    /// sequence length must divide the longest one.
    #[default]
    Recycle,
    /// All sequence arguments must have the same length.
    Exact,
}

impl fmt::Display for Week53Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Week53Policy::Roll => "roll",
            Week53Policy::Strict => "strict",
        })
    }
}

impl fmt::Display for BroadcastPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BroadcastPolicy::Recycle => "recycle",
            BroadcastPolicy::Exact => "exact",
        })
    }
}

/// Configuration for a compose call.
///
/// # Example
///
/// ```
/// use epiweek_calendar::{BroadcastPolicy, ComposeOptions, Convention, Week53Policy};
///
/// let options = ComposeOptions::new(Convention::Cdc)
///     .with_week53(Week53Policy::Strict)
///     .with_broadcast(BroadcastPolicy::Exact);
///
/// assert_eq!(options.convention(), Convention::Cdc);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    convention: Convention,
    week53: Week53Policy,
    broadcast: BroadcastPolicy,
}

impl ComposeOptions {
    /// Creates options for the given convention.
    ///
    /// Defaults: `week53 = Roll`, `broadcast = Recycle`.
    pub fn new(convention: Convention) -> Self {
        Self {
            convention,
            week53: Week53Policy::Roll,
            broadcast: BroadcastPolicy::Recycle,
        }
    }

    /// Sets the week-53 policy.
    pub fn with_week53(mut self, week53: Week53Policy) -> Self {
        self.week53 = week53;
        self
    }

    /// Sets the broadcast policy.
    pub fn with_broadcast(mut self, broadcast: BroadcastPolicy) -> Self {
        self.broadcast = broadcast;
        self
    }

    /// Returns the convention.
    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// Returns the week-53 policy.
    pub fn week53(&self) -> Week53Policy {
        self.week53
    }

    /// Returns the broadcast policy.
    pub fn broadcast(&self) -> BroadcastPolicy {
        self.broadcast
    }

}
