//! Scalar-or-sequence batch arguments and their alignment.

use crate::config::BroadcastPolicy;
use crate::error::CalendarError;

/// A batch argument: one value for every element, or one value per element.
///
/// `None` marks a missing value. Missing values propagate to a missing
/// output element rather than failing the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column<T> {
    /// A single value broadcast to every element.
    Scalar(Option<T>),
    /// One value per element.
    Sequence(Vec<Option<T>>),
}

impl<T: Copy> Column<T> {
    /// A present scalar.
    pub fn scalar(value: T) -> Self {
        Column::Scalar(Some(value))
    }

    /// A missing scalar.
    pub fn missing() -> Self {
        Column::Scalar(None)
    }

    /// A sequence with every value present.
    pub fn sequence(values: impl IntoIterator<Item = T>) -> Self {
        Column::Sequence(values.into_iter().map(Some).collect())
    }

    /// A sequence that may contain missing values.
    pub fn with_missing(values: impl IntoIterator<Item = Option<T>>) -> Self {
        Column::Sequence(values.into_iter().collect())
    }

    /// Returns the sequence length, or `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            Column::Scalar(_) => None,
            Column::Sequence(values) => Some(values.len()),
        }
    }

    /// Returns `true` for an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Returns the value at aligned position `index`, cycling sequences.
    ///
    /// Callers must only pass indices below the length returned by
    /// [`broadcast_len`]; an empty sequence has no elements to cycle.
    pub(crate) fn get(&self, index: usize) -> Option<T> {
        match self {
            Column::Scalar(value) => *value,
            Column::Sequence(values) => values[index % values.len()],
        }
    }
}

impl<T: Copy> From<Vec<T>> for Column<T> {
    fn from(values: Vec<T>) -> Self {
        Column::sequence(values)
    }
}

/// Computes the aligned output length for named argument lengths.
///
/// Each entry is `(name, len)` with `len == None` for a scalar. All
/// scalars give length 1. Under [`BroadcastPolicy::Recycle`] an empty
/// sequence gives length 0, otherwise the longest length, which every
/// other sequence length must divide. Under [`BroadcastPolicy::Exact`]
/// every sequence must have the same length.
///
/// # Errors
///
/// Returns [`CalendarError::LengthMismatch`] naming the first argument
/// that cannot be aligned.
pub fn broadcast_len(
    policy: BroadcastPolicy,
    lengths: &[(&'static str, Option<usize>)],
) -> Result<usize, CalendarError> {
    let sequences: Vec<(&'static str, usize)> = lengths
        .iter()
        .filter_map(|&(field, len)| len.map(|n| (field, n)))
        .collect();
    let Some(longest) = sequences.iter().map(|&(_, n)| n).max() else {
        return Ok(1);
    };

    match policy {
        BroadcastPolicy::Exact => {
            if let Some(&(field, got)) = sequences.iter().find(|&&(_, n)| n != longest) {
                return Err(CalendarError::LengthMismatch {
                    field,
                    expected: longest,
                    got,
                });
            }
            Ok(longest)
        }
        BroadcastPolicy::Recycle => {
            if sequences.iter().any(|&(_, n)| n == 0) {
                return Ok(0);
            }
            if let Some(&(field, got)) = sequences.iter().find(|&&(_, n)| longest % n != 0) {
                return Err(CalendarError::LengthMismatch {
                    field,
                    expected: longest,
                    got,
                });
            }
            Ok(longest)
        }
    }
}
