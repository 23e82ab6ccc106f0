//! Error types for chart construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from [`compute_chart`](crate::compute_chart).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// A birth-record field is outside its accepted range.
    InvalidInput {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// An internal placement invariant failed. Indicates a defect, not bad input.
    InternalInvariantViolation(&'static str),
}

impl ChartError {
    pub(crate) fn invalid(field: &'static str, value: impl Into<i64>, min: i64, max: i64) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
            min,
            max,
        }
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput {
                field,
                value,
                min,
                max,
            } => write!(f, "invalid {field}: {value} (expected {min}..={max})"),
            Self::InternalInvariantViolation(msg) => {
                write!(f, "internal invariant violated: {msg}")
            }
        }
    }
}

impl Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message() {
        let e = ChartError::invalid("lunar_month", 13u8, 1, 12);
        assert_eq!(e.to_string(), "invalid lunar_month: 13 (expected 1..=12)");
    }

    #[test]
    fn invariant_message() {
        let e = ChartError::InternalInvariantViolation("star placed twice");
        assert_eq!(e.to_string(), "internal invariant violated: star placed twice");
    }
}
