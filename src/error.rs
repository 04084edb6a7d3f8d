//! Error type shared by every fallible operation in the crate.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AgeError {
    /// A value that should have been a date (or locale, or format) could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A negative age reached a lookup table.
    #[error("{what} must not be negative (got {value})")]
    OutOfDomain { what: &'static str, value: i64 },

    /// The as-of instant lies before the birth instant.
    #[error("reference {reference} is before birth {birth}")]
    ReferenceBeforeBirth {
        birth: NaiveDateTime,
        reference: NaiveDateTime,
    },
}

impl AgeError {
    pub(crate) fn check_non_negative(what: &'static str, value: i64) -> Result<(), AgeError> {
        if value < 0 {
            Err(AgeError::OutOfDomain { what, value })
        } else {
            Ok(())
        }
    }
}
