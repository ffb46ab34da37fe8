//! Error types for the staff-attributes crate.
//!
//! Parsing and construction failures are reported through one semantic enum
//! built with `thiserror`.

use thiserror::Error;

/// Errors raised when a department or rating cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// The text does not name one of the fixed departments.
    #[error("unknown department '{value}'")]
    UnknownDepartment {
        /// The rejected input.
        value: String,
    },

    /// The rating lies outside the accepted range.
    #[error("rating must be between {min} and {max}, found {actual}")]
    RatingOutOfRange {
        /// Smallest accepted rating.
        min: u8,
        /// Largest accepted rating.
        max: u8,
        /// The rejected value.
        actual: i64,
    },

    /// The rating text is not an integer.
    #[error("invalid rating '{value}'")]
    InvalidRating {
        /// The rejected input.
        value: String,
    },
}
