//! Performance rating in the range `1..=5`.
//!
//! # Validation Rules
//!
//! - Minimum: [`Rating::MIN`] (1)
//! - Maximum: [`Rating::MAX`] (5)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AttributeError;

/// Performance rating of a staff record.
///
/// # Example
///
/// ```
/// use staff_attributes::Rating;
///
/// let rating = Rating::new(4).expect("in range");
/// assert_eq!(rating.get(), 4);
/// assert!(Rating::new(0).is_err());
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating.
    pub const MIN: u8 = 1;
    /// Highest rating.
    pub const MAX: u8 = 5;

    /// Validate and construct a rating.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::RatingOutOfRange`] when `value` is outside
    /// `MIN..=MAX`.
    pub fn new(value: u8) -> Result<Self, AttributeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AttributeError::RatingOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: i64::from(value),
            })
        }
    }

    /// Every rating from lowest to highest.
    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Numeric value of the rating.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Construct without validation; callers guarantee the range.
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = AttributeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Rating {
    type Err = AttributeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed: i64 = value
            .trim()
            .parse()
            .map_err(|_| AttributeError::InvalidRating {
                value: value.to_owned(),
            })?;
        let narrowed = u8::try_from(parsed).map_err(|_| AttributeError::RatingOutOfRange {
            min: Self::MIN,
            max: Self::MAX,
            actual: parsed,
        })?;
        Self::new(narrowed)
    }
}
