//! The fixed set of departments a staff record can belong to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AttributeError;

/// Organisational department assigned to a staff record.
///
/// Serialises as its display label (`"HR"`, `"Engineering"`, ...).
///
/// # Example
///
/// ```
/// use staff_attributes::Department;
///
/// let parsed: Department = "engineering".parse().expect("known department");
/// assert_eq!(parsed, Department::Engineering);
/// assert_eq!(parsed.label(), "Engineering");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    /// Human resources.
    #[serde(rename = "HR")]
    Hr,
    /// Engineering.
    Engineering,
    /// Sales.
    Sales,
    /// Marketing.
    Marketing,
    /// Finance.
    Finance,
    /// Customer support.
    Support,
}

impl Department {
    /// Every department, in display order.
    pub const ALL: [Self; 6] = [
        Self::Hr,
        Self::Engineering,
        Self::Sales,
        Self::Marketing,
        Self::Finance,
        Self::Support,
    ];

    /// Human-readable label, also used for search matching.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::Engineering => "Engineering",
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Finance => "Finance",
            Self::Support => "Support",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = AttributeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|department| department.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AttributeError::UnknownDepartment {
                value: value.to_owned(),
            })
    }
}
