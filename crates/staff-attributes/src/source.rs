//! Sources of department and rating assignments.
//!
//! Assignment is isolated behind [`AttributeSource`] so callers can swap the
//! entropy-seeded generator for a fixed seed or a scripted fixture when they
//! need reproducible output.

use std::iter::Cycle;
use std::vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::department::Department;
use crate::rating::Rating;

/// Attributes attached to one staff record at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffAttributes {
    /// Assigned department.
    pub department: Department,
    /// Assigned performance rating.
    pub rating: Rating,
}

/// Supplies the attributes for each record as it is loaded.
pub trait AttributeSource: Send {
    /// Produce the attributes for the next record.
    fn assign(&mut self) -> StaffAttributes;
}

/// Uniform random assignment backed by a ChaCha RNG.
///
/// Departments are drawn with replacement from [`Department::ALL`]; ratings
/// are drawn uniformly from `1..=5`. A fixed seed reproduces the same
/// sequence of assignments.
///
/// # Example
///
/// ```
/// use staff_attributes::{AttributeSource, RandomAttributes};
///
/// let first: Vec<_> = {
///     let mut source = RandomAttributes::seeded(42);
///     (0..5).map(|_| source.assign()).collect()
/// };
/// let second: Vec<_> = {
///     let mut source = RandomAttributes::seeded(42);
///     (0..5).map(|_| source.assign()).collect()
/// };
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct RandomAttributes {
    rng: ChaCha8Rng,
}

impl RandomAttributes {
    /// Seed from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Seed deterministically.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Build from an explicit seed when present, otherwise from entropy.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Draw one department uniformly.
    pub fn department(&mut self) -> Department {
        match self.rng.random_range(0..6_u8) {
            0 => Department::Hr,
            1 => Department::Engineering,
            2 => Department::Sales,
            3 => Department::Marketing,
            4 => Department::Finance,
            _ => Department::Support,
        }
    }

    /// Draw one rating uniformly.
    pub fn rating(&mut self) -> Rating {
        Rating::new_unchecked(self.rng.random_range(Rating::MIN..=Rating::MAX))
    }
}

impl AttributeSource for RandomAttributes {
    fn assign(&mut self) -> StaffAttributes {
        let department = self.department();
        let rating = self.rating();
        StaffAttributes { department, rating }
    }
}

/// Scripted assignment that replays a fixed list, cycling when exhausted.
///
/// An empty script always yields HR with the lowest rating.
#[derive(Debug, Clone)]
pub struct FixtureAttributes {
    script: Cycle<vec::IntoIter<StaffAttributes>>,
}

impl FixtureAttributes {
    /// Replay `script` in order.
    #[must_use]
    pub fn new(script: Vec<StaffAttributes>) -> Self {
        Self {
            script: script.into_iter().cycle(),
        }
    }

    /// Always assign the same department and rating.
    #[must_use]
    pub fn constant(department: Department, rating: Rating) -> Self {
        Self::new(vec![StaffAttributes { department, rating }])
    }
}

impl AttributeSource for FixtureAttributes {
    fn assign(&mut self) -> StaffAttributes {
        self.script.next().unwrap_or(StaffAttributes {
            department: Department::Hr,
            rating: Rating::new_unchecked(Rating::MIN),
        })
    }
}
