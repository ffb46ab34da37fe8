//! Department and rating attributes for staff records.
//!
//! Staff records fetched from a user directory carry no organisational data,
//! so the dashboard decorates each one with a department and a performance
//! rating. This crate owns those two value types and the random sources that
//! assign them. It is independent of dashboard domain types.
//!
//! # Overview
//!
//! - [`Department`]: the closed set of six departments
//! - [`Rating`]: a score in `1..=5`
//! - [`AttributeSource`]: the injectable source of assignments, with a
//!   ChaCha-backed [`RandomAttributes`] and a scripted [`FixtureAttributes`]
//!
//! # Example
//!
//! ```
//! use staff_attributes::{AttributeSource, Department, RandomAttributes, Rating};
//!
//! let mut source = RandomAttributes::seeded(7);
//! let attributes = source.assign();
//!
//! assert!(Department::ALL.contains(&attributes.department));
//! assert!((Rating::MIN..=Rating::MAX).contains(&attributes.rating.get()));
//! ```

mod department;
mod error;
mod rating;
mod source;

pub use department::Department;
pub use error::AttributeError;
pub use rating::Rating;
pub use source::{AttributeSource, FixtureAttributes, RandomAttributes, StaffAttributes};
