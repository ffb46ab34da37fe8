//! Filter and search engine over the working set.
//!
//! A record is visible when it satisfies all three criteria:
//!
//! - **search**: the query, compared case-insensitively, is a substring of
//!   the first name, last name, email, or department label (an empty query
//!   matches everything);
//! - **department**: no department is selected, or the record's department
//!   is selected;
//! - **rating**: no rating is selected, or the record's rating is selected.
//!
//! Filtering is a full rescan that preserves the working set's order.

use std::collections::BTreeSet;

use staff_attributes::{Department, Rating};

use super::UserRecord;

/// Current search text and selections driving the visible subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    departments: BTreeSet<Department>,
    ratings: BTreeSet<Rating>,
}

impl FilterState {
    /// An empty filter that matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search text, exactly as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Selected departments.
    pub fn departments(&self) -> &BTreeSet<Department> {
        &self.departments
    }

    /// Selected ratings.
    pub fn ratings(&self) -> &BTreeSet<Rating> {
        &self.ratings
    }

    /// Whether `department` is currently selected.
    pub fn is_department_selected(&self, department: Department) -> bool {
        self.departments.contains(&department)
    }

    /// Whether `rating` is currently selected.
    pub fn is_rating_selected(&self, rating: Rating) -> bool {
        self.ratings.contains(&rating)
    }

    /// Add `department` if absent, remove it if present.
    ///
    /// Returns whether the department is selected afterwards.
    ///
    /// ```
    /// use dashboard::domain::FilterState;
    /// use staff_attributes::Department;
    ///
    /// let mut filters = FilterState::new();
    /// assert!(filters.toggle_department(Department::Sales));
    /// assert!(!filters.toggle_department(Department::Sales));
    /// assert_eq!(filters, FilterState::new());
    /// ```
    pub fn toggle_department(&mut self, department: Department) -> bool {
        toggle(&mut self.departments, department)
    }

    /// Add `rating` if absent, remove it if present.
    ///
    /// Returns whether the rating is selected afterwards.
    pub fn toggle_rating(&mut self, rating: Rating) -> bool {
        toggle(&mut self.ratings, rating)
    }

    /// Select `department` regardless of its current state.
    pub fn select_department(&mut self, department: Department) {
        self.departments.insert(department);
    }

    /// Select `rating` regardless of its current state.
    pub fn select_rating(&mut self, rating: Rating) {
        self.ratings.insert(rating);
    }

    /// Reset search text and both selections.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.departments.is_empty() && self.ratings.is_empty()
    }

    /// Whether `user` satisfies every active criterion.
    pub fn matches(&self, user: &UserRecord) -> bool {
        self.matches_with_needle(user, &self.query.to_lowercase())
    }

    fn matches_with_needle(&self, user: &UserRecord, needle: &str) -> bool {
        matches_search(user, needle)
            && (self.departments.is_empty() || self.departments.contains(&user.department()))
            && (self.ratings.is_empty() || self.ratings.contains(&user.rating()))
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

fn matches_search(user: &UserRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        user.first_name(),
        user.last_name(),
        user.email(),
        user.department().label(),
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Apply `filters` to `users`, keeping the original relative order.
pub fn filter_users<'a>(users: &'a [UserRecord], filters: &FilterState) -> Vec<&'a UserRecord> {
    let needle = filters.query.to_lowercase();
    users
        .iter()
        .filter(|user| filters.matches_with_needle(user, &needle))
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
