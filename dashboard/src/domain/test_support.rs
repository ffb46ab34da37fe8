//! Record builders shared by domain unit tests.

use staff_attributes::{Department, Rating, StaffAttributes};
use url::Url;

use super::UserRecord;
use super::ports::ListedUser;

/// Build a listed user whose email and image derive from the first name.
pub(crate) fn listed(id: u64, first_name: &str, last_name: &str) -> ListedUser {
    let handle = first_name.to_lowercase();
    ListedUser {
        id,
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: format!("{handle}@example.test"),
        age: 30,
        image: Url::parse(&format!("https://example.test/{handle}.png")).expect("valid url"),
    }
}

/// Build an augmented record.
pub(crate) fn record(
    id: u64,
    first_name: &str,
    last_name: &str,
    department: Department,
    rating: u8,
) -> UserRecord {
    UserRecord::new(
        listed(id, first_name, last_name),
        StaffAttributes {
            department,
            rating: rating_of(rating),
        },
    )
}

/// Shorthand for a valid rating.
pub(crate) fn rating_of(value: u8) -> Rating {
    Rating::new(value).expect("valid rating")
}

/// The two-record working set used throughout the filter examples.
pub(crate) fn ann_and_bob() -> Vec<UserRecord> {
    vec![
        record(1, "Ann", "Smith", Department::Hr, 3),
        record(2, "Bob", "Jones", Department::Sales, 5),
    ]
}
