//! Staff record model.

use staff_attributes::{Department, Rating, StaffAttributes};
use url::Url;

use super::ports::ListedUser;

/// A listed user augmented with department and rating.
///
/// ## Invariants
/// - `department` and `rating` are fixed when the record is built and never
///   change afterwards; the type exposes no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    id: u64,
    first_name: String,
    last_name: String,
    email: String,
    age: u32,
    department: Department,
    rating: Rating,
    image: Url,
}

impl UserRecord {
    /// Attach load-time attributes to a listed user.
    pub fn new(listed: ListedUser, attributes: StaffAttributes) -> Self {
        let ListedUser {
            id,
            first_name,
            last_name,
            email,
            age,
            image,
        } = listed;
        Self {
            id,
            first_name,
            last_name,
            email,
            age,
            department: attributes.department,
            rating: attributes.rating,
            image,
        }
    }

    /// Directory identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Given and family name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Age in years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Department assigned at load time.
    pub fn department(&self) -> Department {
        self.department
    }

    /// Rating assigned at load time.
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Avatar image location.
    pub fn image(&self) -> &Url {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed() -> ListedUser {
        ListedUser {
            id: 7,
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.test".to_owned(),
            age: 36,
            image: Url::parse("https://example.test/ada.png").expect("valid url"),
        }
    }

    #[test]
    fn new_keeps_listing_fields_and_attributes() {
        let attributes = StaffAttributes {
            department: Department::Engineering,
            rating: Rating::new(5).expect("valid rating"),
        };
        let record = UserRecord::new(listed(), attributes);

        assert_eq!(record.id(), 7);
        assert_eq!(record.full_name(), "Ada Lovelace");
        assert_eq!(record.email(), "ada@example.test");
        assert_eq!(record.age(), 36);
        assert_eq!(record.department(), Department::Engineering);
        assert_eq!(record.rating().get(), 5);
        assert_eq!(record.image().as_str(), "https://example.test/ada.png");
    }
}
