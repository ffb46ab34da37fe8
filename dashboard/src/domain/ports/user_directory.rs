//! Driven port for listing users from a remote directory.
//!
//! The domain owns the request shape and the listing contract so the loader
//! stays adapter-agnostic. Listed users carry no department or rating; those
//! are attached by the loader.

use async_trait::async_trait;
use url::Url;

use super::define_port_error;

/// Domain-owned listing request passed to the directory adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserListingRequest {
    /// Maximum number of users to return.
    pub limit: u32,
}

/// One user as returned by the directory, before augmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedUser {
    /// Directory identifier.
    pub id: u64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Age in years.
    pub age: u32,
    /// Avatar image location.
    pub image: Url,
}

define_port_error! {
    /// Errors surfaced while listing users.
    pub enum UserDirectoryError {
        /// Network transport failed before a response arrived.
        Transport => "user directory transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout => "user directory timeout: {message}",
        /// The directory answered with a non-success status.
        Status { status: u16 } =>
            "user directory returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode => "user directory response decode failed: {message}",
    }
}

/// Port for fetching the user listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch up to `request.limit` users, in directory order.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use dashboard::domain::ports::{
    ///     FixtureUserDirectory, UserDirectory, UserListingRequest,
    /// };
    ///
    /// let directory = FixtureUserDirectory::default();
    /// let users = directory
    ///     .list_users(&UserListingRequest { limit: 20 })
    ///     .await?;
    /// assert!(users.is_empty());
    /// # Ok::<(), dashboard::domain::ports::UserDirectoryError>(())
    /// ```
    async fn list_users(
        &self,
        request: &UserListingRequest,
    ) -> Result<Vec<ListedUser>, UserDirectoryError>;
}

/// Fixture implementation returning a fixed listing, truncated to the limit.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserDirectory {
    users: Vec<ListedUser>,
}

impl FixtureUserDirectory {
    /// Serve `users` on every call.
    pub fn new(users: Vec<ListedUser>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn list_users(
        &self,
        request: &UserListingRequest,
    ) -> Result<Vec<ListedUser>, UserDirectoryError> {
        let limit = usize::try_from(request.limit).unwrap_or(usize::MAX);
        Ok(self.users.iter().take(limit).cloned().collect())
    }
}
