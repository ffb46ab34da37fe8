//! Working-set loader.
//!
//! Fetches the listing once per call through the [`UserDirectory`] port and
//! attaches a department and rating to every listed user. The loader returns
//! the records instead of touching the session, so dropping an in-flight
//! load has no side effects.

use std::num::NonZeroU32;
use std::sync::Arc;

use staff_attributes::AttributeSource;
use tracing::info;

use super::UserRecord;
use super::ports::{UserDirectory, UserDirectoryError, UserListingRequest};

/// Number of users requested when no limit is configured.
pub const DEFAULT_USER_LIMIT: NonZeroU32 = NonZeroU32::MIN.saturating_add(19);

/// Loads and augments the working set.
pub struct UserLoader {
    directory: Arc<dyn UserDirectory>,
    attributes: Box<dyn AttributeSource>,
    limit: NonZeroU32,
}

impl UserLoader {
    /// Build a loader over `directory`, assigning attributes from `attributes`.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        attributes: Box<dyn AttributeSource>,
        limit: NonZeroU32,
    ) -> Self {
        Self {
            directory,
            attributes,
            limit,
        }
    }

    /// Number of users requested per load.
    pub fn limit(&self) -> NonZeroU32 {
        self.limit
    }

    /// Fetch the listing and augment each user, preserving directory order.
    ///
    /// # Errors
    ///
    /// Returns the directory's [`UserDirectoryError`] unchanged when the
    /// listing cannot be fetched or decoded.
    pub async fn load(&mut self) -> Result<Vec<UserRecord>, UserDirectoryError> {
        let request = UserListingRequest {
            limit: self.limit.get(),
        };
        info!(limit = request.limit, "loading users");
        let listed = self.directory.list_users(&request).await?;

        let users: Vec<UserRecord> = listed
            .into_iter()
            .map(|user| UserRecord::new(user, self.attributes.assign()))
            .collect();
        info!(count = users.len(), "users loaded");
        Ok(users)
    }
}
