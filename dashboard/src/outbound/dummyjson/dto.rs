//! DTOs for decoding the users listing.
//!
//! The adapter decodes into these transport DTOs first, then maps them into
//! `ListedUser` records in one pass. Fields the dashboard does not use are
//! ignored.

use serde::Deserialize;
use url::Url;

use crate::domain::ports::ListedUser;

#[derive(Debug, Deserialize)]
pub(super) struct UserListingDto {
    pub(super) users: Vec<UserDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserDto {
    pub(super) id: u64,
    pub(super) first_name: String,
    pub(super) last_name: String,
    pub(super) email: String,
    pub(super) age: u32,
    pub(super) image: String,
}

impl UserListingDto {
    pub(super) fn into_listed_users(self) -> Result<Vec<ListedUser>, String> {
        self.users.into_iter().map(UserDto::into_listed_user).collect()
    }
}

impl UserDto {
    fn into_listed_user(self) -> Result<ListedUser, String> {
        let image = Url::parse(&self.image)
            .map_err(|error| format!("user {} has invalid image url: {error}", self.id))?;
        Ok(ListedUser {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            age: self.age,
            image,
        })
    }
}
