//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod card_actions;
mod user_directory;

#[cfg(test)]
pub use card_actions::MockCardActions;
pub use card_actions::{CardActions, InertCardActions};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{
    FixtureUserDirectory, ListedUser, UserDirectory, UserDirectoryError, UserListingRequest,
};
