//! Domain model for the performance dashboard.
//!
//! Purpose: hold the augmented working set, the filter engine, and the
//! session controller that ties them to the load lifecycle. Nothing here
//! performs I/O; adapters reach the outside world through [`ports`].
//!
//! Public surface:
//! - `UserRecord`: a listed user with department and rating attached.
//! - `FilterState` and `filter_users`: search, department and rating
//!   criteria combined by conjunction.
//! - `DashboardSession`: working set, filters and load state for one run.
//! - `UserLoader`: fetches the listing and assigns attributes.
//! - `CardAction`: dispatch of the per-card actions.

pub mod actions;
pub mod filter;
pub mod loader;
pub mod ports;
pub mod session;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::actions::CardAction;
pub use self::filter::{FilterState, filter_users};
pub use self::loader::{DEFAULT_USER_LIMIT, UserLoader};
pub use self::session::{DashboardSession, LoadState, LoadTicket};
pub use self::user::UserRecord;
