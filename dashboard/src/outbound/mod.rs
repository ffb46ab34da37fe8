//! Outbound adapters implementing domain ports for external services.
//!
//! - **dummyjson**: reqwest-backed `UserDirectory` over the public users
//!   listing.
//!
//! Adapters translate between wire shapes and domain types and carry no
//! filtering or augmentation logic.

pub mod dummyjson;
