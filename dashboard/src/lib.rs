//! Employee performance dashboard.
//!
//! Loads a user listing, assigns each user a department and a rating, and
//! renders the result as filterable cards in the terminal.
//!
//! - [`domain`]: records, the filter engine and the session controller.
//! - [`outbound`]: the HTTP adapter for the user listing.
//! - [`inbound`]: text rendering and the interactive command loop.
//! - [`config`] and [`telemetry`]: start-up configuration and logging.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod telemetry;
