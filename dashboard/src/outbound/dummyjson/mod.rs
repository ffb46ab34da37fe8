//! Users listing adapter.
//!
//! A thin HTTP implementation of the `UserDirectory` port against a
//! dummyjson-compatible `/users` endpoint.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_USER_AGENT, DummyJsonDirectory};
