//! Inbound adapters driving the domain.
//!
//! - **cli**: frame rendering and the line-oriented command loop.

pub mod cli;
