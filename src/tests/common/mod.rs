//! Common Test Utilities
//!
//! Shared fixtures for building catalogs and inspectable progress stores.

pub mod fixtures;

pub use fixtures::*;
