//! Crate-internal test support and property tests.

pub(crate) mod common;
mod property;
