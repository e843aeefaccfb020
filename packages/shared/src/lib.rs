//! Utilities shared by the Watchparty crates.

pub mod logger;
pub mod time;
