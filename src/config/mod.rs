//! Configuration module for Plainpad
//!
//! This module holds the startup settings and the read-only loader that
//! fetches them from the platform configuration directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
