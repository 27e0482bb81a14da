//! File operations module for Plainpad
//!
//! This module provides the native collaborators that touch the file
//! system: the text store, the extension inspector, and the open/save
//! dialogs.

pub mod dialogs;
mod path;
mod store;

pub use path::ExtensionInspector;
pub use store::FsTextStore;
