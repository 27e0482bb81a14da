//! Error type for Plainpad
//!
//! Every failure names the file it happened on. Text store errors end up in
//! a prompt through `Display`, config errors are logged and replaced by
//! default settings.

use log::warn;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Reading a document failed
    FileRead { path: PathBuf, source: io::Error },

    /// Writing a document failed
    FileWrite { path: PathBuf, source: io::Error },

    /// Removing a document failed
    FileDelete { path: PathBuf, source: io::Error },

    /// The config file exists but could not be read
    ConfigRead { path: PathBuf, source: io::Error },

    /// The config file is not valid settings JSON
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The platform has no config directory
    ConfigDirNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileRead { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            Error::FileWrite { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }
            Error::FileDelete { path, source } => {
                write!(f, "Failed to delete '{}': {}", path.display(), source)
            }
            Error::ConfigRead { path, source } => {
                write!(f, "Cannot read config '{}': {}", path.display(), source)
            }
            Error::ConfigParse { path, source } => {
                write!(f, "Invalid config '{}': {}", path.display(), source)
            }
            Error::ConfigDirNotFound => f.write_str("Configuration directory not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileRead { source, .. }
            | Error::FileWrite { source, .. }
            | Error::FileDelete { source, .. }
            | Error::ConfigRead { source, .. } => Some(source),
            Error::ConfigParse { source, .. } => Some(source),
            Error::ConfigDirNotFound => None,
        }
    }
}

/// Log-and-fall-back for results whose failure is not worth a prompt.
pub trait ResultExt<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T {
        self.unwrap_or_else(|err| {
            warn!("{}: {}. Using default.", context, err);
            default
        })
    }
}
