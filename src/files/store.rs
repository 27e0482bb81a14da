//! Text store backed by the local file system.

use crate::error::{Error, Result};
use crate::session::TextStore;
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Reads, writes and deletes whole files as UTF-8 text.
///
/// Names are used as paths unchanged, relative names resolve against the
/// working directory.
#[derive(Debug, Default)]
pub struct FsTextStore;

impl TextStore for FsTextStore {
    fn write(&self, name: &str, content: &str) -> Result<()> {
        debug!("Writing {} bytes to {}", content.len(), name);
        fs::write(name, content).map_err(|source| Error::FileWrite {
            path: PathBuf::from(name),
            source,
        })
    }

    fn read(&self, name: &str) -> Result<String> {
        debug!("Reading {}", name);
        fs::read_to_string(name).map_err(|source| Error::FileRead {
            path: PathBuf::from(name),
            source,
        })
    }

    fn delete(&self, name: &str) -> Result<()> {
        debug!("Deleting {}", name);
        fs::remove_file(name).map_err(|source| Error::FileDelete {
            path: PathBuf::from(name),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn name_in(dir: &TempDir, file: &str) -> String {
        dir.path().join(file).to_string_lossy().into_owned()
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let name = name_in(&dir, "notes.txt");

        FsTextStore.write(&name, "first line\nsecond line").unwrap();

        assert_eq!(FsTextStore.read(&name).unwrap(), "first line\nsecond line");
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let name = name_in(&dir, "notes.txt");

        FsTextStore.write(&name, "a much longer original text").unwrap();
        FsTextStore.write(&name, "short").unwrap();

        assert_eq!(FsTextStore.read(&name).unwrap(), "short");
    }

    #[test]
    fn test_delete_removes_file() {
        let dir = TempDir::new().unwrap();
        let name = name_in(&dir, "gone.txt");
        FsTextStore.write(&name, "bye").unwrap();

        FsTextStore.delete(&name).unwrap();

        assert!(!dir.path().join("gone.txt").exists());
    }

    #[test]
    fn test_read_missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let name = name_in(&dir, "missing.txt");

        let err = FsTextStore.read(&name).unwrap_err();

        assert!(matches!(err, Error::FileRead { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_delete_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = FsTextStore.delete(&name_in(&dir, "never.txt")).unwrap_err();
        assert!(matches!(err, Error::FileDelete { .. }));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let name = name_in(&dir, "no/such/dir/file.txt");
        let err = FsTextStore.write(&name, "x").unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));
    }
}
