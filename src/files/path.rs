//! Extension lookup backed by `std::path`.

use crate::session::PathInspector;
use std::path::Path;

/// Reports the final extension of a path with its leading dot, the way the
/// session expects it (`"notes.txt"` → `".txt"`).
///
/// Case is preserved. Names without an extension, including dot-files such
/// as `.profile`, yield an empty string.
#[derive(Debug, Default)]
pub struct ExtensionInspector;

impl PathInspector for ExtensionInspector {
    fn extension(&self, path: &str) -> String {
        Path::new(path)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext(path: &str) -> String {
        ExtensionInspector.extension(path)
    }

    #[test]
    fn test_extension_includes_dot() {
        assert_eq!(ext("notes.txt"), ".txt");
        assert_eq!(ext("/home/user/notes.txt"), ".txt");
    }

    #[test]
    fn test_extension_keeps_case() {
        assert_eq!(ext("README.TXT"), ".TXT");
    }

    #[test]
    fn test_only_last_extension_counts() {
        assert_eq!(ext("archive.txt.gz"), ".gz");
    }

    #[test]
    fn test_missing_extension_is_empty() {
        assert_eq!(ext("Makefile"), "");
        assert_eq!(ext(".profile"), "");
        assert_eq!(ext(""), "");
    }
}
