//! Native file dialog integration using the rfd crate
//!
//! This module provides the open and save locators backed by the native
//! file picker. Both offer a "Text" filter first and an "All" filter second.

use crate::session::Locator;
use log::debug;
use rfd::FileDialog;
use std::path::PathBuf;

/// File extension filters for supported file types.
const TEXT_EXTENSIONS: &[&str] = &["txt"];
const ALL_EXTENSIONS: &[&str] = &["*"];

fn text_file_dialog(title: &str) -> FileDialog {
    FileDialog::new()
        .set_title(title)
        .add_filter("Text", TEXT_EXTENSIONS)
        .add_filter("All", ALL_EXTENSIONS)
}

fn path_to_string(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}

/// Native "Save As" picker.
#[derive(Debug, Default)]
pub struct SaveLocator;

impl Locator for SaveLocator {
    fn show_dialog(&self) -> Option<String> {
        let chosen = text_file_dialog("Save File").save_file().map(path_to_string);
        debug!("Save dialog returned {:?}", chosen);
        chosen
    }
}

/// Native "Open" picker. Only a single file can be chosen.
#[derive(Debug, Default)]
pub struct OpenLocator;

impl Locator for OpenLocator {
    fn show_dialog(&self) -> Option<String> {
        let chosen = text_file_dialog("Open File").pick_file().map(path_to_string);
        debug!("Open dialog returned {:?}", chosen);
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_string_keeps_full_path() {
        let path = PathBuf::from("notes").join("todo.txt");
        let s = path_to_string(path.clone());
        assert_eq!(PathBuf::from(s), path);
    }
}
