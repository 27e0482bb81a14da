//! Capabilities the session borrows from the outside world.
//!
//! The native implementations live in `files` and `ui`; tests substitute
//! recording fakes.

use crate::error::Result;

/// Named text resources (files, in the native build).
pub trait TextStore {
    fn write(&self, name: &str, content: &str) -> Result<()>;
    fn read(&self, name: &str) -> Result<String>;
    fn delete(&self, name: &str) -> Result<()>;
}

/// The user's answer to a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }
}

/// Modal message boxes.
pub trait ConfirmationPrompt {
    /// Show a message with a single acknowledge button.
    fn acknowledge(&self, message: &str, caption: &str);

    /// Show a message with Yes and No buttons.
    fn ask_yes_no(&self, message: &str, caption: &str) -> Answer;
}

/// A file picker. `None` means the user cancelled.
pub trait Locator {
    fn show_dialog(&self) -> Option<String>;
}

/// Extension lookup, including the leading dot (`".txt"`), or an empty
/// string when the path has no extension.
pub trait PathInspector {
    fn extension(&self, path: &str) -> String;
}

/// Blocking informational "About" window.
pub trait AboutDialog {
    fn show_about(&self);
}

/// The full set of collaborators a session is built from.
pub struct Collaborators {
    pub store: Box<dyn TextStore>,
    pub prompt: Box<dyn ConfirmationPrompt>,
    pub save_locator: Box<dyn Locator>,
    pub open_locator: Box<dyn Locator>,
    pub path: Box<dyn PathInspector>,
    pub about: Box<dyn AboutDialog>,
}
