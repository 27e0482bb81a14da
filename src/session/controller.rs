//! The editor session controller.
//!
//! All commands run synchronously to completion. Failures from the text
//! store never leave this module: each one is logged, shown to the user in
//! an acknowledgement prompt and swallowed.

use super::collaborators::{Collaborators, PathInspector};
use super::commands::{Command, CommandOutcome};
use super::notify::{ChangeNotifier, Property, SubscriptionId};
use super::state::{
    EditorState, DEFAULT_FILE_NAME, DEFAULT_FONT_COLOR, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
};
use log::{debug, info, warn};

// ─────────────────────────────────────────────────────────────────────────────
// Prompt Texts
// ─────────────────────────────────────────────────────────────────────────────

const SAVE_CHANGES_MESSAGE: &str = "Do you want to save changes made?";
const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete?";
const NO_FILE_SELECTED_MESSAGE: &str = "No file was selected";
const TEXT_FILES_ONLY_MESSAGE: &str = "Please only open text files";
const NOTHING_TO_DELETE_MESSAGE: &str = "You need a current file showing in order to delete";

const CHECKING_CAPTION: &str = "Just Checking";
const WARNING_CAPTION: &str = "Warning";
const ERROR_CAPTION: &str = "Error";
const SAVE_FAILED_CAPTION: &str = "File save failed";
const LOAD_FAILED_CAPTION: &str = "Unable to load the file!";
const DELETE_FAILED_CAPTION: &str = "Error, could not delete file!";

/// Only files with exactly this extension may be opened.
const TEXT_EXTENSION: &str = ".txt";

// ─────────────────────────────────────────────────────────────────────────────
// Editor Session
// ─────────────────────────────────────────────────────────────────────────────

/// View-model for the notepad window.
///
/// Owns the [`EditorState`] exclusively. The host reads fields through the
/// getters, writes them through the setters, and triggers behaviour through
/// [`execute`](Self::execute) or the individual command methods.
pub struct EditorSession {
    state: EditorState,
    collaborators: Collaborators,
    notifier: ChangeNotifier,
}

impl EditorSession {
    /// Create a session with default state.
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            state: EditorState::default(),
            collaborators,
            notifier: ChangeNotifier::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Observers
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a closure that is called after every field change.
    pub fn subscribe(&mut self, observer: impl FnMut(Property) + 'static) -> SubscriptionId {
        self.notifier.subscribe(observer)
    }

    /// Remove an observer. Returns `false` if it was not registered.
    #[cfg(test)]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fields
    // ─────────────────────────────────────────────────────────────────────────

    /// Snapshot access to every field at once.
    #[cfg(test)]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    /// Replace the document text and mark it dirty.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.text = text.into();
        self.notifier.notify(Property::Text);
        self.state.is_dirty = true;
    }

    pub fn file_name(&self) -> &str {
        &self.state.file_name
    }

    /// Set the file name; `None` resets it to the untitled placeholder.
    pub fn set_file_name(&mut self, file_name: Option<String>) {
        self.state.file_name = file_name.unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        self.notifier.notify(Property::FileName);
    }

    pub fn font_family(&self) -> &str {
        &self.state.font_family
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.state.font_family = family.into();
        self.notifier.notify(Property::FontFamily);
    }

    pub fn font_size(&self) -> i32 {
        self.state.font_size
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.state.font_size = size;
        self.notifier.notify(Property::FontSize);
    }

    pub fn font_color(&self) -> &str {
        &self.state.font_color
    }

    pub fn set_font_color(&mut self, color: impl Into<String>) {
        self.state.font_color = color.into();
        self.notifier.notify(Property::FontColor);
    }

    /// Unsaved edits exist. Not observable through notifications.
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Command Dispatch
    // ─────────────────────────────────────────────────────────────────────────

    /// Every command is always available.
    pub fn can_execute(&self, _command: Command) -> bool {
        true
    }

    /// Run a command and tell the host whether to keep going.
    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        debug!("Executing command: {:?}", command);
        match command {
            Command::IncreaseFont => self.increase_font(),
            Command::LowerFont => self.lower_font(),
            Command::ResetDisplaySettings => self.reset_display_settings(),
            Command::NewFile => self.new_file(),
            Command::OpenFile => self.open_file(),
            Command::SaveFile => self.save_file(),
            Command::SaveFileAs => self.save_file_as(),
            Command::DeleteFile => self.delete_file(),
            Command::Exit => return self.exit(),
            Command::OpenAbout => self.open_about(),
        }
        CommandOutcome::Continue
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Display Settings
    // ─────────────────────────────────────────────────────────────────────────

    pub fn increase_font(&mut self) {
        self.set_font_size(self.state.font_size.saturating_add(1));
    }

    /// Lower the font size, stopping at 1.
    pub fn lower_font(&mut self) {
        if self.state.font_size <= 1 {
            return;
        }
        self.set_font_size(self.state.font_size - 1);
    }

    pub fn reset_display_settings(&mut self) {
        self.set_font_size(DEFAULT_FONT_SIZE);
        self.set_font_family(DEFAULT_FONT_FAMILY);
        self.set_font_color(DEFAULT_FONT_COLOR);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // File Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Write the text to the current file, or ask for a location first when
    /// the document is untitled.
    ///
    /// The dirty flag is left as it is, even after a successful write.
    pub fn save_file(&mut self) {
        if self.state.is_untitled() {
            self.save_file_as();
            return;
        }

        match self
            .collaborators
            .store
            .write(&self.state.file_name, &self.state.text)
        {
            Ok(()) => info!("Saved file: {}", self.state.file_name),
            Err(e) => {
                warn!("Failed to save {}: {}", self.state.file_name, e);
                self.collaborators
                    .prompt
                    .acknowledge(&e.to_string(), SAVE_FAILED_CAPTION);
            }
        }
    }

    pub fn save_file_as(&mut self) {
        match self.collaborators.save_locator.show_dialog() {
            Some(path) => {
                self.set_file_name(Some(path));
                self.save_file();
            }
            None => {
                debug!("Save dialog cancelled");
                self.collaborators
                    .prompt
                    .acknowledge(NO_FILE_SELECTED_MESSAGE, WARNING_CAPTION);
            }
        }
    }

    /// Load a `.txt` file chosen by the user.
    pub fn open_file(&mut self) {
        let Some(path) = self.collaborators.open_locator.show_dialog() else {
            debug!("Open dialog cancelled");
            return;
        };

        if !is_text_file(self.collaborators.path.as_ref(), &path) {
            debug!("Refusing to open non-text file: {}", path);
            self.collaborators
                .prompt
                .acknowledge(TEXT_FILES_ONLY_MESSAGE, WARNING_CAPTION);
            return;
        }

        self.set_file_name(Some(path));
        match self.collaborators.store.read(&self.state.file_name) {
            Ok(content) => {
                self.set_text(content);
                self.state.is_dirty = false;
                info!("Opened file: {}", self.state.file_name);
            }
            Err(e) => {
                warn!("Failed to open {}: {}", self.state.file_name, e);
                self.collaborators
                    .prompt
                    .acknowledge(&e.to_string(), LOAD_FAILED_CAPTION);
            }
        }
    }

    /// Start an empty untitled document, offering to save unsaved edits.
    pub fn new_file(&mut self) {
        self.offer_to_save();
        self.clear_document();
        debug!("Started new document");
    }

    /// Delete the current file after confirmation.
    pub fn delete_file(&mut self) {
        let answer = self
            .collaborators
            .prompt
            .ask_yes_no(CONFIRM_DELETE_MESSAGE, CHECKING_CAPTION);
        if !answer.is_yes() {
            return;
        }

        if self.state.is_untitled() {
            self.collaborators
                .prompt
                .acknowledge(NOTHING_TO_DELETE_MESSAGE, ERROR_CAPTION);
            return;
        }

        match self.collaborators.store.delete(&self.state.file_name) {
            Ok(()) => {
                info!("Deleted file: {}", self.state.file_name);
                self.clear_document();
            }
            Err(e) => {
                warn!("Failed to delete {}: {}", self.state.file_name, e);
                self.collaborators
                    .prompt
                    .acknowledge(&e.to_string(), DELETE_FAILED_CAPTION);
            }
        }
    }

    /// Offer to save unsaved edits, then always ask the host to exit.
    pub fn exit(&mut self) -> CommandOutcome {
        self.offer_to_save();
        info!("Exit requested");
        CommandOutcome::Exit
    }

    pub fn open_about(&mut self) {
        self.collaborators.about.show_about();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn offer_to_save(&mut self) {
        if !self.state.is_dirty {
            return;
        }
        let answer = self
            .collaborators
            .prompt
            .ask_yes_no(SAVE_CHANGES_MESSAGE, CHECKING_CAPTION);
        if answer.is_yes() {
            self.save_file();
        }
    }

    fn clear_document(&mut self) {
        self.set_text(String::new());
        self.state.is_dirty = false;
        self.set_file_name(None);
    }
}

fn is_text_file(inspector: &dyn PathInspector, path: &str) -> bool {
    inspector.extension(path) == TEXT_EXTENSION
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("state", &self.state)
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
