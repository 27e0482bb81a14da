//! Document state held by the editor session.

/// Placeholder name meaning "no file is associated with the document".
pub const DEFAULT_FILE_NAME: &str = "Untitled.txt";
/// Font family restored by "Reset Display Settings".
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
/// Font size restored by "Reset Display Settings".
pub const DEFAULT_FONT_SIZE: i32 = 20;
/// Font color restored by "Reset Display Settings".
pub const DEFAULT_FONT_COLOR: &str = "Black";

/// The single document the notepad edits, plus its display settings.
///
/// Fields are private to the session module; the host reads them through
/// [`EditorSession`](super::EditorSession) getters and writes them through
/// its setters so that change notifications are never skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub(super) text: String,
    pub(super) file_name: String,
    pub(super) font_family: String,
    pub(super) font_size: i32,
    pub(super) font_color: String,
    /// Unsaved edits since the last open/new/delete
    pub(super) is_dirty: bool,
}

impl EditorState {
    /// Whether the file name is the untitled placeholder.
    pub fn is_untitled(&self) -> bool {
        self.file_name == DEFAULT_FILE_NAME
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            text: String::new(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_color: DEFAULT_FONT_COLOR.to_string(),
            is_dirty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = EditorState::default();
        assert_eq!(state.text, "");
        assert_eq!(state.file_name, "Untitled.txt");
        assert_eq!(state.font_family, "Arial");
        assert_eq!(state.font_size, 20);
        assert_eq!(state.font_color, "Black");
        assert!(!state.is_dirty);
        assert!(state.is_untitled());
    }

    #[test]
    fn test_is_untitled_is_exact_match() {
        let mut state = EditorState::default();
        state.file_name = "untitled.txt".to_string();
        assert!(!state.is_untitled());
    }
}
