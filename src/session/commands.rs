//! User-triggered commands.
//!
//! Each command is paired with an enablement check through
//! [`EditorSession::can_execute`](super::EditorSession::can_execute), so the
//! host can gray out menu entries without knowing anything about the rules.

/// Every operation the window can ask the session to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    IncreaseFont,
    LowerFont,
    ResetDisplaySettings,
    NewFile,
    OpenFile,
    SaveFile,
    SaveFileAs,
    DeleteFile,
    Exit,
    OpenAbout,
}

impl Command {
    /// All commands in menu order.
    pub fn all() -> &'static [Command] {
        &[
            Command::NewFile,
            Command::OpenFile,
            Command::SaveFile,
            Command::SaveFileAs,
            Command::DeleteFile,
            Command::Exit,
            Command::IncreaseFont,
            Command::LowerFont,
            Command::ResetDisplaySettings,
            Command::OpenAbout,
        ]
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Command::IncreaseFont => "Increase Font Size",
            Command::LowerFont => "Lower Font Size",
            Command::ResetDisplaySettings => "Reset Display Settings",
            Command::NewFile => "New",
            Command::OpenFile => "Open...",
            Command::SaveFile => "Save",
            Command::SaveFileAs => "Save As...",
            Command::DeleteFile => "Delete",
            Command::Exit => "Exit",
            Command::OpenAbout => "About",
        }
    }

    /// Keyboard shortcut shown next to the menu entry.
    pub fn shortcut(&self) -> &'static str {
        match self {
            Command::IncreaseFont => "Ctrl+=",
            Command::LowerFont => "Ctrl+-",
            Command::ResetDisplaySettings => "Ctrl+0",
            Command::NewFile => "Ctrl+N",
            Command::OpenFile => "Ctrl+O",
            Command::SaveFile => "Ctrl+S",
            Command::SaveFileAs => "Ctrl+Shift+S",
            Command::DeleteFile => "Ctrl+D",
            Command::Exit => "Ctrl+Q",
            Command::OpenAbout => "F1",
        }
    }
}

/// What the host should do once a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandOutcome {
    /// Keep the window open.
    #[default]
    Continue,
    /// Close the window and end the process.
    Exit,
}

impl CommandOutcome {
    pub fn is_exit(&self) -> bool {
        matches!(self, CommandOutcome::Exit)
    }
}
