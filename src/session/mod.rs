//! Editor session for Plainpad
//!
//! The session is the view-model between the window and the outside world.
//! It owns the document state, runs the user commands and reports every
//! field change to subscribed observers. Files, dialogs and prompts are
//! reached only through the collaborator traits, so the whole module runs
//! without a window system.

mod collaborators;
mod commands;
mod controller;
mod notify;
mod state;

#[cfg(test)]
pub(crate) mod fakes;

pub use collaborators::{
    AboutDialog, Answer, Collaborators, ConfirmationPrompt, Locator, PathInspector, TextStore,
};
pub use commands::Command;
pub use controller::EditorSession;
pub use notify::Property;
