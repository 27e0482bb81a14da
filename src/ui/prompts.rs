//! Native message boxes backing the session's confirmation prompt.

use crate::session::{Answer, ConfirmationPrompt};
use log::debug;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Pick an icon from the caption the session uses.
fn level_for(caption: &str) -> MessageLevel {
    let lower = caption.to_lowercase();
    if lower.contains("error") || lower.contains("failed") || lower.contains("unable") {
        MessageLevel::Error
    } else if lower.contains("warning") || lower.contains("checking") {
        MessageLevel::Warning
    } else {
        MessageLevel::Info
    }
}

/// Blocking rfd message dialogs.
#[derive(Debug, Default)]
pub struct NativePrompt;

impl ConfirmationPrompt for NativePrompt {
    fn acknowledge(&self, message: &str, caption: &str) {
        debug!("Prompt [{}]: {}", caption, message);
        MessageDialog::new()
            .set_level(level_for(caption))
            .set_title(caption)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn ask_yes_no(&self, message: &str, caption: &str) -> Answer {
        let result = MessageDialog::new()
            .set_level(level_for(caption))
            .set_title(caption)
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();
        debug!("Prompt [{}]: {} -> {:?}", caption, message, result);
        match result {
            MessageDialogResult::Yes => Answer::Yes,
            _ => Answer::No,
        }
    }
}
