//! About dialog for Plainpad
//!
//! Shows application information and the keyboard shortcut reference in a
//! blocking native message box.

use crate::session::{AboutDialog, Command};
use log::debug;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Application name shown in the dialog title.
const APP_NAME: &str = "Plainpad";

/// Build the dialog body: version line, blurb, then one line per shortcut.
pub fn about_text() -> String {
    let mut text = format!(
        "{} {}\nA small notepad for plain text files.\n\nKeyboard shortcuts:\n",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );
    for command in Command::all() {
        text.push_str(&format!("  {:<14} {}\n", command.shortcut(), command.label()));
    }
    text
}

/// Native About box. `show_about` returns once the user dismisses it.
#[derive(Debug, Default)]
pub struct NativeAbout;

impl AboutDialog for NativeAbout {
    fn show_about(&self) {
        debug!("Showing about dialog");
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(format!("About {}", APP_NAME))
            .set_description(about_text())
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
