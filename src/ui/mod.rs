//! UI components for Plainpad
//!
//! This module contains the menu bar, the text styling helpers, and the
//! native message boxes used as session collaborators.

mod about;
mod menu;
mod prompts;
pub mod text_style;

pub use about::NativeAbout;
pub use menu::{show_menu_bar, MenuAction};
pub use prompts::NativePrompt;
