//! Menu bar for the notepad window.

use crate::session::{Command, EditorSession};
use crate::ui::text_style::{FONT_COLORS, FONT_FAMILIES};
use eframe::egui;

/// Something the user picked from the menu bar this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Run a session command
    Run(Command),
    /// Switch the font family
    SetFontFamily(&'static str),
    /// Switch the font color
    SetFontColor(&'static str),
}

const FILE_COMMANDS: &[Command] = &[
    Command::NewFile,
    Command::OpenFile,
    Command::SaveFile,
    Command::SaveFileAs,
    Command::DeleteFile,
];

const FONT_SIZE_COMMANDS: &[Command] = &[Command::IncreaseFont, Command::LowerFont];

/// Render the menu bar and return at most one action.
pub fn show_menu_bar(ui: &mut egui::Ui, session: &EditorSession) -> Option<MenuAction> {
    let mut action = None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            for command in FILE_COMMANDS {
                command_button(ui, session, *command, &mut action);
            }
            ui.separator();
            command_button(ui, session, Command::Exit, &mut action);
        });

        ui.menu_button("View", |ui| {
            for command in FONT_SIZE_COMMANDS {
                command_button(ui, session, *command, &mut action);
            }
            ui.menu_button("Font Family", |ui| {
                for family in FONT_FAMILIES {
                    let selected = session.font_family() == *family;
                    if ui.radio(selected, *family).clicked() {
                        action = Some(MenuAction::SetFontFamily(*family));
                        ui.close_menu();
                    }
                }
            });
            ui.menu_button("Font Color", |ui| {
                for color in FONT_COLORS {
                    let selected = session.font_color() == *color;
                    if ui.radio(selected, *color).clicked() {
                        action = Some(MenuAction::SetFontColor(*color));
                        ui.close_menu();
                    }
                }
            });
            ui.separator();
            command_button(ui, session, Command::ResetDisplaySettings, &mut action);
        });

        ui.menu_button("Help", |ui| {
            command_button(ui, session, Command::OpenAbout, &mut action);
        });
    });

    action
}

fn command_button(
    ui: &mut egui::Ui,
    session: &EditorSession,
    command: Command,
    action: &mut Option<MenuAction>,
) {
    let button = egui::Button::new(command.label()).shortcut_text(command.shortcut());
    if ui
        .add_enabled(session.can_execute(command), button)
        .clicked()
    {
        *action = Some(MenuAction::Run(command));
        ui.close_menu();
    }
}
