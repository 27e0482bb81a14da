//! Main application module for Plainpad
//!
//! This module implements the eframe App trait for the notepad window. The
//! window is a thin host: it draws the menu bar and the text area, maps
//! keyboard shortcuts to session commands, and closes itself when a
//! command asks it to.

use crate::config::Settings;
use crate::files::dialogs::{OpenLocator, SaveLocator};
use crate::files::{ExtensionInspector, FsTextStore};
use crate::session::{Collaborators, Command, EditorSession, Property};
use crate::ui::{show_menu_bar, text_style, MenuAction, NativeAbout, NativePrompt};
use eframe::egui;
use log::{debug, info};
use std::cell::Cell;
use std::rc::Rc;

/// Application name constant.
const APP_NAME: &str = "Plainpad";

/// Collaborators backed by the local file system and native dialogs.
fn native_collaborators() -> Collaborators {
    Collaborators {
        store: Box::new(FsTextStore),
        prompt: Box::new(NativePrompt),
        save_locator: Box::new(SaveLocator),
        open_locator: Box::new(OpenLocator),
        path: Box::new(ExtensionInspector),
        about: Box::new(NativeAbout),
    }
}

/// Window title for a file name and dirty flag.
///
/// Returns a title in the format: "notes.txt* - Plainpad".
fn window_title(file_name: &str, dirty: bool) -> String {
    let marker = if dirty { "*" } else { "" };
    format!("{}{} - {}", file_name, marker, APP_NAME)
}

/// Map the keys pressed this frame to a command.
///
/// `pressed` reports whether a key went down this frame.
fn shortcut_command(
    modifiers: egui::Modifiers,
    pressed: impl Fn(egui::Key) -> bool,
) -> Option<Command> {
    if pressed(egui::Key::F1) {
        return Some(Command::OpenAbout);
    }
    if !modifiers.command {
        return None;
    }

    // Ctrl+Shift+S must be checked before Ctrl+S
    if modifiers.shift && pressed(egui::Key::S) {
        return Some(Command::SaveFileAs);
    }
    if pressed(egui::Key::S) {
        return Some(Command::SaveFile);
    }
    if pressed(egui::Key::N) {
        return Some(Command::NewFile);
    }
    if pressed(egui::Key::O) {
        return Some(Command::OpenFile);
    }
    if pressed(egui::Key::D) {
        return Some(Command::DeleteFile);
    }
    if pressed(egui::Key::Q) {
        return Some(Command::Exit);
    }
    if pressed(egui::Key::Equals) || pressed(egui::Key::Plus) {
        return Some(Command::IncreaseFont);
    }
    if pressed(egui::Key::Minus) {
        return Some(Command::LowerFont);
    }
    if pressed(egui::Key::Num0) {
        return Some(Command::ResetDisplaySettings);
    }
    None
}

/// Apply startup settings to the egui context.
///
/// egui's built-in keyboard zoom listens on Ctrl+Plus/Minus/0, which are
/// the font shortcuts here, so it is switched off.
fn configure_context(ctx: &egui::Context, settings: &Settings) {
    ctx.set_visuals(settings.theme.visuals());
    ctx.options_mut(|o| o.zoom_with_keyboard = false);
}

/// The main application struct that hosts the editor session.
pub struct NotepadApp {
    /// The view-model
    session: EditorSession,
    /// Startup settings
    settings: Settings,
    /// Set by the session observer when the title needs recomputing
    title_stale: Rc<Cell<bool>>,
    /// Set once a command asked the window to close
    should_exit: bool,
}

impl NotepadApp {
    /// Create a new NotepadApp instance.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        info!("Initializing {}", APP_NAME);
        configure_context(&cc.egui_ctx, &settings);
        Self::with_session(EditorSession::new(native_collaborators()), settings)
    }

    fn with_session(mut session: EditorSession, settings: Settings) -> Self {
        let title_stale = Rc::new(Cell::new(true));
        let flag = Rc::clone(&title_stale);
        session.subscribe(move |property| {
            if matches!(property, Property::FileName | Property::Text) {
                flag.set(true);
            }
        });

        Self {
            session,
            settings,
            title_stale,
            should_exit: false,
        }
    }

    /// Run a command and remember whether the window should close.
    fn run(&mut self, command: Command) {
        if !self.session.can_execute(command) {
            debug!("Command {:?} is disabled", command);
            return;
        }
        if self.session.execute(command).is_exit() {
            self.should_exit = true;
        }
    }

    fn handle_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::Run(command) => self.run(command),
            MenuAction::SetFontFamily(family) => self.session.set_font_family(family),
            MenuAction::SetFontColor(color) => self.session.set_font_color(color),
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let command = ctx.input(|i| shortcut_command(i.modifiers, |key| i.key_pressed(key)));
        if let Some(command) = command {
            debug!("Keyboard shortcut: {} ({:?})", command.shortcut(), command);
            self.run(command);
        }
    }

    /// Draw the text area and push edits back into the session.
    fn render_editor(&mut self, ui: &mut egui::Ui) {
        let font = text_style::font_id(self.session.font_size(), self.session.font_family());
        let color = text_style::font_color(self.session.font_color())
            .unwrap_or_else(|| ui.visuals().text_color());
        let wrap = self.settings.word_wrap;

        let mut layouter = |ui: &egui::Ui, string: &str, wrap_width: f32| {
            let width = if wrap { wrap_width } else { f32::INFINITY };
            let job = egui::text::LayoutJob::simple(string.to_owned(), font.clone(), color, width);
            ui.fonts(|f| f.layout_job(job))
        };

        let mut text = self.session.text().to_owned();
        let scroll = if wrap {
            egui::ScrollArea::vertical()
        } else {
            egui::ScrollArea::both()
        };
        scroll.auto_shrink([false, false]).show(ui, |ui| {
            let response = ui.add_sized(
                ui.available_size(),
                egui::TextEdit::multiline(&mut text)
                    .frame(false)
                    .lock_focus(true)
                    .desired_width(f32::INFINITY)
                    .layouter(&mut layouter),
            );
            if response.changed() {
                self.session.set_text(text);
            }
        });
    }

    fn refresh_title(&mut self, ctx: &egui::Context) {
        if self.title_stale.replace(false) {
            let title = window_title(self.session.file_name(), self.session.is_dirty());
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }
    }
}

impl eframe::App for NotepadApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Window close button goes through the Exit command
        if ctx.input(|i| i.viewport().close_requested()) && !self.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.run(Command::Exit);
        }

        let mut menu_action = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            menu_action = show_menu_bar(ui, &self.session);
        });
        if let Some(action) = menu_action {
            self.handle_menu_action(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| self.render_editor(ui));

        self.handle_keyboard_shortcuts(ctx);
        self.refresh_title(ctx);

        if self.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
