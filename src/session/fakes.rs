//! Recording collaborators for session tests.
//!
//! One [`Fake`] plays every collaborator. Each call is appended to a shared
//! journal so tests can assert the exact interaction sequence. Yes/no
//! prompts consume scripted answers and panic when none is queued, which
//! catches prompts a test did not expect.

use super::collaborators::{
    AboutDialog, Answer, Collaborators, ConfirmationPrompt, Locator, PathInspector, TextStore,
};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Write(String, String),
    Read(String),
    Delete(String),
    Acknowledge(String, String),
    AskYesNo(String, String),
    SaveDialog,
    OpenDialog,
    Extension(String),
    About,
}

#[derive(Debug, Default)]
struct Script {
    calls: Vec<Call>,
    answers: VecDeque<Answer>,
    save_path: Option<String>,
    open_path: Option<String>,
    extension: String,
    contents: String,
    write_error: Option<String>,
    read_error: Option<String>,
    delete_error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Fake(Rc<RefCell<Script>>);

impl Fake {
    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            store: Box::new(self.clone()),
            prompt: Box::new(self.clone()),
            save_locator: Box::new(SaveSide(self.clone())),
            open_locator: Box::new(OpenSide(self.clone())),
            path: Box::new(self.clone()),
            about: Box::new(self.clone()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().calls.clone()
    }

    /// Queue the next yes/no answer.
    pub fn answer(&self, answer: Answer) {
        self.0.borrow_mut().answers.push_back(answer);
    }

    pub fn save_to(&self, path: &str) {
        self.0.borrow_mut().save_path = Some(path.to_string());
    }

    /// Make the open dialog return `path` and the inspector report `extension`.
    pub fn open_from(&self, path: &str, extension: &str) {
        let mut script = self.0.borrow_mut();
        script.open_path = Some(path.to_string());
        script.extension = extension.to_string();
    }

    pub fn contents(&self, text: &str) {
        self.0.borrow_mut().contents = text.to_string();
    }

    pub fn fail_write(&self, message: &str) {
        self.0.borrow_mut().write_error = Some(message.to_string());
    }

    pub fn fail_read(&self, message: &str) {
        self.0.borrow_mut().read_error = Some(message.to_string());
    }

    pub fn fail_delete(&self, message: &str) {
        self.0.borrow_mut().delete_error = Some(message.to_string());
    }

    fn script<T>(&self, read: impl FnOnce(&Script) -> T) -> T {
        read(&*self.0.borrow())
    }

    fn record(&self, call: Call) {
        self.0.borrow_mut().calls.push(call);
    }
}

/// Build the same path-carrying error the file store would return.
fn failure(
    message: &Option<String>,
    variant: fn(PathBuf, io::Error) -> Error,
    name: &str,
) -> Result<()> {
    match message {
        Some(message) => Err(variant(
            PathBuf::from(name),
            io::Error::new(io::ErrorKind::Other, message.clone()),
        )),
        None => Ok(()),
    }
}

fn write_error(path: PathBuf, source: io::Error) -> Error {
    Error::FileWrite { path, source }
}

fn read_error(path: PathBuf, source: io::Error) -> Error {
    Error::FileRead { path, source }
}

fn delete_error(path: PathBuf, source: io::Error) -> Error {
    Error::FileDelete { path, source }
}

impl TextStore for Fake {
    fn write(&self, name: &str, content: &str) -> Result<()> {
        self.record(Call::Write(name.to_string(), content.to_string()));
        failure(&self.0.borrow().write_error, write_error, name)
    }

    fn read(&self, name: &str) -> Result<String> {
        self.record(Call::Read(name.to_string()));
        let script = self.0.borrow();
        failure(&script.read_error, read_error, name)?;
        Ok(script.contents.clone())
    }

    fn delete(&self, name: &str) -> Result<()> {
        self.record(Call::Delete(name.to_string()));
        failure(&self.0.borrow().delete_error, delete_error, name)
    }
}

impl ConfirmationPrompt for Fake {
    fn acknowledge(&self, message: &str, caption: &str) {
        self.record(Call::Acknowledge(message.to_string(), caption.to_string()));
    }

    fn ask_yes_no(&self, message: &str, caption: &str) -> Answer {
        self.record(Call::AskYesNo(message.to_string(), caption.to_string()));
        self.0
            .borrow_mut()
            .answers
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected yes/no prompt: {}", message))
    }
}

impl PathInspector for Fake {
    fn extension(&self, path: &str) -> String {
        self.record(Call::Extension(path.to_string()));
        self.0.borrow().extension.clone()
    }
}

impl AboutDialog for Fake {
    fn show_about(&self) {
        self.record(Call::About);
    }
}

struct SaveSide(Fake);

impl Locator for SaveSide {
    fn show_dialog(&self) -> Option<String> {
        self.0.record(Call::SaveDialog);
        self.0.script(|s| s.save_path.clone())
    }
}

struct OpenSide(Fake);

impl Locator for OpenSide {
    fn show_dialog(&self) -> Option<String> {
        self.0.record(Call::OpenDialog);
        self.0.script(|s| s.open_path.clone())
    }
}
