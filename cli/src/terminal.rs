//! Terminal implementations of the UI handle ports
//!
//! The feed is buffered and written out as a page once the command is done.
//! Status messages go to stderr as they change.

use std::sync::RwLock;

use algia_web_ui::domain::ports::{ActionControl, FeedContainer, Modal, StatusSlot, TextInput};

/// Keeps the last feed markup written by the renderer
#[derive(Default)]
pub struct PageBuffer {
    html: RwLock<Option<String>>,
}

impl PageBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<String> {
        self.html.write().unwrap_or_else(|e| e.into_inner()).take()
    }
}

impl FeedContainer for PageBuffer {
    fn set_html(&self, html: &str) {
        *self.html.write().unwrap_or_else(|e| e.into_inner()) = Some(html.to_string());
    }
}

/// Prints each status text on its own stderr line
pub struct TerminalStatus {
    quiet: bool,
}

impl TerminalStatus {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl StatusSlot for TerminalStatus {
    fn show(&self, text: &str) {
        if !self.quiet {
            eprintln!("{}", text);
        }
    }

    fn clear(&self) {}
}

/// There is no button to disable; record the transitions in the log
pub struct TerminalControl {
    name: &'static str,
}

impl TerminalControl {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl ActionControl for TerminalControl {
    fn set_enabled(&self, enabled: bool) {
        tracing::debug!(control = self.name, enabled, "control state");
    }

    fn set_label(&self, label: &str) {
        tracing::debug!(control = self.name, label, "control label");
    }
}

pub struct TerminalModal;

impl Modal for TerminalModal {
    fn close(&self) {
        tracing::debug!("compose dialog closed");
    }
}

/// Content passed on the command line
pub struct ArgInput {
    value: RwLock<String>,
}

impl ArgInput {
    pub fn new(value: &str) -> Self {
        Self {
            value: RwLock::new(value.to_string()),
        }
    }
}

impl TextInput for ArgInput {
    fn value(&self) -> String {
        self.value.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn clear(&self) {
        self.value.write().unwrap_or_else(|e| e.into_inner()).clear();
    }
}
