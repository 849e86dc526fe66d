//! Capabilities the editor hosting the localize action must provide.
//!
//! The core never touches editor state directly; everything it needs from the
//! active view goes through these traits so the logic runs against fakes in tests.

use std::path::PathBuf;

pub trait SelectionProvider {
    /// Path of the file shown in the active view, if it has one.
    fn active_file(&self) -> Option<PathBuf>;

    /// Text of the primary selection; empty or `None` when nothing is highlighted.
    fn selection(&self) -> Option<String>;
}

pub trait ReplacementSink {
    fn replace_selection(&mut self, text: &str);
}

pub trait InputPrompt {
    /// Blocking modal prompt. `None` means the user cancelled.
    fn ask(&mut self, label: &str, default: &str) -> Option<String>;
}

pub trait EditorHost: SelectionProvider + ReplacementSink + InputPrompt {}

impl<T> EditorHost for T where T: SelectionProvider + ReplacementSink + InputPrompt {}
