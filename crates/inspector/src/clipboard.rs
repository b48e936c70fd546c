//! Clipboard writing with a fallback path.
//!
//! The primary backend is whatever the host wires in. When it fails, a
//! transient offscreen text field is mounted, the text is written through
//! the fallback backend, and the field is unmounted again. Both paths
//! failing is logged and otherwise swallowed; a copy never aborts an
//! interaction.

use dom::{Document, DomError};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard backend unavailable")]
    Unavailable,
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

impl From<DomError> for ClipboardError {
    fn from(error: DomError) -> Self {
        Self::WriteFailed(error.to_string())
    }
}

/// Something that can receive copied text.
pub trait ClipboardBackend {
    /// Write the text to the backend.
    ///
    /// # Errors
    /// Backend-specific; the copier falls back on any error.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory backend; the default primary in tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

/// Primary/fallback pair the scanner copies through.
pub struct Copier {
    primary: Box<dyn ClipboardBackend>,
    fallback: Box<dyn ClipboardBackend>,
}

impl Copier {
    pub fn new(primary: Box<dyn ClipboardBackend>, fallback: Box<dyn ClipboardBackend>) -> Self {
        Self { primary, fallback }
    }

    /// Copy text, falling back to the offscreen-element path when the
    /// primary backend fails. Never propagates an error.
    pub fn copy(&mut self, doc: &mut Document, text: &str) {
        let Err(primary_error) = self.primary.write_text(text) else {
            return;
        };
        log::warn!(target: "inspector", "clipboard write failed, using fallback: {primary_error}");
        if let Err(fallback_error) = self.fallback_copy(doc, text) {
            log::error!(
                target: "inspector",
                "clipboard copy failed: {primary_error}; fallback failed: {fallback_error}"
            );
        }
    }

    /// Mount a fixed, invisible text field, write through the fallback
    /// backend, and unmount the field again whatever happens.
    fn fallback_copy(&mut self, doc: &mut Document, text: &str) -> Result<(), ClipboardError> {
        let root = doc.root();
        let buffer = doc.create_element(root, "textarea")?;
        doc.set_attr(buffer, "style", "position: fixed; opacity: 0")?;
        let written = self.fallback.write_text(text);
        doc.remove_element(buffer);
        written
    }
}
