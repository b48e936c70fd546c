//! In-memory document model used by the style inspector.
//!
//! The document is an arena of elements with host-provided layout
//! rectangles, attached stylesheets, and a registry of document-level
//! listener subscriptions. It knows nothing about style resolution or
//! inspection; those layers sit on top.

#![forbid(unsafe_code)]

mod document;
mod geometry;
mod listeners;
mod sheets;

pub use document::{Document, ElementData, Viewport};
pub use geometry::{Point, Rect};
pub use indextree::NodeId;
pub use listeners::{EventKind, ListenerId, ListenerRegistry};
pub use sheets::{SheetProvenance, StylesheetAttachment};

use thiserror::Error;

/// Failures raised by document operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    /// The element handle no longer resolves to an attached node.
    #[error("element is not attached to the document")]
    Detached,
    /// A cross-origin stylesheet's text cannot be read out for re-hosting.
    #[error("stylesheet at {url} is cross-origin and cannot be read")]
    CrossOriginStylesheet {
        /// Location the stylesheet was loaded from.
        url: String,
    },
}
