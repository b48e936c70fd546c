//! Breakpoint simulation over detached surface documents.

use crate::breakpoint::{BREAKPOINTS, Breakpoint};
use dom::{Document, NodeId, Viewport};
use extract::{StyleSnapshot, extract};
use thiserror::Error;

/// Height of the throwaway surface document. Tall enough that vertical
/// clamping never interferes with width-driven media conditions.
pub const SURFACE_HEIGHT: f32 = 2048.0;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimulateError {
    #[error("cannot simulate breakpoints for a detached element")]
    DetachedTarget,
}

/// Capture the element's snapshot at every breakpoint, in order.
///
/// Each capture re-hosts the readable stylesheets and a deep clone of the
/// target subtree in a surface document sized to the breakpoint, extracts
/// there, and discards the surface. Cross-origin sheets are skipped and a
/// failed capture degrades to an empty snapshot, so the result always
/// holds all breakpoint names.
///
/// # Errors
/// Fails with [`SimulateError::DetachedTarget`] only when the target is
/// already detached before capture begins.
pub fn capture_all(
    doc: &Document,
    element: NodeId,
) -> Result<Vec<(&'static str, StyleSnapshot)>, SimulateError> {
    if !doc.is_attached(element) {
        return Err(SimulateError::DetachedTarget);
    }
    let mut captures = Vec::with_capacity(BREAKPOINTS.len());
    for breakpoint in BREAKPOINTS {
        captures.push((breakpoint.name, capture_one(doc, element, breakpoint)));
    }
    Ok(captures)
}

fn capture_one(doc: &Document, element: NodeId, breakpoint: Breakpoint) -> StyleSnapshot {
    let mut surface = Document::new(Viewport::new(breakpoint.width, SURFACE_HEIGHT));
    for attachment in doc.stylesheets() {
        match attachment.readable_text() {
            Ok(text) => surface.add_stylesheet(text),
            Err(error) => {
                log::debug!(target: "inspector", "skipping stylesheet at {}: {error}", breakpoint.name);
            }
        }
    }
    let surface_root = surface.root();
    let copied = match doc.clone_subtree_into(element, &mut surface, surface_root) {
        Ok(node) => node,
        Err(error) => {
            log::debug!(target: "inspector", "clone failed at {}: {error}", breakpoint.name);
            return StyleSnapshot::default();
        }
    };
    match extract(&surface, copied) {
        Ok(snapshot) => snapshot,
        Err(error) => {
            log::debug!(target: "inspector", "extraction failed at {}: {error}", breakpoint.name);
            StyleSnapshot::default()
        }
    }
}
