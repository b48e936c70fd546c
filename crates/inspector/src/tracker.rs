//! Pointer tracking support: the highlight overlay and the reveal
//! debouncer.

use dom::{Document, DomError, ElementData, NodeId, Point, Rect};

/// Quiet period between a pointer landing on a new element and the
/// highlight/panel update, in milliseconds.
pub const DEBOUNCE_DELAY_MS: u64 = 30;

pub const HIGHLIGHT_ELEMENT_ID: &str = "css-scan-highlight";

/// A reveal waiting out the quiet period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingReveal {
    pub target: NodeId,
    pub anchor: Point,
}

/// Cancel-and-replace scheduler: at most one reveal is ever pending,
/// and scheduling a new one discards the old.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<(u64, PendingReveal)>,
}

impl Debouncer {
    /// Replace any pending reveal with this one.
    pub fn schedule(&mut self, now: u64, reveal: PendingReveal) {
        self.pending = Some((now + DEBOUNCE_DELAY_MS, reveal));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending reveal if its quiet period has elapsed.
    pub fn poll(&mut self, now: u64) -> Option<PendingReveal> {
        let (deadline, _) = self.pending?;
        if now < deadline {
            return None;
        }
        self.pending.take().map(|(_, reveal)| reveal)
    }
}

/// The highlight overlay element following the tracked target.
#[derive(Debug)]
pub struct Overlay {
    element: Option<NodeId>,
}

impl Overlay {
    /// Mount the overlay element into the document, hidden.
    ///
    /// # Errors
    /// Fails only on a broken arena.
    pub fn mount(doc: &mut Document) -> Result<Self, DomError> {
        let root = doc.root();
        let element = doc.create_element(root, "div")?;
        doc.set_attr(element, "id", HIGHLIGHT_ELEMENT_ID)?;
        doc.set_visible(element, false);
        Ok(Self {
            element: Some(element),
        })
    }

    #[inline]
    pub fn element(&self) -> Option<NodeId> {
        self.element
    }

    /// Move the overlay over the target's rectangle (offset by the
    /// scroll position) and show it.
    pub fn highlight(&self, doc: &mut Document, target: NodeId) {
        let Some(element) = self.element else {
            return;
        };
        let Some(rect) = doc.element(target).and_then(|payload| payload.rect()) else {
            return;
        };
        let scroll = doc.scroll();
        let placed = Rect::new(rect.x + scroll.x, rect.y + scroll.y, rect.width, rect.height);
        if let Err(error) = doc.set_rect(element, placed) {
            log::debug!(target: "inspector", "overlay placement failed: {error}");
            return;
        }
        doc.set_visible(element, true);
    }

    /// Hide the overlay.
    pub fn clear(&self, doc: &mut Document) {
        if let Some(element) = self.element {
            doc.set_visible(element, false);
        }
    }

    /// Hit-test with the overlay hidden so it never shadows the real
    /// target, restoring its visibility afterwards.
    pub fn element_under(&self, doc: &mut Document, point: Point) -> Option<NodeId> {
        let was_visible = self
            .element
            .and_then(|element| doc.element(element))
            .is_some_and(ElementData::visible);
        if let Some(element) = self.element
            && was_visible
        {
            doc.set_visible(element, false);
        }
        let hit = doc.element_from_point(point);
        if let Some(element) = self.element
            && was_visible
        {
            doc.set_visible(element, true);
        }
        hit
    }

    /// Remove the overlay element. Idempotent.
    pub fn unmount(&mut self, doc: &mut Document) {
        if let Some(element) = self.element.take() {
            doc.remove_element(element);
        }
    }
}
