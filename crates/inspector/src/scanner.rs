//! The scanner: pointer tracking, keyboard handling, and lifecycle.

use crate::clipboard::Copier;
use crate::panel::InspectionPanel;
use crate::tracker::{Debouncer, Overlay, PendingReveal};
use dom::{Document, DomError, EventKind, ListenerId, NodeId, Point};
use extract::extract;

/// A key press as the host reports it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
}

/// Input events fed to the scanner by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove {
        position: Point,
    },
    /// The pointer left `target`, moving onto `related` (if anywhere).
    PointerOut {
        target: NodeId,
        related: Option<NodeId>,
    },
    Click {
        target: Option<NodeId>,
    },
    KeyDown {
        key: Key,
        /// Element with focus when the key was pressed.
        focus: Option<NodeId>,
    },
    VisibilityHidden,
}

/// What the scanner did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Not handled; the host should let it propagate.
    Ignored,
    /// Handled; the host should suppress default behavior.
    Consumed,
    /// The scanner tore itself down; the host must sync its own state.
    Deactivated,
}

/// Hover-to-inspect scanner over one document.
pub struct Scanner {
    active: bool,
    paused: bool,
    target: Option<NodeId>,
    overlay: Overlay,
    panel: InspectionPanel,
    debouncer: Debouncer,
    copier: Copier,
    tokens: Vec<ListenerId>,
}

impl Scanner {
    /// Mount the overlay and panel and subscribe to document events.
    ///
    /// # Errors
    /// Fails only on a broken arena.
    pub fn init(doc: &mut Document, copier: Copier) -> Result<Self, DomError> {
        let overlay = Overlay::mount(doc)?;
        let panel = InspectionPanel::mount(doc)?;
        let tokens = vec![
            doc.add_listener(EventKind::PointerMove),
            doc.add_listener(EventKind::PointerOut),
            doc.add_listener(EventKind::Click),
            doc.add_listener(EventKind::KeyDown),
            doc.add_listener(EventKind::VisibilityChange),
        ];
        log::debug!(target: "inspector", "scanner activated");
        Ok(Self {
            active: true,
            paused: false,
            target: None,
            overlay,
            panel,
            debouncer: Debouncer::default(),
            copier,
            tokens,
        })
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    #[inline]
    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    #[inline]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    #[inline]
    pub fn panel(&self) -> &InspectionPanel {
        &self.panel
    }

    #[inline]
    pub fn panel_mut(&mut self) -> &mut InspectionPanel {
        &mut self.panel
    }

    /// Whether the node is part of the scanner's own UI (the panel, the
    /// overlay, or anything inside the panel).
    pub fn is_own_element(&self, doc: &Document, node: NodeId) -> bool {
        if self.overlay.element() == Some(node) {
            return true;
        }
        self.panel
            .element()
            .is_some_and(|panel| panel == node || doc.contains(panel, node))
    }

    /// Drive time forward: fire a due reveal and expire stale notices.
    pub fn tick(&mut self, doc: &mut Document, now: u64) {
        self.panel.tick(now);
        let Some(reveal) = self.debouncer.poll(now) else {
            return;
        };
        // The target may have moved on during the quiet period.
        if self.target != Some(reveal.target) {
            return;
        }
        self.reveal(doc, reveal);
    }

    fn reveal(&mut self, doc: &mut Document, reveal: PendingReveal) {
        let snapshot = match extract(doc, reveal.target) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                log::warn!(target: "inspector", "unable to extract styles: {error}");
                return;
            }
        };
        self.overlay.highlight(doc, reveal.target);
        self.panel.show(doc, reveal.target, snapshot, reveal.anchor);
    }

    /// Handle one input event at the given time.
    pub fn handle_event(&mut self, doc: &mut Document, event: InputEvent, now: u64) -> Outcome {
        if !self.active {
            return Outcome::Ignored;
        }
        match event {
            InputEvent::PointerMove { position } => self.on_pointer_move(doc, position, now),
            InputEvent::PointerOut { target, related } => self.on_pointer_out(doc, target, related),
            InputEvent::Click { target } => self.on_click(doc, target, now),
            InputEvent::KeyDown { key, focus } => self.on_key_down(doc, key, focus, now),
            InputEvent::VisibilityHidden => {
                self.panel.hide();
                Outcome::Consumed
            }
        }
    }

    fn on_pointer_move(&mut self, doc: &mut Document, position: Point, now: u64) -> Outcome {
        if self.paused {
            return Outcome::Ignored;
        }
        let Some(hit) = self.overlay.element_under(doc, position) else {
            return Outcome::Ignored;
        };
        if self.is_own_element(doc, hit) {
            return Outcome::Ignored;
        }
        if self.target != Some(hit) {
            self.target = Some(hit);
            self.debouncer.schedule(
                now,
                PendingReveal {
                    target: hit,
                    anchor: position,
                },
            );
        }
        Outcome::Consumed
    }

    fn on_pointer_out(
        &mut self,
        doc: &mut Document,
        target: NodeId,
        related: Option<NodeId>,
    ) -> Outcome {
        if self.paused {
            return Outcome::Ignored;
        }
        if self.target != Some(target) {
            return Outcome::Ignored;
        }
        // Moving into a descendant of the target is not a real exit.
        let into_descendant = related.is_some_and(|node| doc.contains(target, node));
        if !into_descendant {
            self.overlay.clear(doc);
        }
        Outcome::Consumed
    }

    fn on_click(&mut self, doc: &mut Document, target: Option<NodeId>, now: u64) -> Outcome {
        if self.target.is_none() {
            return Outcome::Ignored;
        }
        if target.is_some_and(|node| self.is_own_element(doc, node)) {
            return Outcome::Ignored;
        }
        let payload = self.panel.copy_payload();
        self.copier.copy(doc, &payload);
        self.panel.show_copied(now);
        Outcome::Consumed
    }

    fn on_key_down(
        &mut self,
        doc: &mut Document,
        key: Key,
        focus: Option<NodeId>,
        now: u64,
    ) -> Outcome {
        let focus_in_own_ui = focus.is_some_and(|node| self.is_own_element(doc, node));
        match key {
            Key::Escape => {
                if self.panel.is_comparison() {
                    self.panel.unpin();
                    Outcome::Consumed
                } else {
                    self.destroy(doc);
                    Outcome::Deactivated
                }
            }
            Key::Char(ch) if ch.eq_ignore_ascii_case(&'p') => {
                if self.target.is_some() && !focus_in_own_ui {
                    self.panel.pin(now);
                    Outcome::Consumed
                } else {
                    Outcome::Ignored
                }
            }
            Key::Char(ch) if ch.eq_ignore_ascii_case(&'r') => {
                if focus_in_own_ui {
                    Outcome::Ignored
                } else {
                    self.panel.toggle_responsive(doc);
                    Outcome::Consumed
                }
            }
            Key::Char(_) => Outcome::Ignored,
        }
    }

    /// Tear down: cancel the pending reveal, release every listener
    /// token, unmount the overlay and panel, and go inactive. Idempotent.
    pub fn destroy(&mut self, doc: &mut Document) {
        if !self.active {
            return;
        }
        self.debouncer.cancel();
        for token in self.tokens.drain(..) {
            if !doc.remove_listener(token) {
                log::debug!(target: "inspector", "listener token already released");
            }
        }
        self.overlay.unmount(doc);
        self.panel.destroy(doc);
        self.target = None;
        self.active = false;
        log::debug!(target: "inspector", "scanner deactivated");
    }
}
