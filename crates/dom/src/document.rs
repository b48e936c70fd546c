//! The document: an element arena plus viewport, sheets, and listeners.

use crate::geometry::{Point, Rect};
use crate::listeners::{EventKind, ListenerId, ListenerRegistry};
use crate::sheets::{SheetProvenance, StylesheetAttachment};
use crate::DomError;
use indextree::{Arena, Node, NodeId};
use smallvec::SmallVec;

/// Visual viewport of the document in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Per-element payload stored in the arena.
#[derive(Clone, Debug, Default)]
pub struct ElementData {
    tag: String,
    attrs: SmallVec<(String, String), 4>,
    rect: Option<Rect>,
    visible: bool,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: SmallVec::new(),
            rect: None,
            visible: true,
        }
    }

    /// Tag name in ASCII lowercase.
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| attr_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        let lowered = name.to_ascii_lowercase();
        for (attr_name, attr_value) in &mut self.attrs {
            if *attr_name == lowered {
                value.clone_into(attr_value);
                return;
            }
        }
        self.attrs.push((lowered, value.to_owned()));
    }

    /// The `id` attribute, if present.
    #[inline]
    pub fn element_id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// True if the `class` attribute contains the given token.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class").is_some_and(|list| {
            list.split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case(class))
        })
    }

    /// Host-provided layout rectangle in document coordinates.
    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Whether the element takes part in hit testing.
    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }
}

/// A live document: element tree, viewport, stylesheets, listeners.
#[derive(Debug)]
pub struct Document {
    arena: Arena<ElementData>,
    root: NodeId,
    viewport: Viewport,
    scroll: Point,
    sheets: Vec<StylesheetAttachment>,
    listeners: ListenerRegistry,
}

impl Document {
    /// Create an empty document with the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(ElementData::new("#document"));
        Self {
            arena,
            root,
            viewport,
            scroll: Point::default(),
            sheets: Vec::new(),
            listeners: ListenerRegistry::default(),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn scroll(&self) -> Point {
        self.scroll
    }

    #[inline]
    pub fn set_scroll(&mut self, offset: Point) {
        self.scroll = offset;
    }

    /// Whether the node still resolves to a live element under the root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        if self.arena.get(node).is_none_or(Node::is_removed) {
            return false;
        }
        node.ancestors(&self.arena).any(|ancestor| ancestor == self.root)
    }

    /// Create an element under `parent`.
    ///
    /// # Errors
    /// Fails with [`DomError::Detached`] if the parent is not attached.
    pub fn create_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, DomError> {
        if !self.is_attached(parent) {
            return Err(DomError::Detached);
        }
        let node = self.arena.new_node(ElementData::new(tag));
        parent.append(node, &mut self.arena);
        Ok(node)
    }

    /// Remove an element and its subtree. Removing an already-detached
    /// node is a no-op.
    pub fn remove_element(&mut self, node: NodeId) {
        if node == self.root || self.arena.get(node).is_none_or(Node::is_removed) {
            return;
        }
        node.remove_subtree(&mut self.arena);
    }

    /// Element payload, if the node is live.
    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .map(Node::get)
    }

    /// Set an attribute on an attached element.
    ///
    /// # Errors
    /// Fails with [`DomError::Detached`] if the node is not attached.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        if !self.is_attached(node) {
            return Err(DomError::Detached);
        }
        if let Some(entry) = self.arena.get_mut(node) {
            entry.get_mut().set_attr(name, value);
        }
        Ok(())
    }

    /// Record the host-measured layout rectangle for an element.
    ///
    /// # Errors
    /// Fails with [`DomError::Detached`] if the node is not attached.
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) -> Result<(), DomError> {
        if !self.is_attached(node) {
            return Err(DomError::Detached);
        }
        if let Some(entry) = self.arena.get_mut(node) {
            entry.get_mut().rect = Some(rect);
        }
        Ok(())
    }

    /// Toggle an element's participation in hit testing.
    pub fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(entry) = self.arena.get_mut(node) {
            entry.get_mut().visible = visible;
        }
    }

    /// Parent element of a node, excluding the document root.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .and_then(Node::parent)
            .filter(|parent| *parent != self.root)
    }

    /// Previous sibling element, for sibling combinator matching.
    pub fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .and_then(Node::previous_sibling)
    }

    /// Child elements of a node, in tree order.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        if self.arena.get(node).is_none_or(Node::is_removed) {
            return Vec::new();
        }
        node.children(&self.arena).collect()
    }

    /// Ancestor chain from the root down to (and including) the node.
    pub fn ancestor_chain(&self, node: NodeId) -> Vec<NodeId> {
        if !self.is_attached(node) {
            return Vec::new();
        }
        let mut chain: Vec<NodeId> = node
            .ancestors(&self.arena)
            .filter(|ancestor| *ancestor != self.root)
            .collect();
        chain.reverse();
        chain
    }

    /// True if `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if self.arena.get(node).is_none_or(Node::is_removed) {
            return false;
        }
        node.ancestors(&self.arena).any(|entry| entry == ancestor)
    }

    /// Deepest visible element whose rectangle contains the point.
    ///
    /// Later siblings win over earlier ones and descendants win over their
    /// ancestors, approximating paint order for a statically laid out page.
    pub fn element_from_point(&self, point: Point) -> Option<NodeId> {
        self.hit_descend(self.root, point)
    }

    fn hit_descend(&self, node: NodeId, point: Point) -> Option<NodeId> {
        let payload = self.element(node)?;
        if node != self.root && !payload.visible {
            return None;
        }
        let mut best = payload
            .rect
            .filter(|rect| node != self.root && rect.contains(point))
            .map(|_| node);
        for child in node.children(&self.arena) {
            if let Some(hit) = self.hit_descend(child, point) {
                best = Some(hit);
            }
        }
        best
    }

    /// Deep-copy a subtree (tags and attributes, not geometry) into
    /// another document under `parent`, returning the new subtree root.
    ///
    /// # Errors
    /// Fails with [`DomError::Detached`] if the source node or the target
    /// parent is not attached.
    pub fn clone_subtree_into(
        &self,
        node: NodeId,
        target: &mut Self,
        parent: NodeId,
    ) -> Result<NodeId, DomError> {
        let payload = self.element(node).ok_or(DomError::Detached)?;
        if !self.is_attached(node) {
            return Err(DomError::Detached);
        }
        let copy = target.create_element(parent, &payload.tag)?;
        for (name, value) in &payload.attrs {
            target.set_attr(copy, name, value)?;
        }
        for child in node.children(&self.arena) {
            self.clone_subtree_into(child, target, copy)?;
        }
        Ok(copy)
    }

    /// Attach an inline stylesheet.
    pub fn add_stylesheet(&mut self, text: &str) {
        self.sheets.push(StylesheetAttachment::new(
            text.to_owned(),
            SheetProvenance::Inline,
        ));
    }

    /// Attach a linked stylesheet with its origin marker.
    pub fn add_external_stylesheet(&mut self, text: &str, url: &str, cross_origin: bool) {
        self.sheets.push(StylesheetAttachment::new(
            text.to_owned(),
            SheetProvenance::External {
                url: url.to_owned(),
                cross_origin,
            },
        ));
    }

    /// Attached stylesheets in attachment order.
    #[inline]
    pub fn stylesheets(&self) -> &[StylesheetAttachment] {
        &self.sheets
    }

    /// Register a document-level listener subscription.
    #[inline]
    pub fn add_listener(&mut self, kind: EventKind) -> ListenerId {
        self.listeners.register(kind)
    }

    /// Release a listener subscription token.
    #[inline]
    pub fn remove_listener(&mut self, token: ListenerId) -> bool {
        self.listeners.release(token)
    }

    /// Count of live listener subscriptions.
    #[inline]
    pub fn listener_count(&self) -> usize {
        self.listeners.count()
    }

    /// Count of live subscriptions for one event kind.
    #[inline]
    pub fn listener_count_of(&self, kind: EventKind) -> usize {
        self.listeners.count_of(kind)
    }
}
