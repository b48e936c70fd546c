//! The inspection panel: display modes, pinning, breakpoint captures,
//! transient notices, and the copy-text payloads.

use crate::breakpoint::BREAKPOINTS;
use crate::simulate::capture_all;
use dom::{Document, DomError, NodeId, Point, Viewport};
use extract::{Category, StyleSnapshot};

pub const PANEL_ELEMENT_ID: &str = "css-scan-panel";
pub const PANEL_WIDTH: f32 = 380.0;
pub const PANEL_MAX_HEIGHT: f32 = 600.0;
/// How long a transient notice stays up, in milliseconds.
pub const NOTICE_DURATION_MS: u64 = 2000;

/// Which of the three displays the panel is showing. Responsive wins
/// over Comparison, Comparison over Live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelMode {
    Live,
    Comparison,
    Responsive,
}

/// Transient acknowledgment shown in the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Copied,
    Pinned,
}

/// A live-mode property row. `swatch` carries the value back when it
/// looks like a color and parses as one; presentation only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveRow {
    pub property: String,
    pub value: String,
    pub swatch: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffStatus {
    CurrentOnly(String),
    PinnedOnly(String),
    Different { pinned: String, current: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffRow {
    pub property: String,
    pub status: DiffStatus,
    pub swatch: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponsiveRow {
    pub property: String,
    pub value: String,
    /// The base-viewport value when it differs from `value`.
    pub was: Option<String>,
    pub swatch: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryBlock<Row> {
    pub category: Category,
    pub rows: Vec<Row>,
}

/// What the panel would render: pure data, no markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelView {
    Live {
        groups: Vec<CategoryBlock<LiveRow>>,
    },
    /// Identical rows are suppressed; categories left empty are dropped.
    Comparison {
        groups: Vec<CategoryBlock<DiffRow>>,
    },
    Responsive {
        breakpoint: &'static str,
        groups: Vec<CategoryBlock<ResponsiveRow>>,
    },
}

/// Panel state machine.
pub struct InspectionPanel {
    element: Option<NodeId>,
    visible: bool,
    position: Point,
    current: Option<(NodeId, StyleSnapshot)>,
    pinned: Option<StyleSnapshot>,
    comparison: bool,
    responsive: bool,
    breakpoint_styles: Vec<(&'static str, StyleSnapshot)>,
    selected_breakpoint: Option<&'static str>,
    notice: Option<(Notice, u64)>,
}

impl InspectionPanel {
    /// Mount the panel element into the document, hidden.
    ///
    /// # Errors
    /// Fails if the document root cannot take children, which only
    /// happens on a broken arena.
    pub fn mount(doc: &mut Document) -> Result<Self, DomError> {
        let root = doc.root();
        let element = doc.create_element(root, "div")?;
        doc.set_attr(element, "id", PANEL_ELEMENT_ID)?;
        doc.set_visible(element, false);
        Ok(Self {
            element: Some(element),
            visible: false,
            position: Point::default(),
            current: None,
            pinned: None,
            comparison: false,
            responsive: false,
            breakpoint_styles: Vec::new(),
            selected_breakpoint: None,
            notice: None,
        })
    }

    /// The mounted panel element, while alive.
    #[inline]
    pub fn element(&self) -> Option<NodeId> {
        self.element
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn current_element(&self) -> Option<NodeId> {
        self.current.as_ref().map(|(node, _)| *node)
    }

    #[inline]
    pub fn is_comparison(&self) -> bool {
        self.comparison
    }

    #[inline]
    pub fn is_responsive(&self) -> bool {
        self.responsive
    }

    pub fn mode(&self) -> PanelMode {
        if self.responsive {
            PanelMode::Responsive
        } else if self.comparison && self.pinned.is_some() {
            PanelMode::Comparison
        } else {
            PanelMode::Live
        }
    }

    /// The notice currently showing, if it has not expired.
    pub fn notice(&self, now: u64) -> Option<Notice> {
        self.notice
            .filter(|(_, deadline)| now < *deadline)
            .map(|(notice, _)| notice)
    }

    /// Expire a stale notice.
    pub fn tick(&mut self, now: u64) {
        if self.notice.is_some_and(|(_, deadline)| now >= deadline) {
            self.notice = None;
        }
    }

    /// Adopt a new current element and reposition near the anchor,
    /// clamped inside the viewport. While responsive mode is active, a
    /// change of element rebuilds the breakpoint captures for it.
    pub fn show(&mut self, doc: &Document, element: NodeId, snapshot: StyleSnapshot, anchor: Point) {
        let changed = self.current_element() != Some(element);
        self.current = Some((element, snapshot));
        self.visible = true;
        self.position = clamp_position(anchor, doc.viewport());
        if self.responsive && changed {
            self.recapture(doc);
        }
    }

    /// Pin the current element for comparison. No-op without one.
    pub fn pin(&mut self, now: u64) {
        let Some((_, snapshot)) = &self.current else {
            return;
        };
        self.pinned = Some(snapshot.clone());
        self.comparison = true;
        self.notice = Some((Notice::Pinned, now + NOTICE_DURATION_MS));
    }

    /// Leave comparison mode, keeping the current element.
    pub fn unpin(&mut self) {
        self.pinned = None;
        self.comparison = false;
    }

    /// Show the copy acknowledgment.
    pub fn show_copied(&mut self, now: u64) {
        self.notice = Some((Notice::Copied, now + NOTICE_DURATION_MS));
    }

    /// Toggle responsive mode. Entering captures the current element at
    /// every breakpoint synchronously; exiting discards the captures.
    pub fn toggle_responsive(&mut self, doc: &Document) {
        self.responsive = !self.responsive;
        if self.responsive {
            if self.current.is_some() {
                self.recapture(doc);
            }
        } else {
            self.breakpoint_styles = Vec::new();
            self.selected_breakpoint = None;
        }
    }

    /// Rebuild the breakpoint captures for the current element. A failed
    /// capture leaves no captures, so the view falls back to the base
    /// snapshot.
    fn recapture(&mut self, doc: &Document) {
        let Some(element) = self.current_element() else {
            self.breakpoint_styles = Vec::new();
            return;
        };
        match capture_all(doc, element) {
            Ok(captures) => self.breakpoint_styles = captures,
            Err(error) => {
                log::debug!(target: "inspector", "breakpoint capture skipped: {error}");
                self.breakpoint_styles = Vec::new();
            }
        }
    }

    /// Select a breakpoint tab. Only valid while responsive.
    pub fn select_breakpoint(&mut self, name: &str) -> bool {
        if !self.responsive {
            return false;
        }
        let Some(breakpoint) = BREAKPOINTS.iter().find(|entry| entry.name == name) else {
            return false;
        };
        self.selected_breakpoint = Some(breakpoint.name);
        true
    }

    /// The breakpoint whose capture is displayed; defaults to the first.
    pub fn active_breakpoint(&self) -> &'static str {
        self.selected_breakpoint.unwrap_or(BREAKPOINTS[0].name)
    }

    /// Hide without losing any state.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Unmount the panel element. Idempotent.
    pub fn destroy(&mut self, doc: &mut Document) {
        if let Some(element) = self.element.take() {
            doc.remove_element(element);
        }
        self.visible = false;
        self.current = None;
        self.pinned = None;
        self.comparison = false;
        self.responsive = false;
        self.breakpoint_styles = Vec::new();
        self.selected_breakpoint = None;
        self.notice = None;
    }

    /// Build the view model for the active mode.
    pub fn view(&self) -> PanelView {
        match self.mode() {
            PanelMode::Live => PanelView::Live {
                groups: self.live_groups(),
            },
            PanelMode::Comparison => PanelView::Comparison {
                groups: self.comparison_groups(),
            },
            PanelMode::Responsive => PanelView::Responsive {
                breakpoint: self.active_breakpoint(),
                groups: self.responsive_groups(),
            },
        }
    }

    fn current_snapshot(&self) -> Option<&StyleSnapshot> {
        self.current.as_ref().map(|(_, snapshot)| snapshot)
    }

    fn live_groups(&self) -> Vec<CategoryBlock<LiveRow>> {
        let Some(snapshot) = self.current_snapshot() else {
            return Vec::new();
        };
        snapshot
            .groups()
            .iter()
            .map(|(category, pairs)| CategoryBlock {
                category: *category,
                rows: pairs
                    .iter()
                    .map(|(property, value)| LiveRow {
                        property: property.clone(),
                        value: value.clone(),
                        swatch: swatch(value),
                    })
                    .collect(),
            })
            .collect()
    }

    fn comparison_groups(&self) -> Vec<CategoryBlock<DiffRow>> {
        let (Some(pinned), Some(current)) = (self.pinned.as_ref(), self.current_snapshot()) else {
            return Vec::new();
        };
        let mut groups = Vec::new();
        for category in union_categories(pinned, current) {
            let pinned_pairs = pinned.category(category);
            let current_pairs = current.category(category);
            let mut rows = Vec::new();
            for property in union_properties(pinned_pairs, current_pairs) {
                let pinned_value = pair_value(pinned_pairs, &property);
                let current_value = pair_value(current_pairs, &property);
                let status = match (pinned_value, current_value) {
                    (None, Some(value)) => DiffStatus::CurrentOnly(value.to_owned()),
                    (Some(value), None) => DiffStatus::PinnedOnly(value.to_owned()),
                    (Some(old), Some(new)) if old != new => DiffStatus::Different {
                        pinned: old.to_owned(),
                        current: new.to_owned(),
                    },
                    // Identical rows are not interesting in a comparison.
                    _ => continue,
                };
                let color_source = current_value.or(pinned_value).unwrap_or_default();
                rows.push(DiffRow {
                    property,
                    status,
                    swatch: swatch(color_source),
                });
            }
            if !rows.is_empty() {
                groups.push(CategoryBlock { category, rows });
            }
        }
        groups
    }

    fn responsive_groups(&self) -> Vec<CategoryBlock<ResponsiveRow>> {
        let Some(base) = self.current_snapshot() else {
            return Vec::new();
        };
        // A breakpoint that was never captured falls back to the base
        // snapshot, rendering with no changes flagged.
        let captured = self
            .breakpoint_styles
            .iter()
            .find(|(name, _)| *name == self.active_breakpoint())
            .map(|(_, snapshot)| snapshot);
        let at_breakpoint = captured.unwrap_or(base);
        let mut groups = Vec::new();
        for category in union_categories(base, at_breakpoint) {
            let base_pairs = base.category(category);
            let breakpoint_pairs = at_breakpoint.category(category);
            let mut rows = Vec::new();
            for property in union_properties(base_pairs, breakpoint_pairs) {
                let base_value = pair_value(base_pairs, &property);
                let breakpoint_value = pair_value(breakpoint_pairs, &property);
                let changed = base_value != breakpoint_value;
                let shown = breakpoint_value.or(base_value).unwrap_or_default();
                rows.push(ResponsiveRow {
                    property,
                    value: shown.to_owned(),
                    was: if changed {
                        base_value.map(str::to_owned)
                    } else {
                        None
                    },
                    swatch: swatch(shown),
                });
            }
            if !rows.is_empty() {
                groups.push(CategoryBlock { category, rows });
            }
        }
        groups
    }

    /// The text a click should copy in the active mode: the comparison
    /// diff while comparing, otherwise the plain live payload.
    pub fn copy_payload(&self) -> String {
        if self.mode() == PanelMode::Comparison {
            self.differences_css()
        } else {
            self.live_css()
        }
    }

    /// `prop: value;` lines for the current snapshot, in category order.
    pub fn live_css(&self) -> String {
        let Some(snapshot) = self.current_snapshot() else {
            return String::new();
        };
        let mut css = String::new();
        for (_, pairs) in snapshot.groups() {
            for (property, value) in pairs {
                css.push_str(&format!("{property}: {value};\n"));
            }
        }
        css
    }

    /// The comparison diff as annotated CSS. Empty unless comparison
    /// mode is active with both snapshots present.
    pub fn differences_css(&self) -> String {
        if !self.comparison {
            return String::new();
        }
        let (Some(pinned), Some(current)) = (self.pinned.as_ref(), self.current_snapshot()) else {
            return String::new();
        };
        let mut css = String::from("/* CSS Differences */\n\n");
        for category in union_categories(pinned, current) {
            let pinned_pairs = pinned.category(category);
            let current_pairs = current.category(category);
            let mut group_css = String::new();
            for property in union_properties(pinned_pairs, current_pairs) {
                let pinned_value = pair_value(pinned_pairs, &property);
                let current_value = pair_value(current_pairs, &property);
                match (pinned_value, current_value) {
                    (None, Some(value)) => {
                        group_css.push_str(&format!("{property}: {value}; /* only in current */\n"));
                    }
                    (Some(value), None) => {
                        group_css.push_str(&format!("{property}: {value}; /* only in pinned */\n"));
                    }
                    (Some(old), Some(new)) if old != new => {
                        group_css.push_str(&format!("{property}: {new}; /* was: {old} */\n"));
                    }
                    _ => {}
                }
            }
            if !group_css.is_empty() {
                css.push_str(&format!("/* {category} */\n{group_css}\n"));
            }
        }
        css
    }
}

/// Preferred position is the anchor plus a 20px offset on both axes;
/// flip left of the anchor when overflowing the right edge, pull up when
/// overflowing the bottom, and never sit closer than 10px to the
/// top-left edges.
fn clamp_position(anchor: Point, viewport: Viewport) -> Point {
    let panel_height = PANEL_MAX_HEIGHT.min(viewport.height - 40.0);
    let mut left = anchor.x + 20.0;
    let mut top = anchor.y + 20.0;
    if left + PANEL_WIDTH > viewport.width {
        left = anchor.x - PANEL_WIDTH - 20.0;
    }
    if top + panel_height > viewport.height {
        top = viewport.height - panel_height - 20.0;
    }
    Point::new(left.max(10.0), top.max(10.0))
}

/// Validate a value as a color swatch: it must carry a hex/rgb/hsl
/// marker and actually parse.
fn swatch(value: &str) -> Option<String> {
    if !(value.contains('#') || value.contains("rgb") || value.contains("hsl")) {
        return None;
    }
    csscolorparser::parse(value).ok().map(|_| value.to_owned())
}

/// Categories of `first` in order, then categories only in `second`.
fn union_categories(first: &StyleSnapshot, second: &StyleSnapshot) -> Vec<Category> {
    let mut categories: Vec<Category> = first.groups().iter().map(|(category, _)| *category).collect();
    for (category, _) in second.groups() {
        if !categories.contains(category) {
            categories.push(*category);
        }
    }
    categories
}

/// Property names of `first` in order, then names only in `second`.
fn union_properties(
    first: Option<&[(String, String)]>,
    second: Option<&[(String, String)]>,
) -> Vec<String> {
    let mut names: Vec<String> = first
        .unwrap_or_default()
        .iter()
        .map(|(name, _)| name.clone())
        .collect();
    for (name, _) in second.unwrap_or_default() {
        if !names.iter().any(|existing| existing == name) {
            names.push(name.clone());
        }
    }
    names
}

fn pair_value<'pairs>(pairs: Option<&'pairs [(String, String)]>, property: &str) -> Option<&'pairs str> {
    pairs?
        .iter()
        .find(|(name, _)| name == property)
        .map(|(_, value)| value.as_str())
}
