//! Hover-based computed-style inspection: breakpoint simulation, the
//! inspection panel, pointer tracking, and the activation protocol.

#![forbid(unsafe_code)]

mod breakpoint;
mod clipboard;
mod panel;
mod protocol;
mod scanner;
mod simulate;
mod tracker;

pub use breakpoint::{BREAKPOINTS, Breakpoint};
pub use clipboard::{ClipboardBackend, ClipboardError, Copier, MemoryClipboard};
pub use panel::{
    CategoryBlock, DiffRow, DiffStatus, InspectionPanel, LiveRow, NOTICE_DURATION_MS, Notice,
    PANEL_ELEMENT_ID, PANEL_MAX_HEIGHT, PANEL_WIDTH, PanelMode, PanelView, ResponsiveRow,
};
pub use protocol::{Ack, ActivationBridge, Request, ScannerFactory};
pub use scanner::{InputEvent, Key, Outcome, Scanner};
pub use simulate::{SURFACE_HEIGHT, SimulateError, capture_all};
pub use tracker::{DEBOUNCE_DELAY_MS, Debouncer, HIGHLIGHT_ELEMENT_ID, Overlay, PendingReveal};
