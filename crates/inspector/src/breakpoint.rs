//! The fixed breakpoint set. Configuration, not state.

/// A named viewport width to simulate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub name: &'static str,
    pub width: f32,
    pub icon: &'static str,
}

/// Breakpoints in display order.
pub const BREAKPOINTS: [Breakpoint; 3] = [
    Breakpoint {
        name: "Mobile",
        width: 375.0,
        icon: "smartphone",
    },
    Breakpoint {
        name: "Tablet",
        width: 768.0,
        icon: "tablet",
    },
    Breakpoint {
        name: "Desktop",
        width: 1440.0,
        icon: "monitor",
    },
];
