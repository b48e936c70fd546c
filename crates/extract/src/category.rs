//! Property categories and the fixed property-to-category table.

use std::fmt;

/// Display category for a group of properties. Categories always render
/// in the declaration order of this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Layout,
    Typography,
    Background,
    Border,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::Layout,
        Self::Typography,
        Self::Background,
        Self::Border,
        Self::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Layout => "Layout",
            Self::Typography => "Typography",
            Self::Background => "Background",
            Self::Border => "Border",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

const LAYOUT: &[&str] = &[
    "display",
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "width",
    "height",
    "min-width",
    "min-height",
    "max-width",
    "max-height",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "box-sizing",
    "overflow",
    "overflow-x",
    "overflow-y",
    "flex",
    "flex-direction",
    "flex-wrap",
    "justify-content",
    "align-items",
    "grid",
    "grid-template-columns",
    "grid-template-rows",
    "gap",
];

const TYPOGRAPHY: &[&str] = &[
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "line-height",
    "letter-spacing",
    "text-align",
    "text-decoration",
    "text-transform",
    "color",
    "white-space",
    "word-spacing",
];

const BACKGROUND: &[&str] = &[
    "background",
    "background-color",
    "background-image",
    "background-size",
    "background-position",
    "background-repeat",
    "background-attachment",
];

const BORDER: &[&str] = &[
    "border",
    "border-width",
    "border-style",
    "border-color",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-radius",
    "box-shadow",
    "outline",
];

const OTHER: &[&str] = &[
    "opacity",
    "z-index",
    "transform",
    "transition",
    "animation",
    "cursor",
    "visibility",
    "filter",
];

/// Properties inspected for a category, in display order.
pub const fn category_properties(category: Category) -> &'static [&'static str] {
    match category {
        Category::Layout => LAYOUT,
        Category::Typography => TYPOGRAPHY,
        Category::Background => BACKGROUND,
        Category::Border => BORDER,
        Category::Other => OTHER,
    }
}
