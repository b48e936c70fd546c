//! Computed values as strings, with initial-value fallbacks.

use std::collections::HashMap;

/// Properties whose computed value passes from parent to child when the
/// child has no winning declaration of its own.
const INHERITED_PROPERTIES: &[&str] = &[
    "color",
    "cursor",
    "font-family",
    "font-size",
    "font-style",
    "font-weight",
    "letter-spacing",
    "line-height",
    "text-align",
    "text-decoration",
    "text-transform",
    "visibility",
    "white-space",
    "word-spacing",
];

/// Initial values for every property the inspector reads. Properties
/// outside this table have no initial value and simply stay absent.
const INITIAL_VALUES: &[(&str, &str)] = &[
    // Layout
    ("display", "inline"),
    ("position", "static"),
    ("top", "auto"),
    ("right", "auto"),
    ("bottom", "auto"),
    ("left", "auto"),
    ("width", "auto"),
    ("height", "auto"),
    ("min-width", "auto"),
    ("min-height", "auto"),
    ("max-width", "none"),
    ("max-height", "none"),
    ("margin", "0px"),
    ("margin-top", "0px"),
    ("margin-right", "0px"),
    ("margin-bottom", "0px"),
    ("margin-left", "0px"),
    ("padding", "0px"),
    ("padding-top", "0px"),
    ("padding-right", "0px"),
    ("padding-bottom", "0px"),
    ("padding-left", "0px"),
    ("box-sizing", "content-box"),
    ("overflow", "visible"),
    ("overflow-x", "visible"),
    ("overflow-y", "visible"),
    ("flex", "0 1 auto"),
    ("flex-direction", "row"),
    ("flex-wrap", "nowrap"),
    ("justify-content", "normal"),
    ("align-items", "normal"),
    ("grid", "none"),
    ("grid-template-columns", "none"),
    ("grid-template-rows", "none"),
    ("gap", "normal"),
    // Typography
    ("font-family", "sans-serif"),
    ("font-size", "16px"),
    ("font-weight", "400"),
    ("font-style", "normal"),
    ("line-height", "normal"),
    ("letter-spacing", "normal"),
    ("text-align", "start"),
    ("text-decoration", "none"),
    ("text-transform", "none"),
    ("color", "rgb(0, 0, 0)"),
    ("white-space", "normal"),
    ("word-spacing", "normal"),
    // Background
    ("background", "none"),
    ("background-color", "rgba(0, 0, 0, 0)"),
    ("background-image", "none"),
    ("background-size", "auto"),
    ("background-position", "0% 0%"),
    ("background-repeat", "repeat"),
    ("background-attachment", "scroll"),
    // Border
    ("border", "none"),
    ("border-width", "0px"),
    ("border-style", "none"),
    ("border-color", "rgb(0, 0, 0)"),
    ("border-top", "none"),
    ("border-right", "none"),
    ("border-bottom", "none"),
    ("border-left", "none"),
    ("border-radius", "0px"),
    ("box-shadow", "none"),
    ("outline", "none"),
    // Other
    ("opacity", "1"),
    ("z-index", "auto"),
    ("transform", "none"),
    ("transition", "all 0s ease 0s"),
    ("animation", "none"),
    ("cursor", "auto"),
    ("visibility", "visible"),
    ("filter", "none"),
];

/// The initial value of a property, if it has one in the table.
pub fn initial_value(property: &str) -> Option<&'static str> {
    INITIAL_VALUES
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, value)| *value)
}

/// Whether the property inherits from the parent element.
pub fn is_inherited_property(property: &str) -> bool {
    INHERITED_PROPERTIES.contains(&property)
}

/// Resolved style for one element.
///
/// Holds only the properties with a winning declaration or an inherited
/// value; everything else falls through to the initial-value table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComputedValues {
    specified: HashMap<String, String>,
}

impl ComputedValues {
    pub(crate) fn from_specified(specified: HashMap<String, String>) -> Self {
        Self { specified }
    }

    /// The computed value for a property, falling back to its initial
    /// value. `None` only for properties outside the initial-value table
    /// with no declaration.
    pub fn value(&self, property: &str) -> Option<&str> {
        self.specified
            .get(property)
            .map(String::as_str)
            .or_else(|| initial_value(property))
    }

    /// Properties with an explicit (cascaded or inherited) value.
    #[inline]
    pub fn specified(&self) -> &HashMap<String, String> {
        &self.specified
    }
}
