//! Minimal user-agent stylesheet.

use crate::sheet::{Stylesheet, parse_stylesheet};

const UA_CSS: &str = "
html, body, div, p, h1, h2, h3, h4, h5, h6, ul, ol, li,
header, footer, nav, main, section, article, aside,
form, fieldset, blockquote, pre, table { display: block; }
body { margin: 8px; }
h1 { font-size: 32px; font-weight: 700; }
h2 { font-size: 24px; font-weight: 700; }
h3 { font-size: 18.72px; font-weight: 700; }
a { color: rgb(0, 0, 238); text-decoration: underline; cursor: pointer; }
button { cursor: default; text-align: center; }
";

/// Parse the built-in user-agent rules.
pub fn sheet() -> Stylesheet {
    parse_stylesheet(UA_CSS)
}
