//! String-valued style resolution for inspecting documents.
//!
//! Parses stylesheets with `cssparser`, matches a Selectors Level 3
//! subset, and cascades declarations into per-element computed values.
//! Values stay as strings end to end; no unit arithmetic is performed.

#![forbid(unsafe_code)]

mod computed;
mod matcher;
mod media;
mod resolve;
mod selector;
mod sheet;
mod ua;

pub use computed::{ComputedValues, initial_value, is_inherited_property};
pub use matcher::matches_complex;
pub use media::MediaCondition;
pub use resolve::{Resolver, StyleError};
pub use selector::{
    Combinator, ComplexSelector, CompoundSelector, SelectorList, SimpleSelector, Specificity,
    parse_selector_list, specificity_of_complex, specificity_of_compound,
};
pub use sheet::{Declaration, StyleRule, Stylesheet, parse_declaration_list, parse_stylesheet};
