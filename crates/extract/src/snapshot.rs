//! Building style snapshots from computed values.

use crate::category::{Category, category_properties};
use crate::filter::should_include;
use dom::{Document, NodeId};
use style::{ComputedValues, Resolver, StyleError};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Categorized property/value pairs for one element at one viewport
/// width. Categories with nothing interesting in them are absent, and
/// both categories and properties keep their fixed display order, so
/// equal snapshots compare equal structurally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSnapshot {
    groups: Vec<(Category, Vec<(String, String)>)>,
}

impl StyleSnapshot {
    /// Non-empty categories in display order.
    #[inline]
    pub fn groups(&self) -> &[(Category, Vec<(String, String)>)] {
        &self.groups
    }

    /// True when nothing interesting was extracted at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Property/value pairs for one category, if it is present.
    pub fn category(&self, category: Category) -> Option<&[(String, String)]> {
        self.groups
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, pairs)| pairs.as_slice())
    }

    /// Value of one property in one category, if present.
    pub fn value_of(&self, category: Category, property: &str) -> Option<&str> {
        self.category(category)?
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

/// Group computed values into a snapshot, filtering defaults.
pub fn group_values(values: &ComputedValues) -> StyleSnapshot {
    let mut groups = Vec::new();
    for category in Category::ALL {
        let mut pairs = Vec::new();
        for property in category_properties(category) {
            if let Some(value) = values.value(property)
                && should_include(property, value)
            {
                pairs.push(((*property).to_owned(), value.to_owned()));
            }
        }
        if !pairs.is_empty() {
            groups.push((category, pairs));
        }
    }
    StyleSnapshot { groups }
}

/// Extract a snapshot for an element at the document's own viewport.
///
/// # Errors
/// Fails if the element is detached from the document.
pub fn extract(doc: &Document, element: NodeId) -> Result<StyleSnapshot, ExtractError> {
    let resolver = Resolver::new(doc);
    extract_at(doc, &resolver, element, doc.viewport().width)
}

/// Extract a snapshot with a prepared resolver at an explicit width,
/// as used when simulating breakpoints.
///
/// # Errors
/// Fails if the element is detached from the document.
pub fn extract_at(
    doc: &Document,
    resolver: &Resolver,
    element: NodeId,
    viewport_width: f32,
) -> Result<StyleSnapshot, ExtractError> {
    let values = resolver.compute(doc, element, viewport_width)?;
    Ok(group_values(&values))
}
