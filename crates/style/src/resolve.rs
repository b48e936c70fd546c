//! The cascade: resolving computed values for elements of a document.

use crate::computed::{ComputedValues, is_inherited_property};
use crate::matcher::matches_complex;
use crate::media::MediaCondition;
use crate::selector::{SelectorList, Specificity, parse_selector_list, specificity_of_complex};
use crate::sheet::{Declaration, Stylesheet, parse_declaration_list, parse_stylesheet};
use crate::ua;
use dom::{Document, NodeId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("cannot resolve styles for a detached element")]
    DetachedElement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Origin {
    UserAgent,
    Author,
}

struct ResolvedRule {
    selectors: SelectorList,
    declarations: Vec<Declaration>,
    media: Option<MediaCondition>,
    origin: Origin,
    order: u32,
}

/// One candidate declaration for a property during the cascade.
struct CascadedDecl {
    value: String,
    important: bool,
    inline: bool,
    origin: Origin,
    specificity: Specificity,
    order: u32,
}

impl CascadedDecl {
    /// `!important` beats normal, inline style beats sheet rules, then
    /// origin, specificity, and source order. Ties go to the newcomer,
    /// so later declarations win.
    fn wins_over(&self, other: &Self) -> bool {
        (
            self.important,
            self.inline,
            self.origin,
            self.specificity,
            self.order,
        ) >= (
            other.important,
            other.inline,
            other.origin,
            other.specificity,
            other.order,
        )
    }
}

fn cascade_put(winners: &mut HashMap<String, CascadedDecl>, name: &str, candidate: CascadedDecl) {
    match winners.entry(name.to_owned()) {
        Entry::Occupied(mut slot) => {
            if candidate.wins_over(slot.get()) {
                slot.insert(candidate);
            }
        }
        Entry::Vacant(slot) => {
            slot.insert(candidate);
        }
    }
}

/// Pre-parsed rules from the user-agent sheet and the document's
/// stylesheets, ready to resolve elements at any viewport width.
pub struct Resolver {
    rules: Vec<ResolvedRule>,
}

impl Resolver {
    /// Parse the document's stylesheets (behind the user-agent sheet)
    /// into a resolver.
    pub fn new(doc: &Document) -> Self {
        let mut rules = Vec::new();
        let mut order = 0u32;
        push_sheet(&mut rules, &mut order, &ua::sheet(), Origin::UserAgent);
        for attachment in doc.stylesheets() {
            let sheet = parse_stylesheet(attachment.text());
            push_sheet(&mut rules, &mut order, &sheet, Origin::Author);
        }
        Self { rules }
    }

    /// Computed values for an element at the given viewport width.
    ///
    /// Walks the ancestor chain top-down so inherited properties flow
    /// through intermediate elements.
    ///
    /// # Errors
    /// Fails with [`StyleError::DetachedElement`] if the element is not
    /// attached to the document.
    pub fn compute(
        &self,
        doc: &Document,
        element: NodeId,
        viewport_width: f32,
    ) -> Result<ComputedValues, StyleError> {
        if !doc.is_attached(element) {
            return Err(StyleError::DetachedElement);
        }
        let mut inherited: Option<ComputedValues> = None;
        for node in doc.ancestor_chain(element) {
            let resolved = self.compute_one(doc, node, viewport_width, inherited.as_ref());
            inherited = Some(resolved);
        }
        Ok(inherited.unwrap_or_default())
    }

    fn compute_one(
        &self,
        doc: &Document,
        node: NodeId,
        viewport_width: f32,
        inherited: Option<&ComputedValues>,
    ) -> ComputedValues {
        let mut winners: HashMap<String, CascadedDecl> = HashMap::new();
        for rule in &self.rules {
            if rule.media.is_some_and(|cond| !cond.matches(viewport_width)) {
                continue;
            }
            let matched = rule
                .selectors
                .selectors
                .iter()
                .filter(|selector| matches_complex(doc, node, selector))
                .map(specificity_of_complex)
                .max();
            let Some(specificity) = matched else {
                continue;
            };
            for decl in &rule.declarations {
                cascade_put(
                    &mut winners,
                    &decl.name,
                    CascadedDecl {
                        value: decl.value.clone(),
                        important: decl.important,
                        inline: false,
                        origin: rule.origin,
                        specificity,
                        order: rule.order,
                    },
                );
            }
        }
        if let Some(payload) = doc.element(node)
            && let Some(text) = payload.attr("style")
        {
            for (index, decl) in parse_declaration_list(text).into_iter().enumerate() {
                cascade_put(
                    &mut winners,
                    &decl.name,
                    CascadedDecl {
                        value: decl.value,
                        important: decl.important,
                        inline: true,
                        origin: Origin::Author,
                        specificity: Specificity::default(),
                        order: index as u32,
                    },
                );
            }
        }

        let mut specified: HashMap<String, String> = HashMap::new();
        if let Some(parent_values) = inherited {
            for (name, value) in parent_values.specified() {
                if is_inherited_property(name) {
                    specified.insert(name.clone(), value.clone());
                }
            }
        }
        for (name, decl) in winners {
            specified.insert(name, decl.value);
        }
        ComputedValues::from_specified(specified)
    }
}

fn push_sheet(rules: &mut Vec<ResolvedRule>, order: &mut u32, sheet: &Stylesheet, origin: Origin) {
    for rule in &sheet.rules {
        let Some(selectors) = parse_selector_list(&rule.prelude) else {
            log::debug!(target: "style", "skipping rule with unsupported selector: {}", rule.prelude);
            continue;
        };
        rules.push(ResolvedRule {
            selectors,
            declarations: rule.declarations.clone(),
            media: rule.media,
            origin,
            order: *order,
        });
        *order = order.saturating_add(1);
    }
}
