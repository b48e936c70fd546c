//! Selector matching against a live document, right to left.

use crate::selector::{Combinator, ComplexSelector, CompoundSelector, SimpleSelector};
use dom::{Document, NodeId};

/// Whether the element matches the complex selector.
pub fn matches_complex(doc: &Document, element: NodeId, selector: &ComplexSelector) -> bool {
    let mut compounds: Vec<&CompoundSelector> = Vec::with_capacity(selector.rest.len() + 1);
    let mut links: Vec<Combinator> = Vec::with_capacity(selector.rest.len());
    compounds.push(&selector.first);
    for (combinator, compound) in &selector.rest {
        links.push(*combinator);
        compounds.push(compound);
    }
    matches_from(doc, element, &compounds, &links, compounds.len() - 1)
}

/// Match the compound at `index` against `node`, then walk leftwards
/// through the combinator chain with backtracking.
fn matches_from(
    doc: &Document,
    node: NodeId,
    compounds: &[&CompoundSelector],
    links: &[Combinator],
    index: usize,
) -> bool {
    let Some(compound) = compounds.get(index) else {
        return false;
    };
    if !matches_compound(doc, node, compound) {
        return false;
    }
    let Some(next) = index.checked_sub(1) else {
        return true;
    };
    match links.get(next) {
        Some(Combinator::Child) => doc
            .parent(node)
            .is_some_and(|parent| matches_from(doc, parent, compounds, links, next)),
        Some(Combinator::Descendant) => {
            let mut cursor = doc.parent(node);
            while let Some(ancestor) = cursor {
                if matches_from(doc, ancestor, compounds, links, next) {
                    return true;
                }
                cursor = doc.parent(ancestor);
            }
            false
        }
        Some(Combinator::NextSibling) => doc
            .previous_sibling(node)
            .is_some_and(|sibling| matches_from(doc, sibling, compounds, links, next)),
        Some(Combinator::SubsequentSibling) => {
            let mut cursor = doc.previous_sibling(node);
            while let Some(sibling) = cursor {
                if matches_from(doc, sibling, compounds, links, next) {
                    return true;
                }
                cursor = doc.previous_sibling(sibling);
            }
            false
        }
        None => false,
    }
}

fn matches_compound(doc: &Document, node: NodeId, compound: &CompoundSelector) -> bool {
    let Some(payload) = doc.element(node) else {
        return false;
    };
    compound.simples.iter().all(|simple| match simple {
        SimpleSelector::Universal => true,
        SimpleSelector::Type(name) => payload.tag() == name,
        SimpleSelector::Id(name) => payload.element_id() == Some(name.as_str()),
        SimpleSelector::Class(name) => payload.has_class(name),
        SimpleSelector::AttrExists(name) => payload.attr(name).is_some(),
        SimpleSelector::AttrEquals { name, value } => payload.attr(name) == Some(value.as_str()),
    })
}
