//! Cascade and resolution behavior over small documents.

use dom::{Document, NodeId, Viewport};
use std::error::Error;
use style::{Resolver, StyleError};

type TestResult = Result<(), Box<dyn Error>>;

/// html > body > div#target.box, with the given stylesheet attached.
fn doc_with_css(css: &str) -> Result<(Document, NodeId), Box<dyn Error>> {
    let mut doc = Document::new(Viewport::new(1200.0, 800.0));
    let root = doc.root();
    let html = doc.create_element(root, "html")?;
    let body = doc.create_element(html, "body")?;
    let target = doc.create_element(body, "div")?;
    doc.set_attr(target, "id", "target")?;
    doc.set_attr(target, "class", "box")?;
    doc.add_stylesheet(css);
    Ok((doc, target))
}

fn value_at(doc: &Document, target: NodeId, width: f32, property: &str) -> Result<String, Box<dyn Error>> {
    let resolver = Resolver::new(doc);
    let computed = resolver.compute(doc, target, width)?;
    Ok(computed
        .value(property)
        .ok_or_else(|| format!("no value for {property}"))?
        .to_owned())
}

#[test]
fn class_beats_type_selector() -> TestResult {
    let (doc, target) = doc_with_css("div { color: red; } .box { color: blue; }")?;
    if value_at(&doc, target, 1200.0, "color")? != "blue" {
        return Err("class selector should outrank type selector".into());
    }
    Ok(())
}

#[test]
fn important_beats_higher_specificity() -> TestResult {
    let (doc, target) = doc_with_css("#target { color: red; } div { color: blue !important; }")?;
    if value_at(&doc, target, 1200.0, "color")? != "blue" {
        return Err("!important should outrank id specificity".into());
    }
    Ok(())
}

#[test]
fn inline_style_beats_sheet_rules() -> TestResult {
    let (mut doc, target) = doc_with_css("#target { color: red; }")?;
    doc.set_attr(target, "style", "color: green")?;
    if value_at(&doc, target, 1200.0, "color")? != "green" {
        return Err("inline declaration should outrank sheet rules".into());
    }
    Ok(())
}

#[test]
fn important_sheet_rule_beats_inline_normal() -> TestResult {
    let (mut doc, target) = doc_with_css("#target { color: red !important; }")?;
    doc.set_attr(target, "style", "color: green")?;
    if value_at(&doc, target, 1200.0, "color")? != "red" {
        return Err("important sheet rule should outrank normal inline".into());
    }
    Ok(())
}

#[test]
fn later_rule_wins_ties() -> TestResult {
    let (doc, target) = doc_with_css("div { color: red; } div { color: blue; }")?;
    if value_at(&doc, target, 1200.0, "color")? != "blue" {
        return Err("later rule should win a full tie".into());
    }
    Ok(())
}

#[test]
fn descendant_combinator_matches_through_levels() -> TestResult {
    let (doc, target) = doc_with_css("html div { color: purple; }")?;
    if value_at(&doc, target, 1200.0, "color")? != "purple" {
        return Err("descendant combinator should match across levels".into());
    }
    Ok(())
}

#[test]
fn color_inherits_and_width_does_not() -> TestResult {
    let (doc, target) = doc_with_css("body { color: rgb(10, 20, 30); width: 700px; }")?;
    if value_at(&doc, target, 1200.0, "color")? != "rgb(10, 20, 30)" {
        return Err("color should inherit from body".into());
    }
    if value_at(&doc, target, 1200.0, "width")? != "auto" {
        return Err("width should not inherit".into());
    }
    Ok(())
}

#[test]
fn media_rules_apply_only_at_matching_widths() -> TestResult {
    let (doc, target) = doc_with_css(
        "div { color: red; } @media (max-width: 500px) { div { color: blue; } }",
    )?;
    if value_at(&doc, target, 1200.0, "color")? != "red" {
        return Err("media rule should not apply at 1200".into());
    }
    if value_at(&doc, target, 375.0, "color")? != "blue" {
        return Err("media rule should apply at 375".into());
    }
    Ok(())
}

#[test]
fn min_width_media_rules_apply_above_bound() -> TestResult {
    let (doc, target) = doc_with_css("@media (min-width: 1000px) { div { display: flex; } }")?;
    if value_at(&doc, target, 1440.0, "display")? != "flex" {
        return Err("min-width rule should apply at 1440".into());
    }
    if value_at(&doc, target, 768.0, "display")? != "block" {
        return Err("below min-width the user-agent display should hold".into());
    }
    Ok(())
}

#[test]
fn user_agent_defaults_apply() -> TestResult {
    let (mut doc, target) = doc_with_css("")?;
    let span = doc.create_element(target, "span")?;
    if value_at(&doc, target, 1200.0, "display")? != "block" {
        return Err("div should default to display: block".into());
    }
    if value_at(&doc, span, 1200.0, "display")? != "inline" {
        return Err("span should stay at the initial display".into());
    }
    Ok(())
}

#[test]
fn detached_element_fails_to_resolve() -> TestResult {
    let (mut doc, target) = doc_with_css("div { color: red; }")?;
    let resolver = Resolver::new(&doc);
    doc.remove_element(target);
    match resolver.compute(&doc, target, 1200.0) {
        Err(StyleError::DetachedElement) => Ok(()),
        Ok(_) => Err("resolving a detached element should fail".into()),
    }
}
