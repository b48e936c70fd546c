//! Breakpoint simulation behavior.

use dom::{Document, NodeId, Viewport};
use extract::Category;
use inspector::{SimulateError, capture_all};
use std::error::Error;

type TestResult = Result<(), Box<dyn Error>>;

fn doc_with_target() -> Result<(Document, NodeId), Box<dyn Error>> {
    let mut doc = Document::new(Viewport::new(1200.0, 800.0));
    let root = doc.root();
    let html = doc.create_element(root, "html")?;
    let body = doc.create_element(html, "body")?;
    let target = doc.create_element(body, "div")?;
    doc.set_attr(target, "id", "target")?;
    Ok((doc, target))
}

#[test]
fn captures_every_breakpoint_in_order() -> TestResult {
    let (mut doc, target) = doc_with_target()?;
    doc.add_stylesheet("#target { color: red; }");
    let captures = capture_all(&doc, target)?;
    let names: Vec<&str> = captures.iter().map(|(name, _)| *name).collect();
    if names != ["Mobile", "Tablet", "Desktop"] {
        return Err(format!("unexpected breakpoint set: {names:?}").into());
    }
    Ok(())
}

#[test]
fn media_rules_differ_across_breakpoints() -> TestResult {
    let (mut doc, target) = doc_with_target()?;
    doc.add_stylesheet(
        "#target { color: red; } @media (max-width: 500px) { #target { color: blue; } }",
    );
    let captures = capture_all(&doc, target)?;
    let color_at = |name: &str| -> Option<String> {
        captures
            .iter()
            .find(|(entry, _)| *entry == name)
            .and_then(|(_, snapshot)| snapshot.value_of(Category::Typography, "color"))
            .map(str::to_owned)
    };
    if color_at("Mobile").as_deref() != Some("blue") {
        return Err("mobile capture should see the narrow-width rule".into());
    }
    if color_at("Desktop").as_deref() != Some("red") {
        return Err("desktop capture should not see the narrow-width rule".into());
    }
    Ok(())
}

#[test]
fn cross_origin_sheets_are_skipped() -> TestResult {
    let (mut doc, target) = doc_with_target()?;
    doc.add_external_stylesheet("#target { color: teal; }", "https://cdn.example/a.css", true);
    let captures = capture_all(&doc, target)?;
    for (name, snapshot) in &captures {
        if snapshot.value_of(Category::Typography, "color") == Some("teal") {
            return Err(format!("{name} capture should not read a cross-origin sheet").into());
        }
    }
    Ok(())
}

#[test]
fn same_origin_external_sheets_are_copied() -> TestResult {
    let (mut doc, target) = doc_with_target()?;
    doc.add_external_stylesheet("#target { color: teal; }", "/styles/a.css", false);
    let captures = capture_all(&doc, target)?;
    for (name, snapshot) in &captures {
        if snapshot.value_of(Category::Typography, "color") != Some("teal") {
            return Err(format!("{name} capture should include the same-origin sheet").into());
        }
    }
    Ok(())
}

#[test]
fn captures_follow_the_requested_element() -> TestResult {
    let (mut doc, target) = doc_with_target()?;
    let parent = doc
        .parent(target)
        .ok_or("target should have a parent")?;
    let other = doc.create_element(parent, "div")?;
    doc.set_attr(other, "id", "other")?;
    doc.add_stylesheet("#target { color: red; } #other { color: blue; }");
    let first = capture_all(&doc, target)?;
    let second = capture_all(&doc, other)?;
    let mobile_color = |captures: &[(&str, extract::StyleSnapshot)]| -> Option<String> {
        captures
            .first()
            .and_then(|(_, snapshot)| snapshot.value_of(Category::Typography, "color"))
            .map(str::to_owned)
    };
    if mobile_color(&first).as_deref() != Some("red") {
        return Err("first capture should reflect the first element".into());
    }
    if mobile_color(&second).as_deref() != Some("blue") {
        return Err("re-capture should reflect the new element".into());
    }
    Ok(())
}

#[test]
fn detached_target_fails() -> TestResult {
    let (mut doc, target) = doc_with_target()?;
    doc.remove_element(target);
    match capture_all(&doc, target) {
        Err(SimulateError::DetachedTarget) => Ok(()),
        Ok(_) => Err("capturing a detached target should fail".into()),
    }
}
