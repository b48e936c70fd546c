//! Document model behavior: attachment, hit testing, cloning, sheets,
//! and listener tokens.

use dom::{Document, DomError, EventKind, Point, Rect, Viewport};
use std::error::Error;

type TestResult = Result<(), Box<dyn Error>>;

fn base_doc() -> Document {
    Document::new(Viewport::new(1200.0, 800.0))
}

#[test]
fn removal_detaches_the_whole_subtree() -> TestResult {
    let mut doc = base_doc();
    let root = doc.root();
    let parent = doc.create_element(root, "div")?;
    let child = doc.create_element(parent, "span")?;
    if !doc.is_attached(child) {
        return Err("child should start attached".into());
    }
    doc.remove_element(parent);
    if doc.is_attached(parent) || doc.is_attached(child) {
        return Err("removal should detach the subtree".into());
    }
    match doc.create_element(parent, "em") {
        Err(DomError::Detached) => {}
        Ok(_) => return Err("appending under a removed node should fail".into()),
        Err(other) => return Err(format!("unexpected error: {other}").into()),
    }
    Ok(())
}

#[test]
fn hit_testing_prefers_descendants_and_later_siblings() -> TestResult {
    let mut doc = base_doc();
    let root = doc.root();
    let outer = doc.create_element(root, "div")?;
    doc.set_rect(outer, Rect::new(0.0, 0.0, 200.0, 200.0))?;
    let inner = doc.create_element(outer, "div")?;
    doc.set_rect(inner, Rect::new(50.0, 50.0, 50.0, 50.0))?;
    let late = doc.create_element(root, "div")?;
    doc.set_rect(late, Rect::new(60.0, 60.0, 20.0, 20.0))?;

    if doc.element_from_point(Point::new(10.0, 10.0)) != Some(outer) {
        return Err("outer area should hit the outer element".into());
    }
    if doc.element_from_point(Point::new(55.0, 55.0)) != Some(inner) {
        return Err("nested rect should beat its ancestor".into());
    }
    if doc.element_from_point(Point::new(70.0, 70.0)) != Some(late) {
        return Err("a later sibling should win overlapping hits".into());
    }
    if doc.element_from_point(Point::new(500.0, 500.0)).is_some() {
        return Err("a miss should hit nothing".into());
    }
    Ok(())
}

#[test]
fn invisible_subtrees_are_skipped_by_hit_testing() -> TestResult {
    let mut doc = base_doc();
    let root = doc.root();
    let covered = doc.create_element(root, "div")?;
    doc.set_rect(covered, Rect::new(0.0, 0.0, 100.0, 100.0))?;
    let cover = doc.create_element(root, "div")?;
    doc.set_rect(cover, Rect::new(0.0, 0.0, 100.0, 100.0))?;
    if doc.element_from_point(Point::new(50.0, 50.0)) != Some(cover) {
        return Err("the cover should win while visible".into());
    }
    doc.set_visible(cover, false);
    if doc.element_from_point(Point::new(50.0, 50.0)) != Some(covered) {
        return Err("hiding the cover should expose the element underneath".into());
    }
    Ok(())
}

#[test]
fn clone_subtree_copies_tags_and_attrs_but_not_geometry() -> TestResult {
    let mut source = base_doc();
    let root = source.root();
    let outer = source.create_element(root, "section")?;
    source.set_attr(outer, "class", "hero")?;
    source.set_rect(outer, Rect::new(0.0, 0.0, 300.0, 100.0))?;
    let inner = source.create_element(outer, "p")?;
    source.set_attr(inner, "id", "lead")?;

    let mut target = Document::new(Viewport::new(375.0, 2048.0));
    let target_root = target.root();
    let copy = source.clone_subtree_into(outer, &mut target, target_root)?;

    let payload = target.element(copy).ok_or("copy should be live")?;
    if payload.tag() != "section" || payload.attr("class") != Some("hero") {
        return Err("tag and attributes should copy".into());
    }
    if payload.rect().is_some() {
        return Err("geometry should not copy".into());
    }
    let children = target.children(copy);
    let child_payload = children
        .first()
        .and_then(|child| target.element(*child))
        .ok_or("child should copy")?;
    if child_payload.element_id() != Some("lead") {
        return Err("nested attributes should copy".into());
    }
    Ok(())
}

#[test]
fn cross_origin_sheets_refuse_to_be_read_back() -> TestResult {
    let mut doc = base_doc();
    doc.add_stylesheet("div { color: red; }");
    doc.add_external_stylesheet("div { color: blue; }", "https://cdn.example/a.css", true);
    doc.add_external_stylesheet("div { color: green; }", "/local.css", false);
    let readable: Vec<bool> = doc
        .stylesheets()
        .iter()
        .map(|sheet| sheet.readable_text().is_ok())
        .collect();
    if readable != [true, false, true] {
        return Err(format!("unexpected readability: {readable:?}").into());
    }
    Ok(())
}

#[test]
fn listener_tokens_release_exactly_once() -> TestResult {
    let mut doc = base_doc();
    let token = doc.add_listener(EventKind::PointerMove);
    let other = doc.add_listener(EventKind::KeyDown);
    if doc.listener_count() != 2 || doc.listener_count_of(EventKind::PointerMove) != 1 {
        return Err("registrations should be counted".into());
    }
    if !doc.remove_listener(token) {
        return Err("first release should succeed".into());
    }
    if doc.remove_listener(token) {
        return Err("second release of the same token should fail".into());
    }
    if !doc.remove_listener(other) || doc.listener_count() != 0 {
        return Err("all tokens released should leave no subscriptions".into());
    }
    Ok(())
}

#[test]
fn contains_covers_self_and_descendants_only() -> TestResult {
    let mut doc = base_doc();
    let root = doc.root();
    let parent = doc.create_element(root, "div")?;
    let child = doc.create_element(parent, "span")?;
    let sibling = doc.create_element(root, "div")?;
    if !doc.contains(parent, parent) || !doc.contains(parent, child) {
        return Err("contains should cover self and descendants".into());
    }
    if doc.contains(parent, sibling) {
        return Err("contains should not cover siblings".into());
    }
    Ok(())
}
