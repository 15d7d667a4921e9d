use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest element at the given coordinates.
///
/// Children are checked in reverse order (last in flow sits on top when
/// rects overlap). Subtrees hidden with `display: none` have no rects and
/// are skipped. Returns `None` when the point is outside the tree.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let hit = hit_test_element(layout, root, x, y);
    log::debug!("[hit] ({}, {}) -> {:?}", x, y, hit);
    hit
}

fn hit_test_element(layout: &LayoutResult, element: &Element, x: u16, y: u16) -> Option<String> {
    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test_element(layout, child, x, y) {
                return Some(id);
            }
        }
    }

    Some(element.id.clone())
}
