use crate::element::{Content, Element};

/// Elements carrying the given class, in tree order.
pub fn elements_with_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_with_class(root, class, &mut result);
    result
}

fn collect_with_class<'a>(element: &'a Element, class: &str, result: &mut Vec<&'a Element>) {
    if element.has_class(class) {
        result.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_with_class(child, class, result);
        }
    }
}

/// For every element carrying the given class, its direct child anchors,
/// matching a `.marker > a` selector. Returns (container, anchor) pairs in
/// tree order; a container with several anchor children yields one pair
/// per anchor.
pub fn anchor_children_of<'a>(root: &'a Element, class: &str) -> Vec<(&'a Element, &'a Element)> {
    let mut result = Vec::new();
    collect_anchor_children(root, class, &mut result);
    result
}

fn collect_anchor_children<'a>(
    element: &'a Element,
    class: &str,
    result: &mut Vec<(&'a Element, &'a Element)>,
) {
    if element.has_class(class) {
        for child in element.content.children() {
            if child.is_anchor() {
                result.push((element, child));
            }
        }
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_anchor_children(child, class, result);
        }
    }
}
