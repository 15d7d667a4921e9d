mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by id in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by id in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Ids from the root down to (and including) the target element.
/// This is the propagation path a click at the target bubbles along,
/// innermost element last. Returns `None` when the id is not in the tree.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_path(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());

    if element.id == id {
        return true;
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if collect_path(child, id, path) {
                return true;
            }
        }
    }

    path.pop();
    false
}
