use crate::element::{self, Element};
use crate::layout::{self, LayoutResult, Rect};
use crate::query;

/// Viewport size in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A loaded page: the completed element tree plus the viewport it is shown
/// in. The tree is considered structurally final once wrapped in a `Page`;
/// behavior layers bind against it from that point on.
#[derive(Debug, Clone)]
pub struct Page {
    pub root: Element,
    pub viewport: Viewport,
}

impl Page {
    pub fn new(root: Element, viewport: Viewport) -> Self {
        Self { root, viewport }
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.root, id)
    }

    /// Ids from the root down to the target, the click propagation path.
    pub fn path_to(&self, id: &str) -> Option<Vec<String>> {
        element::path_to(&self.root, id)
    }

    pub fn elements_with_class(&self, class: &str) -> Vec<&Element> {
        query::elements_with_class(&self.root, class)
    }

    pub fn anchor_children_of(&self, class: &str) -> Vec<(&Element, &Element)> {
        query::anchor_children_of(&self.root, class)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
    }

    /// Block-flow layout of the whole tree at the current viewport size.
    pub fn layout(&self) -> LayoutResult {
        layout::layout(&self.root, Rect::from_size(self.viewport.width, self.viewport.height))
    }
}
