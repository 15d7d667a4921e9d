use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::wrap_words;

/// Height of one wrapped text line, the default line box.
pub const LINE_HEIGHT: u16 = 20;

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out the tree in block flow within the given viewport.
///
/// Children stack vertically inside their parent's padded content box. An
/// element's width is its inline width clamped to the available width, or
/// the full available width; its height is the inline height, or the
/// natural content height, clamped by `max_height`. Subtrees under
/// `display: none` produce no rects and occupy no space.
pub fn layout(root: &Element, viewport: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, viewport.x, viewport.y, viewport.width, &mut result);
    result
}

/// Place one element at (x, y) and return the outer height it occupies in
/// the flow.
fn layout_element(
    element: &Element,
    x: u16,
    y: u16,
    avail_width: u16,
    result: &mut LayoutResult,
) -> u16 {
    if element.style.is_hidden() {
        return 0;
    }

    let padding = element.style.padding;
    let width = element.style.width.unwrap_or(avail_width).min(avail_width);
    let content_width = width.saturating_sub(padding.horizontal_total());

    // Children keep their natural flow positions even when this element's
    // own height ends up clamped; overflowing content keeps its
    // coordinates, as in CSS.
    let content_x = x + padding.left;
    let mut cursor = y + padding.top;
    let mut content_h = 0u16;

    match &element.content {
        Content::Children(children) => {
            for child in children {
                let used = layout_element(child, content_x, cursor, content_width, result);
                cursor += used;
                content_h += used;
            }
        }
        Content::Text(text) => {
            content_h = text_height(text, content_width);
        }
        Content::None => {}
    }

    let natural = content_h + padding.vertical_total();
    let mut height = element.style.height.unwrap_or(natural);
    if let Some(max) = element.style.max_height {
        height = height.min(max);
    }

    result.insert(element.id.clone(), Rect::new(x, y, width, height));
    height
}

/// Natural height of an element's own content: padding plus stacked child
/// heights or wrapped text lines. The element's own `height` and
/// `max_height` caps are ignored, like `scrollHeight`, while descendants
/// are measured with all their styles honored. Hidden elements measure
/// zero.
pub fn content_height(element: &Element, avail_width: u16) -> u16 {
    if element.style.is_hidden() {
        return 0;
    }

    let padding = element.style.padding;
    let width = element.style.width.unwrap_or(avail_width).min(avail_width);
    let content_width = width.saturating_sub(padding.horizontal_total());

    let content_h = match &element.content {
        Content::Children(children) => children
            .iter()
            .map(|child| outer_height(child, content_width))
            .sum(),
        Content::Text(text) => text_height(text, content_width),
        Content::None => 0,
    };

    content_h + padding.vertical_total()
}

/// The height an element occupies in its parent's flow: natural content
/// height unless overridden, clamped by `max_height`.
fn outer_height(element: &Element, avail_width: u16) -> u16 {
    if element.style.is_hidden() {
        return 0;
    }

    let natural = content_height(element, avail_width);
    let mut height = element.style.height.unwrap_or(natural);
    if let Some(max) = element.style.max_height {
        height = height.min(max);
    }
    height
}

fn text_height(text: &str, width: u16) -> u16 {
    if text.is_empty() {
        return 0;
    }
    let lines = wrap_words(text, width as usize).len() as u16;
    lines.saturating_mul(LINE_HEIGHT)
}
