use pagedom::layout::layout;
use pagedom::{
    content_height, hit_test, Display, Edges, Element, InlineStyle, LayoutResult, Page, Rect,
    Viewport, LINE_HEIGHT,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

// ============================================================================
// Block Flow
// ============================================================================

#[test]
fn test_children_stack_vertically() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("a").style(InlineStyle::new().height(30)))
        .child(Element::div().id("b").style(InlineStyle::new().height(50)));

    let result = layout(&root, Rect::from_size(800, 600));

    assert_eq!(result["root"], Rect::new(0, 0, 800, 80));
    assert_eq!(result["a"], Rect::new(0, 0, 800, 30));
    assert_eq!(result["b"], Rect::new(0, 30, 800, 50));
}

#[test]
fn test_padding_insets_children() {
    let root = Element::div()
        .id("root")
        .padding(Edges::all(10))
        .child(Element::div().id("inner").style(InlineStyle::new().height(40)));

    let result = layout(&root, Rect::from_size(200, 600));

    assert_eq!(result["inner"], Rect::new(10, 10, 180, 40));
    assert_eq!(result["root"], Rect::new(0, 0, 200, 60));
}

#[test]
fn test_asymmetric_padding() {
    let root = Element::div()
        .id("root")
        .padding(Edges::new(5, 0, 15, 10))
        .child(Element::div().id("inner").style(InlineStyle::new().height(40)));

    let result = layout(&root, Rect::from_size(200, 600));

    assert_eq!(result["inner"], Rect::new(10, 5, 190, 40));
    assert_eq!(result["root"].height, 60);
}

#[test]
fn test_width_clamps_to_available() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("wide").style(InlineStyle::new().width(500).height(10)))
        .child(Element::div().id("narrow").style(InlineStyle::new().width(120).height(10)));

    let result = layout(&root, Rect::from_size(300, 600));

    assert_eq!(result["wide"].width, 300);
    assert_eq!(result["narrow"].width, 120);
}

#[test]
fn test_text_height_counts_wrapped_lines() {
    let para = Element::new("p").id("para").text("one two three");

    // Two lines at width 9: "one two" / "three"
    let result = layout(&para, Rect::from_size(9, 600));
    assert_eq!(result["para"].height, 2 * LINE_HEIGHT);
}

#[test]
fn test_hidden_subtree_produces_no_rects() {
    let root = Element::div()
        .id("root")
        .child(
            Element::div()
                .id("gone")
                .style(InlineStyle::new().display(Display::None).height(50))
                .child(Element::div().id("inside")),
        )
        .child(Element::div().id("after").style(InlineStyle::new().height(25)));

    let result = layout(&root, Rect::from_size(100, 100));

    assert!(!result.contains_key("gone"));
    assert!(!result.contains_key("inside"));
    // The following sibling moves up into the freed space
    assert_eq!(result["after"], Rect::new(0, 0, 100, 25));
    assert_eq!(result["root"].height, 25);
}

#[test]
fn test_max_height_clamps_flow_not_content() {
    let root = Element::div()
        .id("root")
        .child(
            Element::div()
                .id("panel")
                .style(InlineStyle::new().max_height(30))
                .child(Element::div().id("tall").style(InlineStyle::new().height(120))),
        )
        .child(Element::div().id("below").style(InlineStyle::new().height(10)));

    let result = layout(&root, Rect::from_size(100, 600));

    // The panel is clamped in the flow; its content keeps its own rect
    assert_eq!(result["panel"].height, 30);
    assert_eq!(result["tall"].height, 120);
    assert_eq!(result["below"].y, 30);
}

// ============================================================================
// Content Height
// ============================================================================

#[test]
fn test_content_height_ignores_own_caps() {
    let panel = Element::div()
        .style(InlineStyle::new().max_height(0))
        .child(Element::div().style(InlineStyle::new().height(70)))
        .child(Element::div().style(InlineStyle::new().height(50)));

    // A fully collapsed panel still measures its full content
    assert_eq!(content_height(&panel, 400), 120);

    let fixed = Element::div()
        .style(InlineStyle::new().height(5))
        .child(Element::div().style(InlineStyle::new().height(80)));
    assert_eq!(content_height(&fixed, 400), 80);
}

#[test]
fn test_content_height_honors_descendant_caps() {
    let panel = Element::div()
        .child(Element::div().style(InlineStyle::new().height(200).max_height(60)))
        .child(Element::div().style(InlineStyle::new().height(40)));

    assert_eq!(content_height(&panel, 400), 100);
}

#[test]
fn test_content_height_includes_padding() {
    let panel = Element::div()
        .padding(Edges::symmetric(15, 0))
        .child(Element::div().style(InlineStyle::new().height(50)));

    assert_eq!(content_height(&panel, 400), 80);
}

#[test]
fn test_content_height_of_hidden_element_is_zero() {
    let hidden = Element::div()
        .style(InlineStyle::new().display(Display::None))
        .child(Element::div().style(InlineStyle::new().height(50)));

    assert_eq!(content_height(&hidden, 400), 0);
}

#[test]
fn test_content_height_wraps_text() {
    let para = Element::new("p").text("one two three");

    assert_eq!(content_height(&para, 9), 2 * LINE_HEIGHT);
    assert_eq!(content_height(&para, 13), LINE_HEIGHT);
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_deepest_element() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("item").child(Element::anchor("/x").id("link").text("X")));

    let result = layout(&root, Rect::from_size(100, 600));

    assert_eq!(hit_test(&result, &root, 5, 5), Some("link".to_string()));
    assert_eq!(hit_test(&result, &root, 5, 25), None);
}

#[test]
fn test_hit_test_later_sibling_wins() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("under"))
        .child(Element::div().id("over"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("under", Rect::new(10, 10, 50, 50)),
        ("over", Rect::new(30, 30, 50, 50)),
    ]);

    // Overlapping region goes to the later sibling
    assert_eq!(hit_test(&layout, &root, 40, 40), Some("over".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 15), Some("under".to_string()));
    assert_eq!(hit_test(&layout, &root, 99, 99), Some("root".to_string()));
}

#[test]
fn test_hit_test_skips_hidden_elements() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("menu").style(InlineStyle::new().display(Display::None)));

    let result = layout(&root, Rect::from_size(100, 600));

    // Hidden subtrees have no rects, so the point lands nowhere
    assert_eq!(hit_test(&result, &root, 5, 5), None);
}

// ============================================================================
// Page
// ============================================================================

#[test]
fn test_page_resize_changes_available_width() {
    let root = Element::div().id("root").child(Element::div().id("bar").style(InlineStyle::new().height(10)));
    let mut page = Page::new(root, Viewport::new(800, 600));

    assert_eq!(page.layout()["bar"].width, 800);

    page.resize(360, 640);
    assert_eq!(page.layout()["bar"].width, 360);
}
