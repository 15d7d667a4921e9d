//! Tests for wiring error types.

use lintel::prelude::*;
use pagedom::{Element, Page, Viewport};

#[test]
fn test_error_display() {
    let err = WireError::PanelMissing {
        trigger: "q-1".to_string(),
        panel: "a-1".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("q-1"));
    assert!(display.contains("a-1"));
}

#[test]
fn test_accordion_reports_missing_target() {
    let root = Element::div().id("root");
    let mut page = Page::new(root, Viewport::new(800, 600));
    let binding = Binding::new("ghost", "also-ghost");

    let err = FaqAccordion::new()
        .on_click(&mut page, &binding, &WireConfig::new())
        .unwrap_err();
    assert_eq!(
        err,
        WireError::TargetMissing {
            id: "ghost".to_string()
        }
    );
}

#[test]
fn test_accordion_reports_missing_panel() {
    let root = Element::div()
        .id("root")
        .child(Element::new("h3").id("q").class("faq-toggle").text("Q?"));
    let mut page = Page::new(root, Viewport::new(800, 600));
    let binding = Binding::new("q", "gone");

    let err = FaqAccordion::new()
        .on_click(&mut page, &binding, &WireConfig::new())
        .unwrap_err();
    assert_eq!(
        err,
        WireError::PanelMissing {
            trigger: "q".to_string(),
            panel: "gone".to_string()
        }
    );

    // The cosmetic marker flipped before the lookup failed
    assert!(page.find("q").unwrap().has_class("active"));
}

#[test]
fn test_submenu_missing_panel_is_not_an_error() {
    let root = Element::new("li")
        .id("item")
        .class("has-submenu")
        .child(Element::anchor("/x").id("link"));
    let mut page = Page::new(root, Viewport::new(480, 800));
    let binding = Binding::new("link", "gone");

    // Below the breakpoint the click is consumed before the panel lookup,
    // so a missing panel is logged rather than raised
    let result = SubmenuToggle::new().on_click(&mut page, &binding, &WireConfig::new());
    assert_eq!(result, Ok(EventResult::Consumed));
}
