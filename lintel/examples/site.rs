// Example: Wired Site
//
// Builds a small site with a dropdown nav and an FAQ list, mounts the
// stock behaviors, and drives clicks and resizes through the session.
// Debug logging shows each handler's decisions as events run.

use lintel::prelude::*;
use pagedom::{Element, Event, Page, Viewport};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn faq_entry(slug: &str, question: &str, answer: &str) -> Element {
    Element::div()
        .id(format!("item-{slug}"))
        .class("faq-item")
        .child(
            Element::new("h3")
                .id(format!("q-{slug}"))
                .class("faq-toggle")
                .data("panel", format!("a-{slug}"))
                .text(question),
        )
        .child(
            Element::div()
                .id(format!("a-{slug}"))
                .class("faq-answer")
                .text(answer),
        )
}

fn build_page() -> Page {
    let nav = Element::new("nav").id("nav").child(
        Element::new("ul")
            .id("menu")
            .child(
                Element::new("li")
                    .id("nav-products")
                    .class("has-submenu")
                    .data("panel", "products-menu")
                    .child(
                        Element::anchor("/products")
                            .id("products-link")
                            .text("Products"),
                    )
                    .child(
                        Element::new("ul")
                            .id("products-menu")
                            .child(
                                Element::new("li")
                                    .child(Element::anchor("/products/widgets").text("Widgets")),
                            )
                            .child(
                                Element::new("li")
                                    .child(Element::anchor("/products/gears").text("Gears")),
                            ),
                    ),
            )
            .child(
                Element::new("li")
                    .id("nav-about")
                    .child(Element::anchor("/about").id("about-link").text("About")),
            ),
    );

    let faq = Element::new("section")
        .id("faq")
        .child(faq_entry(
            "shipping",
            "How long does shipping take?",
            "Orders placed before noon ship the same business day. Standard \
             delivery takes three to five days, expedited delivery two.",
        ))
        .child(faq_entry(
            "returns",
            "What is the return policy?",
            "Unused items can come back within thirty days for a full \
             refund. Start a return from your order history page.",
        ));

    let root = Element::new("body").id("body").child(nav).child(faq);
    Page::new(root, Viewport::new(1280, 800))
}

fn report(outcome: &Outcome) {
    match &outcome.navigation {
        Some(href) => println!("   navigate -> {href}"),
        None if outcome.consumed => println!("   consumed, no navigation"),
        None => println!("   no default action"),
    }
}

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let mut session = Session::mount(build_page(), WireConfig::new());

    println!("-- desktop click on the Products link");
    report(&session.dispatch(Event::click("products-link")));

    println!("-- resize to phone width");
    session.dispatch(Event::Resize {
        width: 390,
        height: 844,
    });

    println!("-- the same click now toggles the submenu");
    report(&session.dispatch(Event::click("products-link")));

    println!("-- open both FAQ entries");
    report(&session.dispatch(Event::click("q-shipping")));
    report(&session.dispatch(Event::click("q-returns")));

    println!("-- close the first, the second stays open");
    report(&session.dispatch(Event::click("q-shipping")));

    let page = session.page();
    for id in ["a-shipping", "a-returns"] {
        println!(
            "{} max-height: {:?}",
            id,
            page.find(id).unwrap().style.max_height
        );
    }
}
