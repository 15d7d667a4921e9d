// Example: Block Layout
//
// Builds a small page and prints where block flow places each element,
// compares a clamped panel's flow height with its full content height,
// then hit-tests a few points. Debug logging shows the hit resolutions.

use pagedom::{content_height, hit_test, Edges, Element, InlineStyle, Page, Viewport};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let root = Element::div()
        .id("page")
        .padding(Edges::all(10))
        .child(Element::new("h1").id("title").text("Shipping FAQ"))
        .child(Element::new("p").id("intro").text(
            "Answers to the questions we hear most often about shipping, \
             returns, and order tracking.",
        ))
        .child(
            Element::div()
                .id("teaser")
                .style(InlineStyle::new().max_height(30))
                .child(Element::new("p").id("teaser-text").text(
                    "Orders placed before noon ship the same business day \
                     from our warehouse.",
                )),
        )
        .child(Element::div().id("rule").style(InlineStyle::new().height(1)));

    let page = Page::new(root, Viewport::new(400, 600));
    let layout = page.layout();

    let mut rects: Vec<_> = layout.iter().collect();
    rects.sort_by(|a, b| (a.1.y, a.1.x, a.0).cmp(&(b.1.y, b.1.x, b.0)));

    for (id, rect) in rects {
        println!(
            "{id:<12} x={:<4} y={:<4} w={:<4} h={}",
            rect.x, rect.y, rect.width, rect.height
        );
    }

    let teaser = page.find("teaser").unwrap();
    println!(
        "\nteaser occupies {} units but holds {} units of content",
        layout["teaser"].height,
        content_height(teaser, layout["teaser"].width)
    );

    println!();
    for (x, y) in [(15, 15), (15, 45), (390, 590)] {
        match hit_test(&layout, &page.root, x, y) {
            Some(id) => println!("({x}, {y}) lands on {id}"),
            None => println!("({x}, {y}) lands on nothing"),
        }
    }
}
