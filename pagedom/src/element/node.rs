use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::style::{Edges, InlineStyle};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(tag: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{tag}-{id}")
}

/// One node of the page tree.
///
/// Ids must be unique within a page; elements built without an explicit
/// `.id()` get a generated `tag-N` one. Marker classes and the `data` map
/// are the structural contract behavior wiring reads.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Markup-level attributes
    pub classes: Vec<String>,
    pub href: Option<String>,
    pub data: HashMap<String, String>,

    // Inline style
    pub style: InlineStyle,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            classes: Vec::new(),
            href: None,
            data: HashMap::new(),
            style: InlineStyle::default(),
            content: Content::None,
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    /// A text-bearing inline element.
    pub fn span(text: impl Into<String>) -> Self {
        let mut el = Self::new("span");
        el.content = Content::Text(text.into());
        el
    }

    /// An anchor with a navigation target. The href is what the default
    /// click action reports when no handler consumes the click.
    pub fn anchor(href: impl Into<String>) -> Self {
        let mut el = Self::new("a");
        el.href = Some(href.into());
        el
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Attributes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Style
    pub fn style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.style.padding = padding;
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(_) => {
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Class list, for handlers that flip marker classes at runtime.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Flip the presence of a class. Returns true when the class is present
    /// after the call, mirroring `classList.toggle`.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    pub fn is_anchor(&self) -> bool {
        self.tag == "a"
    }
}
