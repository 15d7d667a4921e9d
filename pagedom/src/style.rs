/// The two display values inline scripts write. Anything else is left to
/// the stylesheet, which an unset field stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: u16) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub const fn horizontal_total(&self) -> u16 {
        self.left + self.right
    }

    pub const fn vertical_total(&self) -> u16 {
        self.top + self.bottom
    }
}

/// Inline style values on a single element.
///
/// `None` fields are "not set": whatever the host stylesheet would apply.
/// The stylesheet itself is out of scope; this models exactly the values a
/// script reads and writes on `element.style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineStyle {
    pub display: Option<Display>,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub max_height: Option<u16>,
    pub padding: Edges,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    pub fn max_height(mut self, max_height: u16) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Whether the element is hidden by an explicit `display: none`.
    /// An unset display is not hidden; that is the stylesheet's call.
    pub fn is_hidden(&self) -> bool {
        self.display == Some(Display::None)
    }
}
