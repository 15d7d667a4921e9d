/// High-level events with element targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click. `target` may be pre-resolved to an element id; when it
    /// is `None` the dispatcher hit-tests the coordinates.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Viewport resized.
    Resize { width: u16, height: u16 },
}

impl Event {
    /// A left click on a known element.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    /// A left click at page coordinates, to be resolved by hit testing.
    pub fn click_at(x: u16, y: u16) -> Self {
        Self::Click {
            target: None,
            x,
            y,
            button: MouseButton::Left,
        }
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
