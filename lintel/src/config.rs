//! Wiring configuration.

/// Markers and thresholds the wiring scans and dispatches with.
///
/// The defaults mirror the markup contract: menu items carrying a submenu
/// are classed `has-submenu`, FAQ toggles are classed `faq-toggle`, an
/// expanded toggle also carries `active`, every trigger names its panel
/// through the `panel` data attribute, and viewports narrower than 768
/// units count as mobile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireConfig {
    /// Viewport widths strictly below this count as mobile.
    pub mobile_breakpoint: u16,
    /// Class marking menu items that own a submenu.
    pub submenu_marker: String,
    /// Class marking FAQ toggles.
    pub faq_marker: String,
    /// Cosmetic class flipped on an expanded FAQ toggle.
    pub active_marker: String,
    /// Data attribute naming the panel a trigger controls.
    pub panel_attr: String,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768,
            submenu_marker: "has-submenu".to_string(),
            faq_marker: "faq-toggle".to_string(),
            active_marker: "active".to_string(),
            panel_attr: "panel".to_string(),
        }
    }
}

impl WireConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mobile_breakpoint(mut self, width: u16) -> Self {
        self.mobile_breakpoint = width;
        self
    }

    pub fn submenu_marker(mut self, class: impl Into<String>) -> Self {
        self.submenu_marker = class.into();
        self
    }

    pub fn faq_marker(mut self, class: impl Into<String>) -> Self {
        self.faq_marker = class.into();
        self
    }

    pub fn active_marker(mut self, class: impl Into<String>) -> Self {
        self.active_marker = class.into();
        self
    }

    pub fn panel_attr(mut self, attr: impl Into<String>) -> Self {
        self.panel_attr = attr.into();
        self
    }
}
