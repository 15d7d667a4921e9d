//! Submenu toggling for narrow viewports.
//!
//! Binds every anchor sitting directly inside a submenu-marked menu item.
//! Below the mobile breakpoint a click on the anchor suppresses the
//! navigation and flips the paired submenu between shown and hidden. At or
//! above the breakpoint the click is left alone and the link navigates;
//! hover styling is assumed to handle the submenu there.

use log::{debug, warn};
use pagedom::{Display, Page};

use crate::behavior::{Behavior, Binding, EventResult};
use crate::config::WireConfig;
use crate::error::WireError;

#[derive(Debug, Clone, Copy, Default)]
pub struct SubmenuToggle;

impl SubmenuToggle {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for SubmenuToggle {
    fn name(&self) -> &'static str {
        "submenu"
    }

    fn scan(&self, page: &Page, config: &WireConfig) -> Vec<Binding> {
        let mut bindings = Vec::new();
        for (item, anchor) in page.anchor_children_of(&config.submenu_marker) {
            let Some(panel) = item.get_data(&config.panel_attr) else {
                warn!(
                    "[submenu] '{}' carries no '{}' attribute, skipping",
                    item.id, config.panel_attr
                );
                continue;
            };
            if page.find(panel).is_none() {
                warn!(
                    "[submenu] '{}' names unknown panel '{}', skipping",
                    item.id, panel
                );
                continue;
            }
            bindings.push(Binding::new(&anchor.id, panel));
        }
        bindings
    }

    fn on_click(
        &self,
        page: &mut Page,
        binding: &Binding,
        config: &WireConfig,
    ) -> Result<EventResult, WireError> {
        // Read the viewport fresh on every click so resizes between clicks
        // take effect immediately.
        let width = page.viewport.width;
        if width >= config.mobile_breakpoint {
            debug!(
                "[submenu] viewport {} is desktop, leaving '{}' alone",
                width, binding.trigger
            );
            return Ok(EventResult::Ignored);
        }

        // Suppression is decided here, before the panel lookup, so a click
        // on a broken item still never navigates.
        let Some(panel) = page.find_mut(&binding.panel) else {
            warn!(
                "[submenu] panel '{}' bound to '{}' is no longer in the page",
                binding.panel, binding.trigger
            );
            return Ok(EventResult::Consumed);
        };

        let shown = panel.style.display == Some(Display::Block);
        panel.style.display = Some(if shown { Display::None } else { Display::Block });
        debug!(
            "[submenu] '{}' now {}",
            binding.panel,
            if shown { "hidden" } else { "shown" }
        );

        Ok(EventResult::Consumed)
    }
}
