//! FAQ expand/collapse.
//!
//! Binds every element carrying the FAQ marker class to the panel named by
//! its data attribute. A click flips the toggle's active class and swaps
//! the panel's inline max-height between cleared (collapsed) and its full
//! content height (expanded). Entries toggle independently; there is no
//! exclusivity, any number of panels may be open at once.

use log::{debug, warn};
use pagedom::{content_height, Page};

use crate::behavior::{Behavior, Binding, EventResult};
use crate::config::WireConfig;
use crate::error::WireError;

#[derive(Debug, Clone, Copy, Default)]
pub struct FaqAccordion;

impl FaqAccordion {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for FaqAccordion {
    fn name(&self) -> &'static str {
        "faq"
    }

    fn scan(&self, page: &Page, config: &WireConfig) -> Vec<Binding> {
        let mut bindings = Vec::new();
        for toggle in page.elements_with_class(&config.faq_marker) {
            let Some(panel) = toggle.get_data(&config.panel_attr) else {
                warn!(
                    "[faq] '{}' carries no '{}' attribute, skipping",
                    toggle.id, config.panel_attr
                );
                continue;
            };
            if page.find(panel).is_none() {
                warn!(
                    "[faq] '{}' names unknown panel '{}', skipping",
                    toggle.id, panel
                );
                continue;
            }
            bindings.push(Binding::new(&toggle.id, panel));
        }
        bindings
    }

    fn on_click(
        &self,
        page: &mut Page,
        binding: &Binding,
        config: &WireConfig,
    ) -> Result<EventResult, WireError> {
        // The marker flips before the panel is touched, so a dangling
        // panel still leaves the toggle's class changed.
        let toggle = page
            .find_mut(&binding.trigger)
            .ok_or_else(|| WireError::TargetMissing {
                id: binding.trigger.clone(),
            })?;
        let active = toggle.toggle_class(&config.active_marker);
        debug!("[faq] '{}' active={}", binding.trigger, active);

        // Measure at the width the panel actually laid out to; panels kept
        // out of layout by a hidden ancestor fall back to the viewport.
        let width = page
            .layout()
            .get(&binding.panel)
            .map_or(page.viewport.width, |rect| rect.width);

        let panel = page
            .find_mut(&binding.panel)
            .ok_or_else(|| WireError::PanelMissing {
                trigger: binding.trigger.clone(),
                panel: binding.panel.clone(),
            })?;

        if panel.style.max_height.is_some() {
            panel.style.max_height = None;
            debug!("[faq] '{}' collapsed", binding.panel);
        } else {
            let height = content_height(panel, width);
            panel.style.max_height = Some(height);
            debug!("[faq] '{}' expanded to {}", binding.panel, height);
        }

        // A FAQ click never suppresses the default action; a toggle that
        // carries an href still navigates.
        Ok(EventResult::Ignored)
    }
}
