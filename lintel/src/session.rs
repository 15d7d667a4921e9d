//! Mounting and event dispatch.
//!
//! [`Session::mount`] wires behaviors over a completed page exactly once.
//! [`Session::dispatch`] then feeds events through, one at a time, each
//! running to completion before the next is looked at.

use log::{debug, warn};
use pagedom::{hit_test, Event, Page};

use crate::behavior::{Behavior, Binding};
use crate::behaviors::{FaqAccordion, SubmenuToggle};
use crate::config::WireConfig;

/// What one dispatched event amounted to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// True when some handler suppressed the click's default action.
    pub consumed: bool,
    /// Href the default action would follow, when it survives. The
    /// session reports the navigation; it never performs it.
    pub navigation: Option<String>,
}

struct BoundBehavior {
    behavior: Box<dyn Behavior>,
    bindings: Vec<Binding>,
}

/// A page with its behaviors wired.
pub struct Session {
    page: Page,
    config: WireConfig,
    bound: Vec<BoundBehavior>,
}

impl Session {
    /// Wire the stock behaviors (submenu toggle, FAQ accordion) over a
    /// completed page.
    pub fn mount(page: Page, config: WireConfig) -> Self {
        Self::mount_with(
            page,
            config,
            vec![Box::new(SubmenuToggle::new()), Box::new(FaqAccordion::new())],
        )
    }

    /// Wire a custom behavior list.
    ///
    /// Each behavior scans the tree once, here. Elements added to the page
    /// afterwards are never bound; elements removed afterwards leave their
    /// bindings dangling, to be caught and logged per click.
    pub fn mount_with(page: Page, config: WireConfig, behaviors: Vec<Box<dyn Behavior>>) -> Self {
        let bound = behaviors
            .into_iter()
            .map(|behavior| {
                let bindings = behavior.scan(&page, &config);
                debug!(
                    "[wire] mounted '{}' with {} binding(s)",
                    behavior.name(),
                    bindings.len()
                );
                BoundBehavior { behavior, bindings }
            })
            .collect();
        Self {
            page,
            config,
            bound,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The page stays reachable for host mutation between events. Bindings
    /// are not re-scanned.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    /// Dispatch one event to completion.
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        match event {
            Event::Resize { width, height } => {
                debug!("[wire] viewport resized to {}x{}", width, height);
                self.page.resize(width, height);
                Outcome::default()
            }
            Event::Click { target, x, y, .. } => {
                let target = target.or_else(|| {
                    let layout = self.page.layout();
                    hit_test(&layout, &self.page.root, x, y)
                });
                match target {
                    Some(target) => self.click(&target),
                    None => Outcome::default(),
                }
            }
        }
    }

    /// Dispatch a queue of events strictly in order.
    pub fn pump(&mut self, events: impl IntoIterator<Item = Event>) -> Vec<Outcome> {
        events.into_iter().map(|event| self.dispatch(event)).collect()
    }

    fn click(&mut self, target: &str) -> Outcome {
        let Some(path) = self.page.path_to(target) else {
            debug!("[wire] click on unknown element '{}'", target);
            return Outcome::default();
        };

        let Session {
            page,
            config,
            bound,
        } = self;

        let mut consumed = false;

        // Bubble from the innermost element outward. Handlers at every
        // level run; a consumed result suppresses the default action but
        // never stops propagation.
        for id in path.iter().rev() {
            for entry in bound.iter() {
                for binding in entry.bindings.iter().filter(|b| b.trigger == *id) {
                    match entry.behavior.on_click(page, binding, config) {
                        Ok(result) => consumed |= result.is_handled(),
                        Err(err) => warn!(
                            "[wire] '{}' handler failed on '{}': {}",
                            entry.behavior.name(),
                            id,
                            err
                        ),
                    }
                }
            }
        }

        // The default action follows the innermost href on the path, the
        // way an anchor catches clicks on its descendants.
        let navigation = if consumed {
            None
        } else {
            path.iter()
                .rev()
                .find_map(|id| page.find(id).and_then(|el| el.href.clone()))
        };

        if let Some(href) = &navigation {
            debug!("[wire] '{}' navigates to {}", target, href);
        }

        Outcome {
            consumed,
            navigation,
        }
    }
}
