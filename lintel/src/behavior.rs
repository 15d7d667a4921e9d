//! The seam between a page and the behaviors wired onto it.

use pagedom::Page;

use crate::config::WireConfig;
use crate::error::WireError;

/// What a handler decided about the click's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The default action stays available. Handlers that only mutate the
    /// page, or that decline the click entirely, return this.
    Ignored,
    /// The default action is suppressed. Propagation still continues.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// One trigger-to-panel pair owned by a behavior.
///
/// Bindings are enumerated once, at mount, and looked up by trigger id on
/// every click afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Element whose clicks this binding answers.
    pub trigger: String,
    /// Element the handler mutates.
    pub panel: String,
}

impl Binding {
    pub fn new(trigger: impl Into<String>, panel: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            panel: panel.into(),
        }
    }
}

/// A page behavior: a mount-time scan that produces bindings, and a click
/// handler run for each binding whose trigger sits on the propagation
/// path.
pub trait Behavior {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Enumerate this behavior's bindings over the completed tree.
    ///
    /// Runs exactly once per mount. Elements added to the tree afterwards
    /// are not picked up.
    fn scan(&self, page: &Page, config: &WireConfig) -> Vec<Binding>;

    /// Handle a click whose propagation path crossed `binding.trigger`.
    ///
    /// Errors are isolated by the session: the failing invocation is
    /// logged and dropped, everything else on the path still runs.
    fn on_click(
        &self,
        page: &mut Page,
        binding: &Binding,
        config: &WireConfig,
    ) -> Result<EventResult, WireError>;
}
