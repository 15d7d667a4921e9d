//! Wiring error types.

use thiserror::Error;

/// Failure inside a single handler invocation.
///
/// These never abort dispatch. The session logs the error and carries on
/// with the remaining handlers on the propagation path, so one broken
/// binding cannot take the rest of the page's behavior down with it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The click target is no longer in the tree.
    #[error("Click target '{id}' is no longer in the page")]
    TargetMissing { id: String },

    /// A binding's panel no longer resolves to an element.
    #[error("Panel '{panel}' bound to '{trigger}' is no longer in the page")]
    PanelMissing { trigger: String, panel: String },
}
