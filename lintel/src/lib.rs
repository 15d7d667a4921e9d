pub mod behavior;
pub mod behaviors;
pub mod config;
pub mod error;
pub mod session;

pub use session::Session;

pub mod prelude {
    pub use crate::behavior::{Behavior, Binding, EventResult};
    pub use crate::behaviors::{FaqAccordion, SubmenuToggle};
    pub use crate::config::WireConfig;
    pub use crate::error::WireError;
    pub use crate::session::{Outcome, Session};
}
