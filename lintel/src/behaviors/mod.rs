//! The stock behaviors.

mod accordion;
mod submenu;

pub use accordion::FaqAccordion;
pub use submenu::SubmenuToggle;
