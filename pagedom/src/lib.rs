pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod page;
pub mod query;
pub mod style;
pub mod text;

pub use element::{find_element, find_element_mut, path_to, Content, Element};
pub use event::{Event, MouseButton};
pub use hit::hit_test;
pub use layout::{content_height, LayoutResult, Rect, LINE_HEIGHT};
pub use page::{Page, Viewport};
pub use query::{anchor_children_of, elements_with_class};
pub use style::{Display, Edges, InlineStyle};
