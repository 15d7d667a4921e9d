mod flow;
mod rect;

pub use flow::{content_height, layout, LayoutResult, LINE_HEIGHT};
pub use rect::Rect;
