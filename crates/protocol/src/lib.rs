pub mod commands;
pub mod theme;
pub mod types;

pub use commands::{IconDirection, RenderCommand, TextAlign};
pub use theme::ThemeToken;
pub use types::{Point, Rect, Viewport};
