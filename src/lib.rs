mod context;
mod line;
mod math;
mod path;
mod renderer;
mod sprite;
mod style;

// Re-export the main public interface
pub use context::RenderContext;
pub use line::{Drawable, HitTestable, LeadingLine};
pub use math::Vec2;
pub use path::PathGeometry;
pub use renderer::draw_leading_path;
pub use sprite::Sprite;
pub use style::{Color, LineCap, LineJoin, LineStyle};
