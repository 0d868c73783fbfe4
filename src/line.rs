use crate::context::RenderContext;
use crate::math::Vec2;
use crate::path::PathGeometry;
use crate::renderer::draw_leading_path;
use crate::sprite::Sprite;
use crate::style::LineStyle;

/// Something the host canvas renderer can ask to paint itself during a
/// redraw. Hosts compose shapes through this trait rather than subclassing
/// a renderer type.
pub trait Drawable {
    fn redraw(&self, ctx: &mut dyn RenderContext);
}

/// Widens the host's interaction hit-test margin for shapes drawn wider
/// than its default line.
pub trait HitTestable {
    fn hit_margin(&self, base_tolerance: f32) -> f32;
}

/// A polyline rendered as a bordered stroke with periodic direction signs.
///
/// Owns its style and the base sign sprite; geometry is replaced wholesale
/// by the host's projection step whenever the view transform changes.
pub struct LeadingLine {
    path: PathGeometry,
    style: LineStyle,
    sign: Sprite,
}

impl LeadingLine {
    pub fn new(rings: Vec<Vec<Vec2>>, style: LineStyle) -> LeadingLine {
        let sign = Sprite::sign(style.weight, style.sign_color);
        log::debug!("built {}x{} leading sign sprite", sign.width(), sign.height());
        LeadingLine {
            path: PathGeometry::new(rings),
            style,
            sign,
        }
    }

    pub fn path(&self) -> &PathGeometry {
        &self.path
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// Geometry-projection entry point, called on every view change.
    pub fn set_rings(&mut self, rings: Vec<Vec<Vec2>>) {
        self.path = PathGeometry::new(rings);
    }

    /// Replace the style, rebuilding the sign sprite when its inputs changed.
    pub fn set_style(&mut self, style: LineStyle) {
        if style.weight != self.style.weight || style.sign_color != self.style.sign_color {
            self.sign = Sprite::sign(style.weight, style.sign_color);
            log::debug!("rebuilt sign sprite for weight {}", style.weight);
        }
        self.style = style;
    }
}

impl Drawable for LeadingLine {
    fn redraw(&self, ctx: &mut dyn RenderContext) {
        draw_leading_path(ctx, &self.path, &self.style, &self.sign);
    }
}

impl HitTestable for LeadingLine {
    fn hit_margin(&self, base_tolerance: f32) -> f32 {
        // the buffered rendering is wider than the host's default line, so
        // the pixel bounds would be clipped without the extra margin
        base_tolerance + self.style.weight
    }
}
