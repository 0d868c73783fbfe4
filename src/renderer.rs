use crate::context::RenderContext;
use crate::path::PathGeometry;
use crate::sprite::{RotatedSpriteCache, Sprite};
use crate::style::LineStyle;

/// Arc length consumed before the first sign becomes eligible, so no arrow
/// sits exactly on the path's start point.
const SIGN_LEAD_IN: f32 = 50.0;

/// Draw one decorated polyline: border stroke, narrower fill stroke, then
/// direction signs stamped every `sign_interval` pixels of arc length.
///
/// An empty path (no rings, or only empty rings) issues no drawing calls at
/// all. Callers must keep `sign_interval` positive; that is a contract, not
/// a runtime check.
pub fn draw_leading_path(
    ctx: &mut dyn RenderContext,
    path: &PathGeometry,
    style: &LineStyle,
    sign: &Sprite,
) {
    debug_assert!(
        style.sign_interval > 0.0,
        "sign_interval must be positive, got {}",
        style.sign_interval
    );

    if !path.has_points() {
        return;
    }

    ctx.save();

    trace_rings(ctx, path, style.closed);
    stroke_background(ctx, style);

    // a second, separate path; the first was consumed by the stroke
    trace_rings(ctx, path, style.closed);
    stroke_foreground(ctx, style);

    stamp_signs(ctx, path, style, sign);

    ctx.restore();
}

fn trace_rings(ctx: &mut dyn RenderContext, path: &PathGeometry, closed: bool) {
    ctx.begin_path();
    for ring in path.rings() {
        for (j, p) in ring.iter().enumerate() {
            if j == 0 {
                ctx.move_to(p.x, p.y);
            } else {
                ctx.line_to(p.x, p.y);
            }
        }
        if closed && !ring.is_empty() {
            ctx.close_path();
        }
    }
}

fn stroke_background(ctx: &mut dyn RenderContext, style: &LineStyle) {
    if style.weight == 0.0 {
        return;
    }
    ctx.set_global_alpha(style.opacity);
    ctx.set_line_width(style.weight);
    ctx.set_stroke_color(style.border_color);
    ctx.set_line_cap(style.line_cap);
    ctx.set_line_join(style.line_join);
    ctx.stroke();
}

fn stroke_foreground(ctx: &mut dyn RenderContext, style: &LineStyle) {
    if style.weight == 0.0 {
        return;
    }
    ctx.set_global_alpha(style.opacity);
    ctx.set_line_width(style.foreground_width());
    ctx.set_stroke_color(style.color);
    ctx.set_line_cap(style.line_cap);
    ctx.set_line_join(style.line_join);
    ctx.stroke();
}

/// Walk every segment accumulating arc length and blit one rotated sign per
/// interval crossing. The accumulator starts at the lead-in once for the
/// whole traversal and carries across segment and ring boundaries, keeping
/// the cadence continuous.
fn stamp_signs(ctx: &mut dyn RenderContext, path: &PathGeometry, style: &LineStyle, sign: &Sprite) {
    let interval = style.sign_interval;
    let mut length = SIGN_LEAD_IN;
    let mut cache = RotatedSpriteCache::new(sign);
    let mut stamped = 0u32;

    for ring in path.rings() {
        for pair in ring.windows(2) {
            let (p1, p2) = (pair[0], pair[1]);
            let d = p1.distance(p2);
            length += d;

            let count = (length / interval).floor() as i32;
            if count < 1 {
                continue;
            }

            let theta = p1.angle_to(p2);
            let (sin, cos) = theta.sin_cos();
            let rotated = cache.get(theta);
            let half_w = rotated.width() as f32 / 2.0;
            let half_h = rotated.height() as f32 / 2.0;

            for _ in 0..count {
                length -= interval;
                let along = d - length;
                ctx.draw_sprite(
                    rotated,
                    p1.x + along * cos - half_w,
                    p1.y + along * sin - half_h,
                );
            }
            stamped += count as u32;
        }
    }

    log::trace!(
        "stamped {} leading signs across {} rings",
        stamped,
        path.rings().len()
    );
}
