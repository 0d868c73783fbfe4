use crate::math::clamp;
use crate::style::Color;
use image::{Rgba, RgbaImage};
use std::collections::HashMap;

/// Stroke width of the chevron outline, in pixels.
const SIGN_STROKE_WIDTH: f32 = 3.0;

/// A small raster blitted onto the drawing surface.
///
/// Sign sprites are always square, sized from the line weight alone, and
/// rotation keeps the raster dimensions. Corners of the glyph clip for
/// non-axis-aligned angles; the chevron is drawn well inside the raster so
/// this never cuts visible pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    /// Build the unrotated leading-sign glyph: an open right-pointing chevron
    /// `(0,0) -> (w*2/3, w/2) -> (0, w)` stroked in `sign_color`.
    ///
    /// A zero or negative `weight` yields a degenerate empty raster rather
    /// than an error.
    pub fn sign(weight: f32, sign_color: Color) -> Sprite {
        let side = weight.max(0.0).round() as u32;
        let mut image = RgbaImage::new(side, side);

        let w = side as f32;
        let chevron = [[0.0, 0.0], [w * 2.0 / 3.0, w / 2.0], [0.0, w]];
        stroke_polyline(&mut image, &chevron, SIGN_STROKE_WIDTH, sign_color);

        Sprite { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Rotate about the raster center into a new raster of the same size.
    pub fn rotated(&self, angle: f32) -> Sprite {
        let (w, h) = self.image.dimensions();
        let mut out = RgbaImage::new(w, h);

        let cx = w as f32 / 2.0;
        let cy = h as f32 / 2.0;
        let (sin, cos) = angle.sin_cos();

        for y in 0..h {
            for x in 0..w {
                // inverse-map the destination pixel center through the rotation
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let sx = cos * dx + sin * dy + cx - 0.5;
                let sy = -sin * dx + cos * dy + cy - 0.5;
                out.put_pixel(x, y, sample_bilinear(&self.image, sx, sy));
            }
        }

        Sprite { image: out }
    }
}

fn stroke_polyline(image: &mut RgbaImage, points: &[[f32; 2]], width: f32, color: Color) {
    let half = width / 2.0;
    let r = (color[0] * 255.0).round() as u8;
    let g = (color[1] * 255.0).round() as u8;
    let b = (color[2] * 255.0).round() as u8;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let p = [x as f32 + 0.5, y as f32 + 0.5];
            let mut dist = f32::INFINITY;
            for seg in points.windows(2) {
                dist = dist.min(segment_distance(p, seg[0], seg[1]));
            }

            let coverage = clamp(half + 0.5 - dist, 0.0, 1.0);
            let a = (color[3] * coverage * 255.0).round() as u8;
            // color channels are set everywhere so rotation resampling never
            // bleeds toward black at the glyph edge
            image.put_pixel(x, y, Rgba([r, g, b, a]));
        }
    }
}

fn segment_distance(p: [f32; 2], a: [f32; 2], b: [f32; 2]) -> f32 {
    let abx = b[0] - a[0];
    let aby = b[1] - a[1];
    let len_sq = abx * abx + aby * aby;

    if len_sq == 0.0 {
        return (p[0] - a[0]).hypot(p[1] - a[1]);
    }

    let t = clamp(((p[0] - a[0]) * abx + (p[1] - a[1]) * aby) / len_sq, 0.0, 1.0);
    let nx = a[0] + t * abx;
    let ny = a[1] + t * aby;
    (p[0] - nx).hypot(p[1] - ny)
}

fn sample_bilinear(image: &RgbaImage, x: f32, y: f32) -> Rgba<u8> {
    let x0 = x.floor();
    let y0 = y.floor();
    let tx = x - x0;
    let ty = y - y0;
    let x0 = x0 as i64;
    let y0 = y0 as i64;

    let c00 = texel(image, x0, y0);
    let c10 = texel(image, x0 + 1, y0);
    let c01 = texel(image, x0, y0 + 1);
    let c11 = texel(image, x0 + 1, y0 + 1);

    let mut out = [0u8; 4];
    for i in 0..4 {
        let top = c00[i] + (c10[i] - c00[i]) * tx;
        let bottom = c01[i] + (c11[i] - c01[i]) * tx;
        out[i] = (top + (bottom - top) * ty).round() as u8;
    }
    Rgba(out)
}

fn texel(image: &RgbaImage, x: i64, y: i64) -> [f32; 4] {
    if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return [0.0; 4];
    }
    let p = image.get_pixel(x as u32, y as u32).0;
    [p[0] as f32, p[1] as f32, p[2] as f32, p[3] as f32]
}

/// Rotation buckets of 0.01 rad.
const ANGLE_QUANTUM: f32 = 0.01;

/// Rotated variants live only for one draw call, so a small bound is plenty.
const CACHE_CAPACITY: usize = 64;

/// Per-draw cache of rotated sign sprites keyed by quantized angle, so a path
/// with long runs of near-identical tangents allocates one raster per run
/// instead of one per segment.
pub(crate) struct RotatedSpriteCache<'a> {
    base: &'a Sprite,
    entries: HashMap<i32, Sprite>,
}

impl<'a> RotatedSpriteCache<'a> {
    pub fn new(base: &'a Sprite) -> RotatedSpriteCache<'a> {
        RotatedSpriteCache {
            base,
            entries: HashMap::new(),
        }
    }

    pub fn get(&mut self, angle: f32) -> &Sprite {
        let key = (angle / ANGLE_QUANTUM).round() as i32;
        if !self.entries.contains_key(&key) {
            if self.entries.len() >= CACHE_CAPACITY {
                self.entries.clear();
            }
            let rotated = self.base.rotated(key as f32 * ANGLE_QUANTUM);
            self.entries.insert(key, rotated);
        }
        &self.entries[&key]
    }
}
