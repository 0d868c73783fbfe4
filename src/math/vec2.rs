/// A point or direction in device space, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Tangent angle of the segment from `self` to `other`, in radians.
    pub fn angle_to(self, other: Vec2) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(p: [f32; 2]) -> Vec2 {
        Vec2::new(p[0], p[1])
    }
}
