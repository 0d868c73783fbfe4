mod vec2;

pub use vec2::Vec2;

pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_distance() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);

        assert!((a.distance(b) - 5.0).abs() < 0.001);
        assert!((b.distance(a) - 5.0).abs() < 0.001);
        assert!(a.distance(a).abs() < 0.001);
    }

    #[test]
    fn test_angle_to() {
        let origin = Vec2::new(0.0, 0.0);

        assert!(origin.angle_to(Vec2::new(10.0, 0.0)).abs() < 0.001);
        assert!((origin.angle_to(Vec2::new(0.0, 10.0)) - PI / 2.0).abs() < 0.001);
        assert!((origin.angle_to(Vec2::new(-10.0, 0.0)) - PI).abs() < 0.001);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }
}
