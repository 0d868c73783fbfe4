use crate::math::Vec2;

/// Device-space polyline geometry: one or more rings of projected points.
///
/// Rebuilt by the host's projection step on every view-transform change, so
/// instances are cheap and short-lived. The renderer never mutates one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathGeometry {
    rings: Vec<Vec<Vec2>>,
}

impl PathGeometry {
    pub fn new(rings: Vec<Vec<Vec2>>) -> PathGeometry {
        PathGeometry { rings }
    }

    /// Single-ring convenience for the common one-part polyline.
    pub fn from_points<P: Into<Vec2>>(points: Vec<P>) -> PathGeometry {
        PathGeometry {
            rings: vec![points.into_iter().map(Into::into).collect()],
        }
    }

    pub fn rings(&self) -> &[Vec<Vec2>] {
        &self.rings
    }

    /// False when there are no rings or every ring is empty; such a path
    /// draws nothing.
    pub fn has_points(&self) -> bool {
        self.rings.iter().any(|ring| !ring.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_paths_have_no_points() {
        assert!(!PathGeometry::default().has_points());
        assert!(!PathGeometry::new(vec![]).has_points());
        assert!(!PathGeometry::new(vec![vec![], vec![]]).has_points());
    }

    #[test]
    fn test_from_points() {
        let path = PathGeometry::from_points(vec![[0.0, 0.0], [10.0, 5.0]]);

        assert!(path.has_points());
        assert_eq!(path.rings().len(), 1);
        assert_eq!(path.rings()[0][1], Vec2::new(10.0, 5.0));
    }
}
