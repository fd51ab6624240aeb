//! Axis-aligned bounds

use crate::point::{Point3f, Vector3f};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a non-empty set of points.
///
/// Zero-extent boxes (a single point, or all points sharing a coordinate) are
/// legal; consumers are responsible for handling the degenerate spans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point3f,
    pub max: Point3f,
}

impl Bounds {
    /// Compute the bounds of a set of points, or `None` for an empty set
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3f>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }
        Some(Self { min, max })
    }

    /// Center of the box
    pub fn center(&self) -> Point3f {
        Point3f::from((self.min.coords + self.max.coords) * 0.5)
    }

    /// Per-axis extent of the box
    pub fn size(&self) -> Vector3f {
        self.max - self.min
    }

    /// Length of the box diagonal
    pub fn diagonal(&self) -> f32 {
        self.size().norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bounds_cover_all_points() {
        let points = vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 1.0, 2.0),
            Point3f::new(-1.0, 0.5, 1.5),
        ];
        let bounds = Bounds::from_points(&points).unwrap();
        assert_eq!(bounds.min, Point3f::new(-1.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3f::new(1.0, 1.0, 2.0));
        assert_abs_diff_eq!(bounds.center().x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.center().z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn single_point_bounds_are_degenerate() {
        let points = vec![Point3f::new(2.0, -3.0, 4.0)];
        let bounds = Bounds::from_points(&points).unwrap();
        assert_eq!(bounds.min, bounds.max);
        assert_abs_diff_eq!(bounds.diagonal(), 0.0);
        assert_eq!(bounds.center(), Point3f::new(2.0, -3.0, 4.0));
    }

    #[test]
    fn empty_input_has_no_bounds() {
        let points: Vec<Point3f> = Vec::new();
        assert!(Bounds::from_points(&points).is_none());
    }
}
