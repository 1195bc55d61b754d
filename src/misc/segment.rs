use nalgebra::Point3;

use crate::misc::FloatingPoint;

/// A segment in 3D space.
#[derive(Debug, Clone)]
pub struct Segment3<T: FloatingPoint> {
    a: Point3<T>,
    b: Point3<T>,
}

impl<T: FloatingPoint> Segment3<T> {
    pub fn new(a: Point3<T>, b: Point3<T>) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> &Point3<T> {
        &self.a
    }

    pub fn b(&self) -> &Point3<T> {
        &self.b
    }

    /// The closest point on the segment to a query point, clamped to the
    /// endpoints. A zero-length segment yields its anchor.
    pub fn closest_point(&self, point: &Point3<T>) -> Point3<T> {
        let dir = self.b - self.a;
        let length_squared = dir.norm_squared();
        if length_squared <= T::default_epsilon() {
            return self.a;
        }
        let t = (point - self.a)
            .dot(&dir)
            .clamp(T::zero(), length_squared)
            / length_squared;
        self.a + dir * t
    }

    /// Squared distance from a point to the segment.
    pub fn squared_distance(&self, point: &Point3<T>) -> T {
        (point - self.closest_point(point)).norm_squared()
    }
}
