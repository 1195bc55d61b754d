use nalgebra::{Point3, Unit, Vector3};

use crate::misc::{FloatingPoint, Plane};

/// An infinite line in 3D space, defined by an anchor point and a direction.
#[derive(Debug, Clone)]
pub struct Line3<T: FloatingPoint> {
    origin: Point3<T>,
    direction: Vector3<T>,
}

impl<T: FloatingPoint> Line3<T> {
    pub fn new(origin: Point3<T>, direction: Vector3<T>) -> Self {
        Self { origin, direction }
    }

    /// The line through two points, anchored at the first.
    pub fn through_points(a: &Point3<T>, b: &Point3<T>) -> Self {
        Self {
            origin: *a,
            direction: b - a,
        }
    }

    pub fn origin(&self) -> &Point3<T> {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3<T> {
        &self.direction
    }

    /// The defining points coincide and the line reduces to a point.
    pub fn is_degenerate(&self) -> bool {
        self.direction.norm_squared() <= T::default_epsilon()
    }

    pub fn unit_direction(&self) -> Unit<Vector3<T>> {
        Unit::new_normalize(self.direction)
    }

    /// Squared distance from a point to the infinite line.
    /// A degenerate line measures against its anchor point.
    pub fn squared_distance(&self, point: &Point3<T>) -> T {
        let to_point = point - self.origin;
        let length_squared = self.direction.norm_squared();
        if length_squared <= T::default_epsilon() {
            return to_point.norm_squared();
        }
        let t = to_point.dot(&self.direction) / length_squared;
        (to_point - self.direction * t).norm_squared()
    }

    /// The plane perpendicular to the line at the given point.
    /// Degenerate for a degenerate line.
    pub fn perpendicular_plane(&self, point: &Point3<T>) -> Plane<T> {
        Plane::from_point_normal(point, self.direction)
    }
}
