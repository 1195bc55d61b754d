use nalgebra::{convert, Point3, Vector3};
use simba::scalar::SupersetOf;

use crate::misc::FloatingPoint;

/// A plane in 3D space, stored as `normal . x + constant = 0`.
/// The normal is kept as supplied and is not necessarily unit length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<T: FloatingPoint> {
    normal: Vector3<T>,
    constant: T,
}

impl<T: FloatingPoint> Plane<T> {
    pub fn new(normal: Vector3<T>, constant: T) -> Self {
        Self { normal, constant }
    }

    /// The plane through a point with the given normal.
    pub fn from_point_normal(point: &Point3<T>, normal: Vector3<T>) -> Self {
        let constant = -normal.dot(&point.coords);
        Self { normal, constant }
    }

    /// The plane through three points, or `None` if they are collinear
    /// (the degenerate plane).
    pub fn try_from_points(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> Option<Self> {
        let normal = (b - a).cross(&(c - a));
        if normal.norm_squared() <= T::default_epsilon() {
            None
        } else {
            Some(Self::from_point_normal(a, normal))
        }
    }

    pub fn normal(&self) -> Vector3<T> {
        self.normal
    }

    pub fn constant(&self) -> T {
        self.constant
    }

    /// A plane whose normal has vanished carries no orientation.
    pub fn is_degenerate(&self) -> bool {
        self.normal.norm_squared() <= T::default_epsilon()
    }

    /// Signed distance from a point to the plane, scaled by the normal length.
    pub fn signed_distance(&self, point: &Point3<T>) -> T {
        self.normal.dot(&point.coords) + self.constant
    }

    /// Orthogonal projection of a point onto the plane.
    pub fn project(&self, point: &Point3<T>) -> Point3<T> {
        let scale = self.signed_distance(point) / self.normal.norm_squared();
        point - self.normal * scale
    }

    /// The bisecting plane of two planes. For planes sharing a common line
    /// the result passes through that line.
    pub fn bisector(&self, other: &Plane<T>) -> Plane<T> {
        let n1 = self.normal.norm();
        let n2 = other.normal.norm();
        Plane::new(
            self.normal / n1 + other.normal / n2,
            self.constant / n1 + other.constant / n2,
        )
    }

    /// Cast the plane to a different floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> Plane<F> {
        Plane::new(self.normal.cast(), convert(self.constant))
    }
}
