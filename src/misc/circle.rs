use nalgebra::{Point3, Unit, Vector3};

use crate::misc::{FloatingPoint, Plane};

/// A circle in 3D space, characterized by its center, radius and the unit
/// normal of its supporting plane.
#[derive(Debug, Clone)]
pub struct Circle3<T: FloatingPoint> {
    center: Point3<T>,
    radius: T,
    normal: Unit<Vector3<T>>,
}

impl<T: FloatingPoint> Circle3<T> {
    pub fn new(center: Point3<T>, radius: T, normal: Unit<Vector3<T>>) -> Self {
        Self {
            center,
            radius,
            normal,
        }
    }

    /// The circumscribed circle of three points, or `None` if they are
    /// collinear and no circle passes through them.
    pub fn try_from_points(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> Option<Self> {
        let v1 = b - a;
        let v2 = c - a;
        let normal = v1.cross(&v2);
        let area = normal.norm_squared();
        if area <= T::default_epsilon() {
            return None;
        }
        let two = T::one() + T::one();
        let offset = (v2.cross(&normal) * v1.norm_squared()
            + normal.cross(&v1) * v2.norm_squared())
            / (two * area);
        let center = a + offset;
        let radius = (a - center).norm();
        Some(Self::new(center, radius, Unit::new_normalize(normal)))
    }

    pub fn center(&self) -> &Point3<T> {
        &self.center
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    pub fn squared_radius(&self) -> T {
        self.radius * self.radius
    }

    pub fn normal(&self) -> &Unit<Vector3<T>> {
        &self.normal
    }

    pub fn supporting_plane(&self) -> Plane<T> {
        Plane::from_point_normal(&self.center, self.normal.into_inner())
    }

    /// Snap a point onto the circle: project it onto the supporting plane,
    /// then push the projection out to the radius along the center-to-point
    /// direction. A point projecting onto the center snaps to an arbitrary
    /// position on the circle.
    pub fn snap(&self, point: &Point3<T>) -> Point3<T> {
        let projection = self.supporting_plane().project(point);
        let radial = projection - self.center;
        let length = radial.norm();
        if length <= T::default_epsilon() {
            return self.center + self.in_plane_axis() * self.radius;
        }
        self.center + radial * (self.radius / length)
    }

    /// `count` ordered points on the circle at uniform angular increments.
    /// The starting location depends on the supporting plane's orientation.
    pub fn sample(&self, count: usize) -> Vec<Point3<T>> {
        let u = self.in_plane_axis();
        let v = self.normal.cross(&u);
        let step = T::two_pi() / T::from_usize(count).unwrap();
        (0..count)
            .map(|i| {
                let theta = step * T::from_usize(i).unwrap();
                self.center + (u * theta.cos() + v * theta.sin()) * self.radius
            })
            .collect()
    }

    // A unit vector lying in the supporting plane, built against the
    // normal's smallest component.
    fn in_plane_axis(&self) -> Vector3<T> {
        let n = self.normal.into_inner();
        let (x, y, z) = (n.x.abs(), n.y.abs(), n.z.abs());
        let seed = if x <= y && x <= z {
            Vector3::x()
        } else if y <= z {
            Vector3::y()
        } else {
            Vector3::z()
        };
        n.cross(&seed).normalize()
    }
}
