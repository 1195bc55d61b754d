use nalgebra::Point3;

use crate::misc::FloatingPoint;

/// Whether three points are collinear, judged by the squared area of the
/// parallelogram they span falling under `tolerance`.
pub fn three_points_are_collinear<T: FloatingPoint>(
    p1: &Point3<T>,
    p2: &Point3<T>,
    p3: &Point3<T>,
    tolerance: T,
) -> bool {
    let v1 = p2 - p1;
    let v2 = p3 - p1;
    v1.cross(&v2).norm_squared() <= tolerance
}
