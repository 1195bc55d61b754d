use nalgebra::{DMatrix, Point3};

use crate::misc::FloatingPoint;
use crate::polyline::Polyline3;

/// Laplacian smoothing of a polyline with the endpoints held fixed.
///
/// Each iteration moves the interior points one step toward their neighbor
/// average and then half a step away from it, which damps shrinkage
/// compared to plain Laplacian flow. Polylines with fewer than three points
/// have no interior and are returned unchanged.
pub fn laplacian_smooth<T: FloatingPoint>(
    polyline: &Polyline3<T>,
    step_size: T,
    iterations: usize,
) -> Polyline3<T> {
    let n = polyline.len();
    if n < 3 {
        return polyline.clone();
    }

    let mut laplacian = DMatrix::<T>::zeros(n, n);
    let two = T::one() + T::one();
    for i in 1..n - 1 {
        laplacian[(i, i - 1)] = T::one();
        laplacian[(i, i)] = -two;
        laplacian[(i, i + 1)] = T::one();
    }

    let mut positions = DMatrix::<T>::zeros(n, 3);
    for (i, point) in polyline.iter().enumerate() {
        positions[(i, 0)] = point.x;
        positions[(i, 1)] = point.y;
        positions[(i, 2)] = point.z;
    }

    let half = T::from_f64(0.5).unwrap();
    for _ in 0..iterations {
        let toward = &laplacian * &positions * step_size;
        positions += toward;
        let away = &laplacian * &positions * (step_size * half);
        positions -= away;
    }

    (0..n)
        .map(|i| Point3::new(positions[(i, 0)], positions[(i, 1)], positions[(i, 2)]))
        .collect()
}
