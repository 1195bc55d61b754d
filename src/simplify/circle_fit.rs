use nalgebra::Point3;

use crate::misc::{three_points_are_collinear, Circle3, FloatingPoint, Segment3};
use crate::simplify::Wedge;

/// Fit a single primitive to the run: a straight segment when every
/// interior point stays within `tolerance` of the first-to-last chord,
/// otherwise a circle through the endpoints and one interior point that
/// keeps every interior point's combined planar and radial deviation within
/// tolerance. The first candidate circle that validates wins; the search is
/// not for a best fit.
///
/// Returns the run's control points — `{first, last}` for a segment,
/// `{first, snapped interior points.., last}` for a circle — or `None` when
/// no primitive fits.
pub fn fit_run<T: FloatingPoint>(
    points: &[Point3<T>],
    wedge: &Wedge<T>,
    tolerance: T,
) -> Option<Vec<Point3<T>>> {
    debug_assert!(points.len() >= 3, "a circle fit needs at least two segments");
    let sq_tolerance = tolerance * tolerance;
    let first = points[0];
    let last = points[points.len() - 1];
    let interior = &points[1..points.len() - 1];

    // Straight segments are always preferred over circles.
    let chord = Segment3::new(first, last);
    if interior
        .iter()
        .all(|point| chord.squared_distance(point) <= sq_tolerance)
    {
        return Some(vec![first, last]);
    }

    if wedge.is_degenerate() {
        // Coincident run endpoints admit no three-point circle, and the
        // chord check above already ruled out a line.
        return None;
    }

    for candidate in interior {
        if three_points_are_collinear(&first, candidate, &last, T::default_epsilon()) {
            continue;
        }
        let Some(circle) = Circle3::try_from_points(&first, candidate, &last) else {
            continue;
        };
        let plane = circle.supporting_plane();
        let valid = interior.iter().all(|point| {
            let projection = plane.project(point);
            let planar = (point - projection).norm_squared();
            let radial = (projection - circle.center()).norm_squared() - circle.squared_radius();
            planar + radial <= sq_tolerance
        });
        if valid {
            log::debug!(
                "fit circle c:{:?} r:{:?} over {} points",
                circle.center(),
                circle.radius(),
                points.len()
            );
            let control = std::iter::once(first)
                .chain(interior.iter().map(|point| circle.snap(point)))
                .chain(std::iter::once(last))
                .collect();
            return Some(control);
        }
    }
    None
}
