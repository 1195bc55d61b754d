use nalgebra::{Point3, Rotation3, Unit};

use crate::misc::{FloatingPoint, Line3, Plane};

/// The admissible angular range of supporting planes through a run's pivot
/// line (the line joining the run's first and last points), bounded by two
/// planes anchored at the run start.
#[derive(Debug, Clone)]
pub struct Wedge<T: FloatingPoint> {
    plane1: Plane<T>,
    plane2: Plane<T>,
    degenerate: bool,
}

impl<T: FloatingPoint> Wedge<T> {
    fn bounded(plane1: Plane<T>, plane2: Plane<T>) -> Self {
        Self {
            plane1,
            plane2,
            degenerate: false,
        }
    }

    fn collapsed(plane: Plane<T>) -> Self {
        Self {
            plane1: plane.clone(),
            plane2: plane,
            degenerate: true,
        }
    }

    pub fn boundaries(&self) -> (&Plane<T>, &Plane<T>) {
        (&self.plane1, &self.plane2)
    }

    /// A collapsed wedge: the run's endpoints coincide, the pivot line
    /// reduces to a point and every plane through it is admissible. Not an
    /// error; the run resolves through the line/circle fit directly.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// The plane bisecting the two boundary planes.
    pub fn bisector(&self) -> Plane<T> {
        self.plane1.bisector(&self.plane2)
    }
}

/// Search for a non-empty family of planes through the pivot line of
/// `points` (its first-to-last line) such that every point of the run stays
/// within `tolerance` of some plane of the family. Returns the wedge
/// bounding the surviving angular interval, or `None` when the per-point
/// constraints are mutually unsatisfiable. A failure is final for this run
/// at this tolerance; the caller must shrink the run instead of retrying.
pub fn find_wedge<T: FloatingPoint>(points: &[Point3<T>], tolerance: T) -> Option<Wedge<T>> {
    debug_assert!(points.len() >= 2, "a run spans at least two points");
    let first = points[0];
    let last = points[points.len() - 1];

    let pivot = Line3::through_points(&first, &last);
    let reference = pivot.perpendicular_plane(&first);
    if pivot.is_degenerate() {
        // Coincident endpoints: all constraints collapse.
        return Some(Wedge::collapsed(reference));
    }
    let reference_normal = Unit::new_normalize(reference.normal());

    let mut low = -T::pi();
    let mut high = T::pi();
    for point in points {
        // A degenerate point plane means the point is collinear with the
        // pivot line and contributes no constraint.
        let Some(point_plane) = Plane::try_from_points(&first, &last, point) else {
            continue;
        };
        let distance = pivot.squared_distance(point).sqrt();
        // Half-angle for which the tolerance ball around the point still
        // touches the pivot line; saturates when the ball contains it.
        let ratio = (tolerance / distance).clamp(-T::one(), T::one());
        let slack = ratio.asin().abs();
        let cosine = point_plane
            .normal()
            .normalize()
            .dot(&reference_normal)
            .clamp(-T::one(), T::one());
        let angle = cosine.acos();

        low = low.max(angle - slack);
        high = high.min(angle + slack);
        if low > high {
            return None;
        }
    }

    let axis = pivot.unit_direction();
    let plane1 = Plane::from_point_normal(
        &first,
        Rotation3::from_axis_angle(&axis, low) * reference_normal.into_inner(),
    );
    let plane2 = Plane::from_point_normal(
        &first,
        Rotation3::from_axis_angle(&axis, high) * reference_normal.into_inner(),
    );
    Some(Wedge::bounded(plane1, plane2))
}
