use anyhow::{bail, ensure};
use nalgebra::Point3;

use crate::misc::FloatingPoint;
use crate::polyline::Polyline3;

pub mod circle_fit;
pub mod wedge;

pub use circle_fit::*;
pub use wedge::*;

#[cfg(test)]
mod tests;

/// The result of simplifying a polyline: the reduced polyline and the
/// number of primitive runs (segments or arcs) it was reduced to.
#[derive(Debug, Clone)]
pub struct Simplification<T: FloatingPoint> {
    runs: usize,
    polyline: Polyline3<T>,
}

impl<T: FloatingPoint> Simplification<T> {
    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn polyline(&self) -> &Polyline3<T> {
        &self.polyline
    }

    pub fn into_polyline(self) -> Polyline3<T> {
        self.polyline
    }
}

/// Greedy tolerance-bounded polyline simplifier. Each output run replaces a
/// maximal contiguous range of input points with a straight segment or a
/// circular-arc fit, growing candidate runs by exponential doubling and
/// rolling back to the last range that still fit.
#[derive(Debug, Clone)]
pub struct BiarcSimplifier<T: FloatingPoint> {
    tolerance: T,
}

impl<T: FloatingPoint> BiarcSimplifier<T> {
    pub fn try_new(tolerance: T) -> anyhow::Result<Self> {
        ensure!(
            tolerance > T::zero() && tolerance.is_finite(),
            "tolerance must be a positive finite value, got {}",
            tolerance
        );
        Ok(Self { tolerance })
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Simplify a polyline of at least two points. The input is only read;
    /// the reduced points are accumulated into a fresh polyline.
    pub fn simplify(&self, input: &Polyline3<T>) -> anyhow::Result<Simplification<T>> {
        ensure!(
            input.len() >= 2,
            "simplification needs at least two points, got {}",
            input.len()
        );
        let points = input.points();
        let last = points.len() - 1;

        let mut output = Polyline3::new();
        let mut runs = 0;
        let mut begin = 0;
        while begin < last {
            let (control, end) = self.grow_run(points, begin);
            if end <= begin {
                // The baseline single-segment line always fits, so a run
                // that fails to advance is a logic bug.
                debug_assert!(end > begin, "greedy fit made no progress");
                log::error!("no primitive fit advanced past point {begin}");
                bail!("no primitive fit advanced past point {}", begin);
            }
            // Consecutive runs share their junction point.
            let skip = usize::from(!output.is_empty());
            for point in control.into_iter().skip(skip) {
                output.push(point);
            }
            runs += 1;
            begin = end;
        }
        Ok(Simplification {
            runs,
            polyline: output,
        })
    }

    /// Grow the run starting at `begin` as far as it fits, doubling the
    /// probe stride after every success. Returns the accepted control
    /// points and the index of the point the next run starts from.
    fn grow_run(&self, points: &[Point3<T>], begin: usize) -> (Vec<Point3<T>>, usize) {
        let last = points.len() - 1;
        // A single remaining segment resolves as a line.
        if begin + 1 == last {
            return (vec![points[begin], points[last]], last);
        }

        // The trivial one-segment line is recorded up front, so the
        // rollback target exists even if the very first probe fails.
        let mut accepted = (vec![points[begin], points[begin + 1]], begin + 1);
        let mut cursor = begin + 1;
        let mut increment = 1;
        loop {
            let probe = (cursor + increment).min(last);
            let run = &points[begin..=probe];
            let Some(wedge) = find_wedge(run, self.tolerance) else {
                log::debug!("no wedge over points {begin}..={probe}, shrinking");
                break;
            };
            let Some(control) = fit_run(run, &wedge, self.tolerance) else {
                log::debug!("no primitive over points {begin}..={probe}, shrinking");
                break;
            };
            accepted = (control, probe);
            if probe == last {
                break;
            }
            cursor = probe;
            increment *= 2;
        }
        accepted
    }
}
