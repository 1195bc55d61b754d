use itertools::Itertools;
use nalgebra::Point3;

use crate::misc::{FloatingPoint, Segment3};

pub mod load;
pub use load::*;


/// An ordered, non-cyclic sequence of points, with adjacent points
/// implicitly understood to be connected to each other.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline3<T: FloatingPoint> {
    points: Vec<Point3<T>>,
}

impl<T: FloatingPoint> Polyline3<T> {
    pub fn new() -> Self {
        Self { points: vec![] }
    }

    pub fn from_points(points: Vec<Point3<T>>) -> Self {
        Self { points }
    }

    /// Number of points in the polyline.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point3<T>> {
        self.points.iter()
    }

    pub fn first_point(&self) -> Option<&Point3<T>> {
        self.points.first()
    }

    pub fn last_point(&self) -> Option<&Point3<T>> {
        self.points.last()
    }

    /// Append a point after the last point.
    pub fn push(&mut self, point: Point3<T>) {
        self.points.push(point);
    }

    /// Add a point at the specified location.
    pub fn insert(&mut self, index: usize, point: Point3<T>) {
        self.points.insert(index, point);
    }

    pub fn remove(&mut self, index: usize) -> Point3<T> {
        self.points.remove(index)
    }

    /// Iterate over the segments connecting consecutive points.
    pub fn segments(&self) -> impl Iterator<Item = Segment3<T>> + '_ {
        self.points
            .iter()
            .tuple_windows()
            .map(|(a, b)| Segment3::new(*a, *b))
    }

    /// Squared distance from a point to the polyline, the minimum over its
    /// constituent segments. `None` for an empty polyline; a single point
    /// measures directly.
    pub fn squared_distance(&self, point: &Point3<T>) -> Option<T> {
        match self.points.len() {
            0 => None,
            1 => Some((point - self.points[0]).norm_squared()),
            _ => self
                .segments()
                .map(|segment| segment.squared_distance(point))
                .min_by(|a, b| a.partial_cmp(b).expect("point distances are ordered")),
        }
    }
}

impl<T: FloatingPoint> FromIterator<Point3<T>> for Polyline3<T> {
    fn from_iter<I: IntoIterator<Item = Point3<T>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
