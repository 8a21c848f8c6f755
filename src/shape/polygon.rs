//! Definition of the polygon shape and its metrics.

use crate::math::{Point, Real};
use crate::shape::MultiPolygon;
use crate::transformation::{self, BooleanOp};
use crate::utils;

/// Winding order of a simple polygon's boundary.
///
/// This is a derived quantity: it is always recomputed from the current
/// point sequence, never stored.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WindingOrder {
    /// The vertices are traversed clockwise.
    Clockwise,
    /// The vertices are traversed counter-clockwise.
    CounterClockwise,
}

/// Error produced by polygon queries and boolean operations.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// The operation requires a simple polygon with at least 3 points.
    #[error("operation requires a simple polygon with at least 3 points")]
    InvalidGeometry,
    /// A point query used an out-of-bounds index.
    #[error("point index {index} is out of range for a polygon with {len} points")]
    IndexOutOfRange {
        /// The queried index.
        index: usize,
        /// The number of points on the polygon.
        len: usize,
    },
}

/// A simple polygon described by one closed ring of points.
///
/// The ring is implicitly closed: the last point is connected back to the
/// first one. Construction is append-only; all the operations below read
/// the ring without mutating it and return new values.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point<Real>>,
}

impl Polygon {
    /// Creates an empty polygon.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a polygon from its ring of points.
    pub fn from_points(points: Vec<Point<Real>>) -> Self {
        Self { points }
    }

    /// Creates the regular polygon with `sides` vertices inscribed in the
    /// circle with the given `center` and circumradius `radius`.
    ///
    /// The vertices are emitted counter-clockwise, starting on the
    /// positive x-axis.
    pub fn regular(sides: usize, center: Point<Real>, radius: Real) -> Self {
        let points = (0..sides)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as Real / sides as Real;
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        Self { points }
    }

    /// Appends the point `(x, y)` to this polygon's ring.
    pub fn push(&mut self, x: Real, y: Real) {
        self.points.push(Point::new(x, y));
    }

    /// Appends `pt` to this polygon's ring.
    pub fn push_point(&mut self, pt: Point<Real>) {
        self.points.push(pt);
    }

    /// The number of points on this polygon's ring.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this polygon has no points at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points of this polygon's ring.
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The `i`-th point of this polygon's ring.
    pub fn point(&self, i: usize) -> Result<Point<Real>, PolygonError> {
        self.points
            .get(i)
            .copied()
            .ok_or(PolygonError::IndexOutOfRange {
                index: i,
                len: self.points.len(),
            })
    }

    /// The area enclosed by this polygon's ring.
    ///
    /// This is the absolute value of the shoelace sum, so it does not
    /// depend on the winding order. Rings with fewer than 3 points enclose
    /// nothing and have an area equal to zero.
    pub fn area(&self) -> Real {
        utils::signed_polygon_area(&self.points).abs()
    }

    /// The winding order of this polygon's ring.
    ///
    /// Rings with fewer than 3 points have an undefined winding order;
    /// querying it is a precondition violation reported as
    /// [`PolygonError::InvalidGeometry`].
    pub fn winding_order(&self) -> Result<WindingOrder, PolygonError> {
        if self.points.len() < 3 {
            return Err(PolygonError::InvalidGeometry);
        }

        let mut sum = 0.0;
        for i in 0..self.points.len() {
            let p1 = &self.points[i];
            let p2 = &self.points[(i + 1) % self.points.len()];
            sum += (p2.x - p1.x) * (p2.y + p1.y);
        }

        if sum > 0.0 {
            Ok(WindingOrder::Clockwise)
        } else {
            Ok(WindingOrder::CounterClockwise)
        }
    }

    /// Computes the union of this polygon with `other`.
    ///
    /// The result contains one ring per connected component of the merged
    /// region (two rings when the operands are disjoint).
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyclip2d::na::Point2;
    /// # use polyclip2d::shape::Polygon;
    /// let a = Polygon::from_points(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(4.0, 4.0),
    ///     Point2::new(0.0, 4.0),
    /// ]);
    /// let b = Polygon::from_points(vec![
    ///     Point2::new(2.0, 2.0),
    ///     Point2::new(6.0, 2.0),
    ///     Point2::new(6.0, 6.0),
    ///     Point2::new(2.0, 6.0),
    /// ]);
    ///
    /// let merged = a.union(&b).unwrap();
    /// assert_eq!(merged.len(), 1);
    /// assert!((merged.area() - 28.0).abs() < 1.0e-9);
    /// ```
    pub fn union(&self, other: &Polygon) -> Result<MultiPolygon, PolygonError> {
        self.boolean_op(other, BooleanOp::Union)
    }

    /// Computes the intersection of this polygon with `other`.
    ///
    /// The result is empty when the operands are disjoint.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyclip2d::na::Point2;
    /// # use polyclip2d::shape::Polygon;
    /// let a = Polygon::from_points(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(4.0, 4.0),
    ///     Point2::new(0.0, 4.0),
    /// ]);
    /// let b = Polygon::from_points(vec![
    ///     Point2::new(2.0, 2.0),
    ///     Point2::new(6.0, 2.0),
    ///     Point2::new(6.0, 6.0),
    ///     Point2::new(2.0, 6.0),
    /// ]);
    ///
    /// let common = a.intersection(&b).unwrap();
    /// assert_eq!(common.len(), 1);
    /// assert!((common.area() - 4.0).abs() < 1.0e-9);
    /// ```
    pub fn intersection(&self, other: &Polygon) -> Result<MultiPolygon, PolygonError> {
        self.boolean_op(other, BooleanOp::Intersection)
    }

    /// Computes the difference between this polygon and `other` (`self − other`).
    ///
    /// When `other` is entirely enclosed by `self` the true result would
    /// have a hole, which a single-ring polygon cannot represent; in that
    /// case the outer ring is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyclip2d::na::Point2;
    /// # use polyclip2d::shape::Polygon;
    /// let a = Polygon::from_points(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(4.0, 4.0),
    ///     Point2::new(0.0, 4.0),
    /// ]);
    /// let b = Polygon::from_points(vec![
    ///     Point2::new(2.0, 2.0),
    ///     Point2::new(6.0, 2.0),
    ///     Point2::new(6.0, 6.0),
    ///     Point2::new(2.0, 6.0),
    /// ]);
    ///
    /// let remainder = a.difference(&b).unwrap();
    /// assert_eq!(remainder.len(), 1);
    /// assert!((remainder.area() - 12.0).abs() < 1.0e-9);
    /// ```
    pub fn difference(&self, other: &Polygon) -> Result<MultiPolygon, PolygonError> {
        self.boolean_op(other, BooleanOp::Difference)
    }

    fn boolean_op(&self, other: &Polygon, op: BooleanOp) -> Result<MultiPolygon, PolygonError> {
        let rings = transformation::polygons_boolean(&self.points, &other.points, op)
            .map_err(|_| PolygonError::InvalidGeometry)?;
        Ok(rings.into_iter().map(Polygon::from_points).collect())
    }
}

impl From<Vec<Point<Real>>> for Polygon {
    fn from(points: Vec<Point<Real>>) -> Self {
        Self::from_points(points)
    }
}

impl FromIterator<Point<Real>> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point<Real>>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}
