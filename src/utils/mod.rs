//! Various geometrical operators and predicates.

pub use self::orientation::{orient2d, Orientation};
pub use self::point_in_poly2d::{point_location_in_poly2d, point_on_segment2d, PointLocation};
pub use self::segments_intersection::{segments_intersection2d, SegmentsIntersection};

pub mod hashmap;
mod orientation;
mod point_in_poly2d;
mod segments_intersection;

use crate::math::{Point, Real};

/// Computes the signed area of the polygon described by `pts`.
///
/// The sign follows the shoelace convention: positive for a
/// counter-clockwise ring, negative for a clockwise one. Rings with fewer
/// than 3 points have a zero area.
pub fn signed_polygon_area(pts: &[Point<Real>]) -> Real {
    if pts.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..pts.len() {
        let j = (i + 1) % pts.len();
        sum += pts[i].x * pts[j].y - pts[j].x * pts[i].y;
    }

    sum * 0.5
}

/// Tests whether `a` and `b` coincide, within `epsilon` scaled by the
/// magnitude of their coordinates.
pub fn points_coincide(a: &Point<Real>, b: &Point<Real>, epsilon: Real) -> bool {
    let scale = a.coords.amax().max(b.coords.amax()).max(1.0);
    let eps = epsilon * scale;
    (b - a).norm_squared() <= eps * eps
}
