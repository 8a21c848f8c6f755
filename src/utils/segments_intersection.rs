use crate::math::{Point, Real};
use crate::shape::SegmentPointLocation;
use crate::utils::{orient2d, points_coincide, Orientation};

/// Intersection between two segments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SegmentsIntersection {
    /// Single point of intersection.
    Point {
        /// Location of the intersection point on the first segment.
        loc1: SegmentPointLocation,
        /// Location of the intersection point on the second segment.
        loc2: SegmentPointLocation,
    },
    /// Intersection along a segment (when both segments are collinear).
    Segment {
        /// Location of the first intersection point on the first segment.
        first_loc1: SegmentPointLocation,
        /// Location of the first intersection point on the second segment.
        first_loc2: SegmentPointLocation,
        /// Location of the second intersection point on the first segment.
        second_loc1: SegmentPointLocation,
        /// Location of the second intersection point on the second segment.
        second_loc2: SegmentPointLocation,
    },
}

/// Computes the intersection between the segments `[a, b]` and `[c, d]`.
///
/// Proper crossings are reported as a single point; collinear overlaps are
/// reported as the overlapping sub-segment. A crossing whose parameter
/// falls within tolerance of `0` or `1` is snapped to the corresponding
/// vertex, so shared-endpoint touches come out as `OnVertex` locations
/// rather than near-degenerate edge parameters.
pub fn segments_intersection2d(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
    epsilon: Real,
) -> Option<SegmentsIntersection> {
    let denom = a.x * (d.y - c.y) + b.x * (c.y - d.y) + d.x * (b.y - a.y) + c.x * (a.y - b.y);

    // If denom is zero, then segments are parallel: handle separately.
    let scale = (b - a).norm_squared().max((d - c).norm_squared()).max(1.0);
    if denom.abs() <= epsilon * scale || ulps_eq!(denom, 0.0) {
        return parallel_intersection(a, b, c, d, epsilon);
    }

    let s = (a.x * (d.y - c.y) + c.x * (a.y - d.y) + d.x * (c.y - a.y)) / denom;
    let t = -(a.x * (c.y - b.y) + b.x * (a.y - c.y) + c.x * (b.y - a.y)) / denom;

    let loc1 = snap_parameter(s, epsilon)?;
    let loc2 = snap_parameter(t, epsilon)?;
    Some(SegmentsIntersection::Point { loc1, loc2 })
}

// Interprets a parametric solution along a segment, rejecting parameters
// outside [0, 1] and snapping near-endpoint parameters onto the vertices.
fn snap_parameter(t: Real, epsilon: Real) -> Option<SegmentPointLocation> {
    if t < -epsilon || t > 1.0 + epsilon {
        None
    } else if t <= epsilon {
        Some(SegmentPointLocation::OnVertex(0))
    } else if t >= 1.0 - epsilon {
        Some(SegmentPointLocation::OnVertex(1))
    } else {
        Some(SegmentPointLocation::OnEdge([1.0 - t, t]))
    }
}

fn parallel_intersection(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
    epsilon: Real,
) -> Option<SegmentsIntersection> {
    if orient2d(a, b, c, epsilon) != Orientation::Degenerate {
        return None;
    }

    let ab_c = between(a, b, c, epsilon);
    let ab_d = between(a, b, d, epsilon);
    if let (Some(loc1), Some(loc2)) = (ab_c, ab_d) {
        return Some(SegmentsIntersection::Segment {
            first_loc1: loc1,
            first_loc2: SegmentPointLocation::OnVertex(0),
            second_loc1: loc2,
            second_loc2: SegmentPointLocation::OnVertex(1),
        });
    }

    let cd_a = between(c, d, a, epsilon);
    let cd_b = between(c, d, b, epsilon);
    if let (Some(loc1), Some(loc2)) = (cd_a, cd_b) {
        return Some(SegmentsIntersection::Segment {
            first_loc1: SegmentPointLocation::OnVertex(0),
            first_loc2: loc1,
            second_loc1: SegmentPointLocation::OnVertex(1),
            second_loc2: loc2,
        });
    }

    if let (Some(loc1), Some(loc2)) = (ab_c, cd_b) {
        return Some(SegmentsIntersection::Segment {
            first_loc1: loc1,
            first_loc2: SegmentPointLocation::OnVertex(0),
            second_loc1: SegmentPointLocation::OnVertex(1),
            second_loc2: loc2,
        });
    }

    if let (Some(loc1), Some(loc2)) = (ab_c, cd_a) {
        return Some(SegmentsIntersection::Segment {
            first_loc1: loc1,
            first_loc2: SegmentPointLocation::OnVertex(0),
            second_loc1: SegmentPointLocation::OnVertex(0),
            second_loc2: loc2,
        });
    }

    if let (Some(loc1), Some(loc2)) = (ab_d, cd_b) {
        return Some(SegmentsIntersection::Segment {
            first_loc1: loc1,
            first_loc2: SegmentPointLocation::OnVertex(1),
            second_loc1: SegmentPointLocation::OnVertex(1),
            second_loc2: loc2,
        });
    }

    if let (Some(loc1), Some(loc2)) = (ab_d, cd_a) {
        return Some(SegmentsIntersection::Segment {
            first_loc1: loc1,
            first_loc2: SegmentPointLocation::OnVertex(1),
            second_loc1: SegmentPointLocation::OnVertex(0),
            second_loc2: loc2,
        });
    }

    None
}

// Checks that `c` is in-between `a` and `b`.
// Assumes the three points are collinear.
fn between(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    epsilon: Real,
) -> Option<SegmentPointLocation> {
    if points_coincide(a, c, epsilon) {
        return Some(SegmentPointLocation::OnVertex(0));
    }
    if points_coincide(b, c, epsilon) {
        return Some(SegmentPointLocation::OnVertex(1));
    }

    // If ab is not vertical, check betweenness on x; else on y.
    if a.x != b.x {
        if a.x <= c.x && c.x <= b.x {
            let bcoord = (c.x - a.x) / (b.x - a.x);
            return Some(SegmentPointLocation::OnEdge([1.0 - bcoord, bcoord]));
        } else if a.x >= c.x && c.x >= b.x {
            let bcoord = (c.x - b.x) / (a.x - b.x);
            return Some(SegmentPointLocation::OnEdge([bcoord, 1.0 - bcoord]));
        }
    } else if a.y != b.y {
        if a.y <= c.y && c.y <= b.y {
            let bcoord = (c.y - a.y) / (b.y - a.y);
            return Some(SegmentPointLocation::OnEdge([1.0 - bcoord, bcoord]));
        } else if a.y >= c.y && c.y >= b.y {
            let bcoord = (c.y - b.y) / (a.y - b.y);
            return Some(SegmentPointLocation::OnEdge([bcoord, 1.0 - bcoord]));
        }
    }

    None
}
