use crate::math::{Point, Real};
use crate::shape::Segment;

/// Location of a point relative to a closed polygon.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointLocation {
    /// The point lies strictly inside the polygon.
    Inside,
    /// The point lies on the polygon's boundary, within tolerance.
    OnBoundary,
    /// The point lies strictly outside the polygon.
    Outside,
}

/// Tests whether `pt` lies on `seg`, within `epsilon` scaled by the
/// magnitude of the involved coordinates.
pub fn point_on_segment2d(pt: &Point<Real>, seg: &Segment, epsilon: Real) -> bool {
    let dir = seg.scaled_direction();
    let dpt = pt - seg.a;
    let scale = pt
        .coords
        .amax()
        .max(seg.a.coords.amax())
        .max(seg.b.coords.amax())
        .max(1.0);
    let eps = epsilon * scale;

    let sq_len = dir.norm_squared();
    if sq_len == 0.0 {
        return dpt.norm_squared() <= eps * eps;
    }

    let t = (dpt.dot(&dir) / sq_len).clamp(0.0, 1.0);
    let closest = seg.a + dir * t;
    (pt - closest).norm_squared() <= eps * eps
}

/// Locates `pt` relative to the closed polygon `poly`.
///
/// The polygon is assumed to be closed: the last point is implicitly
/// connected to the first one. Points within tolerance of an edge are
/// reported [`PointLocation::OnBoundary`]; this is a distinct state feeding
/// the clipping engine's entry/exit decisions rather than a coin toss
/// between inside and outside. The interior test itself is an even-odd ray
/// cast and handles concave polygons.
pub fn point_location_in_poly2d(
    pt: &Point<Real>,
    poly: &[Point<Real>],
    epsilon: Real,
) -> PointLocation {
    if poly.is_empty() {
        return PointLocation::Outside;
    }

    for i in 0..poly.len() {
        let j = (i + 1) % poly.len();
        if point_on_segment2d(pt, &Segment::new(poly[i], poly[j]), epsilon) {
            return PointLocation::OnBoundary;
        }
    }

    // Even-odd ray cast towards +x. Boundary points were handled above, so
    // the strict comparisons below never sit on a knife's edge.
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (a, b) = (&poly[j], &poly[i]);
        if (a.y > pt.y) != (b.y > pt.y) {
            let t = (pt.y - a.y) / (b.y - a.y);
            if pt.x < a.x + t * (b.x - a.x) {
                inside = !inside;
            }
        }
        j = i;
    }

    if inside {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point2;

    const EPS: Real = 1.0e-9;

    #[test]
    fn point_location_in_a_square() {
        let poly = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];

        assert_eq!(
            point_location_in_poly2d(&Point2::new(1.0, 1.0), &poly, EPS),
            PointLocation::Inside
        );
        assert_eq!(
            point_location_in_poly2d(&Point2::new(3.0, 1.0), &poly, EPS),
            PointLocation::Outside
        );
        assert_eq!(
            point_location_in_poly2d(&Point2::new(2.0, 1.0), &poly, EPS),
            PointLocation::OnBoundary
        );
        assert_eq!(
            point_location_in_poly2d(&Point2::new(0.0, 0.0), &poly, EPS),
            PointLocation::OnBoundary
        );
    }

    #[test]
    fn point_location_in_a_concave_polygon() {
        // An L-shape; the notch is outside even though it is surrounded by
        // the polygon's bounding box.
        let poly = [
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(0.0, 3.0),
        ];

        assert_eq!(
            point_location_in_poly2d(&Point2::new(0.5, 2.0), &poly, EPS),
            PointLocation::Inside
        );
        assert_eq!(
            point_location_in_poly2d(&Point2::new(2.0, 0.5), &poly, EPS),
            PointLocation::Inside
        );
        assert_eq!(
            point_location_in_poly2d(&Point2::new(2.0, 2.0), &poly, EPS),
            PointLocation::Outside
        );
    }

    #[test]
    fn ray_cast_is_robust_to_vertex_aligned_queries() {
        // The query is horizontally aligned with two vertices of the
        // diamond; the half-open edge rule must count each crossing once.
        let poly = [
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 1.0),
        ];

        assert_eq!(
            point_location_in_poly2d(&Point2::new(1.0, 1.0), &poly, EPS),
            PointLocation::Inside
        );
        assert_eq!(
            point_location_in_poly2d(&Point2::new(-1.0, 1.0), &poly, EPS),
            PointLocation::Outside
        );
        assert_eq!(
            point_location_in_poly2d(&Point2::new(3.0, 1.0), &poly, EPS),
            PointLocation::Outside
        );
    }
}
