use crate::math::{Point, Real};

/// Orientation of a triplet of points in the plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// The triplet turns clockwise.
    Clockwise,
    /// The triplet turns counter-clockwise.
    CounterClockwise,
    /// The triplet is collinear, within the given tolerance.
    Degenerate,
}

/// Computes the orientation of the triplet `[a, b, c]`.
///
/// The triplet is `Degenerate` whenever the parallelogram spanned by
/// `b - a` and `c - a` has an area smaller than `epsilon` scaled by the
/// squared magnitude of these vectors.
pub fn orient2d(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>, epsilon: Real) -> Orientation {
    let ab = b - a;
    let ac = c - a;
    let cross = ab.x * ac.y - ab.y * ac.x;
    let eps = epsilon * ab.norm_squared().max(ac.norm_squared()).max(1.0);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Degenerate
    }
}
