use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::{Segment, SegmentPointLocation};
use crate::utils::hashmap::HashMap;
use crate::utils::{
    self, point_location_in_poly2d, point_on_segment2d, segments_intersection2d, PointLocation,
    SegmentsIntersection,
};

/// The kind of boolean operation applied to two polygons.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// Keeps the region covered by at least one of the operands.
    Union,
    /// Keeps the region covered by both operands.
    Intersection,
    /// Keeps the region covered by the first operand but not the second.
    Difference,
}

/// Tolerances for the polygon boolean operations.
///
/// A single epsilon drives every "equal", "on segment" and "parallel"
/// decision made by the clipping engine. It is treated as an absolute
/// tolerance scaled by the magnitude of the coordinates involved in each
/// comparison.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PolygonBooleanTolerances {
    /// The epsilon deciding point coincidence, collinearity, and boundary
    /// proximity.
    pub epsilon: Real,
}

impl Default for PolygonBooleanTolerances {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Error type for the polygon boolean operations.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonBooleanError {
    /// One of the operands has fewer than 3 points.
    #[error("boolean operations require operands with at least 3 points")]
    DegenerateOperand,
}

/// Computes the boolean operation `op` between two simple polygons.
///
/// Both operands are rings of at least 3 points, implicitly closed, without
/// self-intersections; their winding order is irrelevant (the engine
/// normalizes both to counter-clockwise internally). The result is a list
/// of closed output rings: possibly empty (intersection of disjoint
/// operands), possibly with more than one ring (union of disjoint
/// operands, or concave overlaps splitting into several components). Ring
/// ordering is deterministic for a given input.
///
/// Disjoint or containment configurations are valid inputs and never fail;
/// the only error is a degenerate operand with fewer than 3 points.
pub fn polygons_boolean(
    poly1: &[Point<Real>],
    poly2: &[Point<Real>],
    op: BooleanOp,
) -> Result<Vec<Vec<Point<Real>>>, PolygonBooleanError> {
    polygons_boolean_with_tolerances(poly1, poly2, op, PolygonBooleanTolerances::default())
}

/// Same as [`polygons_boolean`] with custom tolerances.
pub fn polygons_boolean_with_tolerances(
    poly1: &[Point<Real>],
    poly2: &[Point<Real>],
    op: BooleanOp,
    tolerances: PolygonBooleanTolerances,
) -> Result<Vec<Vec<Point<Real>>>, PolygonBooleanError> {
    if poly1.len() < 3 || poly2.len() < 3 {
        return Err(PolygonBooleanError::DegenerateOperand);
    }

    let eps = tolerances.epsilon;
    let ring1 = oriented_ccw(poly1);
    let ring2 = oriented_ccw(poly2);

    let (cuts1, cuts2, any_intersection) = compute_sorted_edge_cuts(&ring1, &ring2, eps);

    if !any_intersection {
        // The boundaries never meet: pure containment or disjoint cases.
        return Ok(containment_fallback(ring1, ring2, op, eps));
    }

    let aug1 = insert_cuts(&ring1, &cuts1, eps);
    let aug2 = insert_cuts(&ring2, &cuts2, eps);

    let mut edges = Vec::new();
    collect_kept_edges(&aug1, &ring2, op, true, eps, &mut edges);
    collect_kept_edges(&aug2, &ring1, op, false, eps, &mut edges);

    Ok(stitch_rings(edges, op, eps))
}

fn oriented_ccw(poly: &[Point<Real>]) -> Vec<Point<Real>> {
    let mut ring = poly.to_vec();
    if utils::signed_polygon_area(&ring) < 0.0 {
        ring.reverse();
    }
    ring
}

// A point where an edge must be split, keyed by the parameter along the edge.
#[derive(Copy, Clone, Debug)]
struct EdgeCut {
    param: Real,
    point: Point<Real>,
}

type EdgeCuts = Vec<SmallVec<[EdgeCut; 2]>>;

/// Walks every edge of `ring1` against every edge of `ring2` and collects
/// the crossing and touching points on both rings, ordered along each edge
/// by intersection parameter.
fn compute_sorted_edge_cuts(
    ring1: &[Point<Real>],
    ring2: &[Point<Real>],
    eps: Real,
) -> (EdgeCuts, EdgeCuts, bool) {
    let mut cuts1: EdgeCuts = vec![SmallVec::new(); ring1.len()];
    let mut cuts2: EdgeCuts = vec![SmallVec::new(); ring2.len()];
    let mut any = false;

    // Naive O(n²) pairing; an acceleration structure is overkill at the
    // polygon sizes targeted here.
    for i1 in 0..ring1.len() {
        let j1 = (i1 + 1) % ring1.len();
        let seg1 = Segment::new(ring1[i1], ring1[j1]);

        for i2 in 0..ring2.len() {
            let j2 = (i2 + 1) % ring2.len();
            let seg2 = Segment::new(ring2[i2], ring2[j2]);

            let Some(inter) = segments_intersection2d(&seg1.a, &seg1.b, &seg2.a, &seg2.b, eps)
            else {
                continue;
            };

            any = true;
            match inter {
                SegmentsIntersection::Point { loc1, loc2 } => {
                    push_cut(&mut cuts1[i1], &mut cuts2[i2], &seg1, &loc1, &loc2);
                }
                SegmentsIntersection::Segment {
                    first_loc1,
                    first_loc2,
                    second_loc1,
                    second_loc2,
                } => {
                    // Collinear overlap: both overlap endpoints become graph
                    // vertices; the overlapped span itself is dealt with by
                    // the boundary classification below.
                    push_cut(&mut cuts1[i1], &mut cuts2[i2], &seg1, &first_loc1, &first_loc2);
                    push_cut(&mut cuts1[i1], &mut cuts2[i2], &seg1, &second_loc1, &second_loc2);
                }
            }
        }
    }

    for cuts in cuts1.iter_mut().chain(cuts2.iter_mut()) {
        cuts.sort_by_key(|c| OrderedFloat(c.param));
    }

    (cuts1, cuts2, any)
}

fn push_cut(
    cuts1: &mut SmallVec<[EdgeCut; 2]>,
    cuts2: &mut SmallVec<[EdgeCut; 2]>,
    seg1: &Segment,
    loc1: &SegmentPointLocation,
    loc2: &SegmentPointLocation,
) {
    // A single point value is shared by both rings so that the ring
    // reconstruction can match fragments from either operand exactly.
    let point = seg1.point_at(loc1);
    cuts1.push(EdgeCut {
        param: loc1.parameter(),
        point,
    });
    cuts2.push(EdgeCut {
        param: loc2.parameter(),
        point,
    });
}

/// Builds the augmented vertex ring: the original vertices with the
/// intersection points spliced into each edge in parametric order.
fn insert_cuts(ring: &[Point<Real>], cuts: &EdgeCuts, eps: Real) -> Vec<Point<Real>> {
    let mut out = Vec::with_capacity(ring.len());

    for (i, pt) in ring.iter().enumerate() {
        push_dedup(&mut out, *pt, eps);
        for cut in &cuts[i] {
            // Endpoint touches coincide with ring vertices already present.
            if cut.param <= eps || cut.param >= 1.0 - eps {
                continue;
            }
            push_dedup(&mut out, cut.point, eps);
        }
    }

    while out.len() > 1 && utils::points_coincide(&out[0], out.last().unwrap(), eps) {
        let _ = out.pop();
    }

    out
}

fn push_dedup(out: &mut Vec<Point<Real>>, pt: Point<Real>, eps: Real) {
    if let Some(last) = out.last() {
        if utils::points_coincide(last, &pt, eps) {
            return;
        }
    }
    out.push(pt);
}

// A directed edge kept for the output, tagged with the operand it came from.
#[derive(Copy, Clone, Debug)]
struct DirEdge {
    src: Point<Real>,
    dst: Point<Real>,
    subject: bool,
}

/// Classifies every sub-segment of the augmented `ring` against `other` and
/// keeps the ones on the requested side of it.
///
/// This is the decision table realizing the entry/exit semantics: a ring
/// only ever changes sides at an inserted intersection vertex, so the
/// midpoint of each sub-segment determines the side of the whole
/// sub-segment. Touch points never toggle the side and therefore never
/// split a kept run.
fn collect_kept_edges(
    ring: &[Point<Real>],
    other: &[Point<Real>],
    op: BooleanOp,
    subject: bool,
    eps: Real,
    out: &mut Vec<DirEdge>,
) {
    for i in 0..ring.len() {
        let j = (i + 1) % ring.len();
        let seg = Segment::new(ring[i], ring[j]);
        if seg.scaled_direction().norm_squared() == 0.0 {
            continue;
        }

        let side = point_location_in_poly2d(&seg.midpoint(), other, eps);

        let keep = match (op, side) {
            (BooleanOp::Union, PointLocation::Outside) => true,
            (BooleanOp::Intersection, PointLocation::Inside) => true,
            (BooleanOp::Difference, PointLocation::Outside) => subject,
            (BooleanOp::Difference, PointLocation::Inside) => !subject,
            (_, PointLocation::OnBoundary) if subject => {
                // Boundary-coincident edges are emitted once, from the
                // subject ring only. Whether they belong to the result
                // depends on which side of the shared span the other
                // operand's interior lies, i.e. on the direction agreement
                // of the two supporting edges.
                let same_dir = boundary_direction_agrees(&seg, other, eps);
                match op {
                    BooleanOp::Union | BooleanOp::Intersection => same_dir,
                    BooleanOp::Difference => !same_dir,
                }
            }
            _ => false,
        };

        if keep {
            let (src, dst) = if op == BooleanOp::Difference && !subject {
                // Clip fragments are traversed in reverse in a difference,
                // keeping the output boundary consistently oriented.
                (seg.b, seg.a)
            } else {
                (seg.a, seg.b)
            };
            out.push(DirEdge { src, dst, subject });
        }
    }
}

/// Finds the `other` edge supporting the boundary-coincident segment `seg`
/// and tells whether both run in the same direction. Both rings are
/// counter-clockwise here, so direction agreement means the two interiors
/// lie on the same side of the shared span.
fn boundary_direction_agrees(seg: &Segment, other: &[Point<Real>], eps: Real) -> bool {
    let mid = seg.midpoint();
    for i in 0..other.len() {
        let j = (i + 1) % other.len();
        let oseg = Segment::new(other[i], other[j]);
        if point_on_segment2d(&mid, &oseg, eps) {
            return seg.scaled_direction().dot(&oseg.scaled_direction()) > 0.0;
        }
    }

    log::debug!("Boundary-coincident edge without a supporting edge on the other polygon.");
    true
}

/// Reassembles closed output rings from the kept directed edges by chaining
/// matching endpoints. Fragments that do not close into a loop (boundary
/// contacts without enclosed area) are dropped, as are slivers whose area
/// vanishes within tolerance.
fn stitch_rings(edges: Vec<DirEdge>, op: BooleanOp, eps: Real) -> Vec<Vec<Point<Real>>> {
    // At a touch point traversed by both boundaries, a union or an
    // intersection keeps each component on its own operand, while a
    // difference dives into the reversed clip fragments so that an
    // enclosed region touching the boundary comes out as a single ring
    // pinched at the touch point.
    let prefer_same_operand = op != BooleanOp::Difference;
    let key = |pt: &Point<Real>| (OrderedFloat(pt.x), OrderedFloat(pt.y));

    let mut by_src: HashMap<(OrderedFloat<Real>, OrderedFloat<Real>), SmallVec<[usize; 2]>> =
        HashMap::new();
    for (i, edge) in edges.iter().enumerate() {
        by_src.entry(key(&edge.src)).or_default().push(i);
    }

    let mut used = vec![false; edges.len()];
    let mut rings = Vec::new();

    for start in 0..edges.len() {
        if used[start] {
            continue;
        }

        let mut chain = vec![edges[start].src];
        let mut curr = start;
        let closed = loop {
            used[curr] = true;
            let dst = edges[curr].dst;
            if utils::points_coincide(&dst, &chain[0], eps) {
                break true;
            }
            chain.push(dst);

            match next_edge(&edges, &by_src, &used, curr, &dst, prefer_same_operand, eps) {
                Some(next) => curr = next,
                None => break false,
            }
        };

        if !closed {
            log::debug!("Discarding an open chain of {} fragments.", chain.len());
            continue;
        }

        finalize_ring(&mut chain, eps);
        if chain.len() >= 3 {
            rings.push(chain);
        }
    }

    rings
}

/// Picks the unused edge continuing a walk that arrived at `dst`.
///
/// Exact key lookups cover intersection vertices, which are shared
/// bit-for-bit between the two rings; a tolerance scan catches original
/// vertices of one operand sitting on the other within epsilon. Ties
/// between continuations from both operands follow `prefer_same_operand`.
fn next_edge(
    edges: &[DirEdge],
    by_src: &HashMap<(OrderedFloat<Real>, OrderedFloat<Real>), SmallVec<[usize; 2]>>,
    used: &[bool],
    curr: usize,
    dst: &Point<Real>,
    prefer_same_operand: bool,
    eps: Real,
) -> Option<usize> {
    let mut fallback = None;

    if let Some(candidates) = by_src.get(&(OrderedFloat(dst.x), OrderedFloat(dst.y))) {
        for &c in candidates {
            if used[c] {
                continue;
            }
            if (edges[c].subject == edges[curr].subject) == prefer_same_operand {
                return Some(c);
            }
            fallback = Some(c);
        }
    }
    if fallback.is_some() {
        return fallback;
    }

    for (i, edge) in edges.iter().enumerate() {
        if used[i] || !utils::points_coincide(&edge.src, dst, eps) {
            continue;
        }
        if (edge.subject == edges[curr].subject) == prefer_same_operand {
            return Some(i);
        }
        fallback = Some(i);
    }

    fallback
}

fn finalize_ring(chain: &mut Vec<Point<Real>>, eps: Real) {
    chain.dedup_by(|b, a| utils::points_coincide(a, b, eps));
    while chain.len() > 1 && utils::points_coincide(&chain[0], chain.last().unwrap(), eps) {
        let _ = chain.pop();
    }

    let scale = chain
        .iter()
        .map(|pt| pt.coords.amax())
        .fold(1.0, Real::max);
    if utils::signed_polygon_area(chain).abs() <= eps * scale * scale {
        chain.clear();
    }
}

fn containment_fallback(
    ring1: Vec<Point<Real>>,
    ring2: Vec<Point<Real>>,
    op: BooleanOp,
    eps: Real,
) -> Vec<Vec<Point<Real>>> {
    let a_in_b = point_location_in_poly2d(&ring1[0], &ring2, eps) == PointLocation::Inside;
    let b_in_a = point_location_in_poly2d(&ring2[0], &ring1, eps) == PointLocation::Inside;

    match op {
        BooleanOp::Union => {
            if a_in_b {
                vec![ring2]
            } else if b_in_a {
                vec![ring1]
            } else {
                vec![ring1, ring2]
            }
        }
        BooleanOp::Intersection => {
            if a_in_b {
                vec![ring1]
            } else if b_in_a {
                vec![ring2]
            } else {
                Vec::new()
            }
        }
        BooleanOp::Difference => {
            if a_in_b {
                Vec::new()
            } else {
                if b_in_a {
                    // The exact result would be a ring with a hole, which a
                    // single-ring polygon cannot represent. The outer ring
                    // is reported unchanged instead.
                    log::debug!(
                        "Difference with a fully enclosed clip polygon: the hole is dropped."
                    );
                }
                vec![ring1]
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point2;

    fn square(x: Real, y: Real, side: Real) -> Vec<Point2<Real>> {
        vec![
            Point2::new(x, y),
            Point2::new(x + side, y),
            Point2::new(x + side, y + side),
            Point2::new(x, y + side),
        ]
    }

    fn rings_area(rings: &[Vec<Point2<Real>>]) -> Real {
        rings
            .iter()
            .map(|r| utils::signed_polygon_area(r).abs())
            .sum()
    }

    #[test]
    fn degenerate_operands_are_rejected() {
        let line = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let sq = square(0.0, 0.0, 1.0);
        assert_eq!(
            polygons_boolean(&line, &sq, BooleanOp::Union),
            Err(PolygonBooleanError::DegenerateOperand)
        );
        assert_eq!(
            polygons_boolean(&sq, &line, BooleanOp::Intersection),
            Err(PolygonBooleanError::DegenerateOperand)
        );
    }

    #[test]
    fn operand_winding_does_not_matter() {
        let a = square(0.0, 0.0, 4.0);
        let mut b = square(2.0, 2.0, 4.0);
        b.reverse();

        let inter = polygons_boolean(&a, &b, BooleanOp::Intersection).unwrap();
        assert_eq!(inter.len(), 1);
        assert!(relative_eq!(rings_area(&inter), 4.0, epsilon = 1.0e-9));
    }

    #[test]
    fn union_of_edge_glued_squares_merges_them() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);

        let merged = polygons_boolean(&a, &b, BooleanOp::Union).unwrap();
        assert_eq!(merged.len(), 1);
        assert!(relative_eq!(rings_area(&merged), 2.0, epsilon = 1.0e-9));

        // The glued edge is interior to the union and must not survive.
        for ring in &merged {
            for pt in ring {
                assert!(pt.y == 0.0 || pt.y == 1.0);
            }
        }
    }

    #[test]
    fn intersection_of_edge_glued_squares_is_empty() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);

        let inter = polygons_boolean(&a, &b, BooleanOp::Intersection).unwrap();
        assert!(inter.is_empty());
    }

    #[test]
    fn corner_touching_squares_stay_separate_in_a_union() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 1.0, 1.0);

        let merged = polygons_boolean(&a, &b, BooleanOp::Union).unwrap();
        assert_eq!(merged.len(), 2);
        assert!(relative_eq!(rings_area(&merged), 2.0, epsilon = 1.0e-9));
    }

    #[test]
    fn difference_of_edge_glued_squares_is_the_subject() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);

        let diff = polygons_boolean(&a, &b, BooleanOp::Difference).unwrap();
        assert_eq!(diff.len(), 1);
        assert!(relative_eq!(rings_area(&diff), 1.0, epsilon = 1.0e-9));
    }

    #[test]
    fn custom_tolerance_widens_vertex_snapping() {
        // The operands are offset by less than the configured epsilon, so
        // every crossing lands within tolerance of a vertex and the union
        // degenerates to the subject ring.
        let a = square(0.0, 0.0, 1.0);
        let b = square(5.0e-4, 0.0, 1.0);
        let tolerances = PolygonBooleanTolerances { epsilon: 1.0e-3 };

        let merged =
            polygons_boolean_with_tolerances(&a, &b, BooleanOp::Union, tolerances).unwrap();
        assert_eq!(merged.len(), 1);
        assert!(relative_eq!(rings_area(&merged), 1.0, epsilon = 1.0e-3));
    }

    #[test]
    fn concave_intersection_follows_the_notch() {
        let l_shape = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(0.0, 3.0),
        ];
        let sq = square(0.5, 0.5, 2.0);

        let inter = polygons_boolean(&l_shape, &sq, BooleanOp::Intersection).unwrap();
        assert_eq!(inter.len(), 1);
        assert!(relative_eq!(rings_area(&inter), 1.75, epsilon = 1.0e-9));
    }
}
