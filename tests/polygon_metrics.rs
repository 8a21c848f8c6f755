use polyclip2d::na::Point2;
use polyclip2d::shape::{Polygon, PolygonError, WindingOrder};

#[test]
fn area_is_non_negative_and_reversal_invariant() {
    for sides in 3..10 {
        let poly = Polygon::regular(sides, Point2::new(-2.0, 5.0), 1.5);
        let rev: Polygon = poly.points().iter().rev().copied().collect();

        assert!(poly.area() >= 0.0);
        assert!((poly.area() - rev.area()).abs() < 1.0e-12);
        assert_eq!(poly.winding_order(), Ok(WindingOrder::CounterClockwise));
        assert_eq!(rev.winding_order(), Ok(WindingOrder::Clockwise));
    }
}

#[test]
fn regular_polygon_area_closed_form() {
    let sides = 7;
    let radius = 3.0;
    let poly = Polygon::regular(sides, Point2::origin(), radius);
    let expected =
        0.5 * sides as f64 * radius * radius * (std::f64::consts::TAU / sides as f64).sin();

    assert!((poly.area() - expected).abs() < 1.0e-9);
}

#[test]
fn append_only_construction_and_point_queries() {
    let mut poly = Polygon::new();
    assert!(poly.is_empty());
    assert_eq!(poly.area(), 0.0);

    poly.push(0.0, 0.0);
    poly.push(1.0, 0.0);
    assert_eq!(poly.winding_order(), Err(PolygonError::InvalidGeometry));

    poly.push_point(Point2::new(1.0, 1.0));
    assert_eq!(poly.len(), 3);
    assert_eq!(poly.point(1), Ok(Point2::new(1.0, 0.0)));
    assert_eq!(
        poly.point(3),
        Err(PolygonError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(poly.area(), 0.5);
}

#[test]
fn operations_do_not_mutate_their_operands() {
    let a = Polygon::regular(8, Point2::origin(), 5.0);
    let b = Polygon::regular(6, Point2::new(2.0, 0.0), 3.0);
    let a_before = a.clone();
    let b_before = b.clone();

    let _ = a.union(&b).unwrap();
    let _ = a.intersection(&b).unwrap();
    let _ = a.difference(&b).unwrap();

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}
