use super::*;
use crate::error::ShapeError;
use crate::strategy::DeepClone;
use nalgebra::point;

#[test]
fn constructors_accept_positive_lengths() {
    let c = Circle::new(point![1.0, -2.0], 3.5).unwrap();
    assert_eq!(c.center(), point![1.0, -2.0]);
    assert_eq!(c.radius(), 3.5);
    let s = Square::new(Point2::origin(), 0.25).unwrap();
    assert_eq!(s.side(), 0.25);
    let t = Triangle::new(6.0, 4.0).unwrap();
    assert_eq!((t.base(), t.height()), (6.0, 4.0));
    // legs of the isosceles reading: sqrt(3² + 4²)
    assert!((t.leg() - 5.0).abs() < 1e-12);
}

#[test]
fn constructors_reject_degenerate_lengths() {
    assert_eq!(
        Circle::new(Point2::origin(), 0.0),
        Err(ShapeError::NonPositive {
            field: "radius",
            value: 0.0
        })
    );
    assert!(Square::new(Point2::origin(), -1.0).is_err());
    assert!(Triangle::new(1.0, f64::INFINITY).is_err());
    assert!(matches!(
        Triangle::new(f64::NAN, 1.0),
        Err(ShapeError::NonPositive { field: "base", .. })
    ));
}

#[test]
fn equality_is_structural_and_copies_are_equal() {
    let a = Circle::new(point![1.0, 1.0], 11.0).unwrap();
    let b = Circle::new(point![1.0, 1.0], 11.0).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.deep_clone().unwrap(), a);
    assert_ne!(a, Circle::new(point![1.0, 1.0], 12.0).unwrap());
}
