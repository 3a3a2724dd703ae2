use super::*;
use crate::data::{Circle, Point2, Square, Triangle};
use nalgebra::point;
use std::f64::consts::PI;

fn circle() -> Circle {
    Circle::new(point![1.0, 1.0], 11.0).unwrap()
}

#[test]
fn area_scales_quadratically() {
    let c = Circle::new(Point2::origin(), 2.0).unwrap();
    let s = Square::new(Point2::origin(), 3.0).unwrap();
    let t = Triangle::new(4.0, 5.0).unwrap();
    let unit = Area::default();
    assert!((unit.apply(&c) - 4.0 * PI).abs() < 1e-12);
    assert!((unit.apply(&s) - 9.0).abs() < 1e-12);
    assert!((unit.apply(&t) - 10.0).abs() < 1e-12);
    let twice = Area::new(2.0);
    assert!((twice.apply(&c) - 16.0 * PI).abs() < 1e-12);
    assert!((twice.apply(&s) - 36.0).abs() < 1e-12);
    assert!((twice.apply(&t) - 40.0).abs() < 1e-12);
}

#[test]
fn perimeter_scales_linearly() {
    let c = Circle::new(Point2::origin(), 1.0).unwrap();
    let s = Square::new(Point2::origin(), 1.5).unwrap();
    // legs sqrt(3² + 4²) = 5 -> 6 + 10
    let t = Triangle::new(6.0, 4.0).unwrap();
    let p = Perimeter::new(0.5);
    assert!((p.apply(&c) - PI).abs() < 1e-12);
    assert!((p.apply(&s) - 3.0).abs() < 1e-12);
    assert!((p.apply(&t) - 8.0).abs() < 1e-12);
}

#[test]
fn report_inline_matches_reference_text() {
    let r = Report::default();
    assert_eq!(r.apply(&circle()), "center=(1.00,1.00), radius=11.00");
    let upper = Report::new(Label::Upper, 0);
    let sq = Square::new(point![4.0, 4.0], 14.0).unwrap();
    assert_eq!(upper.apply(&sq), "SQUARE: center=(4,4), side=14");
    let lower = Report::new(Label::Lower, 1);
    let t = Triangle::new(3.0, 2.5).unwrap();
    assert_eq!(lower.apply(&t), "triangle: base=3.0, height=2.5");
}

#[test]
fn report_block_layout_indents_each_field() {
    let r = Report::new(Label::Lower, 1).block("  ");
    assert_eq!(
        r.apply(&circle()),
        "circle:\n  center=(1.0,1.0)\n  radius=11.0"
    );
    let hidden = Report::new(Label::Hidden, 0).block("-");
    let sq = Square::new(point![5.0, 5.0], 15.0).unwrap();
    assert_eq!(hidden.apply(&sq), "-center=(5,5)\n-side=15");
}

#[test]
fn deep_clone_copies_owned_indent() {
    let r = Report::new(Label::Upper, 3).block("    ");
    let copy = r.deep_clone().unwrap();
    assert_eq!(copy, r);
    assert_eq!(copy.apply(&circle()), r.apply(&circle()));
    let s = String::from("indent");
    assert_eq!(s.deep_clone().unwrap(), "indent");
}

#[test]
fn closures_adapt_into_strategies() {
    let radius = FnStrategy(|c: &Circle| c.radius());
    assert_eq!(radius.apply(&circle()), 11.0);
    let copy = radius.deep_clone().unwrap();
    assert_eq!(copy.apply(&circle()), 11.0);
}

fn total<S: Exhaustive<f64>>(s: &S, c: &Circle, q: &Square, t: &Triangle) -> f64 {
    Strategy::<Circle>::apply(s, c) + Strategy::<Square>::apply(s, q) + Strategy::<Triangle>::apply(s, t)
}

#[test]
fn measures_are_exhaustive() {
    let c = Circle::new(Point2::origin(), 1.0).unwrap();
    let q = Square::new(Point2::origin(), 1.0).unwrap();
    let t = Triangle::new(2.0, 1.0).unwrap();
    assert!((total(&Area::default(), &c, &q, &t) - (PI + 2.0)).abs() < 1e-12);
    assert!(total(&Perimeter::default(), &c, &q, &t) > 0.0);
}
