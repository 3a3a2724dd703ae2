//! Closed dispatch: a fixed enum of shapes matched exhaustively.
//!
//! Purpose
//! - `ClosedShape` holds exactly one record inline (no heap indirection); the
//!   active variant always matches its payload and never changes in place.
//! - A strategy is chosen per call. Only `Exhaustive` strategies are accepted,
//!   so the match below has no fallback arm and none is needed.
//!
//! Trade-off
//! - Adding a variant means adding one `Strategy` impl to every strategy used
//!   here; the compiler lists each one that is missing.
//!
//! Code cross-refs: `strategy::{Strategy, Exhaustive}`, `open` for the
//! extensible alternative.

use rayon::prelude::*;

use crate::data::{Circle, Square, Triangle};
use crate::strategy::{Exhaustive, Strategy};

/// One shape out of the closed set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClosedShape {
    Circle(Circle),
    Square(Square),
    Triangle(Triangle),
}

impl ClosedShape {
    /// Run `strategy` on the active variant.
    #[inline]
    pub fn accept<O, S: Exhaustive<O>>(&self, strategy: &S) -> O {
        match self {
            ClosedShape::Circle(c) => Strategy::<Circle>::apply(strategy, c),
            ClosedShape::Square(s) => Strategy::<Square>::apply(strategy, s),
            ClosedShape::Triangle(t) => Strategy::<Triangle>::apply(strategy, t),
        }
    }

    /// Variant name in lower case.
    pub fn kind(&self) -> &'static str {
        match self {
            ClosedShape::Circle(_) => "circle",
            ClosedShape::Square(_) => "square",
            ClosedShape::Triangle(_) => "triangle",
        }
    }
}

impl From<Circle> for ClosedShape {
    #[inline]
    fn from(c: Circle) -> Self {
        ClosedShape::Circle(c)
    }
}
impl From<Square> for ClosedShape {
    #[inline]
    fn from(s: Square) -> Self {
        ClosedShape::Square(s)
    }
}
impl From<Triangle> for ClosedShape {
    #[inline]
    fn from(t: Triangle) -> Self {
        ClosedShape::Triangle(t)
    }
}

/// Apply `strategy` to one shape.
///
/// A strategy covering all three records is accepted:
///
/// ```
/// use shapes::closed::{apply, ClosedShape};
/// use shapes::data::{Circle, Point2, Square, Triangle};
/// use shapes::strategy::Strategy;
///
/// struct Name;
/// impl Strategy<Circle> for Name {
///     type Output = &'static str;
///     fn apply(&self, _: &Circle) -> &'static str { "circle" }
/// }
/// impl Strategy<Square> for Name {
///     type Output = &'static str;
///     fn apply(&self, _: &Square) -> &'static str { "square" }
/// }
/// impl Strategy<Triangle> for Name {
///     type Output = &'static str;
///     fn apply(&self, _: &Triangle) -> &'static str { "triangle" }
/// }
///
/// let s: ClosedShape = Square::new(Point2::origin(), 1.0).unwrap().into();
/// assert_eq!(apply(&Name, &s), "square");
/// ```
///
/// Leaving out one case does not compile:
///
/// ```compile_fail
/// use shapes::closed::{apply, ClosedShape};
/// use shapes::data::{Circle, Point2, Square};
/// use shapes::strategy::Strategy;
///
/// struct Name;
/// impl Strategy<Circle> for Name {
///     type Output = &'static str;
///     fn apply(&self, _: &Circle) -> &'static str { "circle" }
/// }
/// impl Strategy<Square> for Name {
///     type Output = &'static str;
///     fn apply(&self, _: &Square) -> &'static str { "square" }
/// }
///
/// let s: ClosedShape = Square::new(Point2::origin(), 1.0).unwrap().into();
/// let _ = apply(&Name, &s);
/// ```
#[inline]
pub fn apply<O, S: Exhaustive<O>>(strategy: &S, shape: &ClosedShape) -> O {
    shape.accept(strategy)
}

/// Apply `strategy` to every shape; `out[i]` belongs to `shapes[i]`.
pub fn apply_sequence<O, S: Exhaustive<O>>(strategy: &S, shapes: &[ClosedShape]) -> Vec<O> {
    shapes.iter().map(|s| s.accept(strategy)).collect()
}

/// Apply `strategy` in input order, handing each result to `sink` with its index.
///
/// For side-effecting use (printing, logging) where no output vector is wanted.
pub fn apply_each<O, S, F>(strategy: &S, shapes: &[ClosedShape], mut sink: F)
where
    S: Exhaustive<O>,
    F: FnMut(usize, O),
{
    for (k, s) in shapes.iter().enumerate() {
        sink(k, s.accept(strategy));
    }
}

/// Parallel `apply_sequence`. Elements share no state; output order is input order.
pub fn par_apply_sequence<O, S>(strategy: &S, shapes: &[ClosedShape]) -> Vec<O>
where
    O: Send,
    S: Exhaustive<O> + Sync,
{
    shapes.par_iter().map(|s| s.accept(strategy)).collect()
}

/// Parallel sum of a numeric strategy over all shapes.
pub fn par_total<S>(strategy: &S, shapes: &[ClosedShape]) -> f64
where
    S: Exhaustive<f64> + Sync,
{
    shapes.par_iter().map(|s| s.accept(strategy)).sum()
}
