//! Numeric strategies: scaled area and perimeter.
//!
//! Both scale lengths before measuring, so area grows with `scale²` and
//! perimeter with `scale`.

use std::f64::consts::PI;

use super::{DeepClone, Strategy};
use crate::data::{Circle, Square, Triangle};
use crate::error::AllocationError;

/// Area after uniform scaling by `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Area {
    pub scale: f64,
}

impl Area {
    #[inline]
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl Default for Area {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Strategy<Circle> for Area {
    type Output = f64;
    #[inline]
    fn apply(&self, c: &Circle) -> f64 {
        PI * (c.radius() * self.scale).powi(2)
    }
}

impl Strategy<Square> for Area {
    type Output = f64;
    #[inline]
    fn apply(&self, s: &Square) -> f64 {
        let a = s.side() * self.scale;
        a * a
    }
}

impl Strategy<Triangle> for Area {
    type Output = f64;
    #[inline]
    fn apply(&self, t: &Triangle) -> f64 {
        0.5 * (t.base() * self.scale) * (t.height() * self.scale)
    }
}

/// Perimeter after uniform scaling by `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perimeter {
    pub scale: f64,
}

impl Perimeter {
    #[inline]
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl Default for Perimeter {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Strategy<Circle> for Perimeter {
    type Output = f64;
    #[inline]
    fn apply(&self, c: &Circle) -> f64 {
        2.0 * PI * c.radius() * self.scale
    }
}

impl Strategy<Square> for Perimeter {
    type Output = f64;
    #[inline]
    fn apply(&self, s: &Square) -> f64 {
        4.0 * s.side() * self.scale
    }
}

impl Strategy<Triangle> for Perimeter {
    type Output = f64;
    /// Isosceles reading: base plus two equal legs.
    #[inline]
    fn apply(&self, t: &Triangle) -> f64 {
        (t.base() + 2.0 * t.leg()) * self.scale
    }
}

impl DeepClone for Area {
    #[inline]
    fn deep_clone(&self) -> Result<Self, AllocationError> {
        Ok(*self)
    }
}

impl DeepClone for Perimeter {
    #[inline]
    fn deep_clone(&self) -> Result<Self, AllocationError> {
        Ok(*self)
    }
}
