//! Plain shape records with validated constructors.
//!
//! Invariants:
//! - Every length (radius, side, base, height) is finite and > 0.
//! - Fields are private; accessors are the only read path.
//! - No identity beyond field values (`PartialEq` is structural).

use crate::error::{positive, AllocationError, ShapeError};
use crate::strategy::DeepClone;

/// Center point in the plane.
pub type Point2 = nalgebra::Point2<f64>;

/// Circle with `center` and `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            center,
            radius: positive("radius", radius)?,
        })
    }
    #[inline]
    pub fn center(&self) -> Point2 {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Axis-aligned square with `center` and edge length `side`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    center: Point2,
    side: f64,
}

impl Square {
    pub fn new(center: Point2, side: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            center,
            side: positive("side", side)?,
        })
    }
    #[inline]
    pub fn center(&self) -> Point2 {
        self.center
    }
    #[inline]
    pub fn side(&self) -> f64 {
        self.side
    }
}

/// Triangle given by `base` and `height`.
///
/// Where side lengths are needed the triangle is taken as isosceles, apex above
/// the midpoint of the base.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    base: f64,
    height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            base: positive("base", base)?,
            height: positive("height", height)?,
        })
    }
    #[inline]
    pub fn base(&self) -> f64 {
        self.base
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    /// Length of each of the two equal legs.
    #[inline]
    pub fn leg(&self) -> f64 {
        (0.5 * self.base).hypot(self.height)
    }
}

// Records own no heap memory; a copy never allocates.
impl DeepClone for Circle {
    #[inline]
    fn deep_clone(&self) -> Result<Self, AllocationError> {
        Ok(*self)
    }
}
impl DeepClone for Square {
    #[inline]
    fn deep_clone(&self) -> Result<Self, AllocationError> {
        Ok(*self)
    }
}
impl DeepClone for Triangle {
    #[inline]
    fn deep_clone(&self) -> Result<Self, AllocationError> {
        Ok(*self)
    }
}
