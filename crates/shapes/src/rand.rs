//! Seeded random shape batches (replay tokens).
//!
//! Purpose
//! - Deterministic inputs for tests, benchmarks and the CLI: the same
//!   `(seed, index)` token always yields the same shape.
//!
//! Model
//! - Pick a variant by integer weights, a center uniformly in
//!   `[-center_extent, center_extent]²`, and each length uniformly in `size`.
//! - Each index gets its own RNG mixed from `(seed, index)`, so shape `k` of a
//!   batch does not depend on how many shapes were drawn before it.

use std::ops::Range;

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::closed::ClosedShape;
use crate::data::{Circle, Square, Triangle};
use crate::error::ShapeError;

/// Sampler configuration.
#[derive(Clone, Debug)]
pub struct MixCfg {
    /// Relative weights for (circle, square, triangle). All-zero falls back to uniform.
    pub weights: [u32; 3],
    /// Half-width of the square region centers are drawn from.
    pub center_extent: f64,
    /// Range for every length (radius, side, base, height). Lower end clamped to > 0.
    pub size: Range<f64>,
}

impl Default for MixCfg {
    fn default() -> Self {
        Self {
            weights: [1, 1, 1],
            center_extent: 10.0,
            size: 0.5..5.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn length<R: Rng>(rng: &mut R, size: &Range<f64>) -> f64 {
    let lo = size.start.max(1e-9);
    let hi = size.end.max(lo);
    if hi > lo && hi.is_finite() {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Half-width usable as a sampling range: `[-e, e]` must have a finite width.
fn extent(cfg: &MixCfg) -> Result<f64, ShapeError> {
    let e = cfg.center_extent.abs();
    if e.is_nan() {
        return Ok(0.0);
    }
    if (2.0 * e).is_finite() {
        Ok(e)
    } else {
        Err(ShapeError::OutOfRange {
            field: "center_extent",
            value: cfg.center_extent,
        })
    }
}

fn center<R: Rng>(rng: &mut R, e: f64) -> Point2<f64> {
    if e > 0.0 {
        Point2::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e))
    } else {
        Point2::origin()
    }
}

fn variant<R: Rng>(rng: &mut R, weights: [u32; 3]) -> usize {
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return rng.gen_range(0..3);
    }
    let mut pick = rng.gen_range(0..total);
    for (k, &w) in weights.iter().enumerate() {
        let w = u64::from(w);
        if pick < w {
            return k;
        }
        pick -= w;
    }
    2
}

/// Draw one shape for `tok`.
///
/// Errors if `cfg.size` is non-finite or `cfg.center_extent` spans a
/// non-finite range. A NaN extent places centers at the origin.
pub fn draw_shape(cfg: &MixCfg, tok: ReplayToken) -> Result<ClosedShape, ShapeError> {
    let e = extent(cfg)?;
    let mut rng = tok.to_std_rng();
    Ok(match variant(&mut rng, cfg.weights) {
        0 => {
            let c = center(&mut rng, e);
            Circle::new(c, length(&mut rng, &cfg.size))?.into()
        }
        1 => {
            let c = center(&mut rng, e);
            Square::new(c, length(&mut rng, &cfg.size))?.into()
        }
        _ => {
            let b = length(&mut rng, &cfg.size);
            Triangle::new(b, length(&mut rng, &cfg.size))?.into()
        }
    })
}

/// Draw `n` shapes with tokens `(seed, 0..n)`.
pub fn draw_batch(cfg: MixCfg, seed: u64, n: usize) -> Result<Vec<ClosedShape>, ShapeError> {
    (0..n as u64)
        .map(|index| draw_shape(&cfg, ReplayToken { seed, index }))
        .collect()
}
