//! Open erasure: an owning wrapper around an arbitrary (data, strategy) pair.
//!
//! Purpose
//! - `OpenShape<R>` stores any record together with the strategy bound to it
//!   and exposes only "invoke" (yielding `R`) and "deep copy".
//! - New records or strategies plug in by implementing `Strategy<D>` and
//!   `DeepClone`; nothing in this module changes.
//!
//! Invariants
//! - A constructed shape always owns a payload. The only empty state is the
//!   source of `move_from`/`take`; invoking or cloning it panics.
//! - Clones are deep: no state is shared between a shape and its copy.
//! - `assign` clones first and swaps after, so a failed clone leaves the
//!   target untouched.
//!
//! Code cross-refs: `model::{Concept, Model}` (the only generic adapter),
//! `closed` for the exhaustive alternative.

mod model;
mod shape;

pub use shape::OpenShape;

use rayon::prelude::*;

/// Invoke every shape in order; `out[i]` belongs to `shapes[i]`.
pub fn invoke_all<R>(shapes: &[OpenShape<R>]) -> Vec<R> {
    shapes.iter().map(OpenShape::invoke).collect()
}

/// Parallel `invoke_all`; output order is input order.
pub fn par_invoke_all<R: Send>(shapes: &[OpenShape<R>]) -> Vec<R> {
    shapes.par_iter().map(OpenShape::invoke).collect()
}
