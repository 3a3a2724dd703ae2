//! Shape records (geometry only, no behavior).
//!
//! Purpose
//! - Provide the three plain data types both engines dispatch over:
//!   `Circle`, `Square`, `Triangle`.
//! - Keep them immutable after validated construction and `Copy`, so storing a
//!   shape always copies it by value.
//!
//! Code cross-refs: `closed::ClosedShape`, `open::OpenShape`, `strategy::*`.

mod types;

pub use types::{Circle, Point2, Square, Triangle};

#[cfg(test)]
mod tests;
