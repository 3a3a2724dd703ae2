//! Error types shared by both engines.
//!
//! - `AllocationError`: the only recoverable, caller-visible failure. Raised when
//!   a deep copy of an erased payload cannot reserve memory.
//! - `ShapeError`: rejected shape construction (non-positive or non-finite size)
//!   or an unusable sampler range.
//!
//! Misuse of ownership (invoking a shape emptied by a move) is a panic, not an
//! error value.

use std::alloc::{handle_alloc_error, Layout};

/// A deep copy could not reserve `requested` bytes for `what`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to allocate {requested} bytes for {what}")]
pub struct AllocationError {
    requested: usize,
    what: &'static str,
}

impl AllocationError {
    #[inline]
    pub fn new(requested: usize, what: &'static str) -> Self {
        Self { requested, what }
    }
    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }
    #[inline]
    pub fn what(&self) -> &'static str {
        self.what
    }

    /// Escalate to the global allocation-failure handler (aborts by default).
    ///
    /// Used where the std traits (`Clone`) leave no room for an error value,
    /// matching how std collections react to exhaustion.
    pub fn abort(self) -> ! {
        let layout = Layout::from_size_align(self.requested.max(1), 1)
            .unwrap_or_else(|_| Layout::new::<u8>());
        handle_alloc_error(layout)
    }
}

/// Invalid shape dimensions.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("{field} must be finite and > 0, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} spans a non-finite range, got {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Accept `value` as a strictly positive, finite length.
#[inline]
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::NonPositive { field, value })
    }
}
