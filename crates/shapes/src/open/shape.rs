//! `OpenShape`: value-semantic owner of an erased payload.

use std::fmt;

use super::model::{Concept, Model};
use crate::error::AllocationError;
use crate::strategy::{DeepClone, Strategy};

/// Owning handle to one erased (data, strategy) pair producing `R`.
///
/// ```
/// use shapes::prelude::*;
/// use nalgebra::point;
///
/// let c = Circle::new(point![1.0, 1.0], 11.0).unwrap();
/// let shape = OpenShape::new(c, Report::default());
/// assert_eq!(shape.invoke(), "center=(1.00,1.00), radius=11.00");
/// ```
pub struct OpenShape<R> {
    payload: Option<Box<dyn Concept<R>>>,
}

impl<R> OpenShape<R> {
    /// Bind `data` and `strategy`; both concrete types are fixed from here on.
    ///
    /// The payload box comes from the global allocator: exhaustion aborts here
    /// rather than returning `AllocationError`.
    pub fn new<D, S>(data: D, strategy: S) -> Self
    where
        D: DeepClone + Send + Sync + 'static,
        S: Strategy<D, Output = R> + DeepClone + Send + Sync + 'static,
    {
        Self {
            payload: Some(Box::new(Model::new(data, strategy))),
        }
    }

    #[track_caller]
    fn concept(&self) -> &dyn Concept<R> {
        match &self.payload {
            Some(p) => p.as_ref(),
            None => panic!("OpenShape used after its payload was moved out"),
        }
    }

    /// Run the bound strategy on the bound data.
    ///
    /// Panics if the payload was moved out.
    #[inline]
    #[track_caller]
    pub fn invoke(&self) -> R {
        self.concept().invoke()
    }

    /// Deep copy of data and strategy. The source is unaffected on failure.
    ///
    /// Panics if the payload was moved out.
    #[track_caller]
    pub fn try_clone(&self) -> Result<Self, AllocationError> {
        let payload = self.concept().clone_boxed()?;
        Ok(Self {
            payload: Some(payload),
        })
    }

    /// Replace this shape with a deep copy of `source` (clone, then swap).
    ///
    /// On error `self` keeps its previous payload unchanged. Assigning into an
    /// emptied shape is allowed and refills it.
    #[track_caller]
    pub fn assign(&mut self, source: &Self) -> Result<(), AllocationError> {
        let mut fresh = match source.try_clone() {
            Ok(fresh) => fresh,
            Err(e) => {
                tracing::debug!(error = %e, "open shape clone failed; target kept");
                return Err(e);
            }
        };
        std::mem::swap(&mut self.payload, &mut fresh.payload);
        Ok(())
    }

    /// Take `source`'s payload without copying; `source` is left empty.
    #[inline]
    pub fn move_from(&mut self, source: &mut Self) {
        self.payload = source.payload.take();
    }

    /// Move the payload into a new shape, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            payload: self.payload.take(),
        }
    }

    /// True only after the payload was moved out.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payload.is_none()
    }
}

impl<R> Clone for OpenShape<R> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(s) => s,
            Err(e) => e.abort(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.assign(source) {
            e.abort()
        }
    }
}

impl<R> fmt::Debug for OpenShape<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenShape")
            .field("empty", &self.is_empty())
            .finish_non_exhaustive()
    }
}
