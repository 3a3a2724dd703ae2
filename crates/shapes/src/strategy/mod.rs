//! Behavior strategies: one operation, one case per shape record.
//!
//! Purpose
//! - `Strategy<D>` is implemented once per data type by a strategy value, the
//!   way an overloaded callable has one overload per argument type.
//! - `Exhaustive<O>` names the strategies that cover every record with the
//!   same output; the closed engine accepts nothing else, so a missing case is
//!   a compile error rather than a runtime path.
//! - `DeepClone` is the fallible copy the open engine needs from both halves of
//!   an erased pair.
//!
//! Code cross-refs: `closed::apply`, `open::OpenShape::new`.

mod measure;
mod report;

pub use measure::{Area, Perimeter};
pub use report::{Label, Layout, Report};

use crate::data::{Circle, Square, Triangle};
use crate::error::AllocationError;

/// Operation on a single data type `D`.
pub trait Strategy<D> {
    type Output;
    fn apply(&self, data: &D) -> Self::Output;
}

/// Strategies that handle every closed-set record, all yielding `O`.
///
/// Implemented automatically; there is nothing to write by hand.
pub trait Exhaustive<O>:
    Strategy<Circle, Output = O> + Strategy<Square, Output = O> + Strategy<Triangle, Output = O>
{
}

impl<O, S> Exhaustive<O> for S where
    S: Strategy<Circle, Output = O> + Strategy<Square, Output = O> + Strategy<Triangle, Output = O>
{
}

/// Independent copy that may fail when memory cannot be reserved.
///
/// Implementations must not share mutable state with the source.
pub trait DeepClone: Sized {
    fn deep_clone(&self) -> Result<Self, AllocationError>;
}

impl DeepClone for String {
    fn deep_clone(&self) -> Result<Self, AllocationError> {
        let mut out = String::new();
        out.try_reserve_exact(self.len())
            .map_err(|_| AllocationError::new(self.len(), "string buffer"))?;
        out.push_str(self);
        Ok(out)
    }
}

/// Adapts a cloneable closure `Fn(&D) -> O` into a strategy.
///
/// Lets callers bind ad-hoc behavior to any record (including their own types)
/// without declaring a strategy type.
#[derive(Clone, Copy, Debug)]
pub struct FnStrategy<F>(pub F);

impl<D, O, F> Strategy<D> for FnStrategy<F>
where
    F: Fn(&D) -> O,
{
    type Output = O;
    #[inline]
    fn apply(&self, data: &D) -> O {
        (self.0)(data)
    }
}

impl<F: Clone> DeepClone for FnStrategy<F> {
    #[inline]
    fn deep_clone(&self) -> Result<Self, AllocationError> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests;
