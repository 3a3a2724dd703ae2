//! Erased interface and its single generic adapter.

use crate::error::AllocationError;
use crate::strategy::{DeepClone, Strategy};

/// The two operations the engine needs from a payload.
pub(crate) trait Concept<R>: Send + Sync {
    fn invoke(&self) -> R;
    fn clone_boxed(&self) -> Result<Box<dyn Concept<R>>, AllocationError>;
}

/// Binds one record `D` to one strategy `S` for it.
pub(crate) struct Model<D, S> {
    data: D,
    strategy: S,
}

impl<D, S> Model<D, S> {
    #[inline]
    pub(crate) fn new(data: D, strategy: S) -> Self {
        Self { data, strategy }
    }
}

impl<D, S> Concept<S::Output> for Model<D, S>
where
    D: DeepClone + Send + Sync + 'static,
    S: Strategy<D> + DeepClone + Send + Sync + 'static,
{
    #[inline]
    fn invoke(&self) -> S::Output {
        self.strategy.apply(&self.data)
    }

    fn clone_boxed(&self) -> Result<Box<dyn Concept<S::Output>>, AllocationError> {
        let data = self.data.deep_clone()?;
        let strategy = self.strategy.deep_clone()?;
        Ok(Box::new(Model { data, strategy }))
    }
}
