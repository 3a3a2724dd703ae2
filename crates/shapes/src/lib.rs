//! Polymorphic dispatch over unrelated shape records.
//!
//! Two engines solve the same problem and share the same data and strategies:
//! - `closed`: a fixed enum of shapes, matched exhaustively by a strategy that
//!   the compiler proves complete.
//! - `open`: an owning, deep-cloning wrapper that erases a (data, strategy)
//!   pair behind a two-operation interface, so new pairs plug in without
//!   touching existing code.
//!
//! Neither engine supersedes the other; callers pick per use case.

pub mod closed;
pub mod data;
pub mod error;
pub mod open;
pub mod rand;
pub mod strategy;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use closed::ClosedShape;
pub use error::{AllocationError, ShapeError};
pub use open::OpenShape;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::closed::{
        apply, apply_each, apply_sequence, par_apply_sequence, par_total, ClosedShape,
    };
    pub use crate::data::{Circle, Point2, Square, Triangle};
    pub use crate::error::{AllocationError, ShapeError};
    pub use crate::open::{invoke_all, par_invoke_all, OpenShape};
    pub use crate::rand::{draw_batch, draw_shape, MixCfg, ReplayToken};
    pub use crate::strategy::{
        Area, DeepClone, Exhaustive, FnStrategy, Label, Layout, Perimeter, Report, Strategy,
    };
}
