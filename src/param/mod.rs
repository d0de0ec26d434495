//! Typed, freshness-tracked parameters and the group that fans their changes out.
//!
//! Every [`Param`] belongs to exactly one [`ParamGroup`]. A successful [`Param::set`] stores the
//! value under the parameter's own lock and, still holding it, pushes the parameter's
//! [`ParamId`] into every listener's bounded queue. Queues never block the writer: a listener that
//! falls behind loses the oldest notifications, which is harmless since consumers always read
//! the latest value back from the parameter itself.

mod clock;
mod error;
mod param;
mod param_group;
mod value;

pub use clock::SystemClock;
#[cfg(test)]
pub use clock::ManualClock;
pub use error::ParamError;
pub use param::{Param, ParamId};
#[cfg(test)]
pub use {param::STALE_AFTER, value::Kind};
pub use param_group::{DEFAULT_LISTEN_CAPACITY, ParamGroup, ParamReceiver};
pub(crate) use param_group::leaf_name;
pub use value::{Leaf, Record, Value};
