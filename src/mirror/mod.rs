//! Topic based mirror of the parameter group for a remote broker.
//!
//! Every leaf is published under `device/group/param/field`. Writes come back on the same topic
//! with a `/set` suffix.

mod mirror;
mod rate_limiter;

pub use mirror::Mirror;
#[cfg(test)]
pub use {mirror::PUBLISH_PERIOD, rate_limiter::RateLimiter};
