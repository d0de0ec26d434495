//! The tracking state machine and the control loop that drives it.
//!
//! Parameter changes are delivered to the active state's handler one at a time. A 20 ms tick
//! publishes the time, the link state and the predicted position and steps both servos. State
//! handlers only ever touch parameters and servo setpoints; the hardware sees the result on the
//! next tick.

mod announcer;
mod error;
mod signal;
mod state;
mod tracker;
mod tracker_context;

pub use announcer::LogAnnouncer;
#[cfg(test)]
pub use announcer::Announcer;
pub use error::TrackError;
pub use signal::{Signal, Step};
#[cfg(test)]
pub use state::TrackerState;
pub use tracker::Tracker;
pub use tracker_context::TrackerContext;
