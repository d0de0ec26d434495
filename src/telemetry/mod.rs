//! Ingestion of parsed rover telemetry into the parameter group.

mod message;
mod remote;
mod rover_params;
mod system_status;
#[cfg(test)]
mod tests;
mod telemetry;

pub use message::Message;
#[cfg(test)]
pub use remote::{scale_to_pos, servo_to_scale};
pub use rover_params::RoverParams;
pub use system_status::SystemStatus;
pub use telemetry::Telemetry;
