use super::system_status::SystemStatus;
use serde::Deserialize;

/// A decoded telemetry message as handed over by the transport.
///
/// The text form is RON, one message per line, e.g.
/// `PositionFix(lat: 46.8, lon: 8.2, alt: 520.0, heading: 90.0, timestamp: 12.5)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum Message {
    Heartbeat,
    SystemStatus(SystemStatus),
    PositionFix { lat: f64, lon: f64, alt: f64, heading: f64, timestamp: f64 },
    GroundSpeed(f64),
    FixType(i64),
    Attitude { roll: f64, pitch: f64, yaw: f64 },
    RemoteControl(Vec<u16>),
}
