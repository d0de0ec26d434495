use crate::param::Record;
use serde::Deserialize;

/// Power and load report of the rover's flight controller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
pub struct SystemStatus {
    /// Main loop load, 0 to 1.
    pub load: f64,
    /// Battery voltage in volts.
    pub voltage: f64,
    /// Battery current in amperes.
    pub current: f64,
    /// Remaining battery charge in percent.
    pub remaining: f64,
}

impl Record for SystemStatus {
    const FIELDS: &'static [&'static str] = &["load", "voltage", "current", "remaining"];

    fn field(&self, name: &str) -> Option<f64> {
        match name {
            "load" => Some(self.load),
            "voltage" => Some(self.voltage),
            "current" => Some(self.current),
            "remaining" => Some(self.remaining),
            _ => None,
        }
    }

    fn with_field(mut self, name: &str, v: f64) -> Option<Self> {
        match name {
            "load" => self.load = v,
            "voltage" => self.voltage = v,
            "current" => self.current = v,
            "remaining" => self.remaining = v,
            _ => return None,
        }
        Some(self)
    }
}
