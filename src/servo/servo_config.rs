use crate::geodesy::scale;
use crate::param::Record;
use std::f64::consts::{FRAC_PI_2, PI};

/// Limits and calibration of one servo. Pulse widths are in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServoConfig {
    /// PWM channel on the chip, `None` while unassigned.
    pub pin: Option<u32>,
    /// Angular travel in radians between `low` and `high`.
    pub span: f64,
    /// Hard lower limit of the pulse width.
    pub min: f64,
    /// Hard upper limit of the pulse width.
    pub max: f64,
    /// Pulse width at the start of `span`.
    pub low: f64,
    /// Pulse width at the end of `span`.
    pub high: f64,
    /// Smoothing factor applied to the setpoint every tick, `1` disables smoothing.
    pub tau: f64,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self { pin: None, span: PI, min: 1.0, max: 2.0, low: 1.1, high: 1.9, tau: 1.0 }
    }
}

impl ServoConfig {
    /// Converts an angle centred on zero into a pulse width clamped to `[min, max]`.
    pub fn pulse_width(&self, angle: f64) -> f64 {
        let ms = scale(angle + FRAC_PI_2, 0.0, self.span, self.low, self.high);
        // not f64::clamp: a remote write may leave min > max and that must not panic
        ms.max(self.min).min(self.max)
    }
}

impl Record for ServoConfig {
    const FIELDS: &'static [&'static str] = &["pin", "span", "min", "max", "low", "high", "tau"];

    fn field(&self, name: &str) -> Option<f64> {
        match name {
            "pin" => Some(self.pin.map_or(-1.0, f64::from)),
            "span" => Some(self.span),
            "min" => Some(self.min),
            "max" => Some(self.max),
            "low" => Some(self.low),
            "high" => Some(self.high),
            "tau" => Some(self.tau),
            _ => None,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn with_field(mut self, name: &str, v: f64) -> Option<Self> {
        match name {
            "pin" => self.pin = (v >= 0.0).then_some(v as u32),
            "span" => self.span = v,
            "min" => self.min = v,
            "max" => self.max = v,
            "low" => self.low = v,
            "high" => self.high = v,
            "tau" => self.tau = v,
            _ => return None,
        }
        Some(self)
    }
}
