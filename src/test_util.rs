//! Shared test doubles.

use crate::{
    servo::{PwmError, PwmOutput},
    tracking::Announcer,
};
use std::sync::{Mutex, PoisonError};

#[macro_export]
macro_rules! assert_near {
    ($a:expr, $b:expr, $tol:expr) => {{
        let (a, b, tol): (f64, f64, f64) = ($a, $b, $tol);
        assert!((a - b).abs() <= tol, "{a} is not within {tol} of {b}");
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmCall {
    Export(u32),
    Unexport(u32),
    Enable(u32, bool),
    Period(u32, u64),
    Duty(u32, u64),
}

/// Records every PWM write. Calls on channels in `failing` are rejected.
#[derive(Default)]
pub struct RecordingPwm {
    calls: Mutex<Vec<PwmCall>>,
    failing: Mutex<Vec<u32>>,
}

impl RecordingPwm {
    pub fn calls(&self) -> Vec<PwmCall> { self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone() }

    pub fn clear(&self) { self.calls.lock().unwrap_or_else(PoisonError::into_inner).clear(); }

    pub fn fail_channel(&self, channel: u32, fail: bool) {
        let mut failing = self.failing.lock().unwrap_or_else(PoisonError::into_inner);
        failing.retain(|c| *c != channel);
        if fail {
            failing.push(channel);
        }
    }

    fn record(&self, channel: u32, call: PwmCall) -> Result<(), PwmError> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call);
        if self.failing.lock().unwrap_or_else(PoisonError::into_inner).contains(&channel) {
            return Err(PwmError::Io {
                path: format!("pwm{channel}"),
                source: std::io::Error::other("rejected"),
            });
        }
        Ok(())
    }
}

impl PwmOutput for RecordingPwm {
    fn export(&self, channel: u32) -> Result<(), PwmError> { self.record(channel, PwmCall::Export(channel)) }

    fn unexport(&self, channel: u32) -> Result<(), PwmError> {
        self.record(channel, PwmCall::Unexport(channel))
    }

    fn set_enable(&self, channel: u32, enable: bool) -> Result<(), PwmError> {
        self.record(channel, PwmCall::Enable(channel, enable))
    }

    fn set_period(&self, channel: u32, ns: u64) -> Result<(), PwmError> {
        self.record(channel, PwmCall::Period(channel, ns))
    }

    fn set_duty(&self, channel: u32, ns: u64) -> Result<(), PwmError> {
        self.record(channel, PwmCall::Duty(channel, ns))
    }
}

/// Collects every announcement.
#[derive(Default)]
pub struct RecordingAnnouncer {
    said: Mutex<Vec<String>>,
}

impl RecordingAnnouncer {
    pub fn said(&self) -> Vec<String> { self.said.lock().unwrap_or_else(PoisonError::into_inner).clone() }
}

impl Announcer for RecordingAnnouncer {
    fn say(&self, text: &str) { self.said.lock().unwrap_or_else(PoisonError::into_inner).push(text.to_string()); }
}
