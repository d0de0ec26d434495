use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of the current time in seconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now(&self) -> f64;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_precision_loss)]
    fn now(&self) -> f64 { Utc::now().timestamp_micros() as f64 * 1e-6 }
}

/// Clock that only moves when told to. Used for replay and tests.
#[derive(Debug)]
pub struct ManualClock {
    bits: AtomicU64,
}

impl ManualClock {
    pub fn new(start: f64) -> Self { Self { bits: AtomicU64::new(start.to_bits()) } }

    pub fn set(&self, now: f64) { self.bits.store(now.to_bits(), Ordering::Release); }

    pub fn advance(&self, dt: f64) { self.set(self.now() + dt); }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 { f64::from_bits(self.bits.load(Ordering::Acquire)) }
}
