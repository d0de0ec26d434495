use std::collections::HashMap;

/// Per key rate limiter.
///
/// A key passes at most once per `period`. While the caller keeps up, the stamp advances by
/// exactly one period so the long run rate does not drift below one per period.
#[derive(Debug, Default)]
pub struct RateLimiter {
    stamps: HashMap<String, f64>,
}

impl RateLimiter {
    pub fn new() -> Self { Self::default() }

    /// Returns `true` if `key` may pass at `now`, and records it.
    pub fn allow(&mut self, key: &str, period: f64, now: f64) -> bool {
        let Some(stamp) = self.stamps.get_mut(key) else {
            self.stamps.insert(key.to_string(), now);
            return true;
        };
        let elapsed = now - *stamp;
        if elapsed < period {
            return false;
        }
        *stamp = if elapsed < 2.0 * period { *stamp + period } else { now };
        true
    }
}
