/// Longest time in seconds a prediction is extrapolated past the last measurement.
pub const MAX_EXTRAPOLATION: f64 = 2.0;

/// Velocity based linear predictor for one scalar axis.
///
/// Measurements arrive irregularly and carry their own sensor timestamp. The velocity is
/// estimated from consecutive sensor timestamps, while extrapolation is measured from the local
/// arrival time, so transport latency does not skew the estimate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinPred {
    /// last measurement
    x: f64,
    /// sensor timestamp of `x`
    stamp: Option<f64>,
    /// local arrival time of `x`
    updated: f64,
    /// velocity in units per second
    v: f64,
}

impl LinPred {
    pub fn new() -> Self { Self::default() }

    /// Feeds a new measurement.
    ///
    /// The first measurement has zero velocity. Out of order or duplicate sensor timestamps
    /// also reset the velocity to zero rather than producing a huge or negative estimate.
    pub fn feed(&mut self, x: f64, now: f64, stamp: f64) {
        self.v = match self.stamp {
            Some(last) if stamp > last => (x - self.x) / (stamp - last),
            _ => 0.0,
        };
        self.x = x;
        self.stamp = Some(stamp);
        self.updated = now;
    }

    /// Extrapolates the last measurement to `now`.
    ///
    /// The extrapolation window is clamped to `[0, MAX_EXTRAPOLATION]` so a dead link freezes
    /// the prediction instead of letting it run away.
    pub fn predict(&self, now: f64) -> f64 {
        let dt = (now - self.updated).clamp(0.0, MAX_EXTRAPOLATION);
        self.x + self.v * dt
    }

    pub fn velocity(&self) -> f64 { self.v }

    pub fn is_primed(&self) -> bool { self.stamp.is_some() }
}
