/// First order exponential smoother.
///
/// `tau` is the blend factor per step: `0` freezes the output, `1` passes the input through.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lowpass {
    pub tau: f64,
    acc: f64,
}

impl Lowpass {
    pub fn new(tau: f64) -> Self { Self { tau, acc: 0.0 } }

    /// Steps the filter with its own `tau`.
    pub fn step(&mut self, v: f64) -> f64 { self.step_with(v, self.tau) }

    /// Steps the filter with an explicit `tau`, clamped to `[0, 1]`.
    pub fn step_with(&mut self, v: f64, tau: f64) -> f64 {
        let tau = tau.clamp(0.0, 1.0);
        self.acc = tau * v + (1.0 - tau) * self.acc;
        self.acc
    }

    pub fn value(&self) -> f64 { self.acc }
}
