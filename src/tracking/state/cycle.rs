use super::{TrackState, TrackerState};
use crate::{
    geodesy::scale,
    tracking::{Signal, TrackerContext},
};
use std::f64::consts::FRAC_PI_2;

/// Phase advance per control tick, radians.
const PHASE_STEP: f64 = 0.02;

/// Sweeps pan over its full travel and tilt over the lower half, one circle every ~6 s.
#[derive(Debug, Default)]
pub struct CycleState {
    phase: f64,
}

impl TrackState for CycleState {
    fn state(&self) -> TrackerState { TrackerState::Cycle }

    fn update(&mut self, ctx: &TrackerContext, signal: Signal) {
        if signal != Signal::Tick {
            return;
        }
        self.phase += PHASE_STEP;
        let pan = scale(self.phase.cos(), -1.0, 1.0, -FRAC_PI_2, FRAC_PI_2);
        let tilt = scale(self.phase.sin(), -1.0, 1.0, -FRAC_PI_2, 0.0);
        ctx.point(pan, tilt);
    }
}
