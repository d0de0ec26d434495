use super::{TrackState, TrackerState};
use crate::tracking::{Signal, Step, TrackerContext};

/// Tracking paused. Any mark resumes [`TrackerState::Run`].
pub struct HoldState;

impl TrackState for HoldState {
    fn state(&self) -> TrackerState { TrackerState::Hold }

    fn update(&mut self, ctx: &TrackerContext, signal: Signal) {
        if let Signal::Mark(_) = signal {
            ctx.step_state(Step::Retreat);
        }
    }
}
