use super::{TrackState, TrackerState};
use crate::{
    geodesy::Attitude,
    tracking::{Signal, TrackerContext},
};

/// Refines the yaw offset from the bearing of the rover as it walks away from the base.
pub struct OrientateState;

impl TrackState for OrientateState {
    fn state(&self) -> TrackerState { TrackerState::Orientate }

    fn update(&mut self, ctx: &TrackerContext, signal: Signal) {
        match signal {
            Signal::Neu => ctx.follow_fix(),
            Signal::Mark(step) => ctx.step_state(step),
            Signal::Rover => {
                if let Ok(bearing) = ctx.bearing() {
                    let pitch = ctx.offset().pitch;
                    ctx.set_offset(Attitude { yaw: -bearing.yaw, pitch, ..Attitude::default() });
                }
            }
            _ => {}
        }
    }
}
