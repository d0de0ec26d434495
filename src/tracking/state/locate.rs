use super::{TrackState, TrackerState};
use crate::{
    geodesy::Attitude,
    param::Value,
    tracking::{Signal, TrackerContext, tracker_context::report},
};

/// Places the base at the rover's fix. The rover starts out sitting on the base.
pub struct LocateState;

impl TrackState for LocateState {
    fn state(&self) -> TrackerState { TrackerState::Locate }

    fn update(&mut self, ctx: &TrackerContext, signal: Signal) {
        let p = ctx.params();
        match signal {
            Signal::Neu => {
                let fix = p.neu.get();
                if matches!(fix, Value::Neu(_)) {
                    report(p.rover.set(fix.clone()));
                    report(p.base.set(fix));
                    p.base.finalize();
                }
            }
            Signal::Attitude => {
                // the rover faces the same way as the mount while it is on the base
                if let Some(att) = ctx.rover_attitude() {
                    ctx.set_offset(Attitude { yaw: att.yaw, ..Attitude::default() });
                }
            }
            Signal::Mark(step) => ctx.step_state(step),
            _ => {}
        }
    }
}
