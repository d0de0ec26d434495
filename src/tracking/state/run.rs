use super::{TrackState, TrackerState};
use crate::{
    geodesy::wrap_angle,
    tracking::{Signal, TrackError, TrackerContext},
    warn,
};

/// Announce the speed every this many seconds.
const SPEED_EVERY: i64 = 5;
/// Slowest speed worth announcing, km/h.
const MIN_KPH: f64 = 2.0;

/// Points the mount at the rover.
pub struct RunState;

impl RunState {
    fn track(ctx: &TrackerContext) {
        match ctx.bearing() {
            Ok(bearing) => {
                let offset = ctx.offset();
                ctx.point(wrap_angle(bearing.yaw + offset.yaw), wrap_angle(bearing.pitch + offset.pitch));
            }
            Err(TrackError::Stale) => {}
            Err(e) => warn!("Not tracking: {e}"),
        }
    }

    fn announce_speed(ctx: &TrackerContext, seconds: i64) {
        let vel = &ctx.params().vel;
        if seconds % SPEED_EVERY != 0 || !vel.is_fresh() {
            return;
        }
        let kph = vel.get_f64() * 3.6;
        if kph >= MIN_KPH {
            ctx.say(&format!("{kph:.0} kph"));
        }
    }
}

impl TrackState for RunState {
    fn state(&self) -> TrackerState { TrackerState::Run }

    fn update(&mut self, ctx: &TrackerContext, signal: Signal) {
        match signal {
            Signal::Neu => ctx.follow_fix(),
            Signal::Seconds(seconds) => Self::announce_speed(ctx, seconds),
            Signal::Mark(step) => ctx.step_state(step),
            Signal::Rover => Self::track(ctx),
            _ => {}
        }
    }
}
