use super::{
    announcer::Announcer,
    error::TrackError,
    signal::{Signal, Step},
    state::TrackerState,
};
use crate::{
    geodesy::{Attitude, NEUPosition, bearing},
    param::{Param, ParamError, Value},
    servo::Servo,
    telemetry::{RoverParams, Telemetry},
    warn,
};
use std::sync::Arc;

/// Everything a state handler may read or drive.
pub struct TrackerContext {
    telemetry: Telemetry,
    pan: Servo,
    tilt: Servo,
    announcer: Arc<dyn Announcer>,
    last_mark: i64,
}

impl TrackerContext {
    pub fn new(telemetry: Telemetry, pan: Servo, tilt: Servo, announcer: Arc<dyn Announcer>) -> Self {
        let last_mark = telemetry.params().mark.get_int();
        Self { telemetry, pan, tilt, announcer, last_mark }
    }

    pub fn params(&self) -> &RoverParams { self.telemetry.params() }

    pub fn telemetry(&self) -> &Telemetry { &self.telemetry }

    pub fn pan(&self) -> &Servo { &self.pan }

    pub fn tilt(&self) -> &Servo { &self.tilt }

    pub(super) fn servos_mut(&mut self) -> (&mut Servo, &mut Servo) { (&mut self.pan, &mut self.tilt) }

    pub fn say(&self, text: &str) { self.announcer.say(text); }

    /// Resolves a changed parameter into a [`Signal`].
    ///
    /// Mark changes are compared against the last mark seen: a lower value retreats, anything
    /// else advances.
    pub fn classify(&mut self, param: &Param) -> Signal {
        let p = self.telemetry.params();
        let id = param.id();
        let is = |other: &Arc<Param>| other.id() == id;
        if is(&p.neu) {
            Signal::Neu
        } else if is(&p.attitude) {
            Signal::Attitude
        } else if is(&p.rover) {
            Signal::Rover
        } else if is(&p.mark) {
            let mark = param.get_int();
            let step = if mark < self.last_mark { Step::Retreat } else { Step::Advance };
            self.last_mark = mark;
            Signal::Mark(step)
        } else if is(&p.seconds) {
            Signal::Seconds(param.get_int())
        } else if is(&p.tick) {
            Signal::Tick
        } else if is(&p.state) {
            Signal::State
        } else if is(&p.link) {
            Signal::Link(param.get_int())
        } else if is(&p.gps_fix) {
            Signal::GpsFix(param.get_int())
        } else {
            Signal::Other
        }
    }

    pub fn state_index(&self) -> i64 { self.params().state.get_int() }

    /// Moves the state index one step, saturating inside the state table.
    pub fn step_state(&self, step: Step) {
        let last = TrackerState::Cycle.index();
        let next = match step {
            Step::Advance => self.state_index() + 1,
            Step::Retreat => self.state_index() - 1,
        };
        report(self.params().state.set_int(next.clamp(0, last)));
    }

    /// Copies the latest local plane fix into the rover position.
    pub fn follow_fix(&self) {
        let p = self.params();
        if let Value::Neu(neu) = p.neu.get() {
            report(p.rover.set(Value::Neu(neu)));
        }
    }

    /// Bearing from the base (plus its offset) to the rover.
    ///
    /// # Errors
    /// [`TrackError::Stale`] unless both positions are fresh, [`TrackError::Pointing`] if the
    /// rover is out of range.
    pub fn bearing(&self) -> Result<Attitude, TrackError> {
        let p = self.params();
        if !p.rover.is_fresh() || !p.base.is_fresh() {
            return Err(TrackError::Stale);
        }
        let (Some(rover), Some(base)) = (neu(&p.rover), neu(&p.base)) else {
            return Err(TrackError::Stale);
        };
        let offset = neu(&p.base_offset).unwrap_or_default();
        Ok(bearing(&rover, &base, &offset)?)
    }

    /// Latest rover attitude, if one arrived.
    pub fn rover_attitude(&self) -> Option<Attitude> {
        match self.params().attitude.get() {
            Value::Attitude(att) => Some(att),
            _ => None,
        }
    }

    /// The pan/tilt correction added to every bearing.
    pub fn offset(&self) -> Attitude {
        match self.params().offset.get() {
            Value::Attitude(att) => att,
            _ => Attitude::default(),
        }
    }

    pub fn set_offset(&self, offset: Attitude) { report(self.params().offset.set(Value::Attitude(offset))); }

    /// Points the mount, angles in radians from centre.
    pub fn point(&self, pan: f64, tilt: f64) {
        self.pan.set(pan);
        self.tilt.set(tilt);
    }
}

fn neu(param: &Param) -> Option<NEUPosition> {
    match param.get() {
        Value::Neu(neu) => Some(neu),
        _ => None,
    }
}

pub(super) fn report<T>(result: Result<T, ParamError>) {
    if let Err(e) = result {
        warn!("{e}");
    }
}
