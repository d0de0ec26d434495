use super::{
    message::Message,
    remote::{scale_to_pos, servo_to_scale},
    rover_params::RoverParams,
    system_status::SystemStatus,
};
use crate::{
    filter::LinPred,
    geodesy::{Attitude, PointingError, Position, check_latitude, to_local_plane},
    param::{ParamError, Value},
    warn,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Yaw stick detent that counts as an operator mark.
const MARK_DETENT: i64 = -2;

#[derive(Debug, Default)]
struct Predictors {
    lat: LinPred,
    lon: LinPred,
    alt: LinPred,
}

/// Cloneable entry point for telemetry producers.
///
/// Every method writes the matching parameters and counts the message. Producers may call in
/// from any thread; the parameter locks serialise the writes.
#[derive(Debug, Clone)]
pub struct Telemetry {
    params: RoverParams,
    predictors: Arc<Mutex<Predictors>>,
}

impl Telemetry {
    pub fn new(params: RoverParams) -> Self {
        Self { params, predictors: Arc::new(Mutex::new(Predictors::default())) }
    }

    pub fn params(&self) -> &RoverParams { &self.params }

    /// Dispatches a decoded message to its entry point.
    pub fn handle(&self, message: Message) {
        match message {
            Message::Heartbeat => self.on_heartbeat(),
            Message::SystemStatus(status) => self.on_system_status(status),
            Message::PositionFix { lat, lon, alt, heading, timestamp } => {
                // rejection is already logged
                let _ = self.on_position_fix(lat, lon, alt, heading, timestamp);
            }
            Message::GroundSpeed(mps) => self.on_ground_speed(mps),
            Message::FixType(fix) => self.on_fix_type(fix),
            Message::Attitude { roll, pitch, yaw } => self.on_attitude(roll, pitch, yaw),
            Message::RemoteControl(channels) => self.on_remote_control(&channels),
        }
    }

    pub fn on_heartbeat(&self) {
        report(self.params.link.set_int(1));
        report(self.params.heartbeats.increment());
        self.counted();
    }

    pub fn on_system_status(&self, status: SystemStatus) {
        report(self.params.status.set(Value::Status(status)));
        self.counted();
    }

    /// Stores a geographic fix, feeds the predictors and derives the local plane position.
    ///
    /// `timestamp` is the sensor time of the fix in seconds. All fixes are flattened at the same
    /// reference latitude, captured from the first usable one, so base and rover share one scale.
    ///
    /// # Errors
    /// [`PointingError::LatitudeOutOfRange`] if the fix cannot be put on the local plane. The
    /// geographic fix is still stored and the predictors are still fed.
    pub fn on_position_fix(
        &self,
        lat: f64,
        lon: f64,
        alt: f64,
        heading: f64,
        timestamp: f64,
    ) -> Result<(), PointingError> {
        let fix = Position { time: timestamp, lat, lon, alt, heading };
        report(self.params.gps.set(Value::Position(fix)));

        let now = self.params.tick.get_f64();
        {
            let mut pred = self.predictors();
            pred.lat.feed(lat, now, timestamp);
            pred.lon.feed(lon, now, timestamp);
            pred.alt.feed(alt, now, timestamp);
        }

        let result = check_latitude(lat);
        match result {
            Ok(()) => {
                let reference = self.reference_lat(lat);
                report(self.params.neu.set(Value::Neu(to_local_plane(&fix, reference))));
            }
            Err(e) => warn!("Position fix not usable for pointing: {e}"),
        }
        self.counted();
        result
    }

    pub fn on_ground_speed(&self, mps: f64) {
        report(self.params.vel.set_f64(mps));
        self.counted();
    }

    pub fn on_fix_type(&self, fix: i64) {
        report(self.params.gps_fix.update_int(fix));
        self.counted();
    }

    pub fn on_attitude(&self, roll: f64, pitch: f64, yaw: f64) {
        report(self.params.attitude.set(Value::Attitude(Attitude::new(roll, pitch, yaw))));
        self.counted();
    }

    /// Takes raw RC channel pulse widths, channel 1 first.
    ///
    /// Channels 1, 2 and 4 become the roll, pitch and yaw of the `remote` attitude. Moving the
    /// yaw stick into its lowest detent steps the mark counter once.
    pub fn on_remote_control(&self, channels: &[u16]) {
        let channel = |n: usize| servo_to_scale(channels.get(n - 1).copied().unwrap_or(1500));
        let remote = Attitude::new(channel(1), channel(2), channel(4));
        report(self.params.remote.set(Value::Attitude(remote)));

        let command = scale_to_pos(remote.yaw);
        if let Ok(true) = self.params.command.update_int(command) {
            if command == MARK_DETENT {
                report(self.params.mark.increment());
            }
        }
        self.counted();
    }

    /// Geographic position extrapolated to `now`.
    pub fn predict(&self, now: f64) -> Position {
        let pred = self.predictors();
        Position {
            time: now,
            lat: pred.lat.predict(now),
            lon: pred.lon.predict(now),
            alt: pred.alt.predict(now),
            heading: 0.0,
        }
    }

    fn reference_lat(&self, lat: f64) -> f64 {
        let p = &self.params.reference_lat;
        if let Some(reference) = p.get().as_f64() {
            return reference;
        }
        report(p.set_f64(lat));
        lat
    }

    fn counted(&self) { report(self.params.messages.increment()); }

    fn predictors(&self) -> MutexGuard<'_, Predictors> {
        self.predictors.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn report<T>(result: Result<T, ParamError>) {
    if let Err(e) = result {
        warn!("{e}");
    }
}
