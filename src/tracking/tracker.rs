use super::{
    announcer::Announcer,
    signal::Signal,
    state::{TrackState, TrackerState},
    tracker_context::{TrackerContext, report},
};
use crate::{
    event, info,
    param::{DEFAULT_LISTEN_CAPACITY, ParamGroup, ParamId, ParamReceiver, Value},
    servo::{PwmOutput, Servo},
    telemetry::Telemetry,
};
use std::{sync::Arc, time::Duration};
use strum::IntoEnumIterator;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Control tick period.
pub const TICK_PERIOD: Duration = Duration::from_millis(20);
/// Fix type from which on the GNSS solution is usable.
const GPS_READY_FIX: i64 = 3;

/// Owns the state table and runs the control loop.
pub struct Tracker {
    group: Arc<ParamGroup>,
    ctx: TrackerContext,
    handlers: Vec<Box<dyn TrackState>>,
    rx: ParamReceiver,
    link_last: i64,
}

impl Tracker {
    /// Creates the servos and subscribes to the group. Pan and tilt are `pantilt.pan` and
    /// `pantilt.tilt`.
    pub fn new(
        group: Arc<ParamGroup>,
        telemetry: Telemetry,
        pwm: &Arc<dyn PwmOutput>,
        announcer: Arc<dyn Announcer>,
    ) -> Self {
        let pan = Servo::new("pantilt.pan", &group, Arc::clone(pwm));
        let tilt = Servo::new("pantilt.tilt", &group, Arc::clone(pwm));
        let rx = group.listen(DEFAULT_LISTEN_CAPACITY);
        Self {
            group,
            ctx: TrackerContext::new(telemetry, pan, tilt, announcer),
            handlers: TrackerState::iter().map(TrackerState::handler).collect(),
            rx,
            link_last: 0,
        }
    }

    pub fn context(&self) -> &TrackerContext { &self.ctx }

    /// The active state, `None` if the index points outside the table.
    pub fn state(&self) -> Option<TrackerState> {
        let index = usize::try_from(self.ctx.state_index()).ok()?;
        self.handlers.get(index).map(|handler| handler.state())
    }

    /// Handles one parameter change: the active state first, then the announcements.
    pub fn dispatch(&mut self, id: ParamId) {
        let Some(param) = self.group.get(id) else { return };
        let signal = self.ctx.classify(&param);
        let index = usize::try_from(self.ctx.state_index()).ok();
        if let Some(handler) = index.and_then(|i| self.handlers.get_mut(i)) {
            handler.update(&self.ctx, signal);
        }
        self.announce(signal);
        event!("{} {:?}", param.name(), param.get());
    }

    /// Dispatches every change queued so far and returns how many there were.
    ///
    /// Changes made by the handlers themselves are queued behind and handled in the same call.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Some(id) = self.rx.try_recv() {
            self.dispatch(id);
            handled += 1;
        }
        handled
    }

    /// Publishes time, link state and the predicted position, then steps both servos.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self) {
        let now = self.group.now();
        let p = self.ctx.params();
        report(p.tick.set_f64(now));
        report(p.seconds.update_int(now.floor() as i64));
        if !p.heartbeats.is_fresh() {
            report(p.link.update_int(2));
        }
        report(p.pred.set(Value::Position(self.ctx.telemetry().predict(now))));

        let (pan, tilt) = self.ctx.servos_mut();
        pan.tick();
        tilt.tick();
    }

    /// Runs until `cancel` fires. Parameter changes and ticks are handled strictly one at a time.
    pub async fn run(mut self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.ctx.say("Base ready");
        info!("Tracker running in state {}", self.state_name());

        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                id = self.rx.recv() => match id {
                    Some(id) => self.dispatch(id),
                    None => break,
                },
                _ = interval.tick() => self.tick(),
            }
        }
        info!("Tracker stopped in state {}", self.state_name());
    }

    fn state_name(&self) -> String {
        self.state().map_or_else(|| format!("#{}", self.ctx.state_index()), |s| s.to_string())
    }

    fn announce(&mut self, signal: Signal) {
        match signal {
            Signal::State => {
                if let Some(state) = self.state() {
                    self.ctx.say(&state.to_string());
                }
            }
            Signal::Link(link) if link != self.link_last => {
                self.link_last = link;
                match link {
                    1 => self.ctx.say("Rover ready"),
                    2 => self.ctx.say("Rover offline"),
                    _ => {}
                }
            }
            Signal::GpsFix(fix) if fix >= GPS_READY_FIX => self.ctx.say("GPS ready"),
            _ => {}
        }
    }
}
