use super::{pwm::PwmOutput, servo_config::ServoConfig};
use crate::{
    filter::Lowpass,
    param::{Param, ParamGroup, Value},
    warn,
};
use std::sync::Arc;

/// PWM period driven on every bound channel, 50 Hz.
pub const PWM_PERIOD_NS: u64 = 20_000_000;

/// One axis of the mount.
///
/// The requested angle goes into `<name>.sp`. Every [`Servo::tick`] smooths it, maps it onto the
/// configured pulse range, publishes the pulse width in milliseconds on `<name>.pv` and writes it
/// to the assigned channel.
pub struct Servo {
    config: Arc<Param>,
    sp: Arc<Param>,
    pv: Arc<Param>,
    lowpass: Lowpass,
    pwm: Arc<dyn PwmOutput>,
    bound: Option<u32>,
}

impl Servo {
    pub fn new(name: &str, group: &ParamGroup, pwm: Arc<dyn PwmOutput>) -> Self {
        Self {
            config: group.new_with(name, Value::Servo(ServoConfig::default())),
            sp: group.new_num(&format!("{name}.sp")),
            pv: group.new_num(&format!("{name}.pv")),
            lowpass: Lowpass::new(1.0),
            pwm,
            bound: None,
        }
    }

    pub fn config_param(&self) -> &Arc<Param> { &self.config }

    pub fn setpoint(&self) -> &Arc<Param> { &self.sp }

    pub fn output(&self) -> &Arc<Param> { &self.pv }

    pub fn config(&self) -> ServoConfig {
        match self.config.get() {
            Value::Servo(config) => config,
            _ => ServoConfig::default(),
        }
    }

    /// Requests `angle` radians, zero being the centre of travel.
    pub fn set(&self, angle: f64) {
        if let Err(e) = self.sp.set_f64(angle) {
            warn!("{e}");
        }
    }

    /// Channel currently exported and enabled, if any.
    pub fn bound_channel(&self) -> Option<u32> { self.bound }

    /// Advances the servo by one control tick and returns the commanded pulse width in ms.
    pub fn tick(&mut self) -> f64 {
        let config = self.config();
        let angle = self.lowpass.step_with(self.sp.get_f64(), config.tau);
        let ms = config.pulse_width(angle);
        if let Err(e) = self.pv.set_f64(ms) {
            warn!("{e}");
        }

        let Some(pin) = config.pin else { return ms };
        let duty = duty_ns(ms);
        if self.bound != Some(pin) {
            if let Some(old) = self.bound.take() {
                self.release(old);
            }
            if !self.bind(pin, duty) {
                return ms;
            }
            self.bound = Some(pin);
        }
        if let Err(e) = self.pwm.set_duty(pin, duty) {
            warn!("Servo {}: {e}", self.config.name());
        }
        ms
    }

    fn release(&self, channel: u32) {
        let name = self.config.name();
        if let Err(e) = self.pwm.set_enable(channel, false) {
            warn!("Servo {name}: {e}");
        }
        if let Err(e) = self.pwm.unexport(channel) {
            warn!("Servo {name}: {e}");
        }
    }

    /// Runs the bind sequence, returning `false` if the channel is not usable yet.
    fn bind(&self, channel: u32, duty: u64) -> bool {
        let name = self.config.name();
        // an already exported channel rejects the export, the remaining steps decide
        if let Err(e) = self.pwm.export(channel) {
            warn!("Servo {name}: {e}");
        }
        let result = self
            .pwm
            .set_enable(channel, false)
            .and_then(|()| self.pwm.set_period(channel, PWM_PERIOD_NS))
            .and_then(|()| self.pwm.set_duty(channel, duty))
            .and_then(|()| self.pwm.set_enable(channel, true));
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("Servo {name}: binding channel {channel} failed, retrying next tick: {e}");
                false
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn duty_ns(ms: f64) -> u64 { (ms * 1e6).round() as u64 }
