//! Servo actuation: smooths a requested angle, converts it to a bounded pulse width and drives
//! a PWM channel with it.

mod pwm;
mod servo;
mod servo_config;
mod sysfs_pwm;

pub use pwm::PwmOutput;
pub use servo::Servo;
pub use servo_config::ServoConfig;
pub use sysfs_pwm::SysfsPwm;
#[cfg(test)]
pub use {pwm::PwmError, servo::PWM_PERIOD_NS};
