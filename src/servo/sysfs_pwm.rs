use super::pwm::{PwmError, PwmOutput};
use std::{fs::OpenOptions, io::Write, path::PathBuf};

/// Linux sysfs PWM chip (`/sys/class/pwm/pwmchipN`).
#[derive(Debug, Clone)]
pub struct SysfsPwm {
    root: PathBuf,
}

impl SysfsPwm {
    pub fn new(chip: u32) -> Self { Self::with_root(format!("/sys/class/pwm/pwmchip{chip}")) }

    /// Uses `root` in place of the chip directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    fn write(&self, path: PathBuf, value: u64) -> Result<(), PwmError> {
        OpenOptions::new()
            .write(true)
            .open(&path)
            .and_then(|mut f| f.write_all(format!("{value}\n").as_bytes()))
            .map_err(|source| PwmError::Io { path: path.display().to_string(), source })
    }

    fn attr(&self, channel: u32, attr: &str) -> PathBuf {
        self.root.join(format!("pwm{channel}")).join(attr)
    }
}

impl PwmOutput for SysfsPwm {
    fn export(&self, channel: u32) -> Result<(), PwmError> {
        self.write(self.root.join("export"), u64::from(channel))
    }

    fn unexport(&self, channel: u32) -> Result<(), PwmError> {
        self.write(self.root.join("unexport"), u64::from(channel))
    }

    fn set_enable(&self, channel: u32, enable: bool) -> Result<(), PwmError> {
        self.write(self.attr(channel, "enable"), u64::from(enable))
    }

    fn set_period(&self, channel: u32, ns: u64) -> Result<(), PwmError> {
        self.write(self.attr(channel, "period"), ns)
    }

    fn set_duty(&self, channel: u32, ns: u64) -> Result<(), PwmError> {
        self.write(self.attr(channel, "duty_cycle"), ns)
    }
}
