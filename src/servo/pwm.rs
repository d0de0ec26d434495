use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum PwmError {
    /// Writing a control attribute failed.
    Io { path: String, source: std::io::Error },
}

impl Display for PwmError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PwmError::Io { path, source } => write!(f, "writing {path} failed: {source}"),
        }
    }
}

impl std::error::Error for PwmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PwmError::Io { source, .. } => Some(source),
        }
    }
}

/// The hardware side of a servo: one PWM chip addressed by channel number.
///
/// Periods and duty cycles are in nanoseconds.
pub trait PwmOutput: Send + Sync {
    fn export(&self, channel: u32) -> Result<(), PwmError>;
    fn unexport(&self, channel: u32) -> Result<(), PwmError>;
    fn set_enable(&self, channel: u32, enable: bool) -> Result<(), PwmError>;
    fn set_period(&self, channel: u32, ns: u64) -> Result<(), PwmError>;
    fn set_duty(&self, channel: u32, ns: u64) -> Result<(), PwmError>;
}
