use crate::geodesy::PointingError;
use std::fmt::{Display, Formatter};

/// Why a tracking cycle produced no bearing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackError {
    /// Rover or base position is not fresh. Expected while the link is down.
    Stale,
    Pointing(PointingError),
}

impl Display for TrackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackError::Stale => write!(f, "rover or base position is stale"),
            TrackError::Pointing(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackError::Stale => None,
            TrackError::Pointing(e) => Some(e),
        }
    }
}

impl From<PointingError> for TrackError {
    fn from(e: PointingError) -> Self { TrackError::Pointing(e) }
}
