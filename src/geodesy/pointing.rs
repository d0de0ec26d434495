use super::position::{Attitude, NEUPosition};
use std::f64::consts::{PI, TAU};
use std::fmt::{Display, Formatter};

/// Largest plausible north or east separation between base and rover, in metres.
pub const MAX_HORIZONTAL_DELTA: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointingError {
    /// The rover is further away than [`MAX_HORIZONTAL_DELTA`] on one axis.
    OutOfRange { north: f64, east: f64 },
    /// The latitude (degrees) is outside the usable band of the local plane.
    LatitudeOutOfRange(f64),
}

impl Display for PointingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PointingError::OutOfRange { north, east } => {
                write!(f, "rover is too far away ({north:.0} m north, {east:.0} m east)")
            }
            PointingError::LatitudeOutOfRange(lat) => {
                write!(f, "latitude {lat} is outside the supported band")
            }
        }
    }
}

impl std::error::Error for PointingError {}

/// Computes the pitch/yaw bearing from `base + offset` to `rover`.
///
/// Yaw is measured clockwise from north, pitch upwards from the horizon. Roll is always zero.
///
/// # Errors
/// Returns [`PointingError::OutOfRange`] if the separation on either horizontal axis exceeds
/// [`MAX_HORIZONTAL_DELTA`]; this is usually a GNSS glitch, not a real target.
pub fn bearing(
    rover: &NEUPosition,
    base: &NEUPosition,
    offset: &NEUPosition,
) -> Result<Attitude, PointingError> {
    let delta = *rover - (*base + *offset);
    if delta.north.abs() > MAX_HORIZONTAL_DELTA || delta.east.abs() > MAX_HORIZONTAL_DELTA {
        return Err(PointingError::OutOfRange { north: delta.north, east: delta.east });
    }
    let pitch = delta.up.atan2(delta.horizontal());
    let yaw = delta.east.atan2(delta.north);
    Ok(Attitude::new(0.0, pitch, yaw))
}

/// Normalises an angle in radians into `[-π, π)`.
pub fn wrap_angle(mut v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    while v >= PI {
        v -= TAU;
    }
    while v < -PI {
        v += TAU;
    }
    v
}

/// Linearly maps `v` from `[min0, max0]` onto `[min1, max1]` without clamping.
pub fn scale(v: f64, min0: f64, max0: f64, min1: f64, max1: f64) -> f64 {
    (v - min0) / (max0 - min0) * (max1 - min1) + min1
}
