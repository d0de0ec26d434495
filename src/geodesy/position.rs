use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A geographic fix as reported by the rover's GNSS receiver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Sensor timestamp in seconds.
    pub time: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Altitude in metres.
    pub alt: f64,
    /// Course over ground in degrees.
    pub heading: f64,
}

/// A point on the local tangent plane, in metres.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NEUPosition {
    pub time: f64,
    pub north: f64,
    pub east: f64,
    pub up: f64,
}

impl NEUPosition {
    pub const fn new(north: f64, east: f64, up: f64) -> Self { Self { time: 0.0, north, east, up } }

    /// Horizontal distance from the origin.
    pub fn horizontal(&self) -> f64 { self.north.hypot(self.east) }
}

impl Add for NEUPosition {
    type Output = NEUPosition;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            time: self.time + rhs.time,
            north: self.north + rhs.north,
            east: self.east + rhs.east,
            up: self.up + rhs.up,
        }
    }
}

impl Sub for NEUPosition {
    type Output = NEUPosition;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            time: self.time - rhs.time,
            north: self.north - rhs.north,
            east: self.east - rhs.east,
            up: self.up - rhs.up,
        }
    }
}

/// Orientation of a body relative to the local tangent plane, in radians.
///
/// Used both for the rover's attitude and for the commanded pan (yaw) / tilt (pitch) bearing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Attitude {
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self { Self { roll, pitch, yaw } }
}
