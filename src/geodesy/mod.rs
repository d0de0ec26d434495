//! Local tangent plane geometry used to point the camera from the base at the rover.
//!
//! Geographic fixes are flattened onto a north/east/up plane with Gauss's series for the length
//! of one radian of latitude and longitude. This is accurate to well under a metre for the short
//! (< 10 km) baselines the tracker works with.

mod lat_lon;
mod pointing;
mod position;
#[cfg(test)]
mod tests;

pub use lat_lon::{check_latitude, to_local_plane};
#[cfg(test)]
pub use lat_lon::{lat_length, lon_length};
pub use pointing::{PointingError, bearing, scale, wrap_angle};
pub use position::{Attitude, NEUPosition, Position};
