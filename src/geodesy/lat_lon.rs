use super::{pointing::PointingError, position::{NEUPosition, Position}};

/// Gauss series terms for the length of a radian of latitude.
const M1: f64 = 111_132.92;
const M2: f64 = -559.82;
const M3: f64 = 1.175;
/// Gauss series terms for the length of a radian of longitude.
const P1: f64 = 111_412.84;
const P2: f64 = -93.5;
const P3: f64 = 0.118;

/// Beyond this latitude the longitude series degenerates and the flat plane is unusable.
pub const MAX_ABS_LATITUDE: f64 = 80.0;

/// Length in metres of one degree of latitude at `lat` (radians).
pub fn lat_length(lat: f64) -> f64 { M1 + M2 * (2.0 * lat).cos() + M3 * (4.0 * lat).cos() }

/// Length in metres of one degree of longitude at `lat` (radians).
pub fn lon_length(lat: f64) -> f64 {
    P1 * lat.cos() + P2 * (3.0 * lat).cos() + P3 * (5.0 * lat).cos()
}

/// Rejects latitudes (degrees) the local plane cannot represent.
///
/// # Errors
/// Returns [`PointingError::LatitudeOutOfRange`] for `|lat| > 80°` or non-finite input.
pub fn check_latitude(lat: f64) -> Result<(), PointingError> {
    if lat.is_finite() && lat.abs() <= MAX_ABS_LATITUDE {
        Ok(())
    } else {
        Err(PointingError::LatitudeOutOfRange(lat))
    }
}

/// Flattens a geographic fix onto the tangent plane scaled at `reference_lat` (degrees).
///
/// Altitude maps straight to `up`. Only differences between two converted points are
/// meaningful, and only while both were converted with (nearly) the same reference latitude.
pub fn to_local_plane(position: &Position, reference_lat: f64) -> NEUPosition {
    let lat = reference_lat.to_radians();
    NEUPosition {
        time: position.time,
        north: lat_length(lat) * position.lat,
        east: lon_length(lat) * position.lon,
        up: position.alt,
    }
}
