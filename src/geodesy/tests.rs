use super::{
    Attitude, NEUPosition, PointingError, Position, bearing, check_latitude, lat_length,
    lon_length, scale, to_local_plane, wrap_angle,
};
use crate::assert_near;
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// Degree lengths at 0/15/30/45/60/75° from the WGS84 reference table.
const LAT_TABLE: [(f64, f64); 6] = [
    (0.0, 110_574.0),
    (15.0, 110_649.0),
    (30.0, 110_852.0),
    (45.0, 111_132.0),
    (60.0, 111_412.0),
    (75.0, 111_618.0),
];
const LON_TABLE: [(f64, f64); 6] = [
    (0.0, 111_320.0),
    (15.0, 107_550.0),
    (30.0, 96_486.0),
    (45.0, 78_847.0),
    (60.0, 55_800.0),
    (75.0, 28_902.0),
];

#[test]
fn test_lat_length_reference_table() {
    for (lat, expected) in LAT_TABLE {
        assert_near!(lat_length(f64::to_radians(lat)), expected, 1.0);
    }
}

#[test]
fn test_lon_length_reference_table() {
    for (lat, expected) in LON_TABLE {
        assert_near!(lon_length(f64::to_radians(lat)), expected, 1.0);
    }
}

#[test]
fn test_lat_length_mid_latitude() {
    assert_eq!(lat_length(46.8_f64.to_radians()).trunc(), 111_166.0);
}

#[test]
fn test_local_plane_scaling() {
    let pos = Position { time: 4.0, lat: 1.0, lon: 2.0, alt: 12.5, heading: 90.0 };
    let neu = to_local_plane(&pos, 0.0);
    assert_near!(neu.north, lat_length(0.0), 1e-9);
    assert_near!(neu.east, 2.0 * lon_length(0.0), 1e-9);
    assert_near!(neu.up, 12.5, 1e-9);
    assert_near!(neu.time, 4.0, 1e-9);
}

#[test]
fn test_latitude_band() {
    assert!(check_latitude(46.8).is_ok());
    assert!(check_latitude(-80.0).is_ok());
    assert_eq!(check_latitude(80.5), Err(PointingError::LatitudeOutOfRange(80.5)));
    assert!(check_latitude(f64::NAN).is_err());
}

#[test]
fn test_neu_arithmetic() {
    let a = NEUPosition::new(10.0, 20.0, 30.0);
    let b = NEUPosition::new(1.0, 2.0, 3.0);
    assert_eq!(a - b, NEUPosition::new(9.0, 18.0, 27.0));
    assert_eq!(a + b, NEUPosition::new(11.0, 22.0, 33.0));
}

fn point(north: f64, east: f64, up: f64) -> Result<Attitude, PointingError> {
    let base = NEUPosition::new(5_000.0, -3_000.0, 100.0);
    let rover = base + NEUPosition::new(north, east, up);
    bearing(&rover, &base, &NEUPosition::default())
}

#[test]
fn test_bearing_cardinal_directions() {
    let east = point(0.0, 100.0, 0.0).unwrap();
    assert_near!(east.pitch, 0.0, 1e-9);
    assert_near!(east.yaw, FRAC_PI_2, 1e-9);

    let west = point(0.0, -100.0, 0.0).unwrap();
    assert_near!(west.yaw, -FRAC_PI_2, 1e-9);

    let north = point(250.0, 0.0, 0.0).unwrap();
    assert_near!(north.yaw, 0.0, 1e-9);

    let south = point(-250.0, 0.0, 0.0).unwrap();
    assert_near!(south.yaw.abs(), PI, 1e-9);
}

#[test]
fn test_bearing_elevation() {
    let up = point(0.0, 1_000.0, 1_000.0).unwrap();
    assert_near!(up.pitch, FRAC_PI_4, 1e-9);
    assert_near!(up.yaw, FRAC_PI_2, 1e-9);

    let below = point(100.0, 0.0, -100.0).unwrap();
    assert_near!(below.pitch, -FRAC_PI_4, 1e-9);
}

#[test]
fn test_bearing_respects_base_offset() {
    let base = NEUPosition::new(0.0, 0.0, 0.0);
    let rover = NEUPosition::new(0.0, 100.0, 0.0);
    // Camera sits 100 m north of the base antenna, so the rover is due south-east.
    let offset = NEUPosition::new(100.0, 0.0, 0.0);
    let att = bearing(&rover, &base, &offset).unwrap();
    assert_near!(att.yaw, 3.0 * FRAC_PI_4, 1e-9);
}

#[test]
fn test_bearing_out_of_range() {
    assert!(matches!(point(10_001.0, 0.0, 0.0), Err(PointingError::OutOfRange { .. })));
    assert!(matches!(point(0.0, -10_001.0, 0.0), Err(PointingError::OutOfRange { .. })));
    assert!(point(9_999.0, 9_999.0, 0.0).is_ok());
}

#[test]
fn test_wrap_angle() {
    assert_near!(wrap_angle(3.5), 3.5 - TAU, 1e-12);
    assert_near!(wrap_angle(-3.5), TAU - 3.5, 1e-12);
    assert_near!(wrap_angle(PI), -PI, 1e-12);
    assert_near!(wrap_angle(-PI), -PI, 1e-12);
    for v in [-3.0, -1.0, 0.0, 1.0, 3.0] {
        assert_eq!(wrap_angle(v), v);
    }
}

#[test]
fn test_wrap_angle_random() {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let v: f64 = rng.random_range(-50.0..50.0);
        let w = wrap_angle(v);
        assert!((-PI..PI).contains(&w), "{v} wrapped to {w}");
        assert_near!((v - w) / TAU, ((v - w) / TAU).round(), 1e-9);
    }
}

#[test]
fn test_scale() {
    assert_near!(scale(0.5, 0.0, 1.0, 10.0, 20.0), 15.0, 1e-12);
    assert_near!(scale(-1.0, -1.0, 1.0, -FRAC_PI_2, 0.0), -FRAC_PI_2, 1e-12);
    assert_near!(scale(2.0, 0.0, 1.0, 0.0, 10.0), 20.0, 1e-12);
}
