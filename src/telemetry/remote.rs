/// Centre pulse width of an RC channel in microseconds.
const RC_CENTRE: f64 = 1500.0;
/// Deflection from centre to full stick in microseconds.
const RC_THROW: f64 = 500.0;

/// Maps a raw RC pulse width (µs) to `[-1, 1]`, zero at centre stick.
pub fn servo_to_scale(us: u16) -> f64 { (f64::from(us) - RC_CENTRE) / RC_THROW }

/// Quantises a stick position into five detents, `-2` (full low) to `2` (full high).
pub fn scale_to_pos(v: f64) -> i64 {
    match v {
        v if v < -0.5 => -2,
        v if v < -0.2 => -1,
        v if v < 0.2 => 0,
        v if v < 0.5 => 1,
        _ => 2,
    }
}
