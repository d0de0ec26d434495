use super::{LinPred, Lowpass, MAX_EXTRAPOLATION};
use crate::assert_near;

#[test]
fn test_lin_pred_first_sample_holds() {
    let mut l = LinPred::new();
    assert!(!l.is_primed());
    l.feed(5.0, 1.0, 1.0);
    assert!(l.is_primed());
    assert_near!(l.predict(1.0), 5.0, 1e-3);
    assert_near!(l.predict(2.0), 5.0, 1e-3);
}

#[test]
fn test_lin_pred_extrapolates() {
    let mut l = LinPred::new();
    l.feed(5.0, 1.0, 1.0);
    l.feed(5.5, 2.0, 2.0);
    assert_near!(l.velocity(), 0.5, 1e-9);
    assert_near!(l.predict(2.0), 5.5, 1e-3);
    assert_near!(l.predict(2.5), 5.75, 1e-3);
    assert_near!(l.predict(3.0), 6.0, 1e-3);

    // Negative velocity.
    l.feed(4.0, 3.0, 3.0);
    assert_near!(l.predict(3.0), 4.0, 1e-3);
    assert_near!(l.predict(4.0), 2.5, 1e-3);
}

#[test]
fn test_lin_pred_clamps_window() {
    let mut l = LinPred::new();
    l.feed(0.0, 10.0, 100.0);
    l.feed(1.0, 11.0, 101.0);
    let limit = 1.0 + MAX_EXTRAPOLATION;
    assert_near!(l.predict(11.0 + MAX_EXTRAPOLATION), limit, 1e-9);
    assert_near!(l.predict(60.0), limit, 1e-9);
    // Queries before the arrival time do not extrapolate backwards.
    assert_near!(l.predict(5.0), 1.0, 1e-9);
}

#[test]
fn test_lin_pred_uses_sensor_time_for_velocity() {
    let mut l = LinPred::new();
    // Two samples one sensor-second apart that arrive in the same local instant.
    l.feed(10.0, 50.0, 1.0);
    l.feed(12.0, 50.0, 2.0);
    assert_near!(l.velocity(), 2.0, 1e-9);
    assert_near!(l.predict(50.5), 13.0, 1e-9);
}

#[test]
fn test_lin_pred_out_of_order_resets_velocity() {
    let mut l = LinPred::new();
    l.feed(1.0, 1.0, 5.0);
    l.feed(2.0, 2.0, 6.0);
    l.feed(3.0, 3.0, 6.0);
    assert_near!(l.velocity(), 0.0, 1e-12);
    l.feed(4.0, 4.0, 5.5);
    assert_near!(l.velocity(), 0.0, 1e-12);
    assert_near!(l.predict(5.0), 4.0, 1e-12);
}

#[test]
fn test_lowpass_converges() {
    let mut l = Lowpass::new(0.3);
    let expected = [0.9, 1.6, 2.0, 2.3, 2.5];
    let mut last = 0.0;
    for e in expected {
        let out = l.step(3.0);
        assert_near!(out, e, 0.1);
        assert!(out > last && out < 3.0);
        last = out;
    }
}

#[test]
fn test_lowpass_extremes() {
    let mut l = Lowpass::default();
    assert_near!(l.step_with(7.0, 1.0), 7.0, 1e-12);
    assert_near!(l.step_with(-3.0, 0.0), 7.0, 1e-12);
    // Out of range tau is clamped.
    assert_near!(l.step_with(-3.0, 4.0), -3.0, 1e-12);
    assert_near!(l.value(), -3.0, 1e-12);
}
