use super::{Message, RoverParams, SystemStatus, Telemetry, scale_to_pos, servo_to_scale};
use crate::{
    assert_near,
    geodesy::{PointingError, lat_length},
    param::{ManualClock, ParamGroup, Value},
};
use std::sync::Arc;

fn telemetry() -> (Arc<ManualClock>, ParamGroup, Telemetry) {
    let clock = Arc::new(ManualClock::new(100.0));
    let group = ParamGroup::new("pipe", clock.clone());
    let telemetry = Telemetry::new(RoverParams::new(&group));
    (clock, group, telemetry)
}

#[test]
fn heartbeat_marks_link_online() {
    let (_clock, _group, telemetry) = telemetry();
    telemetry.on_heartbeat();
    telemetry.on_heartbeat();
    let p = telemetry.params();
    assert_eq!(p.link.get_int(), 1);
    assert_eq!(p.heartbeats.get_int(), 2);
    assert!(p.heartbeats.is_fresh());
    assert_eq!(p.messages.get_int(), 2);
}

#[test]
fn heartbeats_from_many_threads_are_all_counted() {
    let (_clock, _group, telemetry) = telemetry();
    let producers: Vec<_> = (0..8)
        .map(|_| {
            let telemetry = telemetry.clone();
            std::thread::spawn(move || {
                for _ in 0..2000 {
                    telemetry.on_heartbeat();
                }
            })
        })
        .collect();
    for producer in producers {
        producer.join().unwrap();
    }
    let p = telemetry.params();
    assert_eq!(p.heartbeats.get_int(), 16_000);
    assert_eq!(p.messages.get_int(), 16_000);
}

#[test]
fn position_fix_fills_gps_and_local_plane() {
    let (_clock, _group, telemetry) = telemetry();
    telemetry.on_position_fix(45.0, 8.0, 500.0, 90.0, 12.0).unwrap();
    let p = telemetry.params();
    let Value::Position(gps) = p.gps.get() else { panic!("gps is {:?}", p.gps.get()) };
    assert_eq!(gps.lat, 45.0);
    assert_eq!(gps.time, 12.0);
    let Value::Neu(neu) = p.neu.get() else { panic!("position is {:?}", p.neu.get()) };
    assert_near!(neu.north, 45.0 * lat_length(45f64.to_radians()), 1e-6);
    assert_eq!(neu.up, 500.0);
    assert_eq!(p.messages.get_int(), 1);
}

#[test]
fn fixes_share_the_first_reference_latitude() {
    let (_clock, _group, telemetry) = telemetry();
    let p = telemetry.params();
    telemetry.on_position_fix(46.8, 8.2, 0.0, 0.0, 1.0).unwrap();
    let Value::Neu(base) = p.neu.get() else { panic!() };
    telemetry.on_position_fix(46.8009, 8.2, 0.0, 0.0, 2.0).unwrap();
    let Value::Neu(rover) = p.neu.get() else { panic!() };

    assert_eq!(p.reference_lat.get_f64(), 46.8);
    assert_eq!(rover.east, base.east);
    assert_near!(rover.north - base.north, 0.0009 * lat_length(46.8f64.to_radians()), 1e-6);
}

#[test]
fn polar_fix_keeps_gps_but_not_local_plane() {
    let (_clock, _group, telemetry) = telemetry();
    let result = telemetry.on_position_fix(85.0, 8.0, 0.0, 0.0, 1.0);
    assert_eq!(result, Err(PointingError::LatitudeOutOfRange(85.0)));
    let p = telemetry.params();
    assert!(matches!(p.gps.get(), Value::Position(_)));
    assert!(p.neu.get().is_absent());
}

#[test]
fn predictors_extrapolate_from_last_tick() {
    let (_clock, _group, telemetry) = telemetry();
    let p = telemetry.params();
    p.tick.set_f64(10.0).unwrap();
    telemetry.on_position_fix(45.0, 8.0, 100.0, 0.0, 1.0).unwrap();
    p.tick.set_f64(11.0).unwrap();
    telemetry.on_position_fix(45.0001, 8.0, 102.0, 0.0, 2.0).unwrap();

    let pred = telemetry.predict(11.5);
    assert_near!(pred.lat, 45.00015, 1e-9);
    assert_near!(pred.alt, 103.0, 1e-9);
    // clamped to two seconds past the last fix
    assert_near!(telemetry.predict(100.0).alt, 106.0, 1e-9);
}

#[test]
fn fix_type_is_written_on_change_only() {
    let (_clock, group, telemetry) = telemetry();
    let mut rx = group.listen(16);
    telemetry.on_fix_type(3);
    telemetry.on_fix_type(3);
    let fix = telemetry.params().gps_fix.id();
    let mut writes = 0;
    while let Some(id) = rx.try_recv() {
        writes += usize::from(id == fix);
    }
    assert_eq!(writes, 1);
}

#[test]
fn remote_yaw_low_detent_steps_mark() {
    let (_clock, _group, telemetry) = telemetry();
    let p = telemetry.params();
    telemetry.on_remote_control(&[1500, 1500, 1500, 1000]);
    assert_eq!(p.mark.get_int(), 1);
    assert_eq!(p.command.get_int(), -2);
    // holding the stick does not count again
    telemetry.on_remote_control(&[1500, 1500, 1500, 1010]);
    assert_eq!(p.mark.get_int(), 1);
    telemetry.on_remote_control(&[1500, 1500, 1500, 1500]);
    telemetry.on_remote_control(&[1500, 1500, 1500, 1000]);
    assert_eq!(p.mark.get_int(), 2);

    let Value::Attitude(remote) = p.remote.get() else { panic!("remote is {:?}", p.remote.get()) };
    assert_near!(remote.yaw, -1.0, 1e-9);
    assert_near!(remote.roll, 0.0, 1e-9);
}

#[test]
fn short_channel_list_reads_as_centred() {
    let (_clock, _group, telemetry) = telemetry();
    telemetry.on_remote_control(&[2000]);
    let Value::Attitude(remote) = telemetry.params().remote.get() else { panic!() };
    assert_near!(remote.roll, 1.0, 1e-9);
    assert_near!(remote.yaw, 0.0, 1e-9);
}

#[test]
fn stick_detents() {
    assert_near!(servo_to_scale(1500), 0.0, 1e-12);
    assert_near!(servo_to_scale(1250), -0.5, 1e-12);
    assert_eq!(scale_to_pos(-0.6), -2);
    assert_eq!(scale_to_pos(-0.5), -1);
    assert_eq!(scale_to_pos(-0.2), 0);
    assert_eq!(scale_to_pos(0.19), 0);
    assert_eq!(scale_to_pos(0.2), 1);
    assert_eq!(scale_to_pos(0.5), 2);
}

#[test]
fn parsed_messages_reach_their_params() {
    let (_clock, _group, telemetry) = telemetry();
    for line in [
        "Heartbeat",
        "SystemStatus((load: 0.25, voltage: 12.1, current: 3.5, remaining: 80.0))",
        "GroundSpeed(1.5)",
        "Attitude(roll: 0.1, pitch: 0.0, yaw: -0.2)",
    ] {
        telemetry.handle(ron::from_str::<Message>(line).unwrap());
    }
    let p = telemetry.params();
    assert_eq!(
        p.status.get(),
        Value::Status(SystemStatus { load: 0.25, voltage: 12.1, current: 3.5, remaining: 80.0 })
    );
    assert_eq!(p.vel.get_f64(), 1.5);
    assert_eq!(p.messages.get_int(), 4);
}
