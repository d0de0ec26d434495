use crate::{
    geodesy::{Attitude, NEUPosition},
    param::{Param, ParamGroup, Value},
};
use std::sync::Arc;

/// Handles to every parameter the tracker reads or writes, except the servos' own.
///
/// The group owns the parameters; this is only a typed index into it.
#[derive(Debug, Clone)]
pub struct RoverParams {
    pub build_label: Arc<Param>,
    /// Index of the active tracking state.
    pub state: Arc<Param>,
    /// Operator mark counter, stepped to move between states.
    pub mark: Arc<Param>,
    /// Quantised yaw stick position.
    pub command: Arc<Param>,
    /// 1 while heartbeats arrive, 2 once they went stale.
    pub link: Arc<Param>,
    pub tick: Arc<Param>,
    pub seconds: Arc<Param>,
    pub messages: Arc<Param>,
    pub heartbeats: Arc<Param>,
    pub gps: Arc<Param>,
    pub gps_fix: Arc<Param>,
    /// Ground speed in m/s.
    pub vel: Arc<Param>,
    /// Latest fix on the local plane.
    pub neu: Arc<Param>,
    pub pred: Arc<Param>,
    pub attitude: Arc<Param>,
    pub rover: Arc<Param>,
    pub base: Arc<Param>,
    pub base_offset: Arc<Param>,
    /// Latitude (degrees) every fix is flattened at, taken from the first usable fix.
    pub reference_lat: Arc<Param>,
    pub status: Arc<Param>,
    pub remote: Arc<Param>,
    /// Correction added to the computed bearing before it is sent to the servos.
    pub offset: Arc<Param>,
}

impl RoverParams {
    pub fn new(group: &ParamGroup) -> Self {
        Self {
            build_label: group.new_with("build_label", env!("CARGO_PKG_VERSION")),
            state: group.new_num("state"),
            mark: group.new_num("mark"),
            command: group.new_num("command"),
            link: group.new_num("link.status"),
            tick: group.new_num("tick"),
            seconds: group.new_num("seconds"),
            messages: group.new_num("rover.messages"),
            heartbeats: group.new_num("heartbeat"),
            gps: group.new_param("gps"),
            gps_fix: group.new_num("gps.fix"),
            vel: group.new_num("gps.vog"),
            neu: group.new_param("position"),
            pred: group.new_param("pred"),
            attitude: group.new_param("rover.attitude"),
            rover: group.new_param("rover.position"),
            base: group.new_param("base.position"),
            base_offset: group.new_with("base.offset", Value::Neu(NEUPosition::default())),
            reference_lat: group.new_param("base.latitude"),
            status: group.new_param("rover.status"),
            remote: group.new_param("remote"),
            offset: group.new_with("pantilt.offset", Value::Attitude(Attitude::default())),
        }
    }
}
