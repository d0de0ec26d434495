use crate::geodesy::{Attitude, NEUPosition, Position};
use crate::servo::ServoConfig;
use crate::telemetry::SystemStatus;
use std::fmt::{Display, Formatter};
use strum_macros::EnumDiscriminants;

/// The value held by a [`Param`](super::Param).
///
/// The set of kinds is closed: adding a structured kind means adding a variant here and a
/// [`Record`] impl for its payload.
#[derive(Debug, Default, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(Kind), derive(strum_macros::Display))]
pub enum Value {
    #[default]
    Absent,
    Number(f64),
    Text(String),
    Position(Position),
    Neu(NEUPosition),
    Attitude(Attitude),
    Servo(ServoConfig),
    Status(SystemStatus),
}

/// A scalar at the bottom of a value, as exported to metrics and the remote mirror.
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    Number(f64),
    Text(String),
}

impl Display for Leaf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Leaf::Number(n) => write!(f, "{n}"),
            Leaf::Text(t) => f.write_str(t),
        }
    }
}

impl From<Leaf> for Value {
    fn from(leaf: Leaf) -> Self {
        match leaf {
            Leaf::Number(n) => Value::Number(n),
            Leaf::Text(t) => Value::Text(t),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self { Value::Number(v) }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self { Value::Text(v.to_string()) }
}

/// A fixed-layout struct of numeric fields that can be enumerated and patched by name.
pub trait Record: Copy {
    /// Field names in declaration order, lower case.
    const FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<f64>;

    /// Returns a copy with `name` replaced, or `None` if there is no such field.
    fn with_field(self, name: &str, v: f64) -> Option<Self>;
}

impl Record for Position {
    const FIELDS: &'static [&'static str] = &["time", "lat", "lon", "alt", "heading"];

    fn field(&self, name: &str) -> Option<f64> {
        match name {
            "time" => Some(self.time),
            "lat" => Some(self.lat),
            "lon" => Some(self.lon),
            "alt" => Some(self.alt),
            "heading" => Some(self.heading),
            _ => None,
        }
    }

    fn with_field(mut self, name: &str, v: f64) -> Option<Self> {
        match name {
            "time" => self.time = v,
            "lat" => self.lat = v,
            "lon" => self.lon = v,
            "alt" => self.alt = v,
            "heading" => self.heading = v,
            _ => return None,
        }
        Some(self)
    }
}

impl Record for NEUPosition {
    const FIELDS: &'static [&'static str] = &["time", "north", "east", "up"];

    fn field(&self, name: &str) -> Option<f64> {
        match name {
            "time" => Some(self.time),
            "north" => Some(self.north),
            "east" => Some(self.east),
            "up" => Some(self.up),
            _ => None,
        }
    }

    fn with_field(mut self, name: &str, v: f64) -> Option<Self> {
        match name {
            "time" => self.time = v,
            "north" => self.north = v,
            "east" => self.east = v,
            "up" => self.up = v,
            _ => return None,
        }
        Some(self)
    }
}

impl Record for Attitude {
    const FIELDS: &'static [&'static str] = &["roll", "pitch", "yaw"];

    fn field(&self, name: &str) -> Option<f64> {
        match name {
            "roll" => Some(self.roll),
            "pitch" => Some(self.pitch),
            "yaw" => Some(self.yaw),
            _ => None,
        }
    }

    fn with_field(mut self, name: &str, v: f64) -> Option<Self> {
        match name {
            "roll" => self.roll = v,
            "pitch" => self.pitch = v,
            "yaw" => self.yaw = v,
            _ => return None,
        }
        Some(self)
    }
}

fn record_leaves<R: Record>(r: &R) -> Vec<(Option<&'static str>, Leaf)> {
    R::FIELDS.iter().filter_map(|f| r.field(f).map(|v| (Some(*f), Leaf::Number(v)))).collect()
}

impl Value {
    pub fn kind(&self) -> Kind { Kind::from(self) }

    pub fn is_absent(&self) -> bool { matches!(self, Value::Absent) }

    /// Answers whether `next` may replace `self`.
    ///
    /// Anything may replace an absent value and numbers may always replace numbers. Otherwise
    /// the kinds must match exactly.
    pub fn accepts(&self, next: &Value) -> bool {
        match (self, next) {
            (Value::Absent, _) | (Value::Number(_), Value::Number(_)) => true,
            (a, b) => a.kind() == b.kind(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Enumerates the scalar leaves of this value.
    ///
    /// Scalars yield one leaf with no field name, records one leaf per field, absent values
    /// nothing.
    pub fn leaves(&self) -> Vec<(Option<&'static str>, Leaf)> {
        match self {
            Value::Absent => Vec::new(),
            Value::Number(n) => vec![(None, Leaf::Number(*n))],
            Value::Text(t) => vec![(None, Leaf::Text(t.clone()))],
            Value::Position(p) => record_leaves(p),
            Value::Neu(p) => record_leaves(p),
            Value::Attitude(a) => record_leaves(a),
            Value::Servo(s) => record_leaves(s),
            Value::Status(s) => record_leaves(s),
        }
    }

    /// Returns a copy with one record field replaced.
    ///
    /// `None` if this value is not a record or has no such field.
    pub fn with_field(&self, name: &str, v: f64) -> Option<Value> {
        match self {
            Value::Position(p) => p.with_field(name, v).map(Value::Position),
            Value::Neu(p) => p.with_field(name, v).map(Value::Neu),
            Value::Attitude(a) => a.with_field(name, v).map(Value::Attitude),
            Value::Servo(s) => s.with_field(name, v).map(Value::Servo),
            Value::Status(s) => s.with_field(name, v).map(Value::Status),
            Value::Absent | Value::Number(_) | Value::Text(_) => None,
        }
    }
}
