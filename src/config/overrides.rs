use super::config_error::ConfigError;
use crate::{
    log,
    param::{Leaf, ParamError, ParamGroup},
    warn,
};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A single override, either a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OverrideValue {
    Number(f64),
    Text(String),
}

impl From<OverrideValue> for Leaf {
    fn from(v: OverrideValue) -> Self {
        match v {
            OverrideValue::Number(n) => Leaf::Number(n),
            OverrideValue::Text(t) => Leaf::Text(t),
        }
    }
}

/// Leaf name to value map, e.g. `{ "pantilt.pan.pin": 0, "pantilt.pan.tau": 0.3 }`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Overrides(BTreeMap<String, OverrideValue>);

impl Overrides {
    /// Parses the RON text of an override file.
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed input.
    pub fn parse(text: &str) -> Result<Self, ConfigError> { Ok(ron::from_str(text)?) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Writes every override into `group` and returns how many were applied.
    ///
    /// Keys naming no leaf are skipped. Values of the wrong kind are rejected and logged.
    pub fn apply(&self, group: &ParamGroup) -> usize {
        let mut applied = 0;
        for (name, value) in &self.0 {
            match group.set_leaf(name, value.clone().into()) {
                Ok(()) => applied += 1,
                Err(ParamError::UnknownLeaf(_)) => log!("Ignoring unknown config key {name}"),
                Err(e) => warn!("Config key {name} rejected: {e}"),
            }
        }
        applied
    }
}
