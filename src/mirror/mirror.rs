use super::rate_limiter::RateLimiter;
use crate::param::{Leaf, Param, ParamError, ParamGroup, leaf_name};
use itertools::Itertools;
use std::sync::Arc;

/// Shortest interval between two messages on the same topic, seconds.
pub const PUBLISH_PERIOD: f64 = 0.2;
const SET_SUFFIX: &str = "/set";

pub struct Mirror {
    group: Arc<ParamGroup>,
    prefix: String,
    limiter: RateLimiter,
}

impl Mirror {
    pub fn new(device: &str, group: Arc<ParamGroup>) -> Self {
        let prefix = format!("{device}/{}", group.name()).to_ascii_lowercase();
        Self { group, prefix, limiter: RateLimiter::new() }
    }

    pub fn prefix(&self) -> &str { &self.prefix }

    /// Topic and payload for every leaf of `param` that is not rate limited.
    pub fn publish(&mut self, param: &Param) -> Vec<(String, String)> {
        let now = self.group.now();
        param
            .get()
            .leaves()
            .into_iter()
            .filter_map(|(field, leaf)| {
                let topic = format!("{}/{}", self.prefix, leaf_name(param.name(), field).replace('.', "/"));
                self.limiter.allow(&topic, PUBLISH_PERIOD, now).then(|| (topic, leaf.to_string()))
            })
            .collect()
    }

    /// Applies a remote write. Topics outside this group or without the `/set` suffix are
    /// ignored and return `Ok(false)`.
    ///
    /// # Errors
    /// Whatever [`ParamGroup::set_leaf`] rejects the write with.
    pub fn apply(&self, topic: &str, payload: &str) -> Result<bool, ParamError> {
        let topic = topic.to_ascii_lowercase();
        let Some(path) = topic
            .strip_suffix(SET_SUFFIX)
            .and_then(|t| t.strip_prefix(&self.prefix))
            .and_then(|t| t.strip_prefix('/'))
        else {
            return Ok(false);
        };
        let name = path.split('/').filter(|s| !s.is_empty()).join(".");
        let payload = payload.trim();
        let leaf = payload.parse().map_or_else(|_| Leaf::Text(payload.to_string()), Leaf::Number);
        self.group.set_leaf(&name, leaf)?;
        Ok(true)
    }
}
