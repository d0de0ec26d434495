use super::{
    clock::Clock,
    error::ParamError,
    param::{Param, ParamId},
    value::{Kind, Leaf, Value},
};
use crate::warn;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

/// Default number of pending notifications a listener may buffer before the oldest are dropped.
pub const DEFAULT_LISTEN_CAPACITY: usize = 64;

/// Shared between a group and its parameters: the clock and the listener queues.
pub(super) struct Hub {
    clock: Arc<dyn Clock>,
    listeners: RwLock<Vec<broadcast::Sender<ParamId>>>,
}

impl Hub {
    pub(super) fn now(&self) -> f64 { self.clock.now() }

    /// Pushes `id` to every listener. Never blocks: full queues overwrite their oldest entry.
    pub(super) fn notify(&self, id: ParamId) {
        let mut closed = false;
        {
            let listeners = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
            for tx in listeners.iter() {
                closed |= tx.send(id).is_err();
            }
        }
        if closed {
            self.listeners
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|tx| tx.receiver_count() > 0);
        }
    }
}

/// Receiving end of [`ParamGroup::listen`].
pub struct ParamReceiver {
    rx: broadcast::Receiver<ParamId>,
    dropped: u64,
}

impl ParamReceiver {
    /// Waits for the next change. `None` once the group is gone.
    pub async fn recv(&mut self) -> Option<ParamId> {
        loop {
            match self.rx.recv().await {
                Ok(id) => return Some(id),
                Err(RecvError::Lagged(n)) => self.lagged(n),
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Returns the next pending change without waiting.
    pub fn try_recv(&mut self) -> Option<ParamId> {
        loop {
            match self.rx.try_recv() {
                Ok(id) => return Some(id),
                Err(TryRecvError::Lagged(n)) => self.lagged(n),
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    /// Total number of notifications lost to overflow.
    pub fn dropped(&self) -> u64 { self.dropped }

    fn lagged(&mut self, n: u64) {
        self.dropped += n;
        warn!("Parameter listener fell behind, dropped {n} oldest notifications");
    }
}

/// An append-only, named collection of parameters sharing one clock and one set of listeners.
pub struct ParamGroup {
    name: String,
    hub: Arc<Hub>,
    params: RwLock<Vec<Arc<Param>>>,
}

impl ParamGroup {
    pub fn new(name: &str, clock: Arc<dyn Clock>) -> Self {
        Self {
            name: name.to_string(),
            hub: Arc::new(Hub { clock, listeners: RwLock::new(Vec::new()) }),
            params: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn now(&self) -> f64 { self.hub.now() }

    fn push(&self, name: &str, value: Value) -> Arc<Param> {
        let mut params = self.params.write().unwrap_or_else(PoisonError::into_inner);
        let param = Arc::new(Param::new(ParamId(params.len()), name, value, Arc::clone(&self.hub)));
        params.push(Arc::clone(&param));
        param
    }

    /// Creates an absent, stale parameter.
    pub fn new_param(&self, name: &str) -> Arc<Param> { self.push(name, Value::Absent) }

    /// Creates a numeric parameter holding zero that is stale until first written.
    pub fn new_num(&self, name: &str) -> Arc<Param> { self.push(name, Value::Number(0.0)) }

    /// Creates a parameter that is already set, and therefore fresh, with `value`.
    pub fn new_with(&self, name: &str, value: impl Into<Value>) -> Arc<Param> {
        let param = self.push(name, Value::Absent);
        param.preset(value.into());
        param
    }

    /// Registers a new listener with room for `capacity` pending changes.
    pub fn listen(&self, capacity: usize) -> ParamReceiver {
        let (tx, rx) = broadcast::channel(capacity.max(1));
        self.hub.listeners.write().unwrap_or_else(PoisonError::into_inner).push(tx);
        ParamReceiver { rx, dropped: 0 }
    }

    pub fn get(&self, id: ParamId) -> Option<Arc<Param>> {
        self.params.read().unwrap_or_else(PoisonError::into_inner).get(id.0).cloned()
    }

    pub fn find(&self, name: &str) -> Option<Arc<Param>> {
        self.params().into_iter().find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Snapshot of all parameters in creation order.
    pub fn params(&self) -> Vec<Arc<Param>> {
        self.params.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Calls `visitor` with the dotted, lower-case name of every leaf relative to the group.
    pub fn walk_leaves(&self, mut visitor: impl FnMut(&Arc<Param>, &str, Leaf)) {
        for param in self.params() {
            for (field, leaf) in param.get().leaves() {
                visitor(&param, &leaf_name(param.name(), field), leaf);
            }
        }
    }

    /// Writes one leaf addressed by its dotted name, as produced by [`ParamGroup::walk_leaves`].
    ///
    /// A name matching a whole parameter replaces its value. A name matching a parameter plus a
    /// record field replaces just that field.
    ///
    /// # Errors
    /// [`ParamError::UnknownLeaf`] if nothing answers to `name`, [`ParamError::TypeMismatch`] if
    /// the leaf's kind does not fit.
    pub fn set_leaf(&self, name: &str, leaf: Leaf) -> Result<(), ParamError> {
        let name = name.to_ascii_lowercase();
        let params = self.params();
        if let Some(param) = params.iter().find(|p| p.name().eq_ignore_ascii_case(&name)) {
            return param.set(Value::from(leaf));
        }
        for param in &params {
            let prefix = param.name().to_ascii_lowercase();
            let Some(field) = name.strip_prefix(&prefix).and_then(|f| f.strip_prefix('.')) else {
                continue;
            };
            let current = param.get();
            let next = match &leaf {
                Leaf::Number(v) => current.with_field(field, *v),
                Leaf::Text(_) => {
                    if current.with_field(field, 0.0).is_some() {
                        return Err(ParamError::TypeMismatch {
                            name,
                            from: Kind::Number,
                            to: Kind::Text,
                        });
                    }
                    None
                }
            };
            if let Some(next) = next {
                return param.set(next);
            }
        }
        Err(ParamError::UnknownLeaf(name))
    }
}

/// Dotted, lower-case name of a leaf relative to its group.
pub(crate) fn leaf_name(param: &str, field: Option<&str>) -> String {
    match field {
        Some(field) => format!("{param}.{field}").to_ascii_lowercase(),
        None => param.to_ascii_lowercase(),
    }
}
