use super::{error::ParamError, param_group::Hub, value::Value};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Age in seconds after which a value that has not been finalised counts as stale.
pub const STALE_AFTER: f64 = 3.0;

/// Identity of a parameter inside its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub(super) usize);

impl ParamId {
    pub fn index(self) -> usize { self.0 }
}

#[derive(Debug, Default)]
struct Slot {
    value: Value,
    updated: Option<f64>,
    is_final: bool,
}

/// A named, typed value cell with a freshness timestamp.
pub struct Param {
    id: ParamId,
    name: String,
    slot: Mutex<Slot>,
    hub: Arc<Hub>,
}

impl Param {
    pub(super) fn new(id: ParamId, name: &str, value: Value, hub: Arc<Hub>) -> Self {
        Self { id, name: name.to_string(), slot: Mutex::new(Slot { value, ..Slot::default() }), hub }
    }

    fn slot(&self) -> MutexGuard<'_, Slot> { self.slot.lock().unwrap_or_else(PoisonError::into_inner) }

    pub fn id(&self) -> ParamId { self.id }

    pub fn name(&self) -> &str { &self.name }

    /// Stores `value`, stamps it, clears the final flag and notifies every listener.
    ///
    /// The lock on this parameter is held until all listeners have been notified, so
    /// concurrent writers to the same parameter are observed in a single order.
    ///
    /// # Errors
    /// [`ParamError::TypeMismatch`] if `value` has a different kind than the stored value.
    pub fn set(&self, value: impl Into<Value>) -> Result<(), ParamError> {
        let mut slot = self.slot();
        self.store(&mut slot, value.into())
    }

    /// Write path shared by every mutator. The caller holds the slot lock, which stays held
    /// through the notification.
    fn store(&self, slot: &mut Slot, value: Value) -> Result<(), ParamError> {
        if !slot.value.accepts(&value) {
            return Err(ParamError::TypeMismatch {
                name: self.name.clone(),
                from: slot.value.kind(),
                to: value.kind(),
            });
        }
        slot.value = value;
        slot.updated = Some(self.hub.now());
        slot.is_final = false;
        self.hub.notify(self.id);
        Ok(())
    }

    /// Stores `value` at construction time. Listeners are not notified.
    pub(super) fn preset(&self, value: Value) {
        let mut slot = self.slot();
        slot.value = value;
        slot.updated = Some(self.hub.now());
    }

    pub fn get(&self) -> Value { self.slot().value.clone() }

    /// Numeric value, or `0` if absent or not a number.
    pub fn get_f64(&self) -> f64 { self.slot().value.as_f64().unwrap_or(0.0) }

    /// Numeric value truncated towards zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn get_int(&self) -> i64 { self.get_f64() as i64 }

    pub fn set_f64(&self, v: f64) -> Result<(), ParamError> { self.set(Value::Number(v)) }

    #[allow(clippy::cast_precision_loss)]
    pub fn set_int(&self, v: i64) -> Result<(), ParamError> { self.set_f64(v as f64) }

    /// Writes `v` only if it differs from the current number. Returns whether it wrote.
    pub fn update_f64(&self, v: f64) -> Result<bool, ParamError> {
        let mut slot = self.slot();
        if slot.value.as_f64() == Some(v) {
            return Ok(false);
        }
        self.store(&mut slot, Value::Number(v)).map(|()| true)
    }

    /// Writes `v` only if it differs from the current integer value. Returns whether it wrote.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn update_int(&self, v: i64) -> Result<bool, ParamError> {
        let mut slot = self.slot();
        if slot.value.as_f64().is_some_and(|n| n as i64 == v) {
            return Ok(false);
        }
        self.store(&mut slot, Value::Number(v as f64)).map(|()| true)
    }

    pub fn increment(&self) -> Result<(), ParamError> { self.step(1) }

    pub fn decrement(&self) -> Result<(), ParamError> { self.step(-1) }

    /// Adds `delta` to the integer value, read and write under one lock.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn step(&self, delta: i64) -> Result<(), ParamError> {
        let mut slot = self.slot();
        let n = slot.value.as_f64().unwrap_or(0.0) as i64;
        self.store(&mut slot, Value::Number((n + delta) as f64))
    }

    /// `true` if finalised or written less than [`STALE_AFTER`] seconds ago.
    pub fn is_fresh(&self) -> bool {
        let slot = self.slot();
        if slot.is_final {
            return true;
        }
        slot.updated.is_some_and(|t| self.hub.now() - t < STALE_AFTER)
    }

    /// Marks the current value as permanently fresh until the next write.
    pub fn finalize(&self) { self.slot().is_final = true; }

    pub fn is_final(&self) -> bool { self.slot().is_final }

    /// Time of the last write, if any.
    pub fn updated(&self) -> Option<f64> { self.slot().updated }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Param").field("id", &self.id).field("name", &self.name).finish_non_exhaustive()
    }
}

impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool { std::ptr::eq(self, other) }
}
