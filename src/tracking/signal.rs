/// Direction of an operator mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Advance,
    Retreat,
}

/// What a parameter change means to the tracker, resolved from the parameter's identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// New local plane fix.
    Neu,
    /// New rover attitude.
    Attitude,
    /// Rover position moved.
    Rover,
    Mark(Step),
    /// Whole seconds since the epoch.
    Seconds(i64),
    Tick,
    State,
    Link(i64),
    GpsFix(i64),
    /// Anything the tracker does not react to.
    Other,
}
