mod cycle;
mod hold;
mod locate;
mod orientate;
mod run;

use super::{signal::Signal, tracker_context::TrackerContext};
use strum_macros::{Display, EnumIter};

use cycle::CycleState;
use hold::HoldState;
use locate::LocateState;
use orientate::OrientateState;
use run::RunState;

/// Handler for one tracking state.
///
/// Handlers are called for every parameter change while their state is active and pick out the
/// signals they care about. They live for the whole process.
pub trait TrackState: Send {
    fn state(&self) -> TrackerState;
    fn update(&mut self, ctx: &TrackerContext, signal: Signal);
}

/// The tracking states in the order the operator steps through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum TrackerState {
    /// Waiting for the first fix to place the base.
    Locate,
    /// Aligning the pan axis by walking the rover away from the base.
    Orientate,
    Run,
    Hold,
    /// Sweeps the mount in a circle without telemetry.
    Cycle,
}

impl TrackerState {
    /// Position in the state table, as stored in the `state` parameter.
    #[allow(clippy::cast_possible_wrap)]
    pub fn index(self) -> i64 { self as i64 }

    pub fn handler(self) -> Box<dyn TrackState> {
        match self {
            TrackerState::Locate => Box::new(LocateState),
            TrackerState::Orientate => Box::new(OrientateState),
            TrackerState::Run => Box::new(RunState),
            TrackerState::Hold => Box::new(HoldState),
            TrackerState::Cycle => Box::new(CycleState::default()),
        }
    }
}
