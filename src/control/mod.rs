//! Decision rules: pure state machines, zero I/O.
//!
//! Each rule consumes this tick's edges/levels and returns an
//! [`ActuatorCommand`] only when the output must change.  Applying the
//! command is the actuator driver's job.

pub mod follower;
pub mod occupancy;

/// What the status LED should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorCommand {
    /// All pixels off.
    Off,
    /// Fixed colour until told otherwise.
    SteadyOn,
    /// Show a colour for `ms` milliseconds (blocking), then clear.
    Pulse { ms: u32 },
}

/// Output of one decision: relay level plus indicator action.
/// Produced fresh each tick, applied immediately, never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorCommand {
    pub relay: bool,
    pub indicator: IndicatorCommand,
}
