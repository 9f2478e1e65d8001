//! Outbound node events.
//!
//! The [`NodeService`](super::service::NodeService) and the role tasks emit
//! these through the [`EventSink`](super::ports::EventSink) port.  The only
//! production consumer is the serial log.

use crate::config::DeviceRole;
use crate::control::occupancy::{Occupancy, Thermal};
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeEvent {
    /// The role task finished setup and entered its loop.
    Started(DeviceRole),

    /// The occupancy heuristic flipped.
    OccupancyChanged(Occupancy),

    /// The controller's heat classification changed.
    ThermalChanged(Thermal),

    /// Thermal guard: filtered temperature crossed the threshold.
    OvertempChanged { active: bool, filtered: f32 },

    /// Motion node: motion input changed level.
    MotionChanged { active: bool },

    /// The relay output was switched.
    RelaySwitched { on: bool },

    /// A fatal fault stopped the control loop.
    Fault(Error),
}
