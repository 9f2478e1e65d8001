//! Device roles.
//!
//! ```text
//! ┌──────────────────┬──────────────────────────┬────────────────────────┐
//! │ Role             │ Inputs                   │ Outputs                │
//! ├──────────────────┼──────────────────────────┼────────────────────────┤
//! │ OccupancyThermal │ motion GPIO, heat GPIO/ADC│ AC relay, status LED  │
//! │ ThermalGuard     │ temperature ADC          │ overtemp line, probe   │
//! │ MotionOnly       │ motion GPIO (pull-up)    │ motion line            │
//! │ RelayOnly        │ AC command GPIO          │ AC relay, status LED   │
//! └──────────────────┴──────────────────────────┴────────────────────────┘
//! ```
//!
//! Every role is one task struct with `setup` (pins configured once) and
//! `tick` (sample → detect → decide → actuate).  [`Node`] dispatches to the
//! role compiled into the binary; all roles share the samplers, edge
//! detector and actuator driver.

pub mod motion;
pub mod occupancy;
pub mod relay;
pub mod thermal_guard;

use crate::app::ports::{Board, EventSink};
use crate::config::{DeviceRole, NodeConfig, Wiring};
use crate::error::Error;

pub use motion::MotionTask;
pub use occupancy::OccupancyThermalTask;
pub use relay::RelayTask;
pub use thermal_guard::ThermalGuardTask;

/// The role task running on this node.
pub enum Node {
    OccupancyThermal(OccupancyThermalTask),
    ThermalGuard(ThermalGuardTask),
    MotionOnly(MotionTask),
    RelayOnly(RelayTask),
}

impl Node {
    pub fn new(config: &NodeConfig) -> Self {
        match config.wiring {
            Wiring::OccupancyThermal {
                motion_gpio,
                heat,
                relay_gpio,
            } => Self::OccupancyThermal(OccupancyThermalTask::new(
                config,
                motion_gpio,
                heat,
                relay_gpio,
            )),
            Wiring::ThermalGuard {
                temperature,
                relay_gpio,
            } => Self::ThermalGuard(ThermalGuardTask::new(config, temperature, relay_gpio)),
            Wiring::MotionOnly {
                motion_gpio,
                relay_gpio,
            } => Self::MotionOnly(MotionTask::new(motion_gpio, relay_gpio)),
            Wiring::RelayOnly {
                command_gpio,
                relay_gpio,
            } => Self::RelayOnly(RelayTask::new(config, command_gpio, relay_gpio)),
        }
    }

    pub fn role(&self) -> DeviceRole {
        match self {
            Self::OccupancyThermal(_) => DeviceRole::OccupancyThermal,
            Self::ThermalGuard(_) => DeviceRole::ThermalGuard,
            Self::MotionOnly(_) => DeviceRole::MotionOnly,
            Self::RelayOnly(_) => DeviceRole::RelayOnly,
        }
    }

    /// Configure every pin/channel the role uses.  Called once.
    pub fn setup(&mut self, hw: &mut impl Board) -> Result<(), Error> {
        match self {
            Self::OccupancyThermal(t) => t.setup(hw),
            Self::ThermalGuard(t) => t.setup(hw),
            Self::MotionOnly(t) => t.setup(hw),
            Self::RelayOnly(t) => t.setup(hw),
        }
    }

    /// One control cycle, excluding the inter-tick sleep.
    pub fn tick(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) -> Result<(), Error> {
        match self {
            Self::OccupancyThermal(t) => t.tick(hw, sink),
            Self::ThermalGuard(t) => t.tick(hw, sink),
            Self::MotionOnly(t) => t.tick(hw, sink),
            Self::RelayOnly(t) => t.tick(hw, sink),
        }
    }

    /// Relay level as last written by the actuator driver.
    pub fn relay_on(&self) -> bool {
        match self {
            Self::OccupancyThermal(t) => t.relay_on(),
            Self::ThermalGuard(t) => t.relay_on(),
            Self::MotionOnly(t) => t.relay_on(),
            Self::RelayOnly(t) => t.relay_on(),
        }
    }
}
