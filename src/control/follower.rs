//! Single-input decision rules for the standalone roles.
//!
//! - [`EdgeFollower`]: output follows input *edges* (thermal guard, motion
//!   node).  The output is never written until the first real transition.
//! - [`LevelFollower`]: output follows the input *level* (relay node), with
//!   writes only on the first sample and on changes.

use crate::signal::{BooleanSignal, Edge};

use super::{ActuatorCommand, IndicatorCommand};

#[derive(Debug, Default)]
pub struct EdgeFollower {
    output: Option<bool>,
}

impl EdgeFollower {
    pub const fn new() -> Self {
        Self { output: None }
    }

    /// Returns the new output level on a rising/falling edge.
    pub fn step(&mut self, edge: Edge) -> Option<bool> {
        let level = match edge {
            Edge::Rising => true,
            Edge::Falling => false,
            Edge::None => return None,
        };
        self.output = Some(level);
        Some(level)
    }

    /// Last level driven, `None` before the first edge.
    pub fn output(&self) -> Option<bool> {
        self.output
    }
}

#[derive(Debug, Default)]
pub struct LevelFollower;

impl LevelFollower {
    pub const fn new() -> Self {
        Self
    }

    /// Relay and indicator mirror the command input.
    pub fn step(&mut self, input: &BooleanSignal) -> Option<ActuatorCommand> {
        if !input.changed() {
            return None;
        }
        let on = input.is_high();
        Some(ActuatorCommand {
            relay: on,
            indicator: if on {
                IndicatorCommand::SteadyOn
            } else {
                IndicatorCommand::Off
            },
        })
    }
}
