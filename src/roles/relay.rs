//! Standalone AC relay task.
//!
//! Follows the command line from the occupancy controller: HIGH switches
//! the relay on and lights the LED white, LOW switches both off.  The input
//! is given a short settle delay between sampling and acting.


use crate::app::actuator::ActuatorDriver;
use crate::app::events::NodeEvent;
use crate::app::ports::{Board, EventSink};
use crate::config::NodeConfig;
use crate::control::follower::LevelFollower;
use crate::error::Error;
use crate::sensors::DigitalSampler;

pub struct RelayTask {
    command: DigitalSampler,
    follower: LevelFollower,
    actuator: ActuatorDriver,
    settle_ms: u32,
}

impl RelayTask {
    pub fn new(config: &NodeConfig, command_gpio: i32, relay_gpio: i32) -> Self {
        Self {
            command: DigitalSampler::new(command_gpio, false),
            follower: LevelFollower::new(),
            actuator: ActuatorDriver::new(relay_gpio, true),
            settle_ms: config.settle_ms,
        }
    }

    pub fn setup(&mut self, hw: &mut impl Board) -> Result<(), Error> {
        self.command.configure(hw)?;
        self.actuator.configure(hw)?;
        Ok(())
    }

    pub fn tick(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) -> Result<(), Error> {
        self.command.sample(hw);
        hw.delay_ms(self.settle_ms);

        if let Some(cmd) = self.follower.step(self.command.signal()) {
            self.actuator.apply(hw, cmd)?;
            sink.emit(&NodeEvent::RelaySwitched { on: cmd.relay });
        }
        Ok(())
    }

    pub fn relay_on(&self) -> bool {
        self.actuator.relay_on()
    }
}
