//! Standalone motion detector task: the output line mirrors PIR edges.

use log::info;

use crate::app::actuator::ActuatorDriver;
use crate::app::events::NodeEvent;
use crate::app::ports::{Board, EventSink};
use crate::control::follower::EdgeFollower;
use crate::error::Error;
use crate::sensors::DigitalSampler;

pub struct MotionTask {
    motion: DigitalSampler,
    follower: EdgeFollower,
    actuator: ActuatorDriver,
}

impl MotionTask {
    pub fn new(motion_gpio: i32, relay_gpio: i32) -> Self {
        Self {
            // Open-collector PIR modules need the internal pull-up.
            motion: DigitalSampler::new(motion_gpio, true),
            follower: EdgeFollower::new(),
            actuator: ActuatorDriver::new(relay_gpio, false),
        }
    }

    pub fn setup(&mut self, hw: &mut impl Board) -> Result<(), Error> {
        self.actuator.configure(hw)?;
        self.motion.configure(hw)?;
        Ok(())
    }

    pub fn tick(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) -> Result<(), Error> {
        let edge = self.motion.sample(hw);
        if let Some(active) = self.follower.step(edge) {
            info!("Motion {}", if active { "activated" } else { "inactivated" });
            self.actuator.set_relay(hw, active)?;
            sink.emit(&NodeEvent::MotionChanged { active });
        }
        Ok(())
    }

    pub fn relay_on(&self) -> bool {
        self.actuator.relay_on()
    }
}
