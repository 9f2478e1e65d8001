//! Standalone thermal guard task.
//!
//! Oversampled, EMA-smoothed NTC reading; the output line goes HIGH when
//! the filtered value rises to the threshold and LOW when it drops below.

use log::info;

use crate::app::actuator::ActuatorDriver;
use crate::app::events::NodeEvent;
use crate::app::ports::{Board, EventSink};
use crate::config::{AnalogInput, NodeConfig};
use crate::control::follower::EdgeFollower;
use crate::error::Error;
use crate::sensors::AnalogSampler;
use crate::signal::BooleanSignal;

pub struct ThermalGuardTask {
    sampler: AnalogSampler,
    threshold: f32,
    overtemp: BooleanSignal,
    follower: EdgeFollower,
    actuator: ActuatorDriver,
}

impl ThermalGuardTask {
    pub fn new(config: &NodeConfig, temperature: AnalogInput, relay_gpio: i32) -> Self {
        Self {
            sampler: AnalogSampler::new(temperature, config.ema_alpha),
            threshold: config.overtemp_threshold,
            overtemp: BooleanSignal::new(),
            follower: EdgeFollower::new(),
            actuator: ActuatorDriver::new(relay_gpio, false),
        }
    }

    pub fn setup(&mut self, hw: &mut impl Board) -> Result<(), Error> {
        self.actuator.configure(hw)?;
        self.sampler.configure(hw)?;
        Ok(())
    }

    pub fn tick(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) -> Result<(), Error> {
        let reading = self.sampler.sample(hw)?;
        let edge = self.overtemp.update(reading.filtered >= self.threshold);

        if let Some(active) = self.follower.step(edge) {
            info!(
                "Overtemp {} (filtered={:.0})",
                if active { "active" } else { "inactive" },
                reading.filtered
            );
            self.actuator.set_relay(hw, active)?;
            sink.emit(&NodeEvent::OvertempChanged {
                active,
                filtered: reading.filtered,
            });
        }
        Ok(())
    }

    pub fn filtered(&self) -> Option<f32> {
        self.sampler.last().map(|r| r.filtered)
    }

    pub fn relay_on(&self) -> bool {
        self.actuator.relay_on()
    }
}
