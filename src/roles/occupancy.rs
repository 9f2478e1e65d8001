//! Occupancy / thermal AC controller task.
//!
//! Samples the motion sensor and the heat source, runs the
//! [`OccupancyController`], and applies any resulting command to the AC
//! relay and the status LED.

use log::info;

use crate::app::actuator::ActuatorDriver;
use crate::app::events::NodeEvent;
use crate::app::ports::{Board, EventSink};
use crate::config::{HeatSource, NodeConfig};
use crate::control::occupancy::{ControllerState, OccupancyController};
use crate::error::Error;
use crate::sensors::{AnalogSampler, DigitalSampler};

enum HeatSampler {
    Digital(DigitalSampler),
    Analog {
        sampler: AnalogSampler,
        threshold: f32,
    },
}

pub struct OccupancyThermalTask {
    motion: DigitalSampler,
    heat: HeatSampler,
    controller: OccupancyController,
    actuator: ActuatorDriver,
}

impl OccupancyThermalTask {
    pub fn new(config: &NodeConfig, motion_gpio: i32, heat: HeatSource, relay_gpio: i32) -> Self {
        let heat = match heat {
            HeatSource::Digital { gpio } => HeatSampler::Digital(DigitalSampler::new(gpio, false)),
            HeatSource::Analog(input) => HeatSampler::Analog {
                sampler: AnalogSampler::new(input, config.ema_alpha),
                threshold: config.overtemp_threshold,
            },
        };
        Self {
            motion: DigitalSampler::new(motion_gpio, false),
            heat,
            controller: OccupancyController::new(config.pulse_ms),
            actuator: ActuatorDriver::new(relay_gpio, true),
        }
    }

    pub fn setup(&mut self, hw: &mut impl Board) -> Result<(), Error> {
        self.actuator.configure(hw)?;
        self.motion.configure(hw)?;
        match &self.heat {
            HeatSampler::Digital(s) => s.configure(hw)?,
            HeatSampler::Analog { sampler, .. } => sampler.configure(hw)?,
        }
        Ok(())
    }

    pub fn tick(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) -> Result<(), Error> {
        // Sample + detect.
        let motion = self.motion.sample(hw);
        let hot = match &mut self.heat {
            HeatSampler::Digital(s) => {
                s.sample(hw);
                s.is_high()
            }
            HeatSampler::Analog { sampler, threshold } => sampler.sample(hw)?.filtered >= *threshold,
        };

        // Decide.
        let before = self.controller.state();
        let command = self.controller.step(motion, hot);
        let after = self.controller.state();

        if after.occupancy != before.occupancy {
            sink.emit(&NodeEvent::OccupancyChanged(after.occupancy));
        }
        if after.thermal != before.thermal {
            sink.emit(&NodeEvent::ThermalChanged(after.thermal));
        }

        // Actuate.
        if let Some(cmd) = command {
            info!("AC turned {}!", if cmd.relay { "on" } else { "off" });
            self.actuator.apply(hw, cmd)?;
            sink.emit(&NodeEvent::RelaySwitched { on: cmd.relay });
        }
        Ok(())
    }

    pub fn state(&self) -> ControllerState {
        self.controller.state()
    }

    pub fn relay_on(&self) -> bool {
        self.actuator.relay_on()
    }
}
