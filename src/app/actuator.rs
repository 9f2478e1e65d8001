//! Actuator driver: relay pin + status LED.
//!
//! Applies [`ActuatorCommand`]s produced by the decision rules.  The relay
//! is a plain GPIO write; the LED is driven through the indicator port.
//!
//! `Pulse` is the one intentionally blocking call in the control loop: the
//! colour is shown, the task sleeps for the pulse length, then the LED is
//! cleared.  It only happens on a relay transition, and it delays this
//! task's next tick by exactly that long.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::control::{ActuatorCommand, IndicatorCommand};
use crate::error::HardwareFault;

use super::ports::{GpioPort, IndicatorPort, Rgb};

/// Colour for a steady "AC on" indication (white).
pub const COLOUR_STEADY: Rgb = (255, 255, 255);
/// Colour flashed on a relay transition (cyan).
pub const COLOUR_PULSE: Rgb = (0, 255, 255);

pub struct ActuatorDriver {
    relay_pin: i32,
    has_indicator: bool,
    relay_on: bool,
}

impl ActuatorDriver {
    pub fn new(relay_pin: i32, has_indicator: bool) -> Self {
        Self {
            relay_pin,
            has_indicator,
            relay_on: false,
        }
    }

    /// Configure the relay pin, drive it low, and blank the LED.
    pub fn configure(
        &mut self,
        hw: &mut (impl GpioPort + IndicatorPort),
    ) -> Result<(), HardwareFault> {
        hw.configure_output(self.relay_pin)?;
        hw.write_level(self.relay_pin, false)?;
        self.relay_on = false;
        if self.has_indicator {
            hw.clear()?;
        }
        Ok(())
    }

    pub fn set_relay(&mut self, gpio: &mut impl GpioPort, on: bool) -> Result<(), HardwareFault> {
        gpio.write_level(self.relay_pin, on)?;
        self.relay_on = on;
        Ok(())
    }

    pub fn set_indicator(
        &mut self,
        hw: &mut (impl IndicatorPort + DelayNs),
        cmd: IndicatorCommand,
    ) -> Result<(), HardwareFault> {
        if !self.has_indicator {
            return Ok(());
        }
        match cmd {
            IndicatorCommand::Off => hw.clear(),
            IndicatorCommand::SteadyOn => {
                hw.set_pixel(COLOUR_STEADY)?;
                hw.refresh()
            }
            IndicatorCommand::Pulse { ms } => {
                hw.set_pixel(COLOUR_PULSE)?;
                hw.refresh()?;
                hw.delay_ms(ms);
                hw.clear()
            }
        }
    }

    /// Relay first, then the indicator.
    pub fn apply(
        &mut self,
        hw: &mut (impl GpioPort + IndicatorPort + DelayNs),
        cmd: ActuatorCommand,
    ) -> Result<(), HardwareFault> {
        self.set_relay(hw, cmd.relay)?;
        info!(
            "actuator: relay GPIO{} -> {}",
            self.relay_pin,
            if cmd.relay { "ON" } else { "OFF" }
        );
        self.set_indicator(hw, cmd.indicator)
    }

    pub fn relay_on(&self) -> bool {
        self.relay_on
    }
}
