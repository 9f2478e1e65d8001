//! Hardware adapter: bridges real peripherals to the port traits.
//!
//! Owns the ADC oneshot unit, the status LED and the task delay, and
//! exposes them through [`GpioPort`], [`AdcPort`], [`IndicatorPort`] and
//! [`DelayNs`], which together make it a [`Board`](crate::app::ports::Board).
//! This is the only module in the system that touches actual hardware.  On
//! non-espidf targets the underlying drivers use their simulation paths.

use embedded_hal::delay::DelayNs;

use crate::adapters::time::TaskDelay;
use crate::app::ports::{AdcAttenuation, AdcBitwidth, AdcPort, GpioPort, IndicatorPort, Rgb};
use crate::drivers::hw_init::{self, AdcOneshot};
use crate::drivers::status_led::StatusLed;
use crate::error::HardwareFault;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    adc: Option<AdcOneshot>,
    led: Option<StatusLed>,
    delay: TaskDelay,
}

impl HardwareAdapter {
    /// `led` is `None` for roles without a status LED.
    pub fn new(led: Option<StatusLed>) -> Self {
        Self {
            adc: None,
            led,
            delay: TaskDelay::new(),
        }
    }

    fn adc(&mut self) -> Result<&mut AdcOneshot, HardwareFault> {
        self.adc.as_mut().ok_or(HardwareFault::AdcUnit {
            code: hw_init::ERR_INVALID_STATE,
        })
    }

    fn led(&mut self) -> Result<&mut StatusLed, HardwareFault> {
        self.led.as_mut().ok_or(HardwareFault::Indicator {
            code: hw_init::ERR_INVALID_STATE,
        })
    }
}

// ── GpioPort implementation ───────────────────────────────────

impl GpioPort for HardwareAdapter {
    fn configure_output(&mut self, pin: i32) -> Result<(), HardwareFault> {
        hw_init::configure_output(pin)
    }

    fn configure_input(&mut self, pin: i32, pull_up: bool) -> Result<(), HardwareFault> {
        hw_init::configure_input(pin, pull_up)
    }

    fn read_level(&mut self, pin: i32) -> bool {
        hw_init::gpio_read(pin)
    }

    fn write_level(&mut self, pin: i32, high: bool) -> Result<(), HardwareFault> {
        hw_init::gpio_write(pin, high)
    }
}

// ── AdcPort implementation ────────────────────────────────────

impl AdcPort for HardwareAdapter {
    fn init_unit(&mut self) -> Result<(), HardwareFault> {
        if self.adc.is_none() {
            self.adc = Some(AdcOneshot::new()?);
        }
        Ok(())
    }

    fn config_channel(
        &mut self,
        channel: u32,
        bitwidth: AdcBitwidth,
        attenuation: AdcAttenuation,
    ) -> Result<(), HardwareFault> {
        self.adc()?.config_channel(channel, bitwidth, attenuation)
    }

    fn read(&mut self, channel: u32) -> Result<u16, HardwareFault> {
        self.adc()?.read(channel)
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl IndicatorPort for HardwareAdapter {
    fn set_pixel(&mut self, colour: Rgb) -> Result<(), HardwareFault> {
        self.led()?.set_pixel(colour);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), HardwareFault> {
        self.led()?.clear()
    }

    fn refresh(&mut self) -> Result<(), HardwareFault> {
        self.led()?.refresh()
    }
}

// ── Delay ─────────────────────────────────────────────────────

impl DelayNs for HardwareAdapter {
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
