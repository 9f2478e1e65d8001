//! Smoothed analog input (NTC temperature divider).
//!
//! Each tick takes a burst of `oversample` oneshot conversions and feeds
//! the **last** one through an [`EmaFilter`]; the burst only lengthens the
//! sampling window, it does not average.  An optional probe pin is held
//! HIGH for the duration of the burst so the conversion time can be
//! measured on a scope.
//!
//! A failed conversion is returned as a [`HardwareFault`]; the filter is
//! left untouched so no stale value is ever reported as fresh.

use crate::app::ports::{AdcAttenuation, AdcBitwidth, AdcPort, GpioPort};
use crate::config::AnalogInput;
use crate::error::HardwareFault;
use crate::signal::ema::EmaFilter;

/// One tick's analog result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogReading {
    pub raw: u16,
    pub filtered: f32,
}

pub struct AnalogSampler {
    input: AnalogInput,
    filter: EmaFilter,
    last: Option<AnalogReading>,
}

impl AnalogSampler {
    pub fn new(input: AnalogInput, alpha: f32) -> Self {
        Self {
            input,
            filter: EmaFilter::new(alpha),
            last: None,
        }
    }

    /// Bring up the ADC unit and channel, and the probe pin if any.
    pub fn configure(&self, hw: &mut (impl AdcPort + GpioPort)) -> Result<(), HardwareFault> {
        hw.init_unit()?;
        hw.config_channel(
            self.input.channel,
            AdcBitwidth::Default,
            AdcAttenuation::Db12,
        )?;
        if let Some(probe) = self.input.probe_gpio {
            hw.configure_output(probe)?;
            hw.write_level(probe, false)?;
        }
        Ok(())
    }

    /// Take this tick's conversion burst and update the filter.
    pub fn sample(
        &mut self,
        hw: &mut (impl AdcPort + GpioPort),
    ) -> Result<AnalogReading, HardwareFault> {
        if let Some(probe) = self.input.probe_gpio {
            hw.write_level(probe, true)?;
        }

        let burst = self.burst(hw);

        // Probe goes low even when the burst faulted.
        if let Some(probe) = self.input.probe_gpio {
            hw.write_level(probe, false)?;
        }
        let raw = burst?;

        let reading = AnalogReading {
            raw,
            filtered: self.filter.update(raw),
        };
        self.last = Some(reading);
        Ok(reading)
    }

    fn burst(&self, hw: &mut impl AdcPort) -> Result<u16, HardwareFault> {
        let mut raw = 0;
        for _ in 0..self.input.oversample.max(1) {
            raw = hw.read(self.input.channel)?;
        }
        Ok(raw)
    }

    /// Most recent reading, `None` before the first successful sample.
    pub fn last(&self) -> Option<AnalogReading> {
        self.last
    }
}
