//! Digital input sampler (PIR motion, heat comparator, relay command).
//!
//! No debouncing beyond the tick itself: at 100 ms per sample, contact
//! bounce has long settled before the next read.

use crate::app::ports::GpioPort;
use crate::error::HardwareFault;
use crate::signal::{BooleanSignal, Edge};

pub struct DigitalSampler {
    pin: i32,
    pull_up: bool,
    signal: BooleanSignal,
}

impl DigitalSampler {
    pub fn new(pin: i32, pull_up: bool) -> Self {
        Self {
            pin,
            pull_up,
            signal: BooleanSignal::new(),
        }
    }

    /// Configure the pin as an input.  Called once at task start.
    pub fn configure(&self, gpio: &mut impl GpioPort) -> Result<(), HardwareFault> {
        gpio.configure_input(self.pin, self.pull_up)
    }

    /// Read the pin, shift the level into the signal history, and return
    /// the resulting edge.
    pub fn sample(&mut self, gpio: &mut impl GpioPort) -> Edge {
        let level = gpio.read_level(self.pin);
        self.signal.update(level)
    }

    pub fn signal(&self) -> &BooleanSignal {
        &self.signal
    }

    pub fn is_high(&self) -> bool {
        self.signal.is_high()
    }
}
