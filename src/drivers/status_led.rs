//! WS2812 status LED driver.
//!
//! A single addressable RGB pixel on [`STATUS_LED_GPIO`](crate::pins::STATUS_LED_GPIO),
//! clocked out by one RMT TX channel.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: encodes each frame as 24 RMT symbols (GRB, MSB first) and
//! transmits it blocking.
//! On host/test: tracks the staged and displayed colours in-memory only.

use crate::app::ports::Rgb;

const OFF: Rgb = (0, 0, 0);

/// 24-bit GRB word as sent on the wire.
pub fn grb_word((r, g, b): Rgb) -> u32 {
    (u32::from(g) << 16) | (u32::from(r) << 8) | u32::from(b)
}

// ── ESP-IDF ───────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
mod imp {
    use core::time::Duration;

    use esp_idf_hal::gpio::OutputPin;
    use esp_idf_hal::peripheral::Peripheral;
    use esp_idf_hal::rmt::config::TransmitConfig;
    use esp_idf_hal::rmt::{FixedLengthSignal, PinState, Pulse, RmtChannel, TxRmtDriver};
    use esp_idf_hal::sys::EspError;

    use super::{grb_word, OFF};
    use crate::app::ports::Rgb;
    use crate::error::HardwareFault;

    // WS2812 bit timings.
    const T0H_NS: u64 = 350;
    const T0L_NS: u64 = 800;
    const T1H_NS: u64 = 700;
    const T1L_NS: u64 = 600;

    fn fault(e: EspError) -> HardwareFault {
        HardwareFault::Indicator { code: e.code() }
    }

    pub struct StatusLed {
        tx: TxRmtDriver<'static>,
        staged: Rgb,
        shown: Rgb,
    }

    impl StatusLed {
        pub fn new<C: RmtChannel>(
            channel: impl Peripheral<P = C> + 'static,
            pin: impl Peripheral<P = impl OutputPin> + 'static,
        ) -> Result<Self, HardwareFault> {
            let config = TransmitConfig::new().clock_divider(1);
            let tx = TxRmtDriver::new(channel, pin, &config).map_err(fault)?;
            Ok(Self {
                tx,
                staged: OFF,
                shown: OFF,
            })
        }

        pub fn set_pixel(&mut self, colour: Rgb) {
            self.staged = colour;
        }

        pub fn refresh(&mut self) -> Result<(), HardwareFault> {
            self.transmit(self.staged)?;
            self.shown = self.staged;
            Ok(())
        }

        pub fn clear(&mut self) -> Result<(), HardwareFault> {
            self.staged = OFF;
            self.refresh()
        }

        pub fn shown(&self) -> Rgb {
            self.shown
        }

        fn transmit(&mut self, colour: Rgb) -> Result<(), HardwareFault> {
            let ticks_hz = self.tx.counter_clock().map_err(fault)?;
            let pulse = |state, ns| {
                Pulse::new_with_duration(ticks_hz, state, &Duration::from_nanos(ns)).map_err(fault)
            };
            let zero = (pulse(PinState::High, T0H_NS)?, pulse(PinState::Low, T0L_NS)?);
            let one = (pulse(PinState::High, T1H_NS)?, pulse(PinState::Low, T1L_NS)?);

            let word = grb_word(colour);
            let mut signal = FixedLengthSignal::<24>::new();
            for i in 0..24 {
                let bit = word & (1 << (23 - i)) != 0;
                signal.set(i, if bit { &one } else { &zero }).map_err(fault)?;
            }
            self.tx.start_blocking(&signal).map_err(fault)
        }
    }
}

// ── Host simulation ───────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
mod imp {
    use super::OFF;
    use crate::app::ports::Rgb;
    use crate::error::HardwareFault;

    #[derive(Debug, Default)]
    pub struct StatusLed {
        staged: Rgb,
        shown: Rgb,
        frames: u32,
    }

    impl StatusLed {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_pixel(&mut self, colour: Rgb) {
            self.staged = colour;
        }

        pub fn refresh(&mut self) -> Result<(), HardwareFault> {
            self.shown = self.staged;
            self.frames += 1;
            Ok(())
        }

        pub fn clear(&mut self) -> Result<(), HardwareFault> {
            self.staged = OFF;
            self.refresh()
        }

        pub fn shown(&self) -> Rgb {
            self.shown
        }

        /// Frames "transmitted" so far.
        pub fn frames(&self) -> u32 {
            self.frames
        }
    }
}

pub use imp::StatusLed;
