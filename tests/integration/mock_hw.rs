//! Mock board for integration tests.
//!
//! Records every configuration, write, conversion, LED and delay call so
//! tests can assert on the full command history without touching real
//! GPIO/ADC/RMT registers.  Input levels and ADC values are injected per
//! pin/channel; failures can be injected per pin or after a number of ADC
//! conversions.

use std::collections::HashMap;

use embedded_hal::delay::DelayNs;
use homenode::app::events::NodeEvent;
use homenode::app::ports::{
    AdcAttenuation, AdcBitwidth, AdcPort, EventSink, GpioPort, IndicatorPort, Rgb,
};
use homenode::error::HardwareFault;

// ── Board call record ─────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum BoardCall {
    ConfigureOutput(i32),
    ConfigureInput { pin: i32, pull_up: bool },
    Write { pin: i32, high: bool },
    AdcInit,
    AdcConfig {
        channel: u32,
        bitwidth: AdcBitwidth,
        attenuation: AdcAttenuation,
    },
    AdcRead(u32),
    SetPixel(Rgb),
    Clear,
    Refresh,
    DelayMs(u32),
    DelayNs(u32),
}

// ── MockBoard ─────────────────────────────────────────────────

#[derive(Default)]
pub struct MockBoard {
    pub calls: Vec<BoardCall>,
    inputs: HashMap<i32, bool>,
    adc: HashMap<u32, u16>,
    adc_reads: usize,
    /// Writes to this pin fail with this code.
    pub fail_write: Option<(i32, i32)>,
    /// Conversions fail with `code` once `after` reads have succeeded.
    pub fail_adc_after: Option<(usize, i32)>,
}

#[allow(dead_code)]
impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, pin: i32, high: bool) {
        self.inputs.insert(pin, high);
    }

    pub fn set_adc(&mut self, channel: u32, raw: u16) {
        self.adc.insert(channel, raw);
    }

    /// Forget the history (e.g. after setup).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Every level written to `pin`, oldest first.
    pub fn writes_to(&self, pin: i32) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                BoardCall::Write { pin: p, high } if *p == pin => Some(*high),
                _ => None,
            })
            .collect()
    }

    /// Last level written to `pin`.
    pub fn level(&self, pin: i32) -> Option<bool> {
        self.writes_to(pin).last().copied()
    }

    pub fn adc_reads(&self) -> usize {
        self.adc_reads
    }

    pub fn count(&self, call: &BoardCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl GpioPort for MockBoard {
    fn configure_output(&mut self, pin: i32) -> Result<(), HardwareFault> {
        self.calls.push(BoardCall::ConfigureOutput(pin));
        Ok(())
    }

    fn configure_input(&mut self, pin: i32, pull_up: bool) -> Result<(), HardwareFault> {
        self.calls.push(BoardCall::ConfigureInput { pin, pull_up });
        Ok(())
    }

    fn read_level(&mut self, pin: i32) -> bool {
        self.inputs.get(&pin).copied().unwrap_or(false)
    }

    fn write_level(&mut self, pin: i32, high: bool) -> Result<(), HardwareFault> {
        if let Some((p, code)) = self.fail_write {
            if p == pin {
                return Err(HardwareFault::PinWrite { pin, code });
            }
        }
        self.calls.push(BoardCall::Write { pin, high });
        Ok(())
    }
}

impl AdcPort for MockBoard {
    fn init_unit(&mut self) -> Result<(), HardwareFault> {
        self.calls.push(BoardCall::AdcInit);
        Ok(())
    }

    fn config_channel(
        &mut self,
        channel: u32,
        bitwidth: AdcBitwidth,
        attenuation: AdcAttenuation,
    ) -> Result<(), HardwareFault> {
        self.calls.push(BoardCall::AdcConfig {
            channel,
            bitwidth,
            attenuation,
        });
        Ok(())
    }

    fn read(&mut self, channel: u32) -> Result<u16, HardwareFault> {
        if let Some((after, code)) = self.fail_adc_after {
            if self.adc_reads >= after {
                return Err(HardwareFault::AdcRead { channel, code });
            }
        }
        self.adc_reads += 1;
        self.calls.push(BoardCall::AdcRead(channel));
        Ok(self.adc.get(&channel).copied().unwrap_or(0))
    }
}

impl IndicatorPort for MockBoard {
    fn set_pixel(&mut self, colour: Rgb) -> Result<(), HardwareFault> {
        self.calls.push(BoardCall::SetPixel(colour));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), HardwareFault> {
        self.calls.push(BoardCall::Clear);
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), HardwareFault> {
        self.calls.push(BoardCall::Refresh);
        Ok(())
    }
}

impl DelayNs for MockBoard {
    fn delay_ns(&mut self, ns: u32) {
        self.calls.push(BoardCall::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(BoardCall::DelayMs(ms));
    }
}

// ── Recording event sink ──────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<NodeEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<NodeEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &NodeEvent) {
        self.events.push(*event);
    }
}
