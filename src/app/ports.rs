//! Port traits: the hexagonal boundary between control logic and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ role task / NodeService (domain)
//! ```
//!
//! The control core never touches registers.  Pin configuration, GPIO,
//! ADC conversion and the status LED are reached only through these narrow
//! traits, so the whole loop runs on the host against a mock board.
//! Delays use [`embedded_hal::delay::DelayNs`] directly.

use embedded_hal::delay::DelayNs;

use crate::error::HardwareFault;

/// Colour as (R, G, B), each 0–255.
pub type Rgb = (u8, u8, u8);

// ───────────────────────────────────────────────────────────────
// GPIO port (pin configuration + digital I/O)
// ───────────────────────────────────────────────────────────────

pub trait GpioPort {
    /// Configure `pin` as a push-pull output.  Called once at task start.
    fn configure_output(&mut self, pin: i32) -> Result<(), HardwareFault>;

    /// Configure `pin` as an input, optionally with the internal pull-up.
    fn configure_input(&mut self, pin: i32, pull_up: bool) -> Result<(), HardwareFault>;

    /// Non-blocking level read.  Infallible: a floating pin reads whatever
    /// the hardware defaults to.
    fn read_level(&mut self, pin: i32) -> bool;

    /// Drive an output pin.
    fn write_level(&mut self, pin: i32, high: bool) -> Result<(), HardwareFault>;
}

// ───────────────────────────────────────────────────────────────
// ADC port (oneshot conversion)
// ───────────────────────────────────────────────────────────────

/// Conversion width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcBitwidth {
    /// Widest width the chip supports (12 bits on ESP32-C3).
    Default,
}

/// Input attenuation (selects the measurable voltage range).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcAttenuation {
    /// ~0–3.1 V full scale.
    Db12,
}

pub trait AdcPort {
    /// Create the ADC unit.  Idempotent: a second call is a no-op.
    fn init_unit(&mut self) -> Result<(), HardwareFault>;

    fn config_channel(
        &mut self,
        channel: u32,
        bitwidth: AdcBitwidth,
        attenuation: AdcAttenuation,
    ) -> Result<(), HardwareFault>;

    /// One blocking conversion (a few microseconds).
    fn read(&mut self, channel: u32) -> Result<u16, HardwareFault>;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (addressable RGB status LED)
// ───────────────────────────────────────────────────────────────

pub trait IndicatorPort {
    /// Stage a colour for the pixel(s); shown on the next [`refresh`].
    ///
    /// [`refresh`]: IndicatorPort::refresh
    fn set_pixel(&mut self, colour: Rgb) -> Result<(), HardwareFault>;

    /// Turn every pixel off immediately.
    fn clear(&mut self) -> Result<(), HardwareFault>;

    /// Push the staged colour out to the LED.
    fn refresh(&mut self) -> Result<(), HardwareFault>;
}

// ───────────────────────────────────────────────────────────────
// Event sink (domain → logging)
// ───────────────────────────────────────────────────────────────

/// The control loop emits structured [`NodeEvent`](super::events::NodeEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::NodeEvent);
}

// ───────────────────────────────────────────────────────────────
// Board: everything a role task needs
// ───────────────────────────────────────────────────────────────

/// All hardware capabilities of a node in one bound.
pub trait Board: GpioPort + AdcPort + IndicatorPort + DelayNs {}

impl<T: GpioPort + AdcPort + IndicatorPort + DelayNs> Board for T {}
