//! Unified error types for the HomeNode firmware.
//!
//! Every fallible hardware call funnels into [`HardwareFault`], and every
//! control-loop operation returns the top-level [`Error`].  Both are `Copy`
//! so they can be logged, emitted as events and returned without allocation.
//!
//! All faults are fatal: the owning task logs the fault and halts.  There is
//! no retry path because a silently retried relay write would hide a wiring
//! fault.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A peripheral call failed at runtime.
    Hardware(HardwareFault),
    /// Task setup could not complete (peripherals unavailable, etc.).
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hardware(e) => write!(f, "hardware: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Hardware faults
// ---------------------------------------------------------------------------

/// A failed peripheral operation.  `code` is the raw `esp_err_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareFault {
    /// `gpio_config` rejected the pin configuration.
    PinConfig { pin: i32, code: i32 },
    /// `gpio_set_level` failed on an output pin.
    PinWrite { pin: i32, code: i32 },
    /// The ADC oneshot unit could not be created.
    AdcUnit { code: i32 },
    /// An ADC channel could not be configured.
    AdcChannel { channel: u32, code: i32 },
    /// A oneshot conversion failed.
    AdcRead { channel: u32, code: i32 },
    /// The status-indicator transmit failed.
    Indicator { code: i32 },
}

impl fmt::Display for HardwareFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinConfig { pin, code } => write!(f, "GPIO{pin} config failed (rc={code})"),
            Self::PinWrite { pin, code } => write!(f, "GPIO{pin} write failed (rc={code})"),
            Self::AdcUnit { code } => write!(f, "ADC unit init failed (rc={code})"),
            Self::AdcChannel { channel, code } => {
                write!(f, "ADC channel {channel} config failed (rc={code})")
            }
            Self::AdcRead { channel, code } => {
                write!(f, "ADC channel {channel} read failed (rc={code})")
            }
            Self::Indicator { code } => write!(f, "status LED transmit failed (rc={code})"),
        }
    }
}

impl std::error::Error for HardwareFault {}

impl From<HardwareFault> for Error {
    fn from(e: HardwareFault) -> Self {
        Self::Hardware(e)
    }
}
