//! Input samplers.
//!
//! Each sampler owns the history of exactly one logical input and is
//! called exactly once per tick by its role task.  Samplers reach hardware
//! only through the [`GpioPort`](crate::app::ports::GpioPort) and
//! [`AdcPort`](crate::app::ports::AdcPort) traits.

pub mod analog;
pub mod digital;

pub use analog::{AnalogReading, AnalogSampler};
pub use digital::DigitalSampler;
