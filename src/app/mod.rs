//! Application core.
//!
//! The port traits in [`ports`] are the only way the control code reaches
//! hardware.  [`actuator`] turns abstract commands into relay and LED
//! writes, [`service`] runs the periodic loop for the configured role, and
//! [`events`] are the diagnostics it emits along the way.

pub mod actuator;
pub mod events;
pub mod ports;
pub mod service;
