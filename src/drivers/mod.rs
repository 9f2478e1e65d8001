//! Peripheral drivers: raw GPIO/ADC access and the WS2812 status LED.

pub mod hw_init;
pub mod status_led;
