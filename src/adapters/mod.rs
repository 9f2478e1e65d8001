//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements                         | Connects to            |
//! |------------|------------------------------------|------------------------|
//! | `hardware` | GpioPort, AdcPort, IndicatorPort   | ESP32 GPIO, ADC1, RMT  |
//! |            | DelayNs                            | FreeRTOS delay         |
//! | `log_sink` | EventSink                          | Serial log output      |
//! | `time`     | DelayNs                            | FreeRTOS / ROM delay   |

pub mod hardware;
pub mod log_sink;
pub mod time;
