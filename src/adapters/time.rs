//! Task delay adapter.
//!
//! Implements [`DelayNs`] for the control task.
//!
//! - **`target_os = "espidf"`**: millisecond delays yield to the FreeRTOS
//!   scheduler (`vTaskDelay`); sub-millisecond delays busy-wait on the ROM
//!   `ets_delay_us`.
//! - **`not(target_os = "espidf")`**: `std::thread::sleep`, for host-side
//!   simulation.

use embedded_hal::delay::DelayNs;

#[derive(Debug, Default, Clone, Copy)]
pub struct TaskDelay;

impl TaskDelay {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "espidf")]
impl DelayNs for TaskDelay {
    fn delay_ns(&mut self, ns: u32) {
        use esp_idf_hal::delay::{Ets, FreeRtos};
        if ns >= 1_000_000 {
            FreeRtos::delay_ms(ns / 1_000_000);
        } else {
            Ets::delay_us(ns.div_ceil(1_000));
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        esp_idf_hal::delay::FreeRtos::delay_ms(ms);
    }
}

#[cfg(not(target_os = "espidf"))]
impl DelayNs for TaskDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
