//! GPIO / peripheral pin assignments for the HomeNode boards (ESP32-C3).
//!
//! Single source of truth. Every role references this module rather than
//! hard-coding pin numbers.  Each device role has its own board wiring, so
//! the assignments are grouped per role.

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// On-board WS2812 addressable LED data line (driven by RMT channel 0).
pub const STATUS_LED_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// Occupancy / thermal AC controller
// ---------------------------------------------------------------------------

pub mod occupancy {
    /// Digital comparator output of the temperature board. HIGH = hot.
    pub const HEAT_GPIO: i32 = 0;
    /// PIR motion sensor output. HIGH = motion.
    pub const MOTION_GPIO: i32 = 1;
    /// AC relay command output (to the relay node or relay coil driver).
    pub const RELAY_GPIO: i32 = 2;
    /// ADC1 channel used when the `analog-heat` feature is enabled.
    pub const HEAT_ADC_CHANNEL: u32 = 1;
}

// ---------------------------------------------------------------------------
// Standalone thermal guard
// ---------------------------------------------------------------------------

pub mod thermal_guard {
    /// Overtemperature output. HIGH = over threshold.
    pub const RELAY_GPIO: i32 = 0;
    /// NTC divider on ADC1 channel 1 (GPIO1 on ESP32-C3).
    pub const TEMP_ADC_CHANNEL: u32 = 1;
    /// Scope probe: HIGH for the duration of each ADC conversion burst.
    pub const ADC_PROBE_GPIO: i32 = 3;
}

// ---------------------------------------------------------------------------
// Standalone motion detector
// ---------------------------------------------------------------------------

pub mod motion {
    /// Motion output. HIGH while motion is present.
    pub const RELAY_GPIO: i32 = 0;
    /// PIR motion sensor output (internal pull-up enabled).
    pub const MOTION_GPIO: i32 = 1;
}

// ---------------------------------------------------------------------------
// Standalone AC relay
// ---------------------------------------------------------------------------

pub mod relay {
    /// Command input from the occupancy controller. HIGH = AC on.
    pub const COMMAND_GPIO: i32 = 0;
    /// AC relay coil driver.
    pub const RELAY_GPIO: i32 = 2;
}
