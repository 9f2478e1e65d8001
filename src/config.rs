//! Compile-time node configuration.
//!
//! Every threshold and timing parameter is a constant fixed at build time;
//! nothing here is tunable at runtime.  The device role is chosen with a
//! cargo feature (`role-thermal-guard`, `role-motion`, `role-relay`; none =
//! occupancy/thermal controller) and [`NodeConfig::active`] assembles the
//! parameters and pin wiring for it.

use core::fmt;

use serde::Serialize;

use crate::pins;

// --- Timing ---
/// Control loop period for every role (milliseconds).
pub const TICK_PERIOD_MS: u32 = 100;
/// Length of the indicator pulse shown on a relay transition (milliseconds).
pub const INDICATOR_PULSE_MS: u32 = 500;
/// Relay node: wait between sampling the command input and acting on it.
pub const RELAY_SETTLE_MS: u32 = 50;

// --- Analog filtering ---
/// EMA smoothing factor: weight of the newest raw sample.
pub const EMA_ALPHA: f32 = 0.2;
/// Filtered ADC value at or above which the reading counts as hot.
pub const OVERTEMP_THRESHOLD_RAW: f32 = 2048.0;
/// Raw conversions taken per tick by the thermal guard (last one wins).
pub const THERMAL_GUARD_OVERSAMPLE: u16 = 100;

/// The four firmware personalities a board can be built as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceRole {
    /// Motion + heat in, AC relay + status LED out.
    OccupancyThermal,
    /// Smoothed analog temperature in, overtemperature line out.
    ThermalGuard,
    /// Motion in, motion line out.
    MotionOnly,
    /// AC command in, relay + status LED out.
    RelayOnly,
}

impl DeviceRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::OccupancyThermal => "occupancy-thermal",
            Self::ThermalGuard => "thermal-guard",
            Self::MotionOnly => "motion",
            Self::RelayOnly => "relay",
        }
    }

    /// Whether the role drives the RGB status LED.
    pub const fn has_indicator(self) -> bool {
        matches!(self, Self::OccupancyThermal | Self::RelayOnly)
    }
}

impl fmt::Display for DeviceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role compiled into this binary.
pub const ACTIVE_ROLE: DeviceRole = if cfg!(feature = "role-thermal-guard") {
    DeviceRole::ThermalGuard
} else if cfg!(feature = "role-motion") {
    DeviceRole::MotionOnly
} else if cfg!(feature = "role-relay") {
    DeviceRole::RelayOnly
} else {
    DeviceRole::OccupancyThermal
};

/// An ADC input and how it is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalogInput {
    pub channel: u32,
    /// Conversions per tick; only the last one feeds the filter.
    pub oversample: u16,
    /// Optional output held HIGH for the duration of the conversion burst.
    pub probe_gpio: Option<i32>,
}

/// Where the occupancy controller gets its heat signal from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeatSource {
    /// Comparator output on a GPIO. HIGH = hot.
    Digital { gpio: i32 },
    /// Smoothed ADC reading compared against [`OVERTEMP_THRESHOLD_RAW`].
    Analog(AnalogInput),
}

/// Per-role pin wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Wiring {
    OccupancyThermal {
        motion_gpio: i32,
        heat: HeatSource,
        relay_gpio: i32,
    },
    ThermalGuard {
        temperature: AnalogInput,
        relay_gpio: i32,
    },
    MotionOnly {
        motion_gpio: i32,
        relay_gpio: i32,
    },
    RelayOnly {
        command_gpio: i32,
        relay_gpio: i32,
    },
}

impl Wiring {
    pub const fn role(&self) -> DeviceRole {
        match self {
            Self::OccupancyThermal { .. } => DeviceRole::OccupancyThermal,
            Self::ThermalGuard { .. } => DeviceRole::ThermalGuard,
            Self::MotionOnly { .. } => DeviceRole::MotionOnly,
            Self::RelayOnly { .. } => DeviceRole::RelayOnly,
        }
    }
}

/// Everything a role task needs, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeConfig {
    pub wiring: Wiring,
    pub tick_period_ms: u32,
    pub pulse_ms: u32,
    pub settle_ms: u32,
    pub ema_alpha: f32,
    pub overtemp_threshold: f32,
}

impl NodeConfig {
    /// Configuration of the role compiled into this binary.
    pub const fn active() -> Self {
        Self::for_role(ACTIVE_ROLE)
    }

    pub const fn for_role(role: DeviceRole) -> Self {
        let wiring = match role {
            DeviceRole::OccupancyThermal => Wiring::OccupancyThermal {
                motion_gpio: pins::occupancy::MOTION_GPIO,
                heat: occupancy_heat_source(),
                relay_gpio: pins::occupancy::RELAY_GPIO,
            },
            DeviceRole::ThermalGuard => Wiring::ThermalGuard {
                temperature: AnalogInput {
                    channel: pins::thermal_guard::TEMP_ADC_CHANNEL,
                    oversample: THERMAL_GUARD_OVERSAMPLE,
                    probe_gpio: Some(pins::thermal_guard::ADC_PROBE_GPIO),
                },
                relay_gpio: pins::thermal_guard::RELAY_GPIO,
            },
            DeviceRole::MotionOnly => Wiring::MotionOnly {
                motion_gpio: pins::motion::MOTION_GPIO,
                relay_gpio: pins::motion::RELAY_GPIO,
            },
            DeviceRole::RelayOnly => Wiring::RelayOnly {
                command_gpio: pins::relay::COMMAND_GPIO,
                relay_gpio: pins::relay::RELAY_GPIO,
            },
        };
        Self {
            wiring,
            tick_period_ms: TICK_PERIOD_MS,
            pulse_ms: INDICATOR_PULSE_MS,
            settle_ms: RELAY_SETTLE_MS,
            ema_alpha: EMA_ALPHA,
            overtemp_threshold: OVERTEMP_THRESHOLD_RAW,
        }
    }

    pub const fn role(&self) -> DeviceRole {
        self.wiring.role()
    }
}

const fn occupancy_heat_source() -> HeatSource {
    if cfg!(feature = "analog-heat") {
        HeatSource::Analog(AnalogInput {
            channel: pins::occupancy::HEAT_ADC_CHANNEL,
            oversample: 1,
            probe_gpio: None,
        })
    } else {
        HeatSource::Digital {
            gpio: pins::occupancy::HEAT_GPIO,
        }
    }
}
