//! Occupancy / thermal AC controller.
//!
//! ```text
//!  state = (Occupancy, Thermal, Relay)      initial (Vacant, Normal, Off)
//!
//!  per tick, in order:
//!   1. motion rising edge      → toggle Occupancy
//!   2. heat level              → Thermal = Hot | Normal
//!   3. Off ∧ Occupied ∧ Hot    → relay On
//!   4. On ∧ (Vacant ∨ heat ↓)  → relay Off
//!   5. relay changed           → one ActuatorCommand (pulse indicator)
//! ```
//!
//! Occupancy is a coarse heuristic: one rising edge means someone walked
//! in, the next means they walked out.  There is no timeout.
//!
//! Invariant: `relay == On` implies `Occupancy::Occupied`.  The next state
//! is computed in locals and committed in one assignment, so the invariant
//! holds at every point where the controller can be observed.

use crate::signal::{BooleanSignal, Edge};

use super::{ActuatorCommand, IndicatorCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Vacant,
    Occupied,
}

impl Occupancy {
    pub fn toggled(self) -> Self {
        match self {
            Self::Vacant => Self::Occupied,
            Self::Occupied => Self::Vacant,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thermal {
    Normal,
    Hot,
}

impl From<bool> for Thermal {
    fn from(hot: bool) -> Self {
        if hot { Self::Hot } else { Self::Normal }
    }
}

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    pub occupancy: Occupancy,
    pub thermal: Thermal,
    pub relay: bool,
}

impl ControllerState {
    pub const INITIAL: Self = Self {
        occupancy: Occupancy::Vacant,
        thermal: Thermal::Normal,
        relay: false,
    };
}

pub struct OccupancyController {
    state: ControllerState,
    /// Heat level history, for the falling-edge shutoff.
    heat: BooleanSignal,
    pulse_ms: u32,
}

impl OccupancyController {
    pub fn new(pulse_ms: u32) -> Self {
        Self {
            state: ControllerState::INITIAL,
            heat: BooleanSignal::new(),
            pulse_ms,
        }
    }

    /// Run one decision step.
    ///
    /// `motion` is this tick's motion edge; `hot` is this tick's heat level
    /// (digital pin or filtered-analog threshold).  Returns a command only
    /// when the relay changes.
    pub fn step(&mut self, motion: Edge, hot: bool) -> Option<ActuatorCommand> {
        let prev = self.state;

        // 1. Occupancy toggles on motion rising edge.
        let occupancy = if motion.is_rising() {
            prev.occupancy.toggled()
        } else {
            prev.occupancy
        };

        // 2. Thermal is recomputed from the level every tick.
        let mut heat = self.heat;
        let heat_edge = heat.update(hot);
        let thermal = Thermal::from(hot);

        // 3. Activate on the combination.
        let mut relay = prev.relay;
        if !relay && occupancy == Occupancy::Occupied && thermal == Thermal::Hot {
            relay = true;
        }

        // 4. Interlock: lost occupancy or lost heat forces shutoff.
        if relay && (occupancy == Occupancy::Vacant || heat_edge.is_falling()) {
            relay = false;
        }

        self.heat = heat;
        self.state = ControllerState {
            occupancy,
            thermal,
            relay,
        };

        // 5. One command per relay change, none otherwise.
        (relay != prev.relay).then_some(ActuatorCommand {
            relay,
            indicator: IndicatorCommand::Pulse { ms: self.pulse_ms },
        })
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn occupancy(&self) -> Occupancy {
        self.state.occupancy
    }

    pub fn thermal(&self) -> Thermal {
        self.state.thermal
    }

    pub fn relay_on(&self) -> bool {
        self.state.relay
    }
}
