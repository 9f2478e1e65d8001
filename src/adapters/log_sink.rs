//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each [`NodeEvent`] as one
//! pipe-separated line to the ESP-IDF logger (UART / USB-CDC in
//! production).

use log::{error, info};

use crate::app::events::NodeEvent;
use crate::app::ports::EventSink;
use crate::control::occupancy::{Occupancy, Thermal};

/// Adapter that logs every [`NodeEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

/// Render an event as a single log line.
pub fn format_event(event: &NodeEvent) -> String {
    match event {
        NodeEvent::Started(role) => format!("START | role={}", role),
        NodeEvent::OccupancyChanged(o) => format!(
            "OCCUPANCY | {}",
            match o {
                Occupancy::Vacant => "vacant",
                Occupancy::Occupied => "occupied",
            }
        ),
        NodeEvent::ThermalChanged(t) => format!(
            "THERMAL | {}",
            match t {
                Thermal::Normal => "normal",
                Thermal::Hot => "hot",
            }
        ),
        NodeEvent::OvertempChanged { active, filtered } => format!(
            "OVERTEMP | {} | filtered={:.0}",
            if *active { "active" } else { "inactive" },
            filtered
        ),
        NodeEvent::MotionChanged { active } => {
            format!("MOTION | {}", if *active { "activated" } else { "inactivated" })
        }
        NodeEvent::RelaySwitched { on } => {
            format!("RELAY | AC turned {}", if *on { "on" } else { "off" })
        }
        NodeEvent::Fault(e) => format!("FAULT | {}", e),
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &NodeEvent) {
        let line = format_event(event);
        if matches!(event, NodeEvent::Fault(_)) {
            error!("{}", line);
        } else {
            info!("{}", line);
        }
    }
}
