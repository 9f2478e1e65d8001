//! Node service: drives the role task forever.
//!
//! [`NodeService`] owns the [`Node`] and its configuration and runs the
//! periodic loop.  All I/O flows through the [`Board`] and [`EventSink`]
//! ports injected at call sites, so the whole service runs against a mock
//! board on the host.
//!
//! ```text
//!            ┌──────────────────────────────┐
//!  Board ──▶ │ NodeService                  │ ──▶ EventSink
//!            │  setup ─▶ (tick ─▶ sleep)*   │
//!  Board ◀── │  Node (role task)            │
//!            └──────────────────────────────┘
//! ```

use core::convert::Infallible;

use log::{error, info};

use crate::config::{DeviceRole, NodeConfig};
use crate::error::Error;
use crate::roles::Node;

use super::events::NodeEvent;
use super::ports::{Board, EventSink};

// ───────────────────────────────────────────────────────────────
// NodeService
// ───────────────────────────────────────────────────────────────

pub struct NodeService {
    node: Node,
    config: NodeConfig,
    tick_count: u64,
}

impl NodeService {
    /// Build the role task for `config`.  No hardware is touched until
    /// [`start`](Self::start).
    pub fn new(config: NodeConfig) -> Self {
        Self {
            node: Node::new(&config),
            config,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Configure the role's pins and channels, then announce the start.
    pub fn start(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) -> Result<(), Error> {
        if let Err(e) = self.node.setup(hw) {
            return Err(self.fail(e, sink));
        }
        info!(
            "NodeService started as {} (tick={}ms)",
            self.node.role(),
            self.config.tick_period_ms
        );
        sink.emit(&NodeEvent::Started(self.node.role()));
        Ok(())
    }

    /// One control cycle: sample → detect → decide → actuate.
    ///
    /// Does not sleep; [`run`](Self::run) owns the tick period.
    pub fn tick(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) -> Result<(), Error> {
        self.tick_count += 1;
        match self.node.tick(hw, sink) {
            Ok(()) => Ok(()),
            Err(e) => Err(self.fail(e, sink)),
        }
    }

    /// Start, then tick every `tick_period_ms` until a fault.
    ///
    /// Only returns on error; the caller is expected to log and halt.
    pub fn run(&mut self, hw: &mut impl Board, sink: &mut impl EventSink) -> Result<Infallible, Error> {
        self.start(hw, sink)?;
        loop {
            self.tick(hw, sink)?;
            hw.delay_ms(self.config.tick_period_ms);
        }
    }

    fn fail(&self, e: Error, sink: &mut impl EventSink) -> Error {
        error!("{} task fault after {} ticks: {}", self.node.role(), self.tick_count, e);
        sink.emit(&NodeEvent::Fault(e));
        e
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn role(&self) -> DeviceRole {
        self.node.role()
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
