//! Boolean signal tracking and edge detection.
//!
//! A [`BooleanSignal`] remembers the current and previous sample of one
//! logical input.  Both start out *unknown*, so the first sample after boot
//! can never be mistaken for a transition.
//!
//! ```text
//!   previous  current   edge
//!   ────────  ───────   ───────
//!   false     true      Rising
//!   true      false     Falling
//!   anything else       None
//! ```

pub mod ema;

/// Classification of the transition between two consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
    None,
}

impl Edge {
    pub fn is_rising(self) -> bool {
        self == Self::Rising
    }

    pub fn is_falling(self) -> bool {
        self == Self::Falling
    }
}

/// Two-sample history of a boolean input.  `None` = not yet observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanSignal {
    current: Option<bool>,
    previous: Option<bool>,
}

impl BooleanSignal {
    pub const fn new() -> Self {
        Self {
            current: None,
            previous: None,
        }
    }

    /// Build a signal from explicit history (used by tests and replay).
    pub const fn from_parts(previous: Option<bool>, current: Option<bool>) -> Self {
        Self { current, previous }
    }

    /// Shift in a new sample and return the edge it produced.
    pub fn update(&mut self, level: bool) -> Edge {
        self.previous = self.current;
        self.current = Some(level);
        self.edge()
    }

    pub fn edge(&self) -> Edge {
        edge(self)
    }

    pub fn current(&self) -> Option<bool> {
        self.current
    }

    pub fn previous(&self) -> Option<bool> {
        self.previous
    }

    /// Current level, treating "not yet sampled" as low.
    pub fn is_high(&self) -> bool {
        self.current == Some(true)
    }

    /// True when the current sample differs from the previous one, or the
    /// previous one is unknown (first sample after boot).
    pub fn changed(&self) -> bool {
        self.current.is_some() && self.current != self.previous
    }
}

/// Pure edge classifier.
pub fn edge(signal: &BooleanSignal) -> Edge {
    match (signal.previous, signal.current) {
        (Some(false), Some(true)) => Edge::Rising,
        (Some(true), Some(false)) => Edge::Falling,
        _ => Edge::None,
    }
}
