//! Exponential moving average for noisy ADC readings.
//!
//! `filtered' = filtered * (1 - α) + raw * α`, starting from zero.  With
//! α = 0.2 and a 100 ms tick the filter settles to within 1 % of a step in
//! about two seconds.

/// Single-pole IIR smoother.  Never reset after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmaFilter {
    alpha: f32,
    value: f32,
}

impl EmaFilter {
    /// `alpha` is clamped to `[0, 1]`.
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            value: 0.0,
        }
    }

    /// Fold in one raw sample and return the new filtered value.
    pub fn update(&mut self, raw: u16) -> f32 {
        self.value = self.value * (1.0 - self.alpha) + f32::from(raw) * self.alpha;
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}
