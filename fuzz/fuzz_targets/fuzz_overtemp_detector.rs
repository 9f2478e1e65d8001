//! Fuzz target: EMA filter + overtemperature edge detection
//!
//! Interprets the input as little-endian `u16` ADC samples (masked to 12
//! bits) and runs them through the thermal guard's filter / threshold /
//! edge-follower chain.  Asserts that the filter stays finite and in range
//! and that the follower output never disagrees with the thresholded level
//! it last saw change.
//!
//! cargo fuzz run fuzz_overtemp_detector

#![no_main]

use homenode::config::{EMA_ALPHA, OVERTEMP_THRESHOLD_RAW};
use homenode::control::follower::EdgeFollower;
use homenode::signal::ema::EmaFilter;
use homenode::signal::BooleanSignal;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut filter = EmaFilter::new(EMA_ALPHA);
    let mut overtemp = BooleanSignal::new();
    let mut follower = EdgeFollower::new();

    for chunk in data.chunks_exact(2) {
        let raw = u16::from_le_bytes([chunk[0], chunk[1]]) & 0x0FFF;
        let v = filter.update(raw);
        assert!(v.is_finite() && (0.0..=4095.01).contains(&v), "filtered out of range: {v}");

        let hot = v >= OVERTEMP_THRESHOLD_RAW;
        follower.step(overtemp.update(hot));
        if let Some(out) = follower.output() {
            assert_eq!(out, hot, "follower lagging a changed level");
        }
    }
});
