//! Fuzz target: `OccupancyController::step`
//!
//! Each input byte is one tick: bit 0 is the motion level, bit 1 the heat
//! level.  Asserts that the relay is never on in a vacant room and that a
//! command is issued exactly when the relay changes.
//!
//! cargo fuzz run fuzz_occupancy_controller

#![no_main]

use homenode::control::occupancy::{Occupancy, OccupancyController};
use homenode::signal::BooleanSignal;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut motion = BooleanSignal::new();
    let mut ctl = OccupancyController::new(500);

    for &b in data {
        let before = ctl.relay_on();
        let cmd = ctl.step(motion.update(b & 1 != 0), b & 2 != 0);
        let s = ctl.state();

        assert!(!s.relay || s.occupancy == Occupancy::Occupied, "relay on while vacant");
        assert_eq!(cmd.is_some(), s.relay != before, "command without relay change");
    }
});
