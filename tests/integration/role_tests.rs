//! Thermal guard, motion-only and relay-only roles through the service.

use crate::mock_hw::{BoardCall, MockBoard, RecordingSink};

use homenode::app::actuator::COLOUR_STEADY;
use homenode::app::events::NodeEvent;
use homenode::app::ports::{AdcAttenuation, AdcBitwidth};
use homenode::app::service::NodeService;
use homenode::config::{DeviceRole, NodeConfig, THERMAL_GUARD_OVERSAMPLE};
use homenode::pins;
use homenode::roles::Node;

fn start(role: DeviceRole) -> (NodeService, MockBoard, RecordingSink) {
    let mut svc = NodeService::new(NodeConfig::for_role(role));
    let mut hw = MockBoard::new();
    let mut sink = RecordingSink::new();
    svc.start(&mut hw, &mut sink).unwrap();
    assert_eq!(sink.take(), vec![NodeEvent::Started(role)]);
    (svc, hw, sink)
}

// ── Thermal guard ─────────────────────────────────────────────

mod thermal_guard {
    use super::*;

    const RELAY: i32 = pins::thermal_guard::RELAY_GPIO;
    const PROBE: i32 = pins::thermal_guard::ADC_PROBE_GPIO;
    const CHANNEL: u32 = pins::thermal_guard::TEMP_ADC_CHANNEL;

    fn filtered(svc: &NodeService) -> Option<f32> {
        match svc.node() {
            Node::ThermalGuard(t) => t.filtered(),
            _ => panic!("not a thermal guard"),
        }
    }

    #[test]
    fn setup_configures_relay_adc_and_probe() {
        let (_svc, hw, _sink) = start(DeviceRole::ThermalGuard);
        assert_eq!(
            hw.calls,
            vec![
                BoardCall::ConfigureOutput(RELAY),
                BoardCall::Write { pin: RELAY, high: false },
                BoardCall::AdcInit,
                BoardCall::AdcConfig {
                    channel: CHANNEL,
                    bitwidth: AdcBitwidth::Default,
                    attenuation: AdcAttenuation::Db12,
                },
                BoardCall::ConfigureOutput(PROBE),
                BoardCall::Write { pin: PROBE, high: false },
            ]
        );
    }

    #[test]
    fn probe_brackets_each_conversion_burst() {
        let (mut svc, mut hw, mut sink) = start(DeviceRole::ThermalGuard);
        hw.clear_calls();
        svc.tick(&mut hw, &mut sink).unwrap();

        let n = THERMAL_GUARD_OVERSAMPLE as usize;
        assert_eq!(hw.calls.len(), n + 2);
        assert_eq!(hw.calls[0], BoardCall::Write { pin: PROBE, high: true });
        assert!(hw.calls[1..=n].iter().all(|c| *c == BoardCall::AdcRead(CHANNEL)));
        assert_eq!(hw.calls[n + 1], BoardCall::Write { pin: PROBE, high: false });
    }

    #[test]
    fn relay_follows_filtered_overtemp_edges() {
        let (mut svc, mut hw, mut sink) = start(DeviceRole::ThermalGuard);
        hw.set_adc(CHANNEL, 4095);

        // 819, 1474, 1998: still below 2048.
        for _ in 0..3 {
            svc.tick(&mut hw, &mut sink).unwrap();
        }
        assert_eq!(hw.writes_to(RELAY), vec![false]);
        assert!(sink.events.is_empty());

        // 2418: overtemp.
        svc.tick(&mut hw, &mut sink).unwrap();
        assert_eq!(hw.level(RELAY), Some(true));
        let f = filtered(&svc).unwrap();
        assert!((f - 2417.69).abs() < 0.1, "filtered = {f}");
        assert_eq!(
            sink.take(),
            vec![NodeEvent::OvertempChanged { active: true, filtered: f }]
        );

        // Stays on while hot.
        svc.tick(&mut hw, &mut sink).unwrap();
        assert_eq!(hw.writes_to(RELAY), vec![false, true]);

        // Cooling: 2753 * 0.8 = 2203 (still hot), then 1762 (normal).
        hw.set_adc(CHANNEL, 0);
        svc.tick(&mut hw, &mut sink).unwrap();
        assert_eq!(hw.level(RELAY), Some(true));
        svc.tick(&mut hw, &mut sink).unwrap();
        assert_eq!(hw.level(RELAY), Some(false));
        assert!(matches!(
            sink.take().as_slice(),
            [NodeEvent::OvertempChanged { active: false, .. }]
        ));
    }

    #[test]
    fn no_indicator_traffic() {
        let (mut svc, mut hw, mut sink) = start(DeviceRole::ThermalGuard);
        hw.set_adc(CHANNEL, 4095);
        for _ in 0..6 {
            svc.tick(&mut hw, &mut sink).unwrap();
        }
        assert!(!hw.calls.iter().any(|c| matches!(
            c,
            BoardCall::SetPixel(_) | BoardCall::Clear | BoardCall::Refresh
        )));
    }
}

// ── Motion only ───────────────────────────────────────────────

mod motion {
    use super::*;

    const RELAY: i32 = pins::motion::RELAY_GPIO;
    const MOTION: i32 = pins::motion::MOTION_GPIO;

    #[test]
    fn setup_enables_pull_up() {
        let (_svc, hw, _sink) = start(DeviceRole::MotionOnly);
        assert_eq!(
            hw.calls,
            vec![
                BoardCall::ConfigureOutput(RELAY),
                BoardCall::Write { pin: RELAY, high: false },
                BoardCall::ConfigureInput { pin: MOTION, pull_up: true },
            ]
        );
    }

    #[test]
    fn output_follows_motion_edges() {
        let (mut svc, mut hw, mut sink) = start(DeviceRole::MotionOnly);
        hw.clear_calls();

        for level in [false, true, true, true, false, false, true] {
            hw.set_input(MOTION, level);
            svc.tick(&mut hw, &mut sink).unwrap();
        }

        assert_eq!(hw.writes_to(RELAY), vec![true, false, true]);
        assert_eq!(
            sink.take(),
            vec![
                NodeEvent::MotionChanged { active: true },
                NodeEvent::MotionChanged { active: false },
                NodeEvent::MotionChanged { active: true },
            ]
        );
    }

    #[test]
    fn first_sample_high_is_not_an_edge() {
        let (mut svc, mut hw, mut sink) = start(DeviceRole::MotionOnly);
        hw.clear_calls();
        hw.set_input(MOTION, true);
        svc.tick(&mut hw, &mut sink).unwrap();
        assert!(hw.calls.is_empty());
        assert!(!svc.node().relay_on());
    }
}

// ── Relay only ────────────────────────────────────────────────

mod relay {
    use super::*;

    const RELAY: i32 = pins::relay::RELAY_GPIO;
    const COMMAND: i32 = pins::relay::COMMAND_GPIO;

    #[test]
    fn setup_configures_command_input_then_relay() {
        let (_svc, hw, _sink) = start(DeviceRole::RelayOnly);
        assert_eq!(
            hw.calls,
            vec![
                BoardCall::ConfigureInput { pin: COMMAND, pull_up: false },
                BoardCall::ConfigureOutput(RELAY),
                BoardCall::Write { pin: RELAY, high: false },
                BoardCall::Clear,
            ]
        );
    }

    #[test]
    fn first_tick_writes_then_settles_before_acting() {
        let (mut svc, mut hw, mut sink) = start(DeviceRole::RelayOnly);
        hw.clear_calls();

        svc.tick(&mut hw, &mut sink).unwrap();
        assert_eq!(
            hw.calls,
            vec![
                BoardCall::DelayMs(50),
                BoardCall::Write { pin: RELAY, high: false },
                BoardCall::Clear,
            ]
        );
        assert_eq!(sink.take(), vec![NodeEvent::RelaySwitched { on: false }]);
    }

    #[test]
    fn writes_only_on_level_changes() {
        let (mut svc, mut hw, mut sink) = start(DeviceRole::RelayOnly);
        svc.tick(&mut hw, &mut sink).unwrap();
        hw.clear_calls();

        // Unchanged low: settle delay only.
        svc.tick(&mut hw, &mut sink).unwrap();
        assert_eq!(hw.calls, vec![BoardCall::DelayMs(50)]);

        // Command goes high: relay on, steady white.
        hw.clear_calls();
        hw.set_input(COMMAND, true);
        svc.tick(&mut hw, &mut sink).unwrap();
        assert_eq!(
            hw.calls,
            vec![
                BoardCall::DelayMs(50),
                BoardCall::Write { pin: RELAY, high: true },
                BoardCall::SetPixel(COLOUR_STEADY),
                BoardCall::Refresh,
            ]
        );

        // Held high: nothing new.
        hw.clear_calls();
        for _ in 0..5 {
            svc.tick(&mut hw, &mut sink).unwrap();
        }
        assert_eq!(hw.calls, vec![BoardCall::DelayMs(50); 5]);

        // Back low: relay off, LED off.
        hw.clear_calls();
        hw.set_input(COMMAND, false);
        svc.tick(&mut hw, &mut sink).unwrap();
        assert_eq!(hw.writes_to(RELAY), vec![false]);
        assert_eq!(hw.count(&BoardCall::Clear), 1);
        assert!(!svc.node().relay_on());
    }
}
