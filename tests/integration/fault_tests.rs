//! Fatal fault paths: a failed peripheral call stops the loop, is reported
//! as a `Fault` event, and is returned to the caller unchanged.

use crate::mock_hw::{BoardCall, MockBoard, RecordingSink};

use homenode::app::events::NodeEvent;
use homenode::app::service::NodeService;
use homenode::config::{DeviceRole, NodeConfig};
use homenode::error::{Error, HardwareFault};
use homenode::pins;
use homenode::roles::Node;

const ESP_FAIL: i32 = -1;
const ESP_ERR_TIMEOUT: i32 = 0x107;

#[test]
fn relay_write_failure_during_setup_aborts_start() {
    let mut svc = NodeService::new(NodeConfig::for_role(DeviceRole::MotionOnly));
    let mut hw = MockBoard::new();
    hw.fail_write = Some((pins::motion::RELAY_GPIO, ESP_FAIL));
    let mut sink = RecordingSink::new();

    let err = svc.start(&mut hw, &mut sink).unwrap_err();

    let expected = Error::Hardware(HardwareFault::PinWrite {
        pin: pins::motion::RELAY_GPIO,
        code: ESP_FAIL,
    });
    assert_eq!(err, expected);
    assert_eq!(sink.events, vec![NodeEvent::Fault(expected)]);
}

#[test]
fn relay_write_failure_on_activation_stops_the_loop() {
    let mut svc = NodeService::new(NodeConfig::for_role(DeviceRole::MotionOnly));
    let mut hw = MockBoard::new();
    let mut sink = RecordingSink::new();
    svc.start(&mut hw, &mut sink).unwrap();
    sink.take();

    hw.set_input(pins::motion::MOTION_GPIO, false);
    svc.tick(&mut hw, &mut sink).unwrap();

    hw.fail_write = Some((pins::motion::RELAY_GPIO, ESP_FAIL));
    hw.set_input(pins::motion::MOTION_GPIO, true);
    let err = svc.tick(&mut hw, &mut sink).unwrap_err();

    assert!(matches!(
        err,
        Error::Hardware(HardwareFault::PinWrite { code: ESP_FAIL, .. })
    ));
    assert_eq!(sink.events, vec![NodeEvent::Fault(err)]);
    assert!(!svc.node().relay_on(), "failed write must not be recorded as on");
}

#[test]
fn adc_failure_mid_burst_leaves_filter_untouched() {
    let mut svc = NodeService::new(NodeConfig::for_role(DeviceRole::ThermalGuard));
    let mut hw = MockBoard::new();
    let mut sink = RecordingSink::new();
    svc.start(&mut hw, &mut sink).unwrap();
    hw.set_adc(pins::thermal_guard::TEMP_ADC_CHANNEL, 1000);

    svc.tick(&mut hw, &mut sink).unwrap();
    let before = match svc.node() {
        Node::ThermalGuard(t) => t.filtered(),
        _ => unreachable!(),
    };
    assert_eq!(before, Some(200.0));

    // Fail halfway through the next burst.
    hw.fail_adc_after = Some((hw.adc_reads() + 50, ESP_ERR_TIMEOUT));
    let err = svc.tick(&mut hw, &mut sink).unwrap_err();

    assert_eq!(
        err,
        Error::Hardware(HardwareFault::AdcRead {
            channel: pins::thermal_guard::TEMP_ADC_CHANNEL,
            code: ESP_ERR_TIMEOUT,
        })
    );
    let after = match svc.node() {
        Node::ThermalGuard(t) => t.filtered(),
        _ => unreachable!(),
    };
    assert_eq!(after, before);
}

#[test]
fn adc_failure_mid_burst_still_drops_the_probe() {
    let mut svc = NodeService::new(NodeConfig::for_role(DeviceRole::ThermalGuard));
    let mut hw = MockBoard::new();
    let mut sink = RecordingSink::new();
    svc.start(&mut hw, &mut sink).unwrap();
    hw.clear_calls();

    hw.fail_adc_after = Some((10, ESP_FAIL));
    svc.tick(&mut hw, &mut sink).unwrap_err();

    let probe = pins::thermal_guard::ADC_PROBE_GPIO;
    assert_eq!(hw.writes_to(probe), vec![true, false]);
    assert_eq!(
        hw.calls.last(),
        Some(&BoardCall::Write { pin: probe, high: false })
    );
}

#[test]
fn run_ticks_with_period_until_fault() {
    let mut svc = NodeService::new(NodeConfig::for_role(DeviceRole::ThermalGuard));
    let mut hw = MockBoard::new();
    let mut sink = RecordingSink::new();
    // Two full bursts succeed, the third fails.
    hw.fail_adc_after = Some((250, ESP_FAIL));

    let Err(err) = svc.run(&mut hw, &mut sink);

    assert!(matches!(
        err,
        Error::Hardware(HardwareFault::AdcRead { code: ESP_FAIL, .. })
    ));
    assert_eq!(svc.tick_count(), 3);
    assert_eq!(hw.count(&BoardCall::DelayMs(100)), 2);
    assert_eq!(
        sink.events,
        vec![
            NodeEvent::Started(DeviceRole::ThermalGuard),
            NodeEvent::Fault(err),
        ]
    );
}
