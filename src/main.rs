//! HomeNode Firmware: Main Entry Point
//!
//! One control task per node, role chosen at build time.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter                       LogEventSink            │
//! │  (GpioPort+AdcPort+IndicatorPort+Delay) (EventSink)            │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              NodeService (pure logic)                  │    │
//! │  │  Node: OccupancyThermal | ThermalGuard | Motion | Relay│    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Result;

use homenode::adapters::hardware::HardwareAdapter;
use homenode::adapters::log_sink::LogEventSink;
use homenode::app::service::NodeService;
use homenode::config::NodeConfig;
use homenode::diagnostics;
use homenode::drivers::status_led::StatusLed;

// ── Status LED bring-up ───────────────────────────────────────

#[cfg(target_os = "espidf")]
fn status_led() -> Result<StatusLed> {
    use esp_idf_hal::gpio::AnyOutputPin;
    use esp_idf_hal::peripherals::Peripherals;
    use homenode::error::Error;
    use homenode::pins;

    let peripherals =
        Peripherals::take().map_err(|_| Error::Init("peripherals already taken"))?;
    // SAFETY: the LED pin is not claimed by any other driver.
    let pin = unsafe { AnyOutputPin::new(pins::STATUS_LED_GPIO) };
    Ok(StatusLed::new(peripherals.rmt.channel0, pin)?)
}

#[cfg(not(target_os = "espidf"))]
fn status_led() -> Result<StatusLed> {
    Ok(StatusLed::new())
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }
    diagnostics::install_panic_handler();

    // ── 2. Configuration ──────────────────────────────────────
    let config = NodeConfig::active();
    diagnostics::boot_report(&config);

    // ── 3. Adapters ───────────────────────────────────────────
    let led = if config.role().has_indicator() {
        Some(status_led()?)
    } else {
        None
    };
    let mut hw = HardwareAdapter::new(led);
    let mut sink = LogEventSink::new();

    // ── 4. Control loop (returns only on a fatal fault) ───────
    let mut service = NodeService::new(config);
    let Err(err) = service.run(&mut hw, &mut sink);
    diagnostics::halt(&err)
}
