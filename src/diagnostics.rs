//! Boot report, panic logging and the terminal fault halt.
//!
//! Nothing is persisted: the node has no storage, so the serial log is the
//! only diagnostic channel.  The boot report dumps the compiled-in
//! [`NodeConfig`] as JSON, the panic hook logs the panic before abort, and
//! [`halt`] parks the control task for good after a fatal fault.

use log::{error, info};

use crate::config::NodeConfig;
use crate::error::Error;

/// Log the firmware version and the active configuration.
pub fn boot_report(config: &NodeConfig) {
    info!("HomeNode v{} role={}", env!("CARGO_PKG_VERSION"), config.role());
    match serde_json::to_string(config) {
        Ok(json) => info!("CONFIG | {}", json),
        Err(e) => error!("CONFIG | dump failed: {}", e),
    }
}

// ───────────────────────────────────────────────────────────────
// Panic hook
// ───────────────────────────────────────────────────────────────

fn panic_reason<'a>(payload: &'a (dyn core::any::Any + Send)) -> &'a str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

/// Install a panic hook that logs the reason and location.
///
/// Call once during init, after the logger is up.
pub fn install_panic_handler() {
    std::panic::set_hook(Box::new(|info| {
        let reason = panic_reason(info.payload());
        match info.location() {
            Some(loc) => error!("PANIC: {} at {}:{}", reason, loc.file(), loc.line()),
            None => error!("PANIC: {}", reason),
        }

        #[cfg(target_os = "espidf")]
        {
            // SAFETY: esp_timer_get_time is a plain counter read, safe in
            // panic context.
            let uptime_ms = (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) / 1_000;
            error!("PANIC: uptime {} ms", uptime_ms);
        }
    }));
}

// ───────────────────────────────────────────────────────────────
// Fatal fault halt
// ───────────────────────────────────────────────────────────────

/// Log a fatal control-loop fault and stop the task permanently.
///
/// No restart: the relay output keeps its last written level, and a
/// watchdog or power cycle is the only way out.
pub fn halt(err: &Error) -> ! {
    error!("{}: control task halted", err);
    loop {
        #[cfg(target_os = "espidf")]
        esp_idf_hal::delay::FreeRtos::delay_ms(u32::MAX);
        #[cfg(not(target_os = "espidf"))]
        std::thread::park();
    }
}
