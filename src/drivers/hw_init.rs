//! Raw peripheral access: GPIO direction/level and the ADC oneshot unit.
//!
//! Thin wrappers over ESP-IDF sys calls that turn `esp_err_t` codes into
//! [`HardwareFault`]s.  On the host, the same functions operate on an
//! in-memory pin/ADC model whose inputs can be set from tests via the
//! `sim_*` helpers.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

use crate::app::ports::{AdcAttenuation, AdcBitwidth};
use crate::error::HardwareFault;

/// `ESP_ERR_INVALID_STATE`, reported when the ADC is used before init.
pub const ERR_INVALID_STATE: i32 = 0x103;
/// `ESP_ERR_INVALID_ARG`, reported for out-of-range pins/channels.
pub const ERR_INVALID_ARG: i32 = 0x102;

// ── GPIO ──────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
fn config_pin(pin: i32, mode: gpio_mode_t, pull_up: bool) -> Result<(), HardwareFault> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin,
        mode,
        pull_up_en: if pull_up {
            gpio_pullup_t_GPIO_PULLUP_ENABLE
        } else {
            gpio_pullup_t_GPIO_PULLUP_DISABLE
        },
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        ..Default::default()
    };
    // SAFETY: gpio_config only reads the descriptor; called from the single
    // control task during setup.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HardwareFault::PinConfig { pin, code: ret });
    }
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn configure_output(pin: i32) -> Result<(), HardwareFault> {
    config_pin(pin, gpio_mode_t_GPIO_MODE_OUTPUT, false)?;
    info!("hw_init: GPIO{} output", pin);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn configure_input(pin: i32, pull_up: bool) -> Result<(), HardwareFault> {
    config_pin(pin, gpio_mode_t_GPIO_MODE_INPUT, pull_up)?;
    info!("hw_init: GPIO{} input (pull-up {})", pin, if pull_up { "on" } else { "off" });
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: register read on an already-configured input pin.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) -> Result<(), HardwareFault> {
    // SAFETY: register write on an already-configured output pin;
    // only the control task drives it.
    let ret = unsafe { gpio_set_level(pin, u32::from(high)) };
    if ret != ESP_OK as i32 {
        return Err(HardwareFault::PinWrite { pin, code: ret });
    }
    Ok(())
}

// ── GPIO (host simulation) ────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
mod sim {
    use core::sync::atomic::{AtomicU16, AtomicU64, Ordering};

    pub const ADC_CHANNELS: usize = 10;

    pub static INPUTS: AtomicU64 = AtomicU64::new(0);
    pub static OUTPUTS: AtomicU64 = AtomicU64::new(0);
    pub static ADC: [AtomicU16; ADC_CHANNELS] = [const { AtomicU16::new(0) }; ADC_CHANNELS];

    pub fn bit(pin: i32) -> Option<u64> {
        (0..64).contains(&pin).then(|| 1u64 << pin)
    }

    pub fn set(word: &AtomicU64, mask: u64, high: bool) {
        if high {
            word.fetch_or(mask, Ordering::SeqCst);
        } else {
            word.fetch_and(!mask, Ordering::SeqCst);
        }
    }

    pub fn get(word: &AtomicU64, mask: u64) -> bool {
        word.load(Ordering::SeqCst) & mask != 0
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_output(pin: i32) -> Result<(), HardwareFault> {
    sim::bit(pin).ok_or(HardwareFault::PinConfig {
        pin,
        code: ERR_INVALID_ARG,
    })?;
    info!("hw_init(sim): GPIO{} output", pin);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_input(pin: i32, pull_up: bool) -> Result<(), HardwareFault> {
    let mask = sim::bit(pin).ok_or(HardwareFault::PinConfig {
        pin,
        code: ERR_INVALID_ARG,
    })?;
    // A pulled-up, undriven input idles high.
    if pull_up {
        sim::set(&sim::INPUTS, mask, true);
    }
    info!("hw_init(sim): GPIO{} input (pull-up {})", pin, if pull_up { "on" } else { "off" });
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(pin: i32) -> bool {
    sim::bit(pin).is_some_and(|m| sim::get(&sim::INPUTS, m))
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: i32, high: bool) -> Result<(), HardwareFault> {
    let mask = sim::bit(pin).ok_or(HardwareFault::PinWrite {
        pin,
        code: ERR_INVALID_ARG,
    })?;
    sim::set(&sim::OUTPUTS, mask, high);
    Ok(())
}

/// Drive a simulated input pin.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_input(pin: i32, high: bool) {
    if let Some(mask) = sim::bit(pin) {
        sim::set(&sim::INPUTS, mask, high);
    }
}

/// Last level written to a simulated output pin.
#[cfg(not(target_os = "espidf"))]
pub fn sim_output_level(pin: i32) -> bool {
    sim::bit(pin).is_some_and(|m| sim::get(&sim::OUTPUTS, m))
}

/// Set the raw value every subsequent conversion on `channel` returns.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc(channel: u32, raw: u16) {
    if let Some(slot) = sim::ADC.get(channel as usize) {
        slot.store(raw, core::sync::atomic::Ordering::SeqCst);
    }
}

// ── ADC (oneshot) ─────────────────────────────────────────────

/// An initialised ADC1 oneshot unit.  Released on drop.
pub struct AdcOneshot {
    #[cfg(target_os = "espidf")]
    handle: adc_oneshot_unit_handle_t,
    #[cfg(not(target_os = "espidf"))]
    configured: u32,
}

#[cfg(target_os = "espidf")]
impl AdcOneshot {
    pub fn new() -> Result<Self, HardwareFault> {
        let init_cfg = adc_oneshot_unit_init_cfg_t {
            unit_id: adc_unit_t_ADC_UNIT_1,
            ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
            ..Default::default()
        };
        let mut handle: adc_oneshot_unit_handle_t = core::ptr::null_mut();
        // SAFETY: `handle` is a valid out-pointer for the duration of the call.
        let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &mut handle) };
        if ret != ESP_OK as i32 {
            return Err(HardwareFault::AdcUnit { code: ret });
        }
        info!("hw_init: ADC1 oneshot unit created");
        Ok(Self { handle })
    }

    pub fn config_channel(
        &mut self,
        channel: u32,
        bitwidth: AdcBitwidth,
        attenuation: AdcAttenuation,
    ) -> Result<(), HardwareFault> {
        let chan_cfg = adc_oneshot_chan_cfg_t {
            atten: match attenuation {
                AdcAttenuation::Db12 => adc_atten_t_ADC_ATTEN_DB_12,
            },
            bitwidth: match bitwidth {
                AdcBitwidth::Default => adc_bitwidth_t_ADC_BITWIDTH_DEFAULT,
            },
        };
        // SAFETY: handle is live for the lifetime of `self`.
        let ret = unsafe { adc_oneshot_config_channel(self.handle, channel, &chan_cfg) };
        if ret != ESP_OK as i32 {
            return Err(HardwareFault::AdcChannel { channel, code: ret });
        }
        info!("hw_init: ADC1 CH{} configured", channel);
        Ok(())
    }

    pub fn read(&mut self, channel: u32) -> Result<u16, HardwareFault> {
        let mut raw: i32 = 0;
        // SAFETY: handle is live; `raw` is a valid out-pointer.
        let ret = unsafe { adc_oneshot_read(self.handle, channel, &mut raw) };
        if ret != ESP_OK as i32 {
            return Err(HardwareFault::AdcRead { channel, code: ret });
        }
        Ok(raw.max(0) as u16)
    }
}

#[cfg(target_os = "espidf")]
impl Drop for AdcOneshot {
    fn drop(&mut self) {
        // SAFETY: handle was created by adc_oneshot_new_unit and is not
        // used after this point.
        let ret = unsafe { adc_oneshot_del_unit(self.handle) };
        if ret != ESP_OK as i32 {
            log::warn!("hw_init: ADC1 unit release failed (rc={})", ret);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl AdcOneshot {
    pub fn new() -> Result<Self, HardwareFault> {
        info!("hw_init(sim): ADC1 oneshot unit created");
        Ok(Self { configured: 0 })
    }

    pub fn config_channel(
        &mut self,
        channel: u32,
        _bitwidth: AdcBitwidth,
        _attenuation: AdcAttenuation,
    ) -> Result<(), HardwareFault> {
        if channel as usize >= sim::ADC_CHANNELS {
            return Err(HardwareFault::AdcChannel {
                channel,
                code: ERR_INVALID_ARG,
            });
        }
        self.configured |= 1 << channel;
        Ok(())
    }

    pub fn read(&mut self, channel: u32) -> Result<u16, HardwareFault> {
        if channel as usize >= sim::ADC_CHANNELS || self.configured & (1 << channel) == 0 {
            return Err(HardwareFault::AdcRead {
                channel,
                code: ERR_INVALID_STATE,
            });
        }
        Ok(sim::ADC[channel as usize].load(core::sync::atomic::Ordering::SeqCst))
    }
}
