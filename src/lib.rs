//! HomeNode firmware library.
//!
//! Exposes the control logic, port traits and adapters for integration
//! testing.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module; host builds use the
//! in-memory simulation paths.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod diagnostics;
pub mod error;
pub mod pins;
pub mod roles;
pub mod sensors;
pub mod signal;

pub mod adapters;
pub mod drivers;
