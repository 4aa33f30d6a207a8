//! Sensor variants and board outputs
//!
//! This crate provides concrete implementations for the abstractions in
//! camsense-core and camsense-hal:
//!
//! - Sensor descriptors (HI253)
//! - GPIO flash output
//! - Multi-variant probe

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod flash;
pub mod probe;
pub mod sensor;

pub use flash::GpioFlash;
pub use probe::{probe, probe_configured, Detected};
pub use sensor::{HI253, SUPPORTED};
