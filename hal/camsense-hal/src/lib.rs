//! Camsense Hardware Abstraction Layer
//!
//! This crate defines the collaborator traits an image sensor driver needs
//! from the platform: a register-addressed control bus, a flash output and
//! a mode-transition hint. Timing comes straight from
//! [`embedded_hal::delay::DelayNs`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Camera pipeline (board firmware)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  camsense-core / camsense-drivers       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  camsense-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  any embedded-hal 1.0 I2C + delay impl  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::RegisterBus`] - 8-bit register write/read on the sensor
//! - [`flash::FlashControl`] - Camera flash output
//! - [`flash::ModeNotifier`] - Mode-transition hint to the capture pipeline
//!
//! [`i2c::SccbBus`] adapts any [`embedded_hal::i2c::I2c`] into a
//! [`RegisterBus`].

#![no_std]
#![deny(unsafe_code)]

pub mod flash;
pub mod i2c;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export key traits at crate root for convenience
pub use flash::{FlashControl, ModeNotifier, NoFlash, NoNotifier};
pub use i2c::{BusError, RegisterBus, SccbBus};
