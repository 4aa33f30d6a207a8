//! Board-agnostic core for register-programmed image sensors
//!
//! This crate contains everything that does not depend on a particular
//! sensor part or board:
//!
//! - Register-sequence interpreter
//! - Mode and parameterized attribute tables
//! - Bounded-retry identification protocol
//! - Sparse capability dispatch
//! - Flash/snapshot sequencing
//! - Configuration types and their persisted form
//!
//! Sensor variants describe themselves with a static [`SensorDescriptor`]
//! and are driven through [`Sensor`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod attribute;
pub mod capability;
pub mod config;
pub mod control;
pub mod descriptor;
pub mod error;
pub mod handlers;
pub mod identify;
pub mod mode;
pub mod sensor;
pub mod sequence;
pub mod snapshot;

pub use attribute::{AttributeKind, AttributeTables, Environment, ImageEffect, LevelTable, WhiteBalance};
pub use capability::{Capability, CapabilityTable, Handler, Invocation};
pub use config::{ConfigError, SensorConfig};
pub use control::{SensorControl, Session};
pub use descriptor::{SensorDescriptor, SensorInfo};
pub use error::{Result, SensorError};
pub use identify::{identify, IdentifyPolicy, Identified, IdentityCode};
pub use mode::{ImageFormat, ImagePattern, ModeEntry, ModeGeometry, ModeTable, SensorMode};
pub use sensor::{Lifecycle, Sensor};
pub use sequence::{execute, Applied, Directive, RegisterSequence};
pub use snapshot::{FlashState, SnapshotOutcome, SnapshotSequencer};
