//! Sensor variants

pub mod hi253;

pub use hi253::HI253;

use camsense_core::SensorDescriptor;

/// Every variant this crate knows, in probe order
pub static SUPPORTED: [&SensorDescriptor; 1] = [&HI253];

