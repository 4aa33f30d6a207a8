//! Configuration type definitions
//!
//! Board-level choices about how a sensor is brought up: bus address,
//! identification retries, capture settling, flash polarity, and the mode
//! and attribute levels applied after attach.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attribute::AttributeKind;
use crate::identify::IdentifyPolicy;
use crate::mode::SensorMode;
use crate::snapshot::DEFAULT_SETTLE_MS;

/// Maximum attribute settings applied at startup
pub const MAX_INITIAL_ATTRIBUTES: usize = 8;

/// One attribute level applied at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeSetting {
    pub kind: AttributeKind,
    pub level: u8,
}

impl AttributeSetting {
    pub const fn new(kind: AttributeKind, level: u8) -> Self {
        Self { kind, level }
    }
}

/// Sensor bring-up configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorConfig {
    /// 7-bit address overriding the variant's default
    pub i2c_address: Option<u8>,
    /// Identification retry policy
    pub identify: IdentifyPolicy,
    /// Delay before every capture (ms)
    pub snapshot_settle_ms: u32,
    /// Mode applied after common init
    pub default_mode: SensorMode,
    /// Attribute levels applied after the default mode, in order
    pub initial_attributes: Vec<AttributeSetting, MAX_INITIAL_ATTRIBUTES>,
    /// Flash output is active low
    pub flash_active_low: bool,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            i2c_address: None,
            identify: IdentifyPolicy::default(),
            snapshot_settle_ms: DEFAULT_SETTLE_MS,
            default_mode: SensorMode::PreviewOne,
            initial_attributes: Vec::new(),
            flash_active_low: false,
        }
    }
}

/// Configuration validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Identification would never retry a mismatch
    ZeroRetries,
    /// Common init cannot be requested as a capture mode
    CommonInitAsDefault,
    /// Same attribute listed twice
    DuplicateAttribute(AttributeKind),
    /// Address does not fit in 7 bits
    InvalidAddress(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroRetries => f.write_str("identify policy allows no retries"),
            ConfigError::CommonInitAsDefault => {
                f.write_str("default mode cannot be the common init slot")
            }
            ConfigError::DuplicateAttribute(kind) => {
                write!(f, "{} configured more than once", kind.name())
            }
            ConfigError::InvalidAddress(addr) => write!(f, "address {addr:#04x} is not 7-bit"),
        }
    }
}

impl SensorConfig {
    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identify.max_retries == 0 {
            return Err(ConfigError::ZeroRetries);
        }
        if self.default_mode == SensorMode::CommonInit {
            return Err(ConfigError::CommonInitAsDefault);
        }
        if let Some(addr) = self.i2c_address {
            if addr > 0x7f {
                return Err(ConfigError::InvalidAddress(addr));
            }
        }
        for (i, setting) in self.initial_attributes.iter().enumerate() {
            if self.initial_attributes[..i]
                .iter()
                .any(|earlier| earlier.kind == setting.kind)
            {
                return Err(ConfigError::DuplicateAttribute(setting.kind));
            }
        }
        Ok(())
    }

    /// Bus address to use, falling back to `default`
    pub fn address_or(&self, default: u8) -> u8 {
        self.i2c_address.unwrap_or(default)
    }
}
