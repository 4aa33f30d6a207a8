//! Stored configuration
//!
//! A [`SensorConfig`] wrapped with a magic number and format version,
//! serialized with postcard so a board can keep it in flash.

use serde::{Deserialize, Serialize};

use super::types::{ConfigError, SensorConfig};

/// Magic number identifying stored sensor configuration
pub const CONFIG_MAGIC: u32 = 0x4353_4E53; // "CSNS"

/// Current stored format version
pub const CONFIG_VERSION: u8 = 1;

/// Upper bound on the encoded size of [`PersistedConfig`]
pub const MAX_PERSISTED_SIZE: usize = 96;

/// Persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistError {
    /// Buffer too small or encoder failure
    Serialize,
    /// Bytes are not a postcard-encoded record
    Deserialize,
    /// Magic or version mismatch
    InvalidFormat,
    /// Record decoded but failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for PersistError {
    fn from(e: ConfigError) -> Self {
        PersistError::Invalid(e)
    }
}

/// Stored configuration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PersistedConfig {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    pub config: SensorConfig,
}

impl PersistedConfig {
    pub fn new(config: SensorConfig) -> Self {
        Self {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            config,
        }
    }

    /// Check if magic and version match
    pub fn is_valid(&self) -> bool {
        self.magic == CONFIG_MAGIC && self.version == CONFIG_VERSION
    }
}

/// Encode `config` into `buffer`, returning the used prefix
pub fn encode<'a>(config: &SensorConfig, buffer: &'a mut [u8]) -> Result<&'a mut [u8], PersistError> {
    config.validate()?;
    let record = PersistedConfig::new(config.clone());
    let bytes = postcard::to_slice(&record, buffer).map_err(|_| PersistError::Serialize)?;
    debug!("encoded sensor config in {} bytes", bytes.len());
    Ok(bytes)
}

/// Decode and validate a stored record
pub fn decode(bytes: &[u8]) -> Result<SensorConfig, PersistError> {
    let record: PersistedConfig =
        postcard::from_bytes(bytes).map_err(|_| PersistError::Deserialize)?;

    if !record.is_valid() {
        warn!("stored sensor config has bad magic or version");
        return Err(PersistError::InvalidFormat);
    }

    record.config.validate()?;
    Ok(record.config)
}

/// Decode a stored record, falling back to defaults
pub fn load_or_default(bytes: &[u8]) -> SensorConfig {
    match decode(bytes) {
        Ok(config) => config,
        Err(e) => {
            warn!("using default sensor config: {}", e);
            SensorConfig::default()
        }
    }
}

impl core::fmt::Display for PersistError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PersistError::Serialize => f.write_str("serialize failed"),
            PersistError::Deserialize => f.write_str("deserialize failed"),
            PersistError::InvalidFormat => f.write_str("invalid magic or version"),
            PersistError::Invalid(e) => write!(f, "invalid config: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeKind;
    use crate::config::AttributeSetting;
    use crate::mode::SensorMode;

    fn sample() -> SensorConfig {
        let mut config = SensorConfig {
            i2c_address: Some(0x20),
            default_mode: SensorMode::SnapshotOneThird,
            flash_active_low: true,
            ..SensorConfig::default()
        };
        config
            .initial_attributes
            .push(AttributeSetting::new(AttributeKind::WhiteBalance, 5))
            .unwrap();
        config
    }

    #[test]
    fn test_encode_decode() {
        let mut buffer = [0u8; MAX_PERSISTED_SIZE];
        let len = encode(&sample(), &mut buffer).unwrap().len();

        assert_eq!(decode(&buffer[..len]).unwrap(), sample());
    }

    #[test]
    fn test_bad_magic_rejected() {
        let mut record = PersistedConfig::new(sample());
        record.magic = 0xdead_beef;
        let mut buffer = [0u8; MAX_PERSISTED_SIZE];
        let bytes = postcard::to_slice(&record, &mut buffer).unwrap();

        assert_eq!(decode(bytes), Err(PersistError::InvalidFormat));
    }

    #[test]
    fn test_future_version_rejected() {
        let mut record = PersistedConfig::new(sample());
        record.version = CONFIG_VERSION + 1;
        let mut buffer = [0u8; MAX_PERSISTED_SIZE];
        let bytes = postcard::to_slice(&record, &mut buffer).unwrap();

        assert_eq!(decode(bytes), Err(PersistError::InvalidFormat));
    }

    #[test]
    fn test_invalid_config_not_encoded() {
        let config = SensorConfig {
            default_mode: SensorMode::CommonInit,
            ..SensorConfig::default()
        };
        let mut buffer = [0u8; MAX_PERSISTED_SIZE];

        assert_eq!(
            encode(&config, &mut buffer).map(|b| b.len()),
            Err(PersistError::Invalid(ConfigError::CommonInitAsDefault))
        );
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        assert_eq!(load_or_default(&[0xff; 4]), SensorConfig::default());
        assert_eq!(load_or_default(&[]), SensorConfig::default());
    }
}
