//! Sensor error taxonomy

use camsense_hal::BusError;

use crate::attribute::AttributeKind;
use crate::capability::Capability;
use crate::config::ConfigError;

/// Errors surfaced by sensor control operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Control bus transfer failed; the running sequence was abandoned
    Bus(BusError),
    /// Identification failed after the bounded retries
    NotPresent,
    /// Configuration attempted before the device was identified
    NotIdentified,
    /// Requested mode slot is out of range or explicitly empty
    UnsupportedMode(u32),
    /// Level outside the attribute's table
    InvalidLevel {
        /// Attribute that was being set
        kind: AttributeKind,
        /// Rejected level
        level: u32,
    },
    /// Capability slot is not bound for this sensor variant
    Unsupported(Capability),
    /// A read-back did not return the value that was written
    ReadBackMismatch {
        /// Register that was checked
        reg: u8,
        /// Value the caller expected
        expected: u8,
        /// Value the device returned
        actual: u8,
    },
    /// Bring-up configuration rejected before touching the device
    Config(ConfigError),
}

impl SensorError {
    /// Whether the caller can continue by picking a different value
    ///
    /// Bus failures and a missing device need remediation (re-identify,
    /// re-apply common init) before the sensor can be trusted again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            SensorError::Bus(_) | SensorError::NotPresent | SensorError::ReadBackMismatch { .. }
        )
    }
}

impl From<BusError> for SensorError {
    fn from(e: BusError) -> Self {
        SensorError::Bus(e)
    }
}

impl From<ConfigError> for SensorError {
    fn from(e: ConfigError) -> Self {
        SensorError::Config(e)
    }
}

impl core::fmt::Display for SensorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SensorError::Bus(e) => write!(f, "control bus failure: {e}"),
            SensorError::NotPresent => f.write_str("sensor not present"),
            SensorError::NotIdentified => f.write_str("sensor not identified yet"),
            SensorError::UnsupportedMode(mode) => write!(f, "unsupported mode {mode}"),
            SensorError::InvalidLevel { kind, level } => {
                write!(f, "invalid {} level {level}", kind.name())
            }
            SensorError::Unsupported(cap) => write!(f, "{} is not supported", cap.name()),
            SensorError::ReadBackMismatch {
                reg,
                expected,
                actual,
            } => write!(
                f,
                "register {reg:#04x} read back {actual:#04x}, expected {expected:#04x}"
            ),
            SensorError::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

/// Result type for sensor operations
pub type Result<T> = core::result::Result<T, SensorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        assert!(!SensorError::Bus(BusError::NoAcknowledge).is_recoverable());
        assert!(!SensorError::NotPresent.is_recoverable());
        assert!(SensorError::UnsupportedMode(4).is_recoverable());
        assert!(SensorError::Unsupported(Capability::SetSharpness).is_recoverable());
        assert!(SensorError::InvalidLevel {
            kind: AttributeKind::Brightness,
            level: 7
        }
        .is_recoverable());
        assert!(SensorError::Config(ConfigError::ZeroRetries).is_recoverable());
    }

    #[test]
    fn test_bus_error_converts() {
        let err: SensorError = BusError::Overrun.into();
        assert_eq!(err, SensorError::Bus(BusError::Overrun));

        let err: SensorError = ConfigError::CommonInitAsDefault.into();
        assert_eq!(err, SensorError::Config(ConfigError::CommonInitAsDefault));
    }
}
