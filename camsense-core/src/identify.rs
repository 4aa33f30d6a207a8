//! Bounded-retry identification protocol
//!
//! Identity is a short list of `(register, expected value)` pairs. Pairs
//! are checked in order and retried individually: a mismatch re-reads the
//! same pair after a short backoff, so a glitch on one register never
//! forces already confirmed pairs to be checked again. Running out of
//! retries on any pair fails immediately.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use camsense_hal::{BusError, RegisterBus};
use embedded_hal::delay::DelayNs;

use crate::error::{Result, SensorError};

/// One register that must read back a fixed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdentityCode {
    pub reg: u8,
    pub value: u8,
}

impl IdentityCode {
    pub const fn new(reg: u8, value: u8) -> Self {
        Self { reg, value }
    }
}

/// Retry behaviour of [`identify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdentifyPolicy {
    /// Consecutive mismatches tolerated per pair before giving up
    pub max_retries: u8,
    /// Wait between two reads of the same pair (µs)
    pub retry_backoff_us: u32,
}

impl IdentifyPolicy {
    pub const DEFAULT: Self = Self {
        max_retries: 3,
        retry_backoff_us: 100,
    };
}

impl Default for IdentifyPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Successful identification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Identified {
    /// Re-reads spent across all pairs
    pub retries: u32,
}

/// Confirm that the device on `bus` matches `codes`
///
/// A read that is not acknowledged counts as a mismatch since an absent
/// part never acknowledges. Any other bus failure aborts with `Bus`.
pub fn identify<B, D>(
    bus: &mut B,
    delay: &mut D,
    codes: &[IdentityCode],
    policy: &IdentifyPolicy,
) -> Result<Identified>
where
    B: RegisterBus + ?Sized,
    D: DelayNs + ?Sized,
{
    let mut retries = 0u32;

    for code in codes {
        let mut misses = 0u32;

        loop {
            let actual = match bus.read_reg(code.reg) {
                Ok(value) => Some(value),
                Err(BusError::NoAcknowledge) => None,
                Err(e) => {
                    error!("identify: bus failure reading {:#x}: {}", code.reg, e);
                    return Err(SensorError::Bus(e));
                }
            };

            if actual == Some(code.value) {
                break;
            }

            misses += 1;
            if misses > u32::from(policy.max_retries) {
                warn!(
                    "identify: register {:#x} never read {:#x}, giving up",
                    code.reg,
                    code.value
                );
                return Err(SensorError::NotPresent);
            }

            debug!("identify: register {:#x} mismatch, retry {}", code.reg, misses);
            retries += 1;
            delay.delay_us(policy.retry_backoff_us);
        }
    }

    info!("identify: device confirmed after {} retries", retries);
    Ok(Identified { retries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camsense_hal::mock::{MockBus, MockDelay};

    const CODES: [IdentityCode; 2] = [IdentityCode::new(0x04, 0x92), IdentityCode::new(0x05, 0x31)];

    #[test]
    fn test_all_match_first_try() {
        let mut bus = MockBus::new().with_register(0x04, 0x92).with_register(0x05, 0x31);
        let mut delay = MockDelay::new();

        let id = identify(&mut bus, &mut delay, &CODES, &IdentifyPolicy::default()).unwrap();

        assert_eq!(id.retries, 0);
        assert_eq!(bus.reads().as_slice(), &[0x04, 0x05]);
        assert_eq!(delay.calls(), 0);
    }

    #[test]
    fn test_second_pair_exhausts_retries() {
        let mut bus = MockBus::new().with_register(0x04, 0x92).with_register(0x05, 0x00);
        let mut delay = MockDelay::new();

        let result = identify(&mut bus, &mut delay, &CODES, &IdentifyPolicy::default());

        assert_eq!(result, Err(SensorError::NotPresent));
        // pair 1 read once, pair 2 read four times
        assert_eq!(bus.reads().as_slice(), &[0x04, 0x05, 0x05, 0x05, 0x05]);
        assert_eq!(delay.calls(), 3);
    }

    #[test]
    fn test_transient_glitch_recovers() {
        let mut bus = MockBus::new().with_register(0x04, 0x92).with_register(0x05, 0x31);
        bus.script_reads(0x05, &[0xff, 0x00, 0x12]);
        let mut delay = MockDelay::new();

        let id = identify(&mut bus, &mut delay, &CODES, &IdentifyPolicy::default()).unwrap();

        assert_eq!(id.retries, 3);
        assert_eq!(bus.reads().iter().filter(|r| **r == 0x04).count(), 1);
    }

    #[test]
    fn test_first_pair_failure_skips_rest() {
        let mut bus = MockBus::new().with_register(0x05, 0x31);
        let mut delay = MockDelay::new();

        let result = identify(&mut bus, &mut delay, &CODES, &IdentifyPolicy::default());

        assert_eq!(result, Err(SensorError::NotPresent));
        assert!(!bus.reads().contains(&0x05));
    }

    #[test]
    fn test_nack_counts_as_mismatch() {
        let mut bus = MockBus::new().with_register(0x04, 0x92).with_register(0x05, 0x31);
        bus.script_read_error(0x04, BusError::NoAcknowledge);
        let mut delay = MockDelay::new();

        let id = identify(&mut bus, &mut delay, &CODES, &IdentifyPolicy::default()).unwrap();
        assert_eq!(id.retries, 1);
    }

    #[test]
    fn test_other_bus_error_aborts() {
        let mut bus = MockBus::new().with_register(0x04, 0x92);
        bus.script_read_error(0x04, BusError::ArbitrationLoss);
        let mut delay = MockDelay::new();

        let result = identify(&mut bus, &mut delay, &CODES, &IdentifyPolicy::default());

        assert_eq!(result, Err(SensorError::Bus(BusError::ArbitrationLoss)));
        assert_eq!(bus.reads().len(), 1);
    }

    #[test]
    fn test_backoff_follows_policy() {
        let mut bus = MockBus::new();
        let mut delay = MockDelay::new();
        let policy = IdentifyPolicy {
            max_retries: 1,
            retry_backoff_us: 250,
        };

        let result = identify(&mut bus, &mut delay, &CODES, &policy);

        assert_eq!(result, Err(SensorError::NotPresent));
        assert_eq!(bus.reads().len(), 2);
        assert_eq!(delay.elapsed_us(), 250);
    }
}
