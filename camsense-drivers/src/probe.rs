//! Multi-variant probe
//!
//! Boards that may carry one of several sensor parts run each candidate's
//! identification protocol at that candidate's bus address until one
//! answers.

use camsense_core::{
    identify, IdentifyPolicy, Result, SensorConfig, SensorDescriptor, SensorError,
};
use camsense_hal::SccbBus;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// A part that answered, and the address it answered on
#[derive(Debug, Clone, Copy)]
pub struct Detected {
    pub descriptor: &'static SensorDescriptor,
    pub address: u8,
}

/// Return the first candidate that identifies
///
/// A candidate that is absent (`NotPresent`) moves the probe on to the
/// next one. Any other failure is a bus fault and ends the probe.
pub fn probe<I2C, D>(
    i2c: &mut I2C,
    delay: &mut D,
    policy: &IdentifyPolicy,
    candidates: &[&'static SensorDescriptor],
) -> Result<&'static SensorDescriptor>
where
    I2C: I2c,
    D: DelayNs,
{
    probe_at(i2c, delay, policy, candidates, SensorDescriptor::address).map(|d| d.descriptor)
}

/// [`probe`] with the board's configuration
///
/// Uses the configured retry policy, and the configured address override
/// in place of each candidate's default. The config is validated first.
pub fn probe_configured<I2C, D>(
    i2c: &mut I2C,
    delay: &mut D,
    config: &SensorConfig,
    candidates: &[&'static SensorDescriptor],
) -> Result<Detected>
where
    I2C: I2c,
    D: DelayNs,
{
    config.validate()?;
    probe_at(i2c, delay, &config.identify, candidates, |candidate| {
        config.address_or(candidate.address())
    })
}

fn probe_at<I2C, D, A>(
    i2c: &mut I2C,
    delay: &mut D,
    policy: &IdentifyPolicy,
    candidates: &[&'static SensorDescriptor],
    address_of: A,
) -> Result<Detected>
where
    I2C: I2c,
    D: DelayNs,
    A: Fn(&SensorDescriptor) -> u8,
{
    for &candidate in candidates {
        let address = address_of(candidate);
        let mut bus = SccbBus::new(&mut *i2c, address);
        match identify(&mut bus, delay, candidate.identity, policy) {
            Ok(_) => {
                return Ok(Detected {
                    descriptor: candidate,
                    address,
                })
            }
            Err(SensorError::NotPresent) => continue,
            Err(e) => return Err(e),
        }
    }

    Err(SensorError::NotPresent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::{HI253, SUPPORTED};
    use camsense_core::ConfigError;
    use camsense_hal::mock::{MockDelay, MockI2c};

    #[test]
    fn test_probe_finds_hi253() {
        let mut i2c = MockI2c::new(0x20);
        i2c.set_register(0x04, 0x92);
        let mut delay = MockDelay::new();

        let found = probe(&mut i2c, &mut delay, &IdentifyPolicy::default(), &SUPPORTED).unwrap();

        assert_eq!(found.name(), HI253.name());
        assert_eq!(delay.calls(), 0);
    }

    #[test]
    fn test_probe_wrong_address() {
        let mut i2c = MockI2c::new(0x3c);
        let mut delay = MockDelay::new();

        let result = probe(&mut i2c, &mut delay, &IdentifyPolicy::default(), &SUPPORTED);

        assert_eq!(result.map(|d| d.name()), Err(SensorError::NotPresent));
    }

    #[test]
    fn test_probe_wrong_part() {
        let mut i2c = MockI2c::new(0x20);
        i2c.set_register(0x04, 0x66);
        let mut delay = MockDelay::new();

        let result = probe(&mut i2c, &mut delay, &IdentifyPolicy::default(), &SUPPORTED);

        assert_eq!(result.map(|d| d.name()), Err(SensorError::NotPresent));
        assert_eq!(delay.calls(), 3);
    }

    #[test]
    fn test_configured_address_override() {
        let mut i2c = MockI2c::new(0x30);
        i2c.set_register(0x04, 0x92);
        let mut delay = MockDelay::new();

        // default address finds nothing
        assert_eq!(
            probe(&mut i2c, &mut delay, &IdentifyPolicy::default(), &SUPPORTED).map(|d| d.name()),
            Err(SensorError::NotPresent)
        );

        let config = SensorConfig {
            i2c_address: Some(0x30),
            ..SensorConfig::default()
        };
        let found = probe_configured(&mut i2c, &mut delay, &config, &SUPPORTED).unwrap();

        assert_eq!(found.descriptor.name(), HI253.name());
        assert_eq!(found.address, 0x30);
        assert_eq!(
            probe_configured(&mut i2c, &mut delay, &SensorConfig::default(), &SUPPORTED)
                .map(|d| d.address),
            Err(SensorError::NotPresent)
        );
    }

    #[test]
    fn test_configured_policy_and_validation() {
        let mut i2c = MockI2c::new(0x20);
        i2c.set_register(0x04, 0x66);
        let mut delay = MockDelay::new();

        let mut config = SensorConfig::default();
        config.identify.max_retries = 1;
        let result = probe_configured(&mut i2c, &mut delay, &config, &SUPPORTED);
        assert_eq!(result.map(|d| d.address), Err(SensorError::NotPresent));
        assert_eq!(delay.calls(), 1);

        config.i2c_address = Some(0x80);
        let result = probe_configured(&mut i2c, &mut delay, &config, &SUPPORTED);
        assert_eq!(
            result.map(|d| d.address),
            Err(SensorError::Config(ConfigError::InvalidAddress(0x80)))
        );
        assert_eq!(delay.calls(), 1);
    }

    #[test]
    fn test_no_candidates() {
        let mut i2c = MockI2c::new(0x20);
        let mut delay = MockDelay::new();

        assert_eq!(
            probe(&mut i2c, &mut delay, &IdentifyPolicy::default(), &[]).map(|d| d.name()),
            Err(SensorError::NotPresent)
        );
    }
}
