//! GPIO flash output
//!
//! Drives a flash LED (or its driver's enable line) from one GPIO pin.

use camsense_core::SensorConfig;
use camsense_hal::FlashControl;
use embedded_hal::digital::OutputPin;

/// Flash controlled by a single GPIO pin
///
/// The pin can be active-high (default) or active-low. Pin errors cannot
/// be reported through [`FlashControl`], so they latch a fault flag
/// instead.
pub struct GpioFlash<P> {
    pin: P,
    /// If true, flash ON = pin LOW
    inverted: bool,
    /// Current logical state (true = flash on)
    on: bool,
    fault: bool,
}

impl<P: OutputPin> GpioFlash<P> {
    /// Create a flash output, initially off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut flash = Self {
            pin,
            inverted,
            on: false,
            fault: false,
        };
        flash.set_flash(false);
        flash
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Polarity from the board's `flash_active_low` setting
    pub fn from_config(pin: P, config: &SensorConfig) -> Self {
        Self::new(pin, config.flash_active_low)
    }

    /// Last commanded state
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Whether a pin write has failed since creation
    pub fn has_fault(&self) -> bool {
        self.fault
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> FlashControl for GpioFlash<P> {
    fn set_flash(&mut self, on: bool) {
        self.on = on;

        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };

        if result.is_err() {
            self.fault = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    /// Pin whose writes always fail
    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn test_active_high_flash() {
        let mut flash = GpioFlash::new_active_high(MockPin { high: true });

        // forced off on creation
        assert!(!flash.is_on());
        assert!(!flash.pin.high);

        flash.set_flash(true);
        assert!(flash.is_on());
        assert!(flash.pin.high);

        flash.set_flash(false);
        assert!(!flash.pin.high);
    }

    #[test]
    fn test_active_low_flash() {
        let mut flash = GpioFlash::new_active_low(MockPin { high: false });

        assert!(!flash.is_on());
        assert!(flash.pin.high);

        flash.set_flash(true);
        assert!(flash.is_on());
        assert!(!flash.pin.high);
    }

    #[test]
    fn test_polarity_from_config() {
        let config = SensorConfig {
            flash_active_low: true,
            ..SensorConfig::default()
        };
        let mut low = GpioFlash::from_config(MockPin { high: false }, &config);
        let mut high = GpioFlash::from_config(MockPin { high: true }, &SensorConfig::default());

        assert!(low.pin.high);
        assert!(!high.pin.high);

        low.set_flash(true);
        high.set_flash(true);
        assert!(!low.pin.high);
        assert!(high.pin.high);
    }

    #[test]
    fn test_pin_error_latches_fault() {
        let mut flash = GpioFlash::new_active_high(BrokenPin);
        assert!(flash.has_fault());

        flash.set_flash(true);
        assert!(flash.is_on());
    }
}
