//! Camera flash outputs

pub mod gpio;

pub use gpio::GpioFlash;
