//! Register bus abstractions
//!
//! Image sensors of this family expose an SCCB-style register file: one
//! address byte followed by one data byte. [`RegisterBus`] is the only
//! primitive the core needs; [`SccbBus`] implements it on top of any
//! embedded-hal I2C master.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// Control bus failure
///
/// Mirrors the portable subset of [`embedded_hal::i2c::ErrorKind`] so
/// higher layers can stay free of the bus implementation's error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Device did not acknowledge its address or a data byte
    NoAcknowledge,
    /// Lost arbitration to another master
    ArbitrationLoss,
    /// Misplaced START/STOP or other bus-level fault
    Bus,
    /// Data overrun or underrun in the controller
    Overrun,
    /// Anything the controller could not classify
    Other,
}

impl From<ErrorKind> for BusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(_) => BusError::NoAcknowledge,
            ErrorKind::ArbitrationLoss => BusError::ArbitrationLoss,
            ErrorKind::Bus => BusError::Bus,
            ErrorKind::Overrun => BusError::Overrun,
            _ => BusError::Other,
        }
    }
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BusError::NoAcknowledge => f.write_str("no acknowledge"),
            BusError::ArbitrationLoss => f.write_str("arbitration lost"),
            BusError::Bus => f.write_str("bus error"),
            BusError::Overrun => f.write_str("overrun"),
            BusError::Other => f.write_str("unclassified bus error"),
        }
    }
}

/// Register-addressed control bus
///
/// Both operations are synchronous. A returned error means the transfer
/// did not complete; implementations must not retry on their own behalf
/// unless that is their documented policy.
pub trait RegisterBus {
    /// Write `value` to register `reg`
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), BusError>;

    /// Read the current value of register `reg`
    fn read_reg(&mut self, reg: u8) -> Result<u8, BusError>;
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), BusError> {
        T::write_reg(self, reg, value)
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, BusError> {
        T::read_reg(self, reg)
    }
}

/// SCCB register access over an embedded-hal I2C master
///
/// Writes are a single `[reg, value]` transfer; reads are a write of the
/// register address followed by a repeated-start read of one byte.
pub struct SccbBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> SccbBus<I2C> {
    /// Create an adapter for the device at 7-bit `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the underlying I2C master
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterBus for SccbBus<I2C> {
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), BusError> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|e| BusError::from(e.kind()))
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, BusError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(|e| BusError::from(e.kind()))?;
        Ok(buf[0])
    }
}
