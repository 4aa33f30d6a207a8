//! Recording collaborators for host-side testing without hardware.
//!
//! Everything here is allocation-free so it can be used from `no_std`
//! test crates. Recording buffers are bounded; overflowing one panics
//! rather than dropping events.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use heapless::Vec;

use crate::flash::{FlashControl, ModeNotifier};
use crate::i2c::{BusError, RegisterBus};

/// Maximum number of bus events a mock keeps
pub const MAX_RECORDED: usize = 2048;

/// Maximum number of scripted read responses
pub const MAX_SCRIPTED: usize = 64;

/// One recorded register access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    /// `write_reg(reg, value)`
    Write { reg: u8, value: u8 },
    /// `read_reg(reg)`
    Read { reg: u8 },
}

/// Register bus that records every access
///
/// Reads return scripted responses first (in the order they were queued
/// for that register), then fall back to the last value written.
pub struct MockBus {
    registers: [u8; 256],
    events: Vec<BusEvent, MAX_RECORDED>,
    scripted: Vec<(u8, Result<u8, BusError>), MAX_SCRIPTED>,
    fail_writes_after: Option<usize>,
    write_count: usize,
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBus {
    /// Create a bus whose registers all read as zero
    pub fn new() -> Self {
        Self {
            registers: [0; 256],
            events: Vec::new(),
            scripted: Vec::new(),
            fail_writes_after: None,
            write_count: 0,
        }
    }

    /// Preset a register value
    #[must_use]
    pub fn with_register(mut self, reg: u8, value: u8) -> Self {
        self.set_register(reg, value);
        self
    }

    /// Fail every write after the first `n` succeeded
    #[must_use]
    pub fn fail_writes_after(mut self, n: usize) -> Self {
        self.fail_writes_after = Some(n);
        self
    }

    /// Stop injecting write failures
    pub fn clear_failure(&mut self) {
        self.fail_writes_after = None;
    }

    /// Preset a register value
    pub fn set_register(&mut self, reg: u8, value: u8) {
        self.registers[reg as usize] = value;
    }

    /// Queue read responses for `reg`, consumed one per read
    pub fn script_reads(&mut self, reg: u8, values: &[u8]) {
        for &value in values {
            self.scripted.push((reg, Ok(value))).expect("mock capacity");
        }
    }

    /// Queue a failing read for `reg`
    pub fn script_read_error(&mut self, reg: u8, error: BusError) {
        self.scripted.push((reg, Err(error))).expect("mock capacity");
    }

    /// All recorded accesses in order
    pub fn events(&self) -> &[BusEvent] {
        &self.events
    }

    /// Recorded writes in order
    pub fn writes(&self) -> Vec<(u8, u8), MAX_RECORDED> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                BusEvent::Write { reg, value } => Some((reg, value)),
                BusEvent::Read { .. } => None,
            })
            .collect()
    }

    /// Recorded read addresses in order
    pub fn reads(&self) -> Vec<u8, MAX_RECORDED> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                BusEvent::Read { reg } => Some(reg),
                BusEvent::Write { .. } => None,
            })
            .collect()
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Forget recorded events (register contents are kept)
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl RegisterBus for MockBus {
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), BusError> {
        if let Some(limit) = self.fail_writes_after {
            if self.write_count >= limit {
                return Err(BusError::Bus);
            }
        }

        self.registers[reg as usize] = value;
        self.write_count += 1;
        self.events.push(BusEvent::Write { reg, value }).expect("mock capacity");
        Ok(())
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, BusError> {
        self.events.push(BusEvent::Read { reg }).expect("mock capacity");

        if let Some(pos) = self.scripted.iter().position(|(r, _)| *r == reg) {
            let (_, response) = self.scripted.remove(pos);
            return response;
        }

        Ok(self.registers[reg as usize])
    }
}

/// Delay that only accumulates the requested time
#[derive(Debug, Default)]
pub struct MockDelay {
    elapsed_ns: u64,
    calls: usize,
}

impl MockDelay {
    /// Create a delay with zero elapsed time
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requested time in milliseconds (truncated)
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }

    /// Total requested time in microseconds (truncated)
    pub fn elapsed_us(&self) -> u64 {
        self.elapsed_ns / 1_000
    }

    /// Number of delay calls
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
        self.calls += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_ns += u64::from(us) * 1_000;
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
        self.calls += 1;
    }
}

/// Flash output that counts how often it was fired
#[derive(Debug, Default)]
pub struct MockFlash {
    on: bool,
    fired: usize,
}

impl MockFlash {
    /// Create an idle flash
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_flash(true)` calls
    pub fn fired(&self) -> usize {
        self.fired
    }

    /// Last commanded state
    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl FlashControl for MockFlash {
    fn set_flash(&mut self, on: bool) {
        if on {
            self.fired += 1;
        }
        self.on = on;
    }
}

/// Notifier that records every announced mode
#[derive(Debug, Default)]
pub struct MockNotifier {
    modes: Vec<u32, 16>,
}

impl MockNotifier {
    /// Create an empty notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Announced modes in order
    pub fn modes(&self) -> &[u32] {
        &self.modes
    }
}

impl ModeNotifier for MockNotifier {
    fn notify_mode(&mut self, mode: u32) {
        self.modes.push(mode).expect("mock capacity");
    }
}

/// Single-device I2C master with an auto-incrementing register file
pub struct MockI2c {
    address: u8,
    registers: [u8; 256],
    pointer: u8,
    writes: Vec<(u8, u8), MAX_RECORDED>,
}

impl MockI2c {
    /// Create a bus with one device answering at 7-bit `address`
    pub fn new(address: u8) -> Self {
        Self {
            address,
            registers: [0; 256],
            pointer: 0,
            writes: Vec::new(),
        }
    }

    /// Preset a register value
    pub fn set_register(&mut self, reg: u8, value: u8) {
        self.registers[reg as usize] = value;
    }

    /// Register writes seen by the device
    pub fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => match **bytes {
                    [] => {}
                    [reg] => self.pointer = reg,
                    [reg, value, ..] => {
                        self.registers[reg as usize] = value;
                        self.writes.push((reg, value)).expect("mock capacity");
                        self.pointer = reg.wrapping_add(1);
                    }
                },
                Operation::Read(buf) => {
                    for byte in buf.iter_mut() {
                        *byte = self.registers[self.pointer as usize];
                        self.pointer = self.pointer.wrapping_add(1);
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_bus_scripted_reads_take_priority() {
        let mut bus = MockBus::new().with_register(0x04, 0x92);
        bus.script_reads(0x04, &[0x00, 0x11]);

        assert_eq!(bus.read_reg(0x04).unwrap(), 0x00);
        assert_eq!(bus.read_reg(0x04).unwrap(), 0x11);
        assert_eq!(bus.read_reg(0x04).unwrap(), 0x92);
        assert_eq!(bus.reads().as_slice(), &[0x04, 0x04, 0x04]);
    }

    #[test]
    fn test_mock_bus_write_failure_injection() {
        let mut bus = MockBus::new().fail_writes_after(1);

        assert!(bus.write_reg(0x03, 0x00).is_ok());
        assert_eq!(bus.write_reg(0x10, 0x10), Err(BusError::Bus));
        assert_eq!(bus.write_count(), 1);

        bus.clear_failure();
        assert!(bus.write_reg(0x10, 0x10).is_ok());
        assert_eq!(bus.write_count(), 2);
    }

    #[test]
    #[should_panic(expected = "mock capacity")]
    fn test_mock_bus_overflow_panics() {
        let mut bus = MockBus::new();
        for i in 0..=MAX_RECORDED {
            let _ = bus.write_reg(i as u8, 0x00);
        }
    }

    #[test]
    #[should_panic(expected = "mock capacity")]
    fn test_scripted_overflow_panics() {
        let mut bus = MockBus::new();
        bus.script_reads(0x04, &[0x00; MAX_SCRIPTED + 1]);
    }

    #[test]
    fn test_mock_delay_accumulates() {
        let mut delay = MockDelay::new();
        delay.delay_ms(10);
        delay.delay_us(500);

        assert_eq!(delay.elapsed_ms(), 10);
        assert_eq!(delay.elapsed_us(), 10_500);
        assert_eq!(delay.calls(), 2);
    }
}
