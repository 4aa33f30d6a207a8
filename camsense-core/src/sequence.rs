//! Register sequences and their interpreter
//!
//! A register sequence is an ordered list of [`Directive`]s: plain register
//! writes plus embedded delays. Sequences end at the end of their slice or
//! at the first [`Directive::End`], whichever comes first. Because the
//! directive kind is part of the type, a write of `0xFF` to register
//! `0xFF` is an ordinary write and can never be mistaken for the end
//! marker.

use camsense_hal::RegisterBus;
use embedded_hal::delay::DelayNs;

use crate::error::{Result, SensorError};

/// One step of a register sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Directive {
    /// Write `value` to register `reg`
    Write { reg: u8, value: u8 },
    /// Block the calling thread for `ms` milliseconds
    Delay { ms: u16 },
    /// Stop executing the sequence
    End,
}

/// Shorthand for [`Directive::Write`], used by the compiled-in tables
pub const fn write(reg: u8, value: u8) -> Directive {
    Directive::Write { reg, value }
}

/// Shorthand for [`Directive::Delay`]
pub const fn delay_ms(ms: u16) -> Directive {
    Directive::Delay { ms }
}

/// Immutable, ordered list of directives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterSequence<'a> {
    directives: &'a [Directive],
}

impl RegisterSequence<'static> {
    /// Sequence with no directives
    pub const EMPTY: Self = Self { directives: &[] };
}

impl<'a> RegisterSequence<'a> {
    /// Wrap a directive list
    pub const fn new(directives: &'a [Directive]) -> Self {
        Self { directives }
    }

    /// Directives as stored, including anything after an `End`
    pub fn raw(&self) -> &'a [Directive] {
        self.directives
    }

    /// Directives that will actually run
    pub fn active(&self) -> &'a [Directive] {
        let end = self
            .directives
            .iter()
            .position(|d| *d == Directive::End)
            .unwrap_or(self.directives.len());
        &self.directives[..end]
    }

    /// Whether running this sequence would touch nothing
    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }

    /// Number of bus writes the sequence issues
    pub fn write_count(&self) -> usize {
        self.active()
            .iter()
            .filter(|d| matches!(d, Directive::Write { .. }))
            .count()
    }

    /// Sum of all embedded delays in milliseconds
    pub fn total_delay_ms(&self) -> u32 {
        self.active()
            .iter()
            .map(|d| match *d {
                Directive::Delay { ms } => u32::from(ms),
                _ => 0,
            })
            .sum()
    }
}

/// Wrap each row of a fixed-shape table as its own sequence
///
/// Lets level tables whose entries share a length be written as one
/// two-dimensional static.
pub const fn sequences<const N: usize, const L: usize>(
    rows: &'static [[Directive; L]; N],
) -> [RegisterSequence<'static>; N] {
    let mut out = [RegisterSequence::EMPTY; N];
    let mut i = 0;
    while i < N {
        out[i] = RegisterSequence::new(&rows[i]);
        i += 1;
    }
    out
}

/// What one execution of a sequence did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Applied {
    /// Register writes issued
    pub writes: usize,
    /// Time spent in delay directives (ms)
    pub delay_ms: u32,
}

/// Run `sequence` against `bus`
///
/// Directives execute strictly in order. Writes are not read back or
/// retried; the first failing write aborts the sequence and is returned as
/// [`SensorError::Bus`], leaving the device partially configured. Delay
/// directives block through `delay` with the bus idle.
pub fn execute<B, D>(sequence: &RegisterSequence<'_>, bus: &mut B, delay: &mut D) -> Result<Applied>
where
    B: RegisterBus + ?Sized,
    D: DelayNs + ?Sized,
{
    let mut applied = Applied::default();

    for (index, directive) in sequence.raw().iter().enumerate() {
        match *directive {
            Directive::End => break,
            Directive::Delay { ms } => {
                trace!("delay {} ms", ms);
                delay.delay_ms(u32::from(ms));
                applied.delay_ms += u32::from(ms);
            }
            Directive::Write { reg, value } => {
                trace!("write {:#x} <- {:#x}", reg, value);
                if let Err(e) = bus.write_reg(reg, value) {
                    error!("bus failure at directive {} (reg {:#x}): {}", index, reg, e);
                    return Err(SensorError::Bus(e));
                }
                applied.writes += 1;
            }
        }
    }

    Ok(applied)
}
