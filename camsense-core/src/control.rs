//! Control session: the collaborators one sensor instance drives
//!
//! [`Session`] owns the bus handle, the delay provider, the flash output,
//! the mode notifier and the per-instance flash state. Capability handlers
//! see it through the object-safe [`SensorControl`] trait so one handler
//! table serves every board.

use camsense_hal::{FlashControl, ModeNotifier, NoFlash, NoNotifier, RegisterBus};
use embedded_hal::delay::DelayNs;

use crate::error::Result;
use crate::identify::{self, IdentifyPolicy, Identified, IdentityCode};
use crate::sequence::{self, Applied, RegisterSequence};
use crate::snapshot::{FlashState, SnapshotOutcome, SnapshotSequencer};

/// Operations capability handlers may perform on a sensor
pub trait SensorControl {
    /// Write one register
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<()>;

    /// Read one register
    fn read_reg(&mut self, reg: u8) -> Result<u8>;

    /// Run a register sequence
    fn execute(&mut self, sequence: &RegisterSequence<'_>) -> Result<Applied>;

    /// Run the identification protocol against `codes`
    fn identify(&mut self, codes: &[IdentityCode]) -> Result<Identified>;

    /// Arm (`true`) or disarm (`false`) the flash for the next capture
    fn set_flash(&mut self, request: bool);

    /// Flash and mode-hint handling ahead of a capture
    fn before_snapshot(&mut self, mode: u32) -> SnapshotOutcome;

    /// Current flash request state
    fn flash_state(&self) -> FlashState;
}

/// Collaborators and modal state of one sensor instance
pub struct Session<B, D, F = NoFlash, N = NoNotifier> {
    bus: B,
    delay: D,
    flash: F,
    notifier: N,
    snapshot: SnapshotSequencer,
    policy: IdentifyPolicy,
}

impl<B, D> Session<B, D> {
    /// Session for a board without flash or mode hints
    pub fn new(bus: B, delay: D) -> Self {
        Self::with_collaborators(bus, delay, NoFlash, NoNotifier)
    }
}

impl<B, D, F, N> Session<B, D, F, N> {
    /// Session with every collaborator supplied
    pub fn with_collaborators(bus: B, delay: D, flash: F, notifier: N) -> Self {
        Self {
            bus,
            delay,
            flash,
            notifier,
            snapshot: SnapshotSequencer::default(),
            policy: IdentifyPolicy::default(),
        }
    }

    /// Replace the identification policy
    #[must_use]
    pub fn with_policy(mut self, policy: IdentifyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the pre-capture settling delay
    #[must_use]
    pub fn with_settle_ms(mut self, settle_ms: u32) -> Self {
        self.snapshot.set_settle_ms(settle_ms);
        self
    }

    pub fn policy(&self) -> &IdentifyPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: IdentifyPolicy) {
        self.policy = policy;
    }

    pub fn set_settle_ms(&mut self, settle_ms: u32) {
        self.snapshot.set_settle_ms(settle_ms);
    }

    pub fn snapshot(&self) -> &SnapshotSequencer {
        &self.snapshot
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn flash(&self) -> &F {
        &self.flash
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Give the collaborators back
    pub fn release(self) -> (B, D, F, N) {
        (self.bus, self.delay, self.flash, self.notifier)
    }
}

impl<B, D, F, N> SensorControl for Session<B, D, F, N>
where
    B: RegisterBus,
    D: DelayNs,
    F: FlashControl,
    N: ModeNotifier,
{
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<()> {
        Ok(self.bus.write_reg(reg, value)?)
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8> {
        Ok(self.bus.read_reg(reg)?)
    }

    fn execute(&mut self, sequence: &RegisterSequence<'_>) -> Result<Applied> {
        sequence::execute(sequence, &mut self.bus, &mut self.delay)
    }

    fn identify(&mut self, codes: &[IdentityCode]) -> Result<Identified> {
        identify::identify(&mut self.bus, &mut self.delay, codes, &self.policy)
    }

    fn set_flash(&mut self, request: bool) {
        self.snapshot.set_flash(request, &mut self.flash);
    }

    fn before_snapshot(&mut self, mode: u32) -> SnapshotOutcome {
        self.snapshot
            .before_snapshot(mode, &mut self.flash, &mut self.notifier, &mut self.delay)
    }

    fn flash_state(&self) -> FlashState {
        self.snapshot.flash_state()
    }
}
