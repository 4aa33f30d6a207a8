//! Flash and snapshot sequencing
//!
//! A two-state machine owned by each sensor instance. `set_flash(true)`
//! arms it; the next `before_snapshot` fires the flash and returns to
//! idle, so one request yields at most one flash.

use camsense_hal::{FlashControl, ModeNotifier};
use embedded_hal::delay::DelayNs;

use crate::mode::SensorMode;

/// Default settling time before a capture (ms)
pub const DEFAULT_SETTLE_MS: u32 = 200;

/// Flash request state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashState {
    #[default]
    Idle,
    Armed,
}

/// What one `before_snapshot` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SnapshotOutcome {
    pub flash_fired: bool,
    pub mode_notified: bool,
}

/// Per-instance snapshot state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SnapshotSequencer {
    flash: FlashState,
    settle_ms: u32,
}

impl Default for SnapshotSequencer {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_MS)
    }
}

impl SnapshotSequencer {
    /// Idle sequencer with the given settling delay
    pub const fn new(settle_ms: u32) -> Self {
        Self {
            flash: FlashState::Idle,
            settle_ms,
        }
    }

    pub const fn flash_state(&self) -> FlashState {
        self.flash
    }

    pub const fn settle_ms(&self) -> u32 {
        self.settle_ms
    }

    /// Change the settling delay; the flash request is untouched
    pub fn set_settle_ms(&mut self, settle_ms: u32) {
        self.settle_ms = settle_ms;
    }

    /// Arm or disarm the flash
    ///
    /// Arming only records the request. Disarming also switches the flash
    /// output off.
    pub fn set_flash<F: FlashControl + ?Sized>(&mut self, request: bool, flash: &mut F) {
        if request {
            debug!("flash armed");
            self.flash = FlashState::Armed;
        } else {
            debug!("flash disarmed");
            self.flash = FlashState::Idle;
            flash.set_flash(false);
        }
    }

    /// Prepare for a capture in `mode`
    pub fn before_snapshot<F, N, D>(
        &mut self,
        mode: u32,
        flash: &mut F,
        notifier: &mut N,
        delay: &mut D,
    ) -> SnapshotOutcome
    where
        F: FlashControl + ?Sized,
        N: ModeNotifier + ?Sized,
        D: DelayNs + ?Sized,
    {
        let flash_fired = self.flash == FlashState::Armed;
        if flash_fired {
            debug!("flash fired");
            flash.set_flash(true);
            self.flash = FlashState::Idle;
        }

        let mode_notified = SensorMode::from_raw(mode).is_some_and(SensorMode::is_snapshot_marker);
        if mode_notified {
            notifier.notify_mode(mode);
        }

        delay.delay_ms(self.settle_ms);

        SnapshotOutcome {
            flash_fired,
            mode_notified,
        }
    }
}
