//! Camera flash and capture-mode collaborators
//!
//! Snapshot sequencing needs two things from the board: a way to fire the
//! flash and a way to tell the capture pipeline that the sensor is about to
//! switch into a snapshot mode.

/// Camera flash output
pub trait FlashControl {
    /// Turn the flash on or off
    fn set_flash(&mut self, on: bool);
}

impl<T: FlashControl + ?Sized> FlashControl for &mut T {
    fn set_flash(&mut self, on: bool) {
        T::set_flash(self, on)
    }
}

/// Receiver of mode-transition hints
///
/// `mode` is the raw sensor mode index the driver is about to capture in.
pub trait ModeNotifier {
    /// Announce an upcoming mode transition
    fn notify_mode(&mut self, mode: u32);
}

impl<T: ModeNotifier + ?Sized> ModeNotifier for &mut T {
    fn notify_mode(&mut self, mode: u32) {
        T::notify_mode(self, mode)
    }
}

/// Flash output for boards without a flash
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFlash;

impl FlashControl for NoFlash {
    fn set_flash(&mut self, _on: bool) {}
}

/// Mode notifier that discards every hint
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNotifier;

impl ModeNotifier for NoNotifier {
    fn notify_mode(&mut self, _mode: u32) {}
}
