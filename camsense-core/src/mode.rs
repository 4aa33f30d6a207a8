//! Output modes and the per-sensor mode table
//!
//! Slot position carries meaning: slot N of a [`ModeTable`] always realizes
//! [`SensorMode`] N, and unsupported modes are explicit `None` slots.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SensorError};
use crate::sequence::RegisterSequence;

/// Pixel encoding produced by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageFormat {
    Yuv422,
    Yuv420,
    Rgb565,
    Raw,
    Jpeg,
}

/// Component order of a YUV422 stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImagePattern {
    Yuyv,
    Yvyu,
    Uyvy,
    Vyuy,
}

/// Mode slot identities
///
/// The first slot is the common initialization applied once at attach;
/// the remaining slots are requested by the capture pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum SensorMode {
    CommonInit = 0,
    PreviewOne = 1,
    SnapshotOneFirst = 2,
    SnapshotOneSecond = 3,
    SnapshotOneThird = 4,
    PreviewTwo = 5,
    SnapshotTwoFirst = 6,
    SnapshotTwoSecond = 7,
    SnapshotTwoThird = 8,
}

impl SensorMode {
    /// Number of mode slots
    pub const COUNT: usize = 9;

    /// Every mode in slot order
    pub const ALL: [SensorMode; Self::COUNT] = [
        SensorMode::CommonInit,
        SensorMode::PreviewOne,
        SensorMode::SnapshotOneFirst,
        SensorMode::SnapshotOneSecond,
        SensorMode::SnapshotOneThird,
        SensorMode::PreviewTwo,
        SensorMode::SnapshotTwoFirst,
        SensorMode::SnapshotTwoSecond,
        SensorMode::SnapshotTwoThird,
    ];

    /// Slot index
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Raw mode id as used on the capability surface
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Decode a raw mode id
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.get(usize::try_from(raw).ok()?).copied()
    }

    /// Modes that must be announced to the capture pipeline before a snapshot
    pub const fn is_snapshot_marker(self) -> bool {
        matches!(self, SensorMode::SnapshotOneFirst | SensorMode::SnapshotOneSecond)
    }
}

/// Declared output of a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeGeometry {
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub format: ImageFormat,
}

/// One populated mode slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeEntry {
    /// Registers that switch the sensor into this mode
    pub sequence: RegisterSequence<'static>,
    /// Output declared for this mode
    pub geometry: ModeGeometry,
}

impl ModeEntry {
    pub const fn new(
        sequence: RegisterSequence<'static>,
        width: u16,
        height: u16,
        bits_per_pixel: u8,
        format: ImageFormat,
    ) -> Self {
        Self {
            sequence,
            geometry: ModeGeometry {
                width,
                height,
                bits_per_pixel,
                format,
            },
        }
    }
}

/// Ordered mode slots of one sensor variant
#[derive(Debug, Clone, Copy)]
pub struct ModeTable {
    slots: &'static [Option<ModeEntry>],
}

impl ModeTable {
    /// Wrap a slot list; missing trailing slots count as empty
    pub const fn new(slots: &'static [Option<ModeEntry>]) -> Self {
        Self { slots }
    }

    /// Common initialization entry (slot 0)
    pub fn common_init(&self) -> Option<&'static ModeEntry> {
        self.slot(SensorMode::CommonInit.index())
    }

    /// Entry for `mode`, or `UnsupportedMode` for an empty slot
    pub fn entry(&self, mode: SensorMode) -> Result<&'static ModeEntry> {
        self.slot(mode.index())
            .ok_or(SensorError::UnsupportedMode(mode.raw()))
    }

    /// Entry for a raw mode id
    pub fn entry_raw(&self, raw: u32) -> Result<&'static ModeEntry> {
        let mode = SensorMode::from_raw(raw).ok_or(SensorError::UnsupportedMode(raw))?;
        self.entry(mode)
    }

    /// Whether `mode` has a populated slot
    pub fn supports(&self, mode: SensorMode) -> bool {
        self.slot(mode.index()).is_some()
    }

    /// Populated modes in slot order, excluding common init
    pub fn supported_modes(&self) -> impl Iterator<Item = SensorMode> + '_ {
        SensorMode::ALL[1..]
            .iter()
            .copied()
            .filter(move |mode| self.supports(*mode))
    }

    /// Largest declared output over all populated modes
    pub fn largest(&self) -> Option<ModeGeometry> {
        self.slots
            .iter()
            .flatten()
            .map(|entry| entry.geometry)
            .max_by_key(|g| u32::from(g.width) * u32::from(g.height))
    }

    fn slot(&self, index: usize) -> Option<&'static ModeEntry> {
        let slots: &'static [Option<ModeEntry>] = self.slots;
        slots.get(index).and_then(Option::as_ref)
    }
}
