//! Parameterized attribute tables
//!
//! Each tunable attribute (brightness, contrast, exposure compensation,
//! color effect, white balance, ...) is a small array of register
//! sequences indexed by level. Lookups are range checked; an out-of-range
//! level is rejected before any bus traffic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::error::{Result, SensorError};
use crate::sequence::RegisterSequence;

/// Tunable attribute families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttributeKind {
    Brightness,
    Contrast,
    ExposureCompensation,
    Effect,
    WhiteBalance,
    /// Frame-rate work mode (normal / night)
    WorkMode,
    /// Auto exposure off (0) or on (1)
    AutoExposure,
}

impl AttributeKind {
    /// Every attribute kind
    pub const ALL: [AttributeKind; 7] = [
        AttributeKind::Brightness,
        AttributeKind::Contrast,
        AttributeKind::ExposureCompensation,
        AttributeKind::Effect,
        AttributeKind::WhiteBalance,
        AttributeKind::WorkMode,
        AttributeKind::AutoExposure,
    ];

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            AttributeKind::Brightness => "brightness",
            AttributeKind::Contrast => "contrast",
            AttributeKind::ExposureCompensation => "exposure compensation",
            AttributeKind::Effect => "image effect",
            AttributeKind::WhiteBalance => "white balance",
            AttributeKind::WorkMode => "work mode",
            AttributeKind::AutoExposure => "auto exposure",
        }
    }

    /// Capability slot that sets this attribute
    pub const fn capability(self) -> Capability {
        match self {
            AttributeKind::Brightness => Capability::SetBrightness,
            AttributeKind::Contrast => Capability::SetContrast,
            AttributeKind::ExposureCompensation => Capability::SetExposureCompensation,
            AttributeKind::Effect => Capability::SetImageEffect,
            AttributeKind::WhiteBalance => Capability::SetWhiteBalance,
            AttributeKind::WorkMode => Capability::SetPreviewMode,
            AttributeKind::AutoExposure => Capability::SetExposureAuto,
        }
    }
}

/// Register sequences for one attribute, indexed by level
#[derive(Debug, Clone, Copy)]
pub struct LevelTable {
    levels: &'static [RegisterSequence<'static>],
}

impl LevelTable {
    pub const fn new(levels: &'static [RegisterSequence<'static>]) -> Self {
        Self { levels }
    }

    /// Number of valid levels
    pub const fn len(&self) -> usize {
        self.levels.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Sequence for `level`, if in range
    pub fn get(&self, level: u32) -> Option<RegisterSequence<'static>> {
        let index = usize::try_from(level).ok()?;
        self.levels.get(index).copied()
    }
}

/// All attribute tables of one sensor variant
///
/// Kinds the variant does not support are `None`.
#[derive(Debug, Clone, Copy)]
pub struct AttributeTables {
    pub brightness: Option<LevelTable>,
    pub contrast: Option<LevelTable>,
    pub exposure_compensation: Option<LevelTable>,
    pub effect: Option<LevelTable>,
    pub white_balance: Option<LevelTable>,
    pub work_mode: Option<LevelTable>,
    pub auto_exposure: Option<LevelTable>,
}

impl AttributeTables {
    /// No attribute supported
    pub const NONE: Self = Self {
        brightness: None,
        contrast: None,
        exposure_compensation: None,
        effect: None,
        white_balance: None,
        work_mode: None,
        auto_exposure: None,
    };

    /// Table for `kind`
    pub fn table(&self, kind: AttributeKind) -> Option<&LevelTable> {
        match kind {
            AttributeKind::Brightness => self.brightness.as_ref(),
            AttributeKind::Contrast => self.contrast.as_ref(),
            AttributeKind::ExposureCompensation => self.exposure_compensation.as_ref(),
            AttributeKind::Effect => self.effect.as_ref(),
            AttributeKind::WhiteBalance => self.white_balance.as_ref(),
            AttributeKind::WorkMode => self.work_mode.as_ref(),
            AttributeKind::AutoExposure => self.auto_exposure.as_ref(),
        }
    }

    /// Number of levels for `kind` (0 when unsupported)
    pub fn levels(&self, kind: AttributeKind) -> usize {
        self.table(kind).map_or(0, LevelTable::len)
    }

    /// Range-checked lookup
    ///
    /// Fails with `Unsupported` when the variant has no table for `kind` and
    /// with `InvalidLevel` when `level` is past the end of it.
    pub fn select(&self, kind: AttributeKind, level: u32) -> Result<RegisterSequence<'static>> {
        let table = self
            .table(kind)
            .ok_or(SensorError::Unsupported(kind.capability()))?;
        table
            .get(level)
            .ok_or(SensorError::InvalidLevel { kind, level })
    }
}

/// Color effect presets in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageEffect {
    Normal = 0,
    BlackWhite = 1,
    Red = 2,
    Green = 3,
    Blue = 4,
    Yellow = 5,
    Negative = 6,
    Sepia = 7,
}

impl ImageEffect {
    pub const fn level(self) -> u32 {
        self as u32
    }

    /// Bit for a supported-effects mask
    pub const fn mask(self) -> u32 {
        1 << (self as u32)
    }
}

/// White-balance presets in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WhiteBalance {
    Auto = 0,
    Incandescent = 1,
    U30 = 2,
    Cwf = 3,
    Fluorescent = 4,
    Sunny = 5,
    Cloudy = 6,
}

impl WhiteBalance {
    pub const fn level(self) -> u32 {
        self as u32
    }
}

/// Scene environments accepted by `set_preview_mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Environment {
    Normal = 0,
    Night = 1,
    Sunny = 2,
    Sports = 3,
    Landscape = 4,
}

impl Environment {
    /// Decode a raw environment id
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Environment::Normal),
            1 => Some(Environment::Night),
            2 => Some(Environment::Sunny),
            3 => Some(Environment::Sports),
            4 => Some(Environment::Landscape),
            _ => None,
        }
    }

    /// Work-mode level realizing this environment
    ///
    /// Only night scenes switch to the low frame-rate table.
    pub const fn work_mode(self) -> u32 {
        match self {
            Environment::Night => 1,
            _ => 0,
        }
    }

    /// Bit for a supported-environments mask
    pub const fn mask(self) -> u32 {
        1 << (self as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{write, Directive};
    use proptest::prelude::*;

    static LOW: [Directive; 2] = [write(0x03, 0x10), write(0x40, 0xb0)];
    static MID: [Directive; 2] = [write(0x03, 0x10), write(0x40, 0x00)];
    static HIGH: [Directive; 2] = [write(0x03, 0x10), write(0x40, 0x40)];

    static BRIGHTNESS: [RegisterSequence<'static>; 3] = [
        RegisterSequence::new(&LOW),
        RegisterSequence::new(&MID),
        RegisterSequence::new(&HIGH),
    ];

    const TABLES: AttributeTables = AttributeTables {
        brightness: Some(LevelTable::new(&BRIGHTNESS)),
        ..AttributeTables::NONE
    };

    #[test]
    fn test_select_in_range() {
        let seq = TABLES.select(AttributeKind::Brightness, 2).unwrap();
        assert_eq!(seq.raw(), &HIGH);
        assert_eq!(TABLES.levels(AttributeKind::Brightness), 3);
    }

    #[test]
    fn test_select_out_of_range() {
        assert_eq!(
            TABLES.select(AttributeKind::Brightness, 3).unwrap_err(),
            SensorError::InvalidLevel {
                kind: AttributeKind::Brightness,
                level: 3
            }
        );
    }

    #[test]
    fn test_select_missing_table() {
        assert_eq!(
            TABLES.select(AttributeKind::Contrast, 0).unwrap_err(),
            SensorError::Unsupported(Capability::SetContrast)
        );
        assert_eq!(TABLES.levels(AttributeKind::Contrast), 0);
    }

    #[test]
    fn test_environment_work_mode() {
        assert_eq!(Environment::Night.work_mode(), 1);
        assert_eq!(Environment::Sunny.work_mode(), 0);
        assert_eq!(Environment::from_raw(4), Some(Environment::Landscape));
        assert_eq!(Environment::from_raw(5), None);
    }

    proptest! {
        #[test]
        fn prop_level_bound_is_exact(level in any::<u32>()) {
            let result = TABLES.select(AttributeKind::Brightness, level);
            prop_assert_eq!(result.is_ok(), level < 3);
        }
    }
}
