//! Static sensor variant descriptors
//!
//! A variant is pure data: identification codes, the mode table, the
//! attribute tables and the capability bindings. Descriptors live in
//! `static`s and are shared read-only by every instance of that part.

use crate::attribute::AttributeTables;
use crate::capability::CapabilityTable;
use crate::identify::IdentityCode;
use crate::mode::{ImageFormat, ImagePattern, ModeTable};

/// Fixed facts about a sensor part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorInfo {
    /// Part name
    pub name: &'static str,
    /// 7-bit control bus address
    pub i2c_address: u8,
    /// Register address width in bits
    pub reg_bits: u8,
    /// Register value width in bits
    pub value_bits: u8,
    pub max_width: u16,
    pub max_height: u16,
    pub format: ImageFormat,
    pub pattern: ImagePattern,
    /// Supported [`Environment`](crate::attribute::Environment) bits
    pub environments: u32,
    /// Supported [`ImageEffect`](crate::attribute::ImageEffect) bits
    pub effects: u32,
    /// Level steps for brightness-like attributes
    pub level_steps: u8,
    /// Horizontal view angle (degrees)
    pub view_angle_h: u8,
    /// Vertical view angle (degrees)
    pub view_angle_v: u8,
    /// Frames to drop after switching into preview
    pub preview_skip_frames: u8,
    /// Frames to drop after switching into capture
    pub capture_skip_frames: u8,
}

/// Everything needed to drive one sensor variant
#[derive(Debug)]
pub struct SensorDescriptor {
    pub info: SensorInfo,
    /// Registers that must all match for positive identification
    pub identity: &'static [IdentityCode],
    pub modes: ModeTable,
    pub attributes: AttributeTables,
    pub capabilities: CapabilityTable,
}

impl SensorDescriptor {
    pub const fn name(&self) -> &'static str {
        self.info.name
    }

    pub const fn address(&self) -> u8 {
        self.info.i2c_address
    }
}
