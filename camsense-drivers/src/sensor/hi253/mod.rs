//! Hynix HI253 2MP YUV sensor
//!
//! 1600x1200 SoC sensor with an 8-bit paged register map on an SCCB bus.
//! Register pages are selected by writing the page number to `0x03`.
//!
//! Bound capabilities: identification, auto exposure, brightness,
//! contrast, scene (preview) mode, color effect, white balance, exposure
//! compensation, flash and before-snapshot. Everything else is unbound.

mod init;
mod tables;

use camsense_core::attribute::{AttributeTables, Environment, ImageEffect, LevelTable};
use camsense_core::capability::{Capability, CapabilityTable};
use camsense_core::descriptor::{SensorDescriptor, SensorInfo};
use camsense_core::handlers;
use camsense_core::identify::IdentityCode;
use camsense_core::mode::{ImageFormat, ImagePattern, ModeTable};

pub use init::COMMON_INIT;

/// 7-bit bus address
pub const HI253_ADDR: u8 = 0x20;

/// Device id register and its expected value
pub const CHIP_ID_REG: u8 = 0x04;
pub const CHIP_ID: u8 = 0x92;

/// The id is read twice so a single floating read cannot pass
static IDENTITY: [IdentityCode; 2] = [
    IdentityCode::new(CHIP_ID_REG, CHIP_ID),
    IdentityCode::new(CHIP_ID_REG, CHIP_ID),
];

const EFFECTS: u32 = ImageEffect::Normal.mask()
    | ImageEffect::BlackWhite.mask()
    | ImageEffect::Red.mask()
    | ImageEffect::Green.mask()
    | ImageEffect::Blue.mask()
    | ImageEffect::Yellow.mask()
    | ImageEffect::Negative.mask()
    | ImageEffect::Sepia.mask();

const ENVIRONMENTS: u32 =
    Environment::Normal.mask() | Environment::Night.mask() | Environment::Sunny.mask();

const CAPABILITIES: CapabilityTable = CapabilityTable::EMPTY
    .with(Capability::Identify, handlers::identify)
    .with(Capability::SetExposureAuto, handlers::set_exposure_auto)
    .with(Capability::SetBrightness, handlers::set_brightness)
    .with(Capability::SetContrast, handlers::set_contrast)
    .with(Capability::SetPreviewMode, handlers::set_preview_mode)
    .with(Capability::SetImageEffect, handlers::set_image_effect)
    .with(Capability::BeforeSnapshot, handlers::before_snapshot)
    .with(Capability::Flash, handlers::flash)
    .with(Capability::SetWhiteBalance, handlers::set_white_balance)
    .with(Capability::SetExposureCompensation, handlers::set_exposure_compensation);

/// HI253 descriptor
pub static HI253: SensorDescriptor = SensorDescriptor {
    info: SensorInfo {
        name: "HI253",
        i2c_address: HI253_ADDR,
        reg_bits: 8,
        value_bits: 8,
        max_width: 1600,
        max_height: 1200,
        format: ImageFormat::Yuv422,
        pattern: ImagePattern::Yuyv,
        environments: ENVIRONMENTS,
        effects: EFFECTS,
        level_steps: 7,
        view_angle_h: 48,
        view_angle_v: 48,
        preview_skip_frames: 0,
        capture_skip_frames: 0,
    },
    identity: &IDENTITY,
    modes: ModeTable::new(&tables::MODES),
    attributes: AttributeTables {
        brightness: Some(LevelTable::new(&tables::BRIGHTNESS)),
        contrast: Some(LevelTable::new(&tables::CONTRAST)),
        exposure_compensation: Some(LevelTable::new(&tables::EXPOSURE)),
        effect: Some(LevelTable::new(&tables::EFFECTS)),
        white_balance: Some(LevelTable::new(&tables::WHITE_BALANCE)),
        work_mode: Some(LevelTable::new(&tables::WORK_MODE)),
        auto_exposure: Some(LevelTable::new(&tables::AUTO_EXPOSURE)),
    },
    capabilities: CAPABILITIES,
};
