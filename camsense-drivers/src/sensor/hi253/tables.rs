//! HI253 mode and attribute tables

use camsense_core::mode::{ImageFormat, ModeEntry};
use camsense_core::sequence::{delay_ms, sequences, write, Directive, RegisterSequence};

use super::init::COMMON_INIT;

/// Register map fragments used by the tables
#[allow(dead_code)]
mod reg {
    /// Page select, present on every page
    pub const PAGE: u8 = 0x03;

    pub const PAGE_SENSOR: u8 = 0x00;
    pub const PAGE_SCALER: u8 = 0x18;
    pub const PAGE_EFFECT: u8 = 0x10;
    pub const PAGE_AE: u8 = 0x20;
    pub const PAGE_AWB: u8 = 0x22;

    // page 0x10
    pub const ISP_CTL2: u8 = 0x11;
    pub const ISP_CTL3: u8 = 0x12;
    pub const ISP_CTL4: u8 = 0x13;
    pub const Y_OFFSET: u8 = 0x40;
    pub const FRAME_MODE: u8 = 0x41;
    pub const U_CONST: u8 = 0x44;
    pub const V_CONST: u8 = 0x45;
    pub const CONTRAST_GAIN: u8 = 0x48;
    pub const EXPOSURE_TARGET: u8 = 0x4a;

    // page 0x20
    pub const AE_CTL1: u8 = 0x10;
}

use reg::*;

// Modes

#[rustfmt::skip]
static SVGA: [Directive; 27] = [
    write(PAGE, PAGE_SENSOR), write(0x10, 0x10), write(0x12, 0x04),
    write(PAGE, 0x12), write(0x20, 0x0f), write(0x21, 0x0f),
    write(PAGE, PAGE_SCALER), write(0x12, 0x20), write(0x10, 0x00), write(0x11, 0x00),
    write(0x20, 0x05), write(0x21, 0x00), write(0x22, 0x03), write(0x23, 0xc0),
    write(0x24, 0x00), write(0x25, 0x00), write(0x26, 0x00), write(0x27, 0x00),
    write(0x28, 0x05), write(0x29, 0x00), write(0x2a, 0x03), write(0x2b, 0xc0),
    write(0x2c, 0x0a), write(0x2d, 0x00), write(0x2e, 0x0a), write(0x2f, 0x00),
    write(0x30, 0x44),
];

#[rustfmt::skip]
static SXGA: [Directive; 38] = [
    write(PAGE, PAGE_SENSOR), write(0x10, 0x00), write(0x12, 0x04),
    write(PAGE, 0x12), write(0x20, 0x0f), write(0x21, 0x0f),
    write(PAGE, PAGE_SCALER), write(0x10, 0x07), write(0x11, 0x00), write(0x12, 0x20),
    write(0x20, 0x05), write(0x21, 0x00), write(0x22, 0x03), write(0x23, 0xc0),
    write(0x24, 0x00), write(0x25, 0x04), write(0x26, 0x00), write(0x27, 0x04),
    write(0x28, 0x05), write(0x29, 0x04), write(0x2a, 0x03), write(0x2b, 0xc4),
    write(0x2c, 0x0a), write(0x2d, 0x00), write(0x2e, 0x0a), write(0x2f, 0x00),
    write(0x30, 0x41),
    // padding before the frame restarts
    write(PAGE, 0x00), write(PAGE, 0x00), write(PAGE, 0x00), write(PAGE, 0x00),
    write(PAGE, 0x00), write(PAGE, 0x00), write(PAGE, 0x00), write(PAGE, 0x00),
    write(PAGE, 0x00), write(PAGE, 0x00),
    delay_ms(50),
];

#[rustfmt::skip]
static UXGA: [Directive; 11] = [
    write(PAGE, PAGE_SENSOR), write(0x10, 0x00), write(0x12, 0x04),
    write(PAGE, 0x12), write(0x20, 0x0f), write(0x21, 0x0f),
    write(PAGE, PAGE_SCALER), write(0x10, 0x00), write(0x11, 0x00), write(0x12, 0x00),
    delay_ms(50),
];

/// Mode slots in [`SensorMode`](camsense_core::SensorMode) order
pub static MODES: [Option<ModeEntry>; 9] = [
    Some(ModeEntry::new(RegisterSequence::new(&COMMON_INIT), 640, 480, 24, ImageFormat::Yuv422)),
    Some(ModeEntry::new(RegisterSequence::new(&SVGA), 800, 600, 24, ImageFormat::Yuv422)),
    Some(ModeEntry::new(RegisterSequence::new(&SXGA), 1280, 960, 24, ImageFormat::Yuv422)),
    Some(ModeEntry::new(RegisterSequence::new(&UXGA), 1600, 1200, 24, ImageFormat::Yuv422)),
    None,
    None,
    None,
    None,
    None,
];

// Attributes

/// `(page select, reg <- value)` for each level
const fn levels<const N: usize>(page: u8, reg: u8, values: [u8; N]) -> [[Directive; 2]; N] {
    let mut rows = [[Directive::End; 2]; N];
    let mut i = 0;
    while i < N {
        rows[i] = [write(PAGE, page), write(reg, values[i])];
        i += 1;
    }
    rows
}

// -3 ..= +3
static BRIGHTNESS_ROWS: [[Directive; 2]; 7] =
    levels(PAGE_EFFECT, Y_OFFSET, [0xb0, 0xa0, 0x90, 0x00, 0x20, 0x30, 0x40]);
static CONTRAST_ROWS: [[Directive; 2]; 7] =
    levels(PAGE_EFFECT, CONTRAST_GAIN, [0x50, 0x60, 0x70, 0x85, 0xa0, 0xb0, 0xc0]);
static EXPOSURE_ROWS: [[Directive; 2]; 7] =
    levels(PAGE_EFFECT, EXPOSURE_TARGET, [0x50, 0x60, 0x70, 0x80, 0xa0, 0xb0, 0xc0]);

// normal (30 fps), night (6 fps)
static WORK_MODE_ROWS: [[Directive; 2]; 2] = levels(PAGE_EFFECT, FRAME_MODE, [0x00, 0x10]);

// off, on
static AUTO_EXPOSURE_ROWS: [[Directive; 2]; 2] = levels(PAGE_AE, AE_CTL1, [0x1c, 0x9c]);

pub static BRIGHTNESS: [RegisterSequence<'static>; 7] = sequences(&BRIGHTNESS_ROWS);
pub static CONTRAST: [RegisterSequence<'static>; 7] = sequences(&CONTRAST_ROWS);
pub static EXPOSURE: [RegisterSequence<'static>; 7] = sequences(&EXPOSURE_ROWS);
pub static WORK_MODE: [RegisterSequence<'static>; 2] = sequences(&WORK_MODE_ROWS);
pub static AUTO_EXPOSURE: [RegisterSequence<'static>; 2] = sequences(&AUTO_EXPOSURE_ROWS);

const fn effect(ctl3: u8, ctl4: u8, u: u8, v: u8) -> [Directive; 6] {
    [
        write(PAGE, PAGE_EFFECT),
        write(ISP_CTL2, 0x03),
        write(ISP_CTL3, ctl3),
        write(ISP_CTL4, ctl4),
        write(U_CONST, u),
        write(V_CONST, v),
    ]
}

static EFFECT_ROWS: [[Directive; 6]; 8] = [
    effect(0x30, 0x0a, 0x80, 0x80), // normal
    effect(0x33, 0x02, 0x80, 0x80), // gray
    effect(0x33, 0x02, 0x70, 0xb8), // red
    effect(0x33, 0x22, 0x30, 0x50), // green
    effect(0x33, 0x22, 0xb0, 0x40), // blue
    effect(0x33, 0x22, 0x10, 0x98), // yellow
    effect(0x38, 0x02, 0x80, 0x80), // negative
    effect(0x33, 0x22, 0x40, 0xa8), // sepia
];

/// In [`ImageEffect`](camsense_core::ImageEffect) order
pub static EFFECTS: [RegisterSequence<'static>; 8] = sequences(&EFFECT_ROWS);

#[rustfmt::skip]
static WB_AUTO: [Directive; 5] = [
    write(PAGE, PAGE_AWB),
    write(0x83, 0x5e), write(0x84, 0x10), write(0x85, 0x5e), write(0x86, 0x24),
];

#[rustfmt::skip]
static WB_INCANDESCENT: [Directive; 7] = [
    write(PAGE, PAGE_AWB),
    write(0x80, 0x2a), write(0x82, 0x3f), write(0x83, 0x35),
    write(0x84, 0x28), write(0x85, 0x45), write(0x86, 0x3b),
];

#[rustfmt::skip]
static WB_U30: [Directive; 10] = [
    write(PAGE, PAGE_AWB),
    write(0x10, 0x7b),
    write(0x80, 0x33), write(0x81, 0x20), write(0x82, 0x3d), write(0x83, 0x2e),
    write(0x84, 0x24), write(0x85, 0x43), write(0x86, 0x3d),
    write(0x10, 0x7b),
];

#[rustfmt::skip]
static WB_CWF: [Directive; 7] = [
    write(PAGE, PAGE_AWB),
    write(0x80, 0x20), write(0x82, 0x4d), write(0x83, 0x25),
    write(0x84, 0x1b), write(0x85, 0x55), write(0x86, 0x48),
];

#[rustfmt::skip]
static WB_FLUORESCENT: [Directive; 7] = [
    write(PAGE, PAGE_AWB),
    write(0x80, 0x3d), write(0x82, 0x2e), write(0x83, 0x40),
    write(0x84, 0x33), write(0x85, 0x33), write(0x86, 0x28),
];

#[rustfmt::skip]
static WB_SUNNY: [Directive; 8] = [
    write(PAGE, PAGE_AWB),
    write(0x11, 0x28),
    write(0x80, 0x50), write(0x82, 0x25), write(0x83, 0x55),
    write(0x84, 0x4b), write(0x85, 0x28), write(0x86, 0x20),
];

#[rustfmt::skip]
static WB_CLOUDY: [Directive; 7] = [
    write(PAGE, PAGE_AWB),
    write(0x80, 0x5c), write(0x82, 0x1a), write(0x83, 0x5e),
    write(0x84, 0x5c), write(0x85, 0x1a), write(0x86, 0x19),
];

/// In [`WhiteBalance`](camsense_core::WhiteBalance) order
pub static WHITE_BALANCE: [RegisterSequence<'static>; 7] = [
    RegisterSequence::new(&WB_AUTO),
    RegisterSequence::new(&WB_INCANDESCENT),
    RegisterSequence::new(&WB_U30),
    RegisterSequence::new(&WB_CWF),
    RegisterSequence::new(&WB_FLUORESCENT),
    RegisterSequence::new(&WB_SUNNY),
    RegisterSequence::new(&WB_CLOUDY),
];
