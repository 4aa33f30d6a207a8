//! HI253 common initialization
//!
//! Applied once at attach. Puts the part to sleep, programs every block
//! page by page and wakes it up again. The runs of `0x03 <- 0x00` writes
//! are bus-time padding the part needs between power-state changes.

use camsense_core::sequence::{write, Directive};

/// Common initialization sequence (640x480 YUV422)
#[rustfmt::skip]
pub static COMMON_INIT: [Directive; 798] = [
    write(0x01, 0x79), write(0x08, 0x0f), write(0x01, 0x78),
    write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00),
    write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00),
    write(0x03, 0x00), write(0x03, 0x00), write(0x0e, 0x03), write(0x0e, 0x73),
    write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00),
    write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00),
    write(0x03, 0x00), write(0x03, 0x00), write(0x0e, 0x00), write(0x01, 0x71),
    write(0x08, 0x00), write(0x01, 0x73), write(0x01, 0x71),
    write(0x03, 0x20), write(0x10, 0x1c),
    write(0x03, 0x22), write(0x10, 0x69),

    // sensor timing
    write(0x03, 0x00), write(0x10, 0x10), write(0x11, 0x93), write(0x12, 0x04),
    write(0x0b, 0xaa), write(0x0c, 0xaa), write(0x0d, 0xaa), write(0x20, 0x00),
    write(0x21, 0x04), write(0x22, 0x00), write(0x23, 0x07), write(0x24, 0x04),
    write(0x25, 0xb0), write(0x26, 0x06), write(0x27, 0x40), write(0x40, 0x01),
    write(0x41, 0x68), write(0x42, 0x00), write(0x43, 0x14), write(0x45, 0x04),
    write(0x46, 0x18), write(0x47, 0xd8), write(0x80, 0x2e), write(0x81, 0x7e),
    write(0x82, 0x90), write(0x83, 0x00), write(0x84, 0x0c), write(0x85, 0x00),
    write(0x90, 0x0c), write(0x91, 0x0c), write(0x92, 0x98), write(0x93, 0x90),
    write(0x94, 0x75), write(0x95, 0x70), write(0x96, 0xdc), write(0x97, 0xfe),
    write(0x98, 0x38), write(0x99, 0x43), write(0x9a, 0x43), write(0x9b, 0x43),
    write(0x9c, 0x43), write(0xa0, 0x40), write(0xa2, 0x40), write(0xa4, 0x40),
    write(0xa6, 0x40), write(0xa8, 0x45), write(0xaa, 0x45), write(0xac, 0x45),
    write(0xae, 0x45),

    // analog
    write(0x03, 0x02), write(0x12, 0x03), write(0x13, 0x03), write(0x16, 0x00),
    write(0x17, 0x8c), write(0x18, 0x4c), write(0x19, 0x00), write(0x1a, 0x39),
    write(0x1c, 0x09), write(0x1d, 0x40), write(0x1e, 0x30), write(0x1f, 0x10),
    write(0x20, 0x77), write(0x21, 0xde), write(0x22, 0xa7), write(0x23, 0x30),
    write(0x27, 0x3c), write(0x2b, 0x80), write(0x2e, 0x00), write(0x2f, 0x00),
    write(0x30, 0x05), write(0x50, 0x20), write(0x52, 0x01), write(0x53, 0xc1),
    write(0x55, 0x1c), write(0x56, 0x11), write(0x5d, 0xa2), write(0x5e, 0x5a),
    write(0x60, 0x87), write(0x61, 0x99), write(0x62, 0x88), write(0x63, 0x97),
    write(0x64, 0x88), write(0x65, 0x97), write(0x67, 0x0c), write(0x68, 0x0c),
    write(0x69, 0x0c), write(0x72, 0x89), write(0x73, 0x96), write(0x74, 0x89),
    write(0x75, 0x96), write(0x76, 0x89), write(0x77, 0x96), write(0x7c, 0x85),
    write(0x7d, 0xaf), write(0x80, 0x01), write(0x81, 0x7f), write(0x82, 0x13),
    write(0x83, 0x24), write(0x84, 0x7d), write(0x85, 0x81), write(0x86, 0x7d),
    write(0x87, 0x81), write(0x92, 0x48), write(0x93, 0x54), write(0x94, 0x7d),
    write(0x95, 0x81), write(0x96, 0x7d), write(0x97, 0x81), write(0xa0, 0x02),
    write(0xa1, 0x7b), write(0xa2, 0x02), write(0xa3, 0x7b), write(0xa4, 0x7b),
    write(0xa5, 0x02), write(0xa6, 0x7b), write(0xa7, 0x02), write(0xa8, 0x85),
    write(0xa9, 0x8c), write(0xaa, 0x85), write(0xab, 0x8c), write(0xac, 0x10),
    write(0xad, 0x16), write(0xae, 0x10), write(0xaf, 0x16), write(0xb0, 0x99),
    write(0xb1, 0xa3), write(0xb2, 0xa4), write(0xb3, 0xae), write(0xb4, 0x9b),
    write(0xb5, 0xa2), write(0xb6, 0xa6), write(0xb7, 0xac), write(0xb8, 0x9b),
    write(0xb9, 0x9f), write(0xba, 0xa6), write(0xbb, 0xaa), write(0xbc, 0x9b),
    write(0xbd, 0x9f), write(0xbe, 0xa6), write(0xbf, 0xaa), write(0xc4, 0x2c),
    write(0xc5, 0x43), write(0xc6, 0x63), write(0xc7, 0x79), write(0xc8, 0x2d),
    write(0xc9, 0x42), write(0xca, 0x2d), write(0xcb, 0x42), write(0xcc, 0x64),
    write(0xcd, 0x78), write(0xce, 0x64), write(0xcf, 0x78), write(0xd0, 0x0a),
    write(0xd1, 0x09), write(0xd4, 0x0c), write(0xd5, 0x0c), write(0xd6, 0x98),
    write(0xd7, 0x90), write(0xe0, 0xc4), write(0xe1, 0xc4), write(0xe2, 0xc4),
    write(0xe3, 0xc4), write(0xe4, 0x00), write(0xe8, 0x80), write(0xe9, 0x40),
    write(0xea, 0x7f), write(0xf0, 0x01), write(0xf1, 0x01), write(0xf2, 0x01),
    write(0xf3, 0x01), write(0xf4, 0x01),
    write(0x03, 0x03), write(0x10, 0x10),

    // image effect
    write(0x03, 0x10), write(0x10, 0x03), write(0x12, 0x30), write(0x13, 0x0a),
    write(0x20, 0x00), write(0x30, 0x00), write(0x31, 0x00), write(0x32, 0x00),
    write(0x33, 0x00), write(0x34, 0x30), write(0x35, 0x00), write(0x36, 0x00),
    write(0x38, 0x00), write(0x3e, 0x58), write(0x3f, 0x00), write(0x40, 0x00),
    write(0x41, 0x10), write(0x48, 0x85), write(0x60, 0x67), write(0x61, 0x88),
    write(0x62, 0x83), write(0x63, 0x50), write(0x64, 0x41), write(0x66, 0x33),
    write(0x67, 0x20), write(0x6a, 0x80), write(0x6b, 0x84), write(0x6c, 0x80),
    write(0x6d, 0x80), write(0x76, 0x01), write(0x74, 0x66), write(0x79, 0x06),

    // Z-LPF
    write(0x03, 0x11), write(0x10, 0x7f), write(0x11, 0x40), write(0x12, 0x0a),
    write(0x13, 0xbb), write(0x26, 0x31), write(0x27, 0x34), write(0x28, 0x0f),
    write(0x29, 0x10), write(0x2b, 0x30), write(0x2c, 0x32), write(0x30, 0x70),
    write(0x31, 0x10), write(0x32, 0x58), write(0x33, 0x09), write(0x34, 0x06),
    write(0x35, 0x03), write(0x36, 0x70), write(0x37, 0x18), write(0x38, 0x58),
    write(0x39, 0x09), write(0x3a, 0x06), write(0x3b, 0x03), write(0x3c, 0x80),
    write(0x3d, 0x18), write(0x3e, 0x80), write(0x3f, 0x0c), write(0x40, 0x09),
    write(0x41, 0x06), write(0x42, 0x80), write(0x43, 0x18), write(0x44, 0x80),
    write(0x45, 0x12), write(0x46, 0x10), write(0x47, 0x10), write(0x48, 0x90),
    write(0x49, 0x40), write(0x4a, 0x80), write(0x4b, 0x13), write(0x4c, 0x10),
    write(0x4d, 0x11), write(0x4e, 0x80), write(0x4f, 0x30), write(0x50, 0x80),
    write(0x51, 0x13), write(0x52, 0x10), write(0x53, 0x13), write(0x54, 0x11),
    write(0x55, 0x17), write(0x56, 0x20), write(0x57, 0x01), write(0x58, 0x00),
    write(0x59, 0x00), write(0x5a, 0x18), write(0x5b, 0x00), write(0x5c, 0x00),
    write(0x60, 0x3f), write(0x62, 0x60), write(0x70, 0x06),

    // YC-LPF
    write(0x03, 0x12), write(0x20, 0x0f), write(0x21, 0x0f), write(0x25, 0x00),
    write(0x28, 0x00), write(0x29, 0x00), write(0x2a, 0x00), write(0x30, 0x50),
    write(0x31, 0x18), write(0x32, 0x32), write(0x33, 0x40), write(0x34, 0x50),
    write(0x35, 0x70), write(0x36, 0xa0), write(0x3b, 0x06), write(0x3c, 0x06),
    write(0x40, 0xa0), write(0x41, 0x40), write(0x42, 0xa0), write(0x43, 0x90),
    write(0x44, 0x90), write(0x45, 0x80), write(0x46, 0xb0), write(0x47, 0x55),
    write(0x48, 0xa0), write(0x49, 0x90), write(0x4a, 0x90), write(0x4b, 0x80),
    write(0x4c, 0xb0), write(0x4d, 0x40), write(0x4e, 0x90), write(0x4f, 0x90),
    write(0x50, 0xa0), write(0x51, 0x80), write(0x52, 0xb0), write(0x53, 0x40),
    write(0x54, 0x90), write(0x55, 0x90), write(0x56, 0xa0), write(0x57, 0x80),
    write(0x58, 0x90), write(0x59, 0x40), write(0x5a, 0xd0), write(0x5b, 0xd0),
    write(0x5c, 0xe0), write(0x5d, 0x80), write(0x5e, 0x88), write(0x5f, 0x40),
    write(0x60, 0xe0), write(0x61, 0xe0), write(0x62, 0xe0), write(0x63, 0x80),
    write(0x70, 0x15), write(0x71, 0x01), write(0x72, 0x18), write(0x73, 0x01),
    write(0x74, 0x25), write(0x75, 0x15), write(0x80, 0x30), write(0x81, 0x50),
    write(0x82, 0x80), write(0x85, 0x1a), write(0x88, 0x00), write(0x89, 0x00),
    write(0x90, 0x5d), write(0xc5, 0x30), write(0xc6, 0x2a), write(0xd0, 0x0c),
    write(0xd1, 0x80), write(0xd2, 0x67), write(0xd3, 0x00), write(0xd4, 0x00),
    write(0xd5, 0x02), write(0xd6, 0xff), write(0xd7, 0x18),

    // edge enhancement
    write(0x03, 0x13), write(0x10, 0xcb), write(0x11, 0x7b), write(0x12, 0x07),
    write(0x14, 0x00), write(0x20, 0x15), write(0x21, 0x13), write(0x22, 0x33),
    write(0x23, 0x04), write(0x24, 0x09), write(0x25, 0x08), write(0x26, 0x18),
    write(0x27, 0x30), write(0x29, 0x12), write(0x2a, 0x50), write(0x2b, 0x02),
    write(0x2c, 0x03), write(0x25, 0x09), write(0x2d, 0x11), write(0x2e, 0x17),
    write(0x2f, 0x19), write(0x50, 0x18), write(0x51, 0x1c), write(0x52, 0x1b),
    write(0x53, 0x15), write(0x54, 0x18), write(0x55, 0x15), write(0x56, 0x18),
    write(0x57, 0x1c), write(0x58, 0x1b), write(0x59, 0x15), write(0x5a, 0x18),
    write(0x5b, 0x15), write(0x5c, 0x18), write(0x5d, 0x18), write(0x5e, 0x18),
    write(0x5f, 0x18), write(0x60, 0x18), write(0x61, 0x18), write(0x62, 0x08),
    write(0x63, 0x08), write(0x64, 0x08), write(0x65, 0x06), write(0x66, 0x06),
    write(0x67, 0x06), write(0x68, 0x07), write(0x69, 0x07), write(0x6a, 0x07),
    write(0x6b, 0x07), write(0x6c, 0x07), write(0x6d, 0x07), write(0x6e, 0x07),
    write(0x6f, 0x07), write(0x70, 0x07), write(0x71, 0x05), write(0x72, 0x05),
    write(0x73, 0x05), write(0x80, 0xff), write(0x81, 0x1f), write(0x82, 0x05),
    write(0x83, 0x11), write(0x90, 0x05), write(0x91, 0x05), write(0x92, 0x33),
    write(0x93, 0x30), write(0x94, 0x10), write(0x95, 0x5a), write(0x97, 0x20),
    write(0x99, 0x60), write(0xa0, 0x01), write(0xa1, 0x02), write(0xa2, 0x01),
    write(0xa3, 0x02), write(0xa4, 0x01), write(0xa5, 0x01), write(0xa6, 0x07),
    write(0xa7, 0x08), write(0xa8, 0x07), write(0xa9, 0x08), write(0xaa, 0x07),
    write(0xab, 0x08), write(0xb0, 0x22), write(0xb1, 0x2a), write(0xb2, 0x28),
    write(0xb3, 0x22), write(0xb4, 0x2a), write(0xb5, 0x28), write(0xb6, 0x22),
    write(0xb7, 0x2a), write(0xb8, 0x28), write(0xb9, 0x22), write(0xba, 0x2a),
    write(0xbb, 0x28), write(0xbc, 0x25), write(0xbd, 0x2a), write(0xbe, 0x27),
    write(0xbf, 0x25), write(0xc0, 0x2a), write(0xc1, 0x27), write(0xc2, 0x1e),
    write(0xc3, 0x24), write(0xc4, 0x20), write(0xc5, 0x1e), write(0xc6, 0x24),
    write(0xc7, 0x20), write(0xc8, 0x18), write(0xc9, 0x20), write(0xca, 0x1e),
    write(0xcb, 0x18), write(0xcc, 0x20), write(0xcd, 0x1e), write(0xce, 0x18),
    write(0xcf, 0x20), write(0xd0, 0x1e), write(0xd1, 0x18), write(0xd2, 0x20),
    write(0xd3, 0x1e),

    // lens shading
    write(0x03, 0x14), write(0x10, 0x11), write(0x20, 0x40), write(0x21, 0x80),
    write(0x22, 0x78), write(0x23, 0x80), write(0x24, 0x80), write(0x30, 0xc8),
    write(0x31, 0x2b), write(0x32, 0x00), write(0x33, 0x00), write(0x34, 0x90),
    write(0x40, 0x4f), write(0x50, 0x49), write(0x60, 0x4b), write(0x70, 0x49),

    // color correction
    write(0x03, 0x15), write(0x10, 0x0f), write(0x14, 0x42), write(0x15, 0x32),
    write(0x16, 0x24), write(0x17, 0x2f), write(0x30, 0x8f), write(0x31, 0x59),
    write(0x32, 0x0a), write(0x33, 0x15), write(0x34, 0x5b), write(0x35, 0x06),
    write(0x36, 0x07), write(0x37, 0x40), write(0x38, 0x86), write(0x40, 0x92),
    write(0x41, 0x1b), write(0x42, 0x89), write(0x43, 0x81), write(0x44, 0x00),
    write(0x45, 0x01), write(0x46, 0x89), write(0x47, 0x9e), write(0x48, 0x28),
    write(0x50, 0x02), write(0x51, 0x82), write(0x52, 0x00), write(0x53, 0x07),
    write(0x54, 0x11), write(0x55, 0x98), write(0x56, 0x00), write(0x57, 0x0b),
    write(0x58, 0x8b), write(0x80, 0x03), write(0x85, 0x40), write(0x87, 0x02),
    write(0x88, 0x00), write(0x89, 0x00), write(0x8a, 0x00),

    // gamma
    write(0x03, 0x16), write(0x10, 0x31), write(0x18, 0x5e), write(0x19, 0x5d),
    write(0x1a, 0x0e), write(0x1b, 0x01), write(0x1c, 0xdc), write(0x1d, 0xfe),
    write(0x30, 0x00), write(0x31, 0x06), write(0x32, 0x1a), write(0x33, 0x32),
    write(0x34, 0x53), write(0x35, 0x6c), write(0x36, 0x81), write(0x37, 0x94),
    write(0x38, 0xa4), write(0x39, 0xb3), write(0x3a, 0xc0), write(0x3b, 0xcb),
    write(0x3c, 0xd3), write(0x3d, 0xd9), write(0x3e, 0xdc), write(0x3f, 0xe1),
    write(0x40, 0xe5), write(0x41, 0xe8), write(0x42, 0xea), write(0x50, 0x00),
    write(0x51, 0x09), write(0x52, 0x1f), write(0x53, 0x37), write(0x54, 0x5b),
    write(0x55, 0x76), write(0x56, 0x8d), write(0x57, 0xa1), write(0x58, 0xb2),
    write(0x59, 0xbe), write(0x5a, 0xc9), write(0x5b, 0xd2), write(0x5c, 0xdb),
    write(0x5d, 0xe3), write(0x5e, 0xeb), write(0x5f, 0xf0), write(0x60, 0xf5),
    write(0x61, 0xf7), write(0x62, 0xf8), write(0x70, 0x00), write(0x71, 0x07),
    write(0x72, 0x0c), write(0x73, 0x17), write(0x74, 0x2a), write(0x75, 0x3c),
    write(0x76, 0x4d), write(0x77, 0x5e), write(0x78, 0x6e), write(0x79, 0x7d),
    write(0x7a, 0x8d), write(0x7b, 0x9c), write(0x7c, 0xaa), write(0x7d, 0xb9),
    write(0x7e, 0xc7), write(0x7f, 0xcd), write(0x80, 0xd6), write(0x81, 0xdc),
    write(0x82, 0xe5),
    write(0x03, 0x17), write(0xc4, 0x68), write(0xc5, 0x56),

    // auto exposure
    write(0x03, 0x20), write(0x11, 0x1c), write(0x18, 0x30), write(0x1a, 0x08),
    write(0x20, 0x01), write(0x21, 0x30), write(0x22, 0x10), write(0x23, 0x00),
    write(0x24, 0x00), write(0x28, 0xe7), write(0x29, 0x0d), write(0x2a, 0xff),
    write(0x2b, 0x34), write(0x2c, 0xc2), write(0x2d, 0xcf), write(0x2e, 0x33),
    write(0x30, 0x78), write(0x32, 0x03), write(0x33, 0x2e), write(0x34, 0x30),
    write(0x35, 0xd4), write(0x36, 0xfe), write(0x37, 0x32), write(0x38, 0x04),
    write(0x39, 0x22), write(0x3a, 0xde), write(0x3b, 0x22), write(0x3c, 0xde),
    write(0x50, 0x45), write(0x51, 0x88), write(0x56, 0x03), write(0x57, 0xf7),
    write(0x58, 0x14), write(0x59, 0x88), write(0x5a, 0x04), write(0x60, 0x55),
    write(0x61, 0x55), write(0x62, 0x6a), write(0x63, 0xa9), write(0x64, 0x6a),
    write(0x65, 0xa9), write(0x66, 0x6a), write(0x67, 0xa9), write(0x68, 0x6b),
    write(0x69, 0xe9), write(0x6a, 0x6a), write(0x6b, 0xa9), write(0x6c, 0x6a),
    write(0x6d, 0xa9), write(0x6e, 0x55), write(0x6f, 0x55), write(0x70, 0x7a),
    write(0x71, 0xbb), write(0x76, 0x43), write(0x77, 0xe2), write(0x78, 0x23),
    write(0x79, 0x46), write(0x7a, 0x23), write(0x7b, 0x22), write(0x7d, 0x23),
    write(0x83, 0x01), write(0x84, 0x5f), write(0x85, 0x90), write(0x86, 0x01),
    write(0x87, 0xf4), write(0x88, 0x05), write(0x89, 0x7e), write(0x8a, 0x40),
    write(0x8b, 0x75), write(0x8c, 0x30), write(0x8d, 0x61), write(0x8e, 0xa8),
    write(0x9c, 0x18), write(0x9d, 0x6a), write(0x9e, 0x01), write(0x9f, 0xf4),
    write(0xb0, 0x18), write(0xb1, 0x14), write(0xb2, 0xa0), write(0xb3, 0x18),
    write(0xb4, 0x1a), write(0xb5, 0x44), write(0xb6, 0x2f), write(0xb7, 0x28),
    write(0xb8, 0x25), write(0xb9, 0x22), write(0xba, 0x21), write(0xbb, 0x20),
    write(0xbc, 0x1f), write(0xbd, 0x1f), write(0xc0, 0x14), write(0xc1, 0x1f),
    write(0xc2, 0x1f), write(0xc3, 0x18), write(0xc4, 0x10), write(0xc8, 0x80),
    write(0xc9, 0x40),

    // auto white balance
    write(0x03, 0x22), write(0x10, 0xfd), write(0x11, 0x2e), write(0x19, 0x01),
    write(0x20, 0x30), write(0x21, 0x80), write(0x23, 0x08), write(0x24, 0x01),
    write(0x30, 0x80), write(0x31, 0x80), write(0x38, 0x11), write(0x39, 0x34),
    write(0x40, 0xf7), write(0x41, 0x44), write(0x42, 0x33), write(0x43, 0xf7),
    write(0x44, 0x44), write(0x45, 0x33), write(0x46, 0x00), write(0x47, 0x94),
    write(0x50, 0xb2), write(0x51, 0x81), write(0x52, 0x98), write(0x80, 0x38),
    write(0x81, 0x20), write(0x82, 0x38), write(0x83, 0x5e), write(0x84, 0x10),
    write(0x85, 0x5e), write(0x86, 0x24), write(0x87, 0x49), write(0x88, 0x30),
    write(0x89, 0x3f), write(0x8a, 0x28), write(0x8b, 0x49), write(0x8c, 0x30),
    write(0x8d, 0x3f), write(0x8e, 0x28), write(0x8f, 0x54), write(0x90, 0x52),
    write(0x91, 0x4e), write(0x92, 0x49), write(0x93, 0x40), write(0x94, 0x36),
    write(0x95, 0x2f), write(0x96, 0x2a), write(0x97, 0x27), write(0x98, 0x27),
    write(0x99, 0x27), write(0x9a, 0x27), write(0x9b, 0xbb), write(0x9c, 0xbb),
    write(0x9d, 0x48), write(0x9e, 0x38), write(0x9f, 0x30), write(0xa0, 0x60),
    write(0xa1, 0x34), write(0xa2, 0x6f), write(0xa3, 0xff), write(0xa4, 0x14),
    write(0xa5, 0x2c), write(0xa6, 0xcf), write(0xad, 0x40), write(0xae, 0x4a),
    write(0xaf, 0x28), write(0xb0, 0x26), write(0xb1, 0x00), write(0xb8, 0xa0),
    write(0xb9, 0x00),
    write(0x03, 0x20), write(0x10, 0x9c),
    write(0x03, 0x22), write(0x10, 0xe9),
    write(0x03, 0x00), write(0x0e, 0x03), write(0x0e, 0x73),
    write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00),
    write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00),
    write(0x03, 0x00), write(0x03, 0x00), write(0x03, 0x00), write(0x01, 0xc0),
];
