//! Table-driven capability handlers
//!
//! Most sensor variants implement their capabilities the same way: look
//! the register sequence up in the descriptor and run it. These handlers
//! can be bound directly into a [`CapabilityTable`](crate::CapabilityTable).
//! All of them return 0 on success unless noted.

use crate::attribute::{AttributeKind, Environment};
use crate::control::SensorControl;
use crate::descriptor::SensorDescriptor;
use crate::error::Result;

/// Run the variant's identification protocol
pub fn identify(control: &mut dyn SensorControl, sensor: &'static SensorDescriptor, _param: u32) -> Result<u32> {
    control.identify(sensor.identity)?;
    Ok(0)
}

/// Apply level `level` of attribute `kind`
pub fn apply_level(
    control: &mut dyn SensorControl,
    sensor: &'static SensorDescriptor,
    kind: AttributeKind,
    level: u32,
) -> Result<u32> {
    let sequence = sensor.attributes.select(kind, level)?;
    debug!("{}: {} level {}", sensor.name(), kind.name(), level);
    control.execute(&sequence)?;
    Ok(0)
}

pub fn set_brightness(control: &mut dyn SensorControl, sensor: &'static SensorDescriptor, level: u32) -> Result<u32> {
    apply_level(control, sensor, AttributeKind::Brightness, level)
}

pub fn set_contrast(control: &mut dyn SensorControl, sensor: &'static SensorDescriptor, level: u32) -> Result<u32> {
    apply_level(control, sensor, AttributeKind::Contrast, level)
}

pub fn set_exposure_compensation(
    control: &mut dyn SensorControl,
    sensor: &'static SensorDescriptor,
    level: u32,
) -> Result<u32> {
    apply_level(control, sensor, AttributeKind::ExposureCompensation, level)
}

pub fn set_image_effect(control: &mut dyn SensorControl, sensor: &'static SensorDescriptor, effect: u32) -> Result<u32> {
    apply_level(control, sensor, AttributeKind::Effect, effect)
}

pub fn set_white_balance(control: &mut dyn SensorControl, sensor: &'static SensorDescriptor, preset: u32) -> Result<u32> {
    apply_level(control, sensor, AttributeKind::WhiteBalance, preset)
}

/// 0 switches auto exposure off, 1 on
pub fn set_exposure_auto(control: &mut dyn SensorControl, sensor: &'static SensorDescriptor, enable: u32) -> Result<u32> {
    apply_level(control, sensor, AttributeKind::AutoExposure, enable)
}

/// Select the work mode for a scene environment
///
/// Unknown environments fall back to the normal work mode.
pub fn set_preview_mode(
    control: &mut dyn SensorControl,
    sensor: &'static SensorDescriptor,
    environment: u32,
) -> Result<u32> {
    let level = match Environment::from_raw(environment) {
        Some(env) => env.work_mode(),
        None => {
            debug!("unknown environment {}, using normal", environment);
            Environment::Normal.work_mode()
        }
    };
    apply_level(control, sensor, AttributeKind::WorkMode, level)
}

/// Non-zero arms the flash for the next capture, zero disarms it
pub fn flash(control: &mut dyn SensorControl, _sensor: &'static SensorDescriptor, param: u32) -> Result<u32> {
    control.set_flash(param != 0);
    Ok(0)
}

/// Flash and mode-hint handling; `mode` is the raw capture mode
pub fn before_snapshot(control: &mut dyn SensorControl, _sensor: &'static SensorDescriptor, mode: u32) -> Result<u32> {
    control.before_snapshot(mode);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{AttributeTables, LevelTable};
    use crate::capability::CapabilityTable;
    use crate::descriptor::SensorInfo;
    use crate::error::SensorError;
    use crate::identify::IdentityCode;
    use crate::mode::{ImageFormat, ImagePattern, ModeTable};
    use crate::sequence::{write, Directive, RegisterSequence};
    use crate::control::Session;
    use crate::snapshot::FlashState;
    use camsense_hal::mock::{MockBus, MockDelay};

    static NORMAL: [Directive; 2] = [write(0x03, 0x10), write(0x41, 0x00)];
    static NIGHT: [Directive; 2] = [write(0x03, 0x10), write(0x41, 0x10)];
    static WORK_MODES: [RegisterSequence<'static>; 2] =
        [RegisterSequence::new(&NORMAL), RegisterSequence::new(&NIGHT)];

    static TEST_SENSOR: SensorDescriptor = SensorDescriptor {
        info: SensorInfo {
            name: "TEST",
            i2c_address: 0x21,
            reg_bits: 8,
            value_bits: 8,
            max_width: 640,
            max_height: 480,
            format: ImageFormat::Yuv422,
            pattern: ImagePattern::Yuyv,
            environments: 0b11,
            effects: 0,
            level_steps: 2,
            view_angle_h: 50,
            view_angle_v: 40,
            preview_skip_frames: 1,
            capture_skip_frames: 3,
        },
        identity: &[IdentityCode::new(0x00, 0x7a)],
        modes: ModeTable::new(&[]),
        attributes: AttributeTables {
            work_mode: Some(LevelTable::new(&WORK_MODES)),
            ..AttributeTables::NONE
        },
        capabilities: CapabilityTable::EMPTY,
    };

    fn session() -> Session<MockBus, MockDelay> {
        Session::new(MockBus::new().with_register(0x00, 0x7a), MockDelay::new())
    }

    #[test]
    fn test_preview_mode_maps_environment() {
        let mut s = session();

        set_preview_mode(&mut s, &TEST_SENSOR, Environment::Night as u32).unwrap();
        set_preview_mode(&mut s, &TEST_SENSOR, Environment::Sports as u32).unwrap();
        set_preview_mode(&mut s, &TEST_SENSOR, 77).unwrap();

        assert_eq!(
            s.bus().writes().as_slice(),
            &[
                (0x03, 0x10),
                (0x41, 0x10),
                (0x03, 0x10),
                (0x41, 0x00),
                (0x03, 0x10),
                (0x41, 0x00)
            ]
        );
    }

    #[test]
    fn test_missing_table_reports_unsupported() {
        let mut s = session();
        assert_eq!(
            set_brightness(&mut s, &TEST_SENSOR, 0),
            Err(SensorError::Unsupported(crate::Capability::SetBrightness))
        );
        assert!(s.bus().events().is_empty());
    }

    #[test]
    fn test_flash_handler_arms_and_disarms() {
        let mut s = session();

        flash(&mut s, &TEST_SENSOR, 1).unwrap();
        assert_eq!(s.flash_state(), FlashState::Armed);
        flash(&mut s, &TEST_SENSOR, 0).unwrap();
        assert_eq!(s.flash_state(), FlashState::Idle);
    }

    #[test]
    fn test_identify_handler() {
        let mut s = session();
        assert_eq!(identify(&mut s, &TEST_SENSOR, 0), Ok(0));

        s.bus_mut().set_register(0x00, 0x00);
        assert_eq!(identify(&mut s, &TEST_SENSOR, 0), Err(SensorError::NotPresent));
    }
}
