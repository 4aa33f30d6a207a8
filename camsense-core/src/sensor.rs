//! Sensor facade
//!
//! [`Sensor`] pairs a static [`SensorDescriptor`] with one control
//! [`Session`] and tracks the attach lifecycle:
//!
//! ```text
//! Detached --identify--> Identified --init--> Initialized
//!    ^                                             |
//!    +------------- failed identify ---------------+
//! ```
//!
//! Nothing that configures the part runs before it has been identified.
//! Common init is applied once by `init()`; mode switches only layer their
//! own sequence on top.

use camsense_hal::{FlashControl, ModeNotifier, NoFlash, NoNotifier, RegisterBus};
use embedded_hal::delay::DelayNs;

use crate::attribute::AttributeKind;
use crate::capability::{Capability, Invocation};
use crate::config::SensorConfig;
use crate::control::{SensorControl, Session};
use crate::descriptor::SensorDescriptor;
use crate::error::{Result, SensorError};
use crate::identify::Identified;
use crate::mode::{ModeGeometry, SensorMode};
use crate::sequence::Applied;
use crate::snapshot::SnapshotOutcome;

/// Attach lifecycle of a sensor instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lifecycle {
    /// Not identified yet, or identification failed
    #[default]
    Detached,
    /// Identity confirmed, common init not applied
    Identified,
    /// Common init applied
    Initialized,
}

impl Lifecycle {
    pub const fn is_identified(self) -> bool {
        !matches!(self, Lifecycle::Detached)
    }
}

/// One sensor instance
pub struct Sensor<B, D, F = NoFlash, N = NoNotifier> {
    descriptor: &'static SensorDescriptor,
    session: Session<B, D, F, N>,
    state: Lifecycle,
    mode: Option<SensorMode>,
}

impl<B, D, F, N> Sensor<B, D, F, N>
where
    B: RegisterBus,
    D: DelayNs,
    F: FlashControl,
    N: ModeNotifier,
{
    /// Wrap a session; the sensor starts detached
    pub fn new(descriptor: &'static SensorDescriptor, session: Session<B, D, F, N>) -> Self {
        Self {
            descriptor,
            session,
            state: Lifecycle::Detached,
            mode: None,
        }
    }

    pub fn descriptor(&self) -> &'static SensorDescriptor {
        self.descriptor
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// Last mode applied successfully
    pub fn current_mode(&self) -> Option<SensorMode> {
        self.mode
    }

    pub fn session(&self) -> &Session<B, D, F, N> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<B, D, F, N> {
        &mut self.session
    }

    /// Give the session back
    pub fn release(self) -> Session<B, D, F, N> {
        self.session
    }

    /// Take over retry policy and settling time from `config`
    pub fn apply_config(&mut self, config: &SensorConfig) {
        self.session.set_policy(config.identify);
        self.session.set_settle_ms(config.snapshot_settle_ms);
    }

    /// Run the identification protocol
    ///
    /// Failure detaches the sensor even if it was initialized before.
    pub fn identify(&mut self) -> Result<Identified> {
        match self.session.identify(self.descriptor.identity) {
            Ok(id) => {
                info!("{} identified", self.descriptor.name());
                if self.state == Lifecycle::Detached {
                    self.state = Lifecycle::Identified;
                }
                Ok(id)
            }
            Err(e) => {
                warn!("{} not identified: {}", self.descriptor.name(), e);
                self.state = Lifecycle::Detached;
                self.mode = None;
                Err(e)
            }
        }
    }

    /// Apply common init once
    ///
    /// Later calls are no-ops; use [`reinit`](Self::reinit) to force it.
    pub fn init(&mut self) -> Result<Applied> {
        match self.state {
            Lifecycle::Detached => Err(SensorError::NotIdentified),
            Lifecycle::Initialized => Ok(Applied::default()),
            Lifecycle::Identified => self.run_common_init(),
        }
    }

    /// Re-apply common init after a failure left the part in an unknown state
    pub fn reinit(&mut self) -> Result<Applied> {
        self.ensure_identified()?;
        self.state = Lifecycle::Identified;
        self.run_common_init()
    }

    /// Identify then init
    pub fn attach(&mut self) -> Result<Identified> {
        let id = self.identify()?;
        self.init()?;
        Ok(id)
    }

    /// Bring the sensor up as described by `config`
    ///
    /// Validates and applies the config, attaches, switches to the default
    /// mode and then applies the initial attribute levels in order. A config
    /// that fails validation is rejected before any bus traffic.
    pub fn start(&mut self, config: &SensorConfig) -> Result<ModeGeometry> {
        config.validate()?;
        self.apply_config(config);
        self.attach()?;
        let geometry = self.apply_mode(config.default_mode)?;
        for setting in &config.initial_attributes {
            self.set_attribute(setting.kind, u32::from(setting.level))?;
        }
        Ok(geometry)
    }

    /// Switch output mode and return the declared geometry
    pub fn apply_mode(&mut self, mode: SensorMode) -> Result<ModeGeometry> {
        self.ensure_identified()?;
        if mode == SensorMode::CommonInit {
            return Err(SensorError::UnsupportedMode(mode.raw()));
        }

        let entry = self.descriptor.modes.entry(mode)?;
        self.session.execute(&entry.sequence)?;
        self.mode = Some(mode);

        info!(
            "{}: mode {} ({}x{})",
            self.descriptor.name(),
            mode.raw(),
            entry.geometry.width,
            entry.geometry.height
        );
        Ok(entry.geometry)
    }

    /// [`apply_mode`](Self::apply_mode) for a raw mode id
    pub fn apply_mode_raw(&mut self, raw: u32) -> Result<ModeGeometry> {
        let mode = SensorMode::from_raw(raw).ok_or(SensorError::UnsupportedMode(raw))?;
        self.apply_mode(mode)
    }

    /// Apply one level of a parameterized attribute
    pub fn set_attribute(&mut self, kind: AttributeKind, level: u32) -> Result<()> {
        self.ensure_identified()?;
        let sequence = self.descriptor.attributes.select(kind, level)?;
        debug!("{}: {} level {}", self.descriptor.name(), kind.name(), level);
        self.session.execute(&sequence)?;
        Ok(())
    }

    pub fn supports(&self, cap: Capability) -> bool {
        self.descriptor.capabilities.supports(cap)
    }

    /// Invoke a capability slot
    ///
    /// Unbound slots return `Invocation::Unsupported` in every state. Bound
    /// slots other than `Identify` require a prior identification.
    pub fn invoke(&mut self, cap: Capability, param: u32) -> Result<Invocation> {
        let descriptor = self.descriptor;
        let table = &descriptor.capabilities;
        if !table.supports(cap) {
            return table.invoke(cap, &mut self.session, descriptor, param);
        }

        if cap == Capability::Identify {
            let result = table.invoke(cap, &mut self.session, descriptor, param);
            match result {
                Ok(_) if self.state == Lifecycle::Detached => self.state = Lifecycle::Identified,
                Ok(_) => {}
                Err(_) => {
                    self.state = Lifecycle::Detached;
                    self.mode = None;
                }
            }
            return result;
        }

        self.ensure_identified()?;
        table.invoke(cap, &mut self.session, descriptor, param)
    }

    /// Invoke a capability slot by name
    ///
    /// Unknown names are reported like unbound slots.
    pub fn invoke_by_name(&mut self, name: &str, param: u32) -> Result<Invocation> {
        match Capability::from_name(name) {
            Some(cap) => self.invoke(cap, param),
            None => {
                debug!("unknown capability {}", name);
                Ok(Invocation::Unsupported)
            }
        }
    }

    /// Arm or disarm the flash for the next capture
    ///
    /// Like the `Flash` slot, this requires a prior identification.
    pub fn set_flash(&mut self, request: bool) -> Result<()> {
        self.ensure_identified()?;
        self.session.set_flash(request);
        Ok(())
    }

    /// Flash and mode-hint handling ahead of a capture
    ///
    /// Like the `BeforeSnapshot` slot, this requires a prior identification.
    pub fn before_snapshot(&mut self, mode: u32) -> Result<SnapshotOutcome> {
        self.ensure_identified()?;
        Ok(self.session.before_snapshot(mode))
    }

    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<()> {
        self.session.write_reg(reg, value)
    }

    pub fn read_register(&mut self, reg: u8) -> Result<u8> {
        self.session.read_reg(reg)
    }

    /// Read `reg` back and compare it against `expected`
    pub fn verify_register(&mut self, reg: u8, expected: u8) -> Result<()> {
        let actual = self.session.read_reg(reg)?;
        if actual != expected {
            warn!("register {:#x} read {:#x}, expected {:#x}", reg, actual, expected);
            return Err(SensorError::ReadBackMismatch {
                reg,
                expected,
                actual,
            });
        }
        Ok(())
    }

    fn ensure_identified(&self) -> Result<()> {
        if self.state.is_identified() {
            Ok(())
        } else {
            Err(SensorError::NotIdentified)
        }
    }

    fn run_common_init(&mut self) -> Result<Applied> {
        let entry = self
            .descriptor
            .modes
            .common_init()
            .ok_or(SensorError::UnsupportedMode(SensorMode::CommonInit.raw()))?;

        self.mode = None;
        let applied = self.session.execute(&entry.sequence)?;
        self.state = Lifecycle::Initialized;
        info!(
            "{}: common init applied ({} writes, {} ms)",
            self.descriptor.name(),
            applied.writes,
            applied.delay_ms
        );
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{AttributeTables, LevelTable};
    use crate::capability::CapabilityTable;
    use crate::config::ConfigError;
    use crate::descriptor::SensorInfo;
    use crate::handlers;
    use crate::identify::IdentityCode;
    use crate::mode::{ImageFormat, ImagePattern, ModeEntry, ModeTable};
    use crate::sequence::{delay_ms, write, Directive, RegisterSequence};
    use camsense_hal::mock::{MockBus, MockDelay};
    use camsense_hal::BusError;

    static INIT: [Directive; 3] = [write(0x01, 0x79), delay_ms(5), write(0x01, 0x78)];
    static VGA: [Directive; 1] = [write(0x03, 0x00)];
    static SXGA: [Directive; 2] = [write(0x03, 0x10), write(0x10, 0x00)];

    static MODES: [Option<ModeEntry>; 4] = [
        Some(ModeEntry::new(RegisterSequence::new(&INIT), 640, 480, 16, ImageFormat::Yuv422)),
        Some(ModeEntry::new(RegisterSequence::new(&VGA), 640, 480, 16, ImageFormat::Yuv422)),
        None,
        Some(ModeEntry::new(RegisterSequence::new(&SXGA), 1280, 960, 16, ImageFormat::Yuv422)),
    ];

    static B0: [Directive; 1] = [write(0x40, 0x80)];
    static B1: [Directive; 1] = [write(0x40, 0x00)];
    static BRIGHTNESS: [RegisterSequence<'static>; 2] = [RegisterSequence::new(&B0), RegisterSequence::new(&B1)];

    static TEST_SENSOR: SensorDescriptor = SensorDescriptor {
        info: SensorInfo {
            name: "TEST",
            i2c_address: 0x21,
            reg_bits: 8,
            value_bits: 8,
            max_width: 1280,
            max_height: 960,
            format: ImageFormat::Yuv422,
            pattern: ImagePattern::Yuyv,
            environments: 0,
            effects: 0,
            level_steps: 2,
            view_angle_h: 50,
            view_angle_v: 40,
            preview_skip_frames: 0,
            capture_skip_frames: 0,
        },
        identity: &[IdentityCode::new(0x04, 0x92)],
        modes: ModeTable::new(&MODES),
        attributes: AttributeTables {
            brightness: Some(LevelTable::new(&BRIGHTNESS)),
            ..AttributeTables::NONE
        },
        capabilities: CapabilityTable::EMPTY
            .with(Capability::Identify, handlers::identify)
            .with(Capability::SetBrightness, handlers::set_brightness),
    };

    fn present() -> Sensor<MockBus, MockDelay> {
        Sensor::new(
            &TEST_SENSOR,
            Session::new(MockBus::new().with_register(0x04, 0x92), MockDelay::new()),
        )
    }

    fn writes(sensor: &Sensor<MockBus, MockDelay>) -> heapless::Vec<(u8, u8), 2048> {
        sensor.session().bus().writes()
    }

    #[test]
    fn test_configuration_requires_identify() {
        let mut sensor = present();

        assert_eq!(sensor.init(), Err(SensorError::NotIdentified));
        assert_eq!(sensor.apply_mode(SensorMode::PreviewOne), Err(SensorError::NotIdentified));
        assert_eq!(
            sensor.set_attribute(AttributeKind::Brightness, 0),
            Err(SensorError::NotIdentified)
        );
        assert_eq!(
            sensor.invoke(Capability::SetBrightness, 0),
            Err(SensorError::NotIdentified)
        );
        assert!(writes(&sensor).is_empty());
    }

    #[test]
    fn test_common_init_runs_once() {
        let mut sensor = present();
        sensor.attach().unwrap();
        assert_eq!(sensor.state(), Lifecycle::Initialized);

        let again = sensor.init().unwrap();
        assert_eq!(again, Applied::default());
        assert_eq!(writes(&sensor).len(), 2);

        sensor.reinit().unwrap();
        assert_eq!(writes(&sensor).len(), 4);
    }

    #[test]
    fn test_apply_mode_rejects_common_init_and_empty_slots() {
        let mut sensor = present();
        sensor.attach().unwrap();
        sensor.session_mut().bus_mut().clear();

        assert_eq!(sensor.apply_mode(SensorMode::CommonInit), Err(SensorError::UnsupportedMode(0)));
        assert_eq!(
            sensor.apply_mode(SensorMode::SnapshotOneFirst),
            Err(SensorError::UnsupportedMode(2))
        );
        assert_eq!(sensor.apply_mode_raw(31), Err(SensorError::UnsupportedMode(31)));
        assert!(writes(&sensor).is_empty());
    }

    #[test]
    fn test_apply_mode_returns_declared_geometry() {
        let mut sensor = present();
        sensor.attach().unwrap();
        sensor.session_mut().bus_mut().clear();

        let geometry = sensor.apply_mode(SensorMode::SnapshotOneSecond).unwrap();

        assert_eq!((geometry.width, geometry.height), (1280, 960));
        assert_eq!(writes(&sensor).as_slice(), &[(0x03, 0x10), (0x10, 0x00)]);
        assert_eq!(sensor.current_mode(), Some(SensorMode::SnapshotOneSecond));
    }

    #[test]
    fn test_failed_identify_detaches() {
        let mut sensor = present();
        sensor.attach().unwrap();
        sensor.session_mut().bus_mut().set_register(0x04, 0x00);

        assert_eq!(sensor.identify(), Err(SensorError::NotPresent));
        assert_eq!(sensor.state(), Lifecycle::Detached);
        assert_eq!(sensor.current_mode(), None);
    }

    #[test]
    fn test_invoke_identify_updates_state() {
        let mut sensor = present();

        assert_eq!(sensor.invoke(Capability::Identify, 0), Ok(Invocation::Done(0)));
        assert_eq!(sensor.state(), Lifecycle::Identified);
        assert_eq!(sensor.invoke(Capability::SetBrightness, 1), Ok(Invocation::Done(0)));
    }

    #[test]
    fn test_unbound_is_unsupported_in_any_state() {
        let mut sensor = present();

        assert_eq!(sensor.invoke(Capability::SetSharpness, 1), Ok(Invocation::Unsupported));
        assert_eq!(sensor.invoke_by_name("set_hue", 1), Ok(Invocation::Unsupported));
        assert_eq!(sensor.invoke_by_name("set_brightness", 1), Err(SensorError::NotIdentified));
    }

    #[test]
    fn test_bus_failure_during_init_leaves_identified() {
        let mut sensor = Sensor::new(
            &TEST_SENSOR,
            Session::new(
                MockBus::new().with_register(0x04, 0x92).fail_writes_after(1),
                MockDelay::new(),
            ),
        );

        assert_eq!(sensor.attach(), Err(SensorError::Bus(BusError::Bus)));
        assert_eq!(sensor.state(), Lifecycle::Identified);
    }

    #[test]
    fn test_verify_register() {
        let mut sensor = present();
        sensor.write_register(0x10, 0x9c).unwrap();

        assert_eq!(sensor.verify_register(0x10, 0x9c), Ok(()));
        assert_eq!(
            sensor.verify_register(0x10, 0x1c),
            Err(SensorError::ReadBackMismatch {
                reg: 0x10,
                expected: 0x1c,
                actual: 0x9c
            })
        );
    }

    #[test]
    fn test_flash_requires_identify() {
        let mut sensor = present();

        assert_eq!(sensor.set_flash(true), Err(SensorError::NotIdentified));
        assert_eq!(sensor.before_snapshot(2), Err(SensorError::NotIdentified));
        assert_eq!(sensor.session().delay().elapsed_ms(), 0);

        sensor.identify().unwrap();
        assert_eq!(sensor.set_flash(true), Ok(()));
        let outcome = sensor.before_snapshot(2).unwrap();
        assert!(outcome.flash_fired);
    }

    #[test]
    fn test_start_rejects_invalid_config() {
        let common_init = SensorConfig {
            default_mode: SensorMode::CommonInit,
            ..SensorConfig::default()
        };
        let mut no_retries = SensorConfig::default();
        no_retries.identify.max_retries = 0;

        for (config, expected) in [
            (common_init, ConfigError::CommonInitAsDefault),
            (no_retries, ConfigError::ZeroRetries),
        ] {
            let mut sensor = present();

            assert_eq!(sensor.start(&config), Err(SensorError::Config(expected)));
            assert_eq!(sensor.state(), Lifecycle::Detached);
            assert!(sensor.session().bus().events().is_empty());
        }
    }

    #[test]
    fn test_start_applies_config() {
        let mut config = SensorConfig {
            default_mode: SensorMode::SnapshotOneSecond,
            ..SensorConfig::default()
        };
        config
            .initial_attributes
            .push(crate::config::AttributeSetting::new(AttributeKind::Brightness, 1))
            .unwrap();
        let mut sensor = present();

        let geometry = sensor.start(&config).unwrap();

        assert_eq!(geometry.width, 1280);
        assert_eq!(writes(&sensor).last(), Some(&(0x40, 0x00)));
    }
}
