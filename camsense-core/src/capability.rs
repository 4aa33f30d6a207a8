//! Sparse capability dispatch
//!
//! The capture pipeline drives every sensor through the same fixed set of
//! named slots. A variant binds only the slots it implements; invoking an
//! unbound slot yields [`Invocation::Unsupported`], a normal value that
//! callers can act on without treating it as a failure.

use crate::control::SensorControl;
use crate::descriptor::SensorDescriptor;
use crate::error::{Result, SensorError};

macro_rules! capabilities {
    ($($variant:ident => $name:literal,)*) => {
        /// Operation slots of the sensor control surface
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum Capability {
            $($variant,)*
        }

        impl Capability {
            /// Every slot in table order
            pub const ALL: &'static [Capability] = &[$(Capability::$variant,)*];

            /// Number of slots
            pub const COUNT: usize = Self::ALL.len();

            /// Stable slot name
            pub const fn name(self) -> &'static str {
                match self {
                    $(Capability::$variant => $name,)*
                }
            }
        }
    };
}

capabilities! {
    Reset => "reset",
    PowerOn => "power_on",
    EnterSleep => "enter_sleep",
    Identify => "identify",
    WriteRegister => "write_register",
    ReadRegister => "read_register",
    CustomFunction => "custom_function",
    GetTrim => "get_trim",
    SetExposureAuto => "set_exposure_auto",
    SetHorizontalMirror => "set_horizontal_mirror",
    SetVerticalMirror => "set_vertical_mirror",
    SetBrightness => "set_brightness",
    SetContrast => "set_contrast",
    SetSharpness => "set_sharpness",
    SetSaturation => "set_saturation",
    SetPreviewMode => "set_preview_mode",
    SetImageEffect => "set_image_effect",
    BeforeSnapshot => "before_snapshot",
    AfterSnapshot => "after_snapshot",
    Flash => "flash",
    ReadExposure => "read_exposure",
    WriteExposure => "write_exposure",
    ReadGain => "read_gain",
    WriteGain => "write_gain",
    ReadGainScale => "read_gain_scale",
    SetFrameRate => "set_frame_rate",
    AutoFocusEnable => "auto_focus_enable",
    AutoFocusStatus => "auto_focus_status",
    SetWhiteBalance => "set_white_balance",
    GetSkipFrame => "get_skip_frame",
    SetIso => "set_iso",
    SetExposureCompensation => "set_exposure_compensation",
    CheckImageFormat => "check_image_format",
    ChangeImageFormat => "change_image_format",
    SetZoom => "set_zoom",
    SetFocus => "set_focus",
    SetAntiBanding => "set_anti_banding",
    SetVideoMode => "set_video_mode",
    PickJpegStream => "pick_jpeg_stream",
    SetMeterMode => "set_meter_mode",
    GetStatus => "get_status",
    StreamOn => "stream_on",
    StreamOff => "stream_off",
    GetExifInfo => "get_exif_info",
}

impl Capability {
    /// Slot position
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look a slot up by its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|cap| cap.name() == name)
    }
}

/// Slot handler: `(control session, variant, param) -> result code`
pub type Handler = fn(&mut dyn SensorControl, &'static SensorDescriptor, u32) -> Result<u32>;

/// Outcome of invoking a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Invocation {
    /// Handler ran and returned this code
    Done(u32),
    /// Slot is not bound for this variant
    Unsupported,
}

impl Invocation {
    pub const fn is_supported(&self) -> bool {
        matches!(self, Invocation::Done(_))
    }

    /// Turn `Unsupported` into an error for callers that require the slot
    pub fn require(self, cap: Capability) -> Result<u32> {
        match self {
            Invocation::Done(code) => Ok(code),
            Invocation::Unsupported => Err(SensorError::Unsupported(cap)),
        }
    }
}

/// Fixed-shape table of optional handlers
#[derive(Clone, Copy)]
pub struct CapabilityTable {
    slots: [Option<Handler>; Capability::COUNT],
}

impl CapabilityTable {
    /// Every slot unbound
    pub const EMPTY: Self = Self {
        slots: [None; Capability::COUNT],
    };

    /// Bind `handler` to `cap`
    #[must_use]
    pub const fn with(mut self, cap: Capability, handler: Handler) -> Self {
        self.slots[cap.index()] = Some(handler);
        self
    }

    /// Handler bound to `cap`
    pub fn handler(&self, cap: Capability) -> Option<Handler> {
        self.slots[cap.index()]
    }

    pub fn supports(&self, cap: Capability) -> bool {
        self.slots[cap.index()].is_some()
    }

    /// Bound slots in table order
    pub fn bound(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.iter().copied().filter(move |cap| self.supports(*cap))
    }

    /// Unbound slots in table order
    pub fn unbound(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.iter().copied().filter(move |cap| !self.supports(*cap))
    }

    /// Run the handler for `cap`
    pub fn invoke(
        &self,
        cap: Capability,
        control: &mut dyn SensorControl,
        descriptor: &'static SensorDescriptor,
        param: u32,
    ) -> Result<Invocation> {
        match self.handler(cap) {
            Some(handler) => handler(control, descriptor, param).map(Invocation::Done),
            None => {
                debug!("{} is not bound", cap.name());
                Ok(Invocation::Unsupported)
            }
        }
    }
}

impl core::fmt::Debug for CapabilityTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.bound().map(Capability::name)).finish()
    }
}
