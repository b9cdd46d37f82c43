//! HID input report layouts for the two gamepad profiles.

use crate::frame::Frame;
use crate::stick::normalize_stick;

/// Identifier prefixed to every input report.
///
/// The value `0` is reserved: a host request carrying it means "no identifier
/// supplied" and is resolved by the report synthesizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ReportId {
    /// Simple directional-pad controller.
    SimplePad = 0x01,
    /// Dual-analog-stick controller.
    DualStick = 0x02,
}

impl ReportId {
    /// Raw identifier byte as sent on the wire.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Payload length (without the identifier prefix) of this report.
    #[inline]
    #[must_use]
    pub const fn payload_len(self) -> usize {
        match self {
            Self::SimplePad => SimplePadReport::SIZE,
            Self::DualStick => DualStickReport::SIZE,
        }
    }
}

/// Returned when a byte does not name a known report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownReportId(pub u8);

impl TryFrom<u8> for ReportId {
    type Error = UnknownReportId;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Self::SimplePad),
            0x02 => Ok(Self::DualStick),
            other => Err(UnknownReportId(other)),
        }
    }
}

impl From<ReportId> for u8 {
    fn from(id: ReportId) -> Self {
        id.raw()
    }
}

/// Simple pad report: one direction byte and one button byte.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(C)]
pub struct SimplePadReport {
    pub direction: u8,
    pub buttons: u8,
}

impl SimplePadReport {
    /// Payload size in bytes.
    pub const SIZE: usize = 2;

    /// Extract the simple pad fields from a frame.
    #[must_use]
    pub const fn from_frame(frame: &Frame) -> Self {
        Self {
            direction: frame.simple_direction(),
            buttons: frame.simple_buttons(),
        }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> [u8; Self::SIZE] {
        [self.direction, self.buttons]
    }
}

/// Dual stick report.
///
/// Total size: 7 bytes (direction: 1, buttons: 2, sticks: 2x2 signed).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(C)]
pub struct DualStickReport {
    pub direction: u8,
    pub buttons: [u8; 2],
    /// Left stick `[x, y]`, roughly -100 to 99.
    pub left_stick: [i8; 2],
    /// Right stick `[x, y]`, roughly -100 to 99.
    pub right_stick: [i8; 2],
}

impl DualStickReport {
    /// Payload size in bytes.
    pub const SIZE: usize = 7;

    /// Extract the dual stick fields from a frame, normalizing all four axes.
    #[must_use]
    pub const fn from_frame(frame: &Frame) -> Self {
        Self {
            direction: frame.dual_direction(),
            buttons: frame.dual_buttons(),
            left_stick: normalize_stick(frame.raw_left_stick()),
            right_stick: normalize_stick(frame.raw_right_stick()),
        }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> [u8; Self::SIZE] {
        [
            self.direction,
            self.buttons[0],
            self.buttons[1],
            self.left_stick[0] as u8,
            self.left_stick[1] as u8,
            self.right_stick[0] as u8,
            self.right_stick[1] as u8,
        ]
    }
}

/// A synthesized input report of either profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum Report {
    SimplePad(SimplePadReport),
    DualStick(DualStickReport),
}

impl Report {
    /// Build the report for `id` from a complete frame.
    pub const fn from_frame(id: ReportId, frame: &Frame) -> Self {
        match id {
            ReportId::SimplePad => Self::SimplePad(SimplePadReport::from_frame(frame)),
            ReportId::DualStick => Self::DualStick(DualStickReport::from_frame(frame)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> ReportId {
        match self {
            Self::SimplePad(_) => ReportId::SimplePad,
            Self::DualStick(_) => ReportId::DualStick,
        }
    }

    /// Payload length in bytes, excluding the identifier prefix.
    #[inline]
    #[must_use]
    pub const fn payload_len(&self) -> usize {
        self.id().payload_len()
    }

    /// Length on the wire: identifier prefix plus payload.
    #[inline]
    #[must_use]
    pub const fn wire_len(&self) -> usize {
        1 + self.payload_len()
    }
}

impl From<SimplePadReport> for Report {
    fn from(report: SimplePadReport) -> Self {
        Self::SimplePad(report)
    }
}

impl From<DualStickReport> for Report {
    fn from(report: DualStickReport) -> Self {
        Self::DualStick(report)
    }
}
