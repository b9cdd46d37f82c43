//! Wire serialization for reports and frames.
//!
//! # Wire Format
//!
//! Input reports are sent with their identifier as the first byte:
//!
//! ```text
//! simple pad:  [0x01, direction, buttons]
//! dual stick:  [0x02, direction, buttons0, buttons1, lx, ly, rx, ry]
//! ```
//!
//! Frames are sent by the companion microcontroller as their 10 raw bytes,
//! with nothing before or after them.
//!
//! # Example
//!
//! ```
//! use dualpad_proto::{Report, SimplePadReport, Serialize};
//!
//! let report = Report::SimplePad(SimplePadReport { direction: 0x04, buttons: 0x81 });
//! let mut buf = [0u8; 8];
//! let len = report.serialize(&mut buf).unwrap();
//! assert_eq!(&buf[..len], &[0x01, 0x04, 0x81]);
//! ```

use crate::frame::{Frame, FRAME_LEN};
use crate::report::{DualStickReport, Report};

/// Largest serialized report (identifier prefix plus dual stick payload).
pub const MAX_REPORT_SIZE: usize = 1 + DualStickReport::SIZE;

/// Error type for serialization operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerializeError {
    /// The output buffer is too small to hold the serialized message.
    BufferTooSmall,
}

impl core::fmt::Display for SerializeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "buffer too small"),
        }
    }
}

/// Extension trait for serializing wire messages.
///
/// Implemented for [`Report`] (device to host) and [`Frame`] (companion
/// microcontroller to device).
pub trait Serialize {
    /// Serialize to the provided buffer.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if the buffer is not large enough.
    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError>;

    /// Serialize to a `heapless::Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if `N` is not large enough.
    #[cfg(feature = "heapless")]
    fn serialize_to_vec<const N: usize>(&self) -> Result<heapless::Vec<u8, N>, SerializeError> {
        let mut vec = heapless::Vec::new();
        vec.resize(N, 0)
            .map_err(|_| SerializeError::BufferTooSmall)?;
        let len = self.serialize(&mut vec)?;
        vec.truncate(len);
        Ok(vec)
    }
}

impl Serialize for Report {
    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        let len = self.wire_len();
        let out = buf.get_mut(..len).ok_or(SerializeError::BufferTooSmall)?;

        out[0] = self.id().raw();
        match self {
            Self::SimplePad(report) => out[1..].copy_from_slice(&report.as_bytes()),
            Self::DualStick(report) => out[1..].copy_from_slice(&report.as_bytes()),
        }

        Ok(len)
    }
}

impl Serialize for Frame {
    fn serialize(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        buf.get_mut(..FRAME_LEN)
            .ok_or(SerializeError::BufferTooSmall)?
            .copy_from_slice(self.as_bytes());
        Ok(FRAME_LEN)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::report::{ReportId, SimplePadReport};
    use std::string::ToString;

    #[test]
    fn test_serialize_simple_pad() {
        let report = Report::SimplePad(SimplePadReport {
            direction: 0x01,
            buttons: 0x02,
        });
        let mut buf = [0u8; MAX_REPORT_SIZE];
        let len = report.serialize(&mut buf).unwrap();
        assert_eq!(&buf[..len], &[0x01, 0x01, 0x02]);
    }

    #[test]
    fn test_serialize_dual_stick() {
        let report = Report::DualStick(DualStickReport {
            direction: 0x03,
            buttons: [0x04, 0x05],
            left_stick: [-100, 99],
            right_stick: [0, -1],
        });
        let mut buf = [0u8; MAX_REPORT_SIZE];
        let len = report.serialize(&mut buf).unwrap();
        assert_eq!(len, MAX_REPORT_SIZE);
        assert_eq!(&buf[..len], &[0x02, 0x03, 0x04, 0x05, 0x9C, 0x63, 0x00, 0xFF]);
    }

    #[test]
    fn test_serialize_report_buffer_too_small() {
        let frame = Frame::new([0; FRAME_LEN]);
        let report = Report::from_frame(ReportId::DualStick, &frame);
        let mut buf = [0u8; 7];
        assert_eq!(report.serialize(&mut buf), Err(SerializeError::BufferTooSmall));

        // Exactly large enough for the simple pad layout
        let report = Report::from_frame(ReportId::SimplePad, &frame);
        let mut buf = [0u8; 3];
        assert_eq!(report.serialize(&mut buf), Ok(3));
    }

    #[test]
    fn test_serialize_error_display() {
        let report = Report::from_frame(ReportId::DualStick, &Frame::ZERO);
        let err = match report.serialize(&mut [0u8; 2]) {
            Err(err) => err,
            Ok(len) => panic!("wrote {len} bytes into a 2-byte buffer"),
        };
        match err {
            SerializeError::BufferTooSmall => assert_eq!(err.to_string(), "buffer too small"),
        }
    }

    #[test]
    fn test_serialize_frame() {
        let frame = Frame::new([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        let mut buf = [0u8; 16];
        let len = frame.serialize(&mut buf).unwrap();
        assert_eq!(len, FRAME_LEN);
        assert_eq!(&buf[..len], frame.as_bytes());
    }

    #[test]
    fn test_serialize_frame_buffer_too_small() {
        let mut buf = [0u8; FRAME_LEN - 1];
        assert_eq!(
            Frame::ZERO.serialize(&mut buf),
            Err(SerializeError::BufferTooSmall)
        );
    }

    #[cfg(feature = "heapless")]
    #[test]
    fn test_serialize_to_vec() {
        let report = Report::SimplePad(SimplePadReport {
            direction: 0x10,
            buttons: 0x20,
        });
        let vec = report.serialize_to_vec::<MAX_REPORT_SIZE>().unwrap();
        assert_eq!(vec.as_slice(), &[0x01, 0x10, 0x20]);
    }
}
