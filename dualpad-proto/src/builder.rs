//! Builder API for composing serial frames on the sending side.
//!
//! The companion microcontroller (or a test) fills in typed fields and gets
//! back a [`Frame`] in the exact positional layout the bridge expects.
//!
//! # Example
//!
//! ```
//! use dualpad_proto::FrameBuilder;
//!
//! let mut buf = [0u8; 16];
//! let len = FrameBuilder::new()
//!     .simple_pad(0x01, 0x02)
//!     .dual_direction(0x03)
//!     .dual_buttons(0x04, 0x05)
//!     .left_stick(0x9C, 0x9C)
//!     .right_stick(0x64, 0x64)
//!     .serialize(&mut buf)
//!     .unwrap();
//!
//! assert_eq!(&buf[..len], &[0x01, 0x02, 0x03, 0x04, 0x05, 0x9C, 0x9C, 0x64, 0x64, 0x00]);
//! ```

use crate::frame::{
    Frame, DUAL_BUTTONS, DUAL_DIRECTION, LEFT_STICK_X, LEFT_STICK_Y, RIGHT_STICK_X,
    RIGHT_STICK_Y, SIMPLE_BUTTONS, SIMPLE_DIRECTION,
};
use crate::serialize::{Serialize, SerializeError};
use crate::stick::STICK_CENTER;

/// Builder for serial frames.
///
/// Starts from a neutral frame: no direction, no buttons, all four stick
/// samples at [`STICK_CENTER`], padding zero.
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    frame: Frame,
}

impl FrameBuilder {
    #[must_use]
    pub fn new() -> Self {
        let mut frame = Frame::ZERO;
        for offset in [LEFT_STICK_X, LEFT_STICK_Y, RIGHT_STICK_X, RIGHT_STICK_Y] {
            frame.0[offset] = STICK_CENTER;
        }
        Self { frame }
    }

    /// Set the simple pad direction and button bytes.
    #[must_use]
    pub fn simple_pad(mut self, direction: u8, buttons: u8) -> Self {
        self.frame.0[SIMPLE_DIRECTION] = direction;
        self.frame.0[SIMPLE_BUTTONS] = buttons;
        self
    }

    #[must_use]
    pub fn dual_direction(mut self, direction: u8) -> Self {
        self.frame.0[DUAL_DIRECTION] = direction;
        self
    }

    #[must_use]
    pub fn dual_buttons(mut self, first: u8, second: u8) -> Self {
        self.frame.0[DUAL_BUTTONS] = first;
        self.frame.0[DUAL_BUTTONS + 1] = second;
        self
    }

    /// Set the raw left stick samples (0-255, centered at 128).
    #[must_use]
    pub fn left_stick(mut self, x: u8, y: u8) -> Self {
        self.frame.0[LEFT_STICK_X] = x;
        self.frame.0[LEFT_STICK_Y] = y;
        self
    }

    /// Set the raw right stick samples (0-255, centered at 128).
    #[must_use]
    pub fn right_stick(mut self, x: u8, y: u8) -> Self {
        self.frame.0[RIGHT_STICK_X] = x;
        self.frame.0[RIGHT_STICK_Y] = y;
        self
    }

    /// Get the built frame without serializing.
    #[must_use]
    pub fn build(self) -> Frame {
        self.frame
    }

    /// Serialize the frame to the provided buffer.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if the buffer is shorter than a frame.
    pub fn serialize(self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        self.frame.serialize(buf)
    }

    /// Serialize to a `heapless::Vec`.
    #[cfg(feature = "heapless")]
    pub fn serialize_to_vec<const N: usize>(self) -> Result<heapless::Vec<u8, N>, SerializeError> {
        self.frame.serialize_to_vec()
    }
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::PADDING;
    use crate::report::DualStickReport;

    #[test]
    fn test_builder_defaults_are_neutral() {
        let frame = FrameBuilder::new().build();
        assert_eq!(frame.simple_direction(), 0);
        assert_eq!(frame.simple_buttons(), 0);
        assert_eq!(frame.raw_left_stick(), [STICK_CENTER; 2]);
        assert_eq!(frame.raw_right_stick(), [STICK_CENTER; 2]);
        assert_eq!(frame.as_bytes()[PADDING], 0);

        let report = DualStickReport::from_frame(&frame);
        assert_eq!(report.left_stick, [0, 0]);
        assert_eq!(report.right_stick, [0, 0]);
    }

    #[test]
    fn test_builder_sets_every_field() {
        let frame = FrameBuilder::new()
            .simple_pad(0x11, 0x22)
            .dual_direction(0x33)
            .dual_buttons(0x44, 0x55)
            .left_stick(0x66, 0x77)
            .right_stick(0x88, 0x99)
            .build();

        assert_eq!(
            frame.as_bytes(),
            &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0x00]
        );
    }

    #[test]
    fn test_builder_last_setter_wins() {
        let frame = FrameBuilder::new()
            .simple_pad(0x01, 0x01)
            .simple_pad(0x02, 0x03)
            .build();
        assert_eq!(frame.simple_direction(), 0x02);
        assert_eq!(frame.simple_buttons(), 0x03);
    }
}
