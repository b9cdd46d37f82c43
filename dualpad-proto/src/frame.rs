//! Serial frame layout.
//!
//! The companion microcontroller sends one fixed-length frame per cycle. There
//! is no delimiter and no checksum: each field is identified purely by its
//! position in the frame.
//!
//! ```text
//! offset  0          1         2          3          4          5    6    7    8    9
//!         +----------+---------+----------+----------+----------+----+----+----+----+-----+
//!         | pad dir  | pad btn | dual dir | dual b0  | dual b1  | LX | LY | RX | RY | pad |
//!         +----------+---------+----------+----------+----------+----+----+----+----+-----+
//!         \__ simple pad ____/ \____________________ dual stick _________________/
//! ```

/// Number of bytes in one serial frame.
pub const FRAME_LEN: usize = 10;

/// Simple pad direction byte.
pub const SIMPLE_DIRECTION: usize = 0;
/// Simple pad button byte.
pub const SIMPLE_BUTTONS: usize = 1;
/// Dual stick direction byte.
pub const DUAL_DIRECTION: usize = 2;
/// First of the two dual stick button bytes.
pub const DUAL_BUTTONS: usize = 3;
/// Raw left stick X sample (0-255, centered at 128).
pub const LEFT_STICK_X: usize = 5;
/// Raw left stick Y sample.
pub const LEFT_STICK_Y: usize = 6;
/// Raw right stick X sample.
pub const RIGHT_STICK_X: usize = 7;
/// Raw right stick Y sample.
pub const RIGHT_STICK_Y: usize = 8;
/// Unused trailing byte.
pub const PADDING: usize = 9;

/// One complete serial frame.
///
/// A small `Copy` value: the assembler hands it out by value as an immutable
/// snapshot, so a reader never aliases the storage being overwritten.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame(pub [u8; FRAME_LEN]);

impl Frame {
    /// All-zero frame.
    pub const ZERO: Self = Self([0; FRAME_LEN]);

    #[must_use]
    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw frame bytes in wire order.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn simple_direction(&self) -> u8 {
        self.0[SIMPLE_DIRECTION]
    }

    #[inline]
    #[must_use]
    pub const fn simple_buttons(&self) -> u8 {
        self.0[SIMPLE_BUTTONS]
    }

    #[inline]
    #[must_use]
    pub const fn dual_direction(&self) -> u8 {
        self.0[DUAL_DIRECTION]
    }

    #[inline]
    #[must_use]
    pub const fn dual_buttons(&self) -> [u8; 2] {
        [self.0[DUAL_BUTTONS], self.0[DUAL_BUTTONS + 1]]
    }

    /// Raw (un-normalized) left stick samples as `[x, y]`.
    #[inline]
    #[must_use]
    pub const fn raw_left_stick(&self) -> [u8; 2] {
        [self.0[LEFT_STICK_X], self.0[LEFT_STICK_Y]]
    }

    /// Raw (un-normalized) right stick samples as `[x, y]`.
    #[inline]
    #[must_use]
    pub const fn raw_right_stick(&self) -> [u8; 2] {
        [self.0[RIGHT_STICK_X], self.0[RIGHT_STICK_Y]]
    }
}

impl From<[u8; FRAME_LEN]> for Frame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessors_follow_layout() {
        let frame = Frame::new([0x01, 0x02, 0x03, 0x04, 0x05, 0x9C, 0x9D, 0x64, 0x63, 0xEE]);

        assert_eq!(frame.simple_direction(), 0x01);
        assert_eq!(frame.simple_buttons(), 0x02);
        assert_eq!(frame.dual_direction(), 0x03);
        assert_eq!(frame.dual_buttons(), [0x04, 0x05]);
        assert_eq!(frame.raw_left_stick(), [0x9C, 0x9D]);
        assert_eq!(frame.raw_right_stick(), [0x64, 0x63]);
        assert_eq!(frame.as_bytes()[PADDING], 0xEE);
    }

    #[test]
    fn test_zero_frame() {
        assert_eq!(Frame::default(), Frame::ZERO);
        assert!(Frame::ZERO.as_bytes().iter().all(|&b| b == 0));
    }
}
