//! Analog stick normalization.
//!
//! The sender samples each stick axis as an unsigned byte centered at 128.
//! The HID report carries signed bytes instead, with a band around the center
//! folded away by a fixed offset. Only integer subtraction is used.

/// Raw sample value of a centered stick.
pub const STICK_CENTER: u8 = 0x80;

/// Offset removed from every sample at or beyond the dead-zone edge.
pub const DEAD_ZONE: i8 = 0x1C;

/// Convert a raw 0-255 stick sample into a signed report axis.
///
/// The sample is re-centered around zero, then pulled toward the center by
/// [`DEAD_ZONE`] once its magnitude reaches [`DEAD_ZONE`]. Samples closer to
/// the center than that pass through untouched, so the output is not
/// monotonic around +/-28: `155 -> 27` but `156 -> 0`.
///
/// The extremes map to `0 -> -100` and `255 -> 99`.
///
/// # Example
///
/// ```
/// use dualpad_proto::normalize_axis;
///
/// assert_eq!(normalize_axis(128), 0);
/// assert_eq!(normalize_axis(157), 1);
/// assert_eq!(normalize_axis(99), -1);
/// ```
#[inline]
#[must_use]
pub const fn normalize_axis(raw: u8) -> i8 {
    let centered = raw.wrapping_sub(STICK_CENTER) as i8;
    if centered >= DEAD_ZONE {
        centered - DEAD_ZONE
    } else if centered <= -DEAD_ZONE {
        centered + DEAD_ZONE
    } else {
        centered
    }
}

/// Normalize an `[x, y]` pair of raw samples.
#[inline]
#[must_use]
pub const fn normalize_stick(raw: [u8; 2]) -> [i8; 2] {
    [normalize_axis(raw[0]), normalize_axis(raw[1])]
}
