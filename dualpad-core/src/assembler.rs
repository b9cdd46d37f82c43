//! Serial ingest buffer: accumulates bytes into fixed-length frames.

use dualpad_proto::{Frame, FRAME_LEN};

/// Whether a complete frame is available.
///
/// Derived from the assembler's fill counter on every call; nothing else is
/// stored. A frame stays ready until the next byte arrives, at which point
/// that byte starts a new frame at offset 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameState {
    /// Fewer than [`FRAME_LEN`] bytes of the current frame have arrived.
    AwaitingFrame {
        /// Bytes of the current frame received so far (`0..FRAME_LEN`).
        filled: usize,
    },
    /// A full frame is assembled. Holds a snapshot of it.
    FrameReady(Frame),
}

impl FrameState {
    #[inline]
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::FrameReady(_))
    }

    /// The assembled frame, if ready.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> Option<&Frame> {
        match self {
            Self::FrameReady(frame) => Some(frame),
            Self::AwaitingFrame { .. } => None,
        }
    }
}

/// Positional frame assembler.
///
/// Bytes are stored in arrival order. Once [`FRAME_LEN`] bytes are in, the
/// frame is ready; the next byte wipes the counter and overwrites the frame
/// from offset 0. There is no start marker, so if the sender and the
/// assembler disagree on where a frame begins, every following frame is
/// shifted and nothing here can detect it.
#[derive(Clone, Debug)]
pub struct FrameAssembler {
    frame: Frame,
    filled: usize,
    frames_completed: u32,
}

impl FrameAssembler {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frame: Frame::ZERO,
            filled: 0,
            frames_completed: 0,
        }
    }

    /// Store one byte and return the resulting state.
    pub fn push_byte(&mut self, byte: u8) -> FrameState {
        if self.filled == FRAME_LEN {
            self.filled = 0;
        }

        self.frame.0[self.filled] = byte;
        self.filled += 1;

        if self.filled == FRAME_LEN {
            self.frames_completed = self.frames_completed.wrapping_add(1);
        }

        self.state()
    }

    #[must_use]
    pub const fn state(&self) -> FrameState {
        if self.filled == FRAME_LEN {
            FrameState::FrameReady(self.frame)
        } else {
            FrameState::AwaitingFrame {
                filled: self.filled,
            }
        }
    }

    /// Snapshot of the assembled frame, or `None` while a frame is in progress.
    #[inline]
    #[must_use]
    pub const fn snapshot(&self) -> Option<Frame> {
        if self.filled == FRAME_LEN {
            Some(self.frame)
        } else {
            None
        }
    }

    /// Fill counter: bytes of the current frame received (`0..=FRAME_LEN`).
    #[inline]
    #[must_use]
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// Number of frames completed since start-up (wraps).
    #[inline]
    #[must_use]
    pub const fn frames_completed(&self) -> u32 {
        self.frames_completed
    }

    /// Raw frame storage, including bytes of a partially received frame.
    #[inline]
    #[must_use]
    pub const fn raw(&self) -> &[u8; FRAME_LEN] {
        self.frame.as_bytes()
    }
}

impl Default for FrameAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; FRAME_LEN] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x9C, 0x9C, 0x64, 0x64, 0x00];

    fn feed(assembler: &mut FrameAssembler, bytes: &[u8]) -> FrameState {
        let mut state = assembler.state();
        for &b in bytes {
            state = assembler.push_byte(b);
        }
        state
    }

    #[test]
    fn test_new_assembler_awaits_frame() {
        let assembler = FrameAssembler::new();
        assert_eq!(assembler.state(), FrameState::AwaitingFrame { filled: 0 });
        assert_eq!(assembler.snapshot(), None);
        assert_eq!(assembler.frames_completed(), 0);
    }

    #[test]
    fn test_partial_frame_is_not_ready() {
        let mut assembler = FrameAssembler::new();
        for (i, &b) in SAMPLE[..FRAME_LEN - 1].iter().enumerate() {
            let state = assembler.push_byte(b);
            assert_eq!(state, FrameState::AwaitingFrame { filled: i + 1 });
        }
        assert!(!assembler.state().is_ready());
        assert_eq!(assembler.filled(), FRAME_LEN - 1);
    }

    #[test]
    fn test_full_frame_in_order() {
        let mut assembler = FrameAssembler::new();
        let state = feed(&mut assembler, &SAMPLE);

        assert_eq!(assembler.filled(), FRAME_LEN);
        assert_eq!(state, FrameState::FrameReady(Frame::new(SAMPLE)));
        assert_eq!(state.frame(), Some(&Frame::new(SAMPLE)));
        assert_eq!(assembler.snapshot(), Some(Frame::new(SAMPLE)));
        assert_eq!(assembler.frames_completed(), 1);
    }

    #[test]
    fn test_any_sequence_is_stored_verbatim() {
        for seed in 0u8..=25 {
            let mut bytes = [0u8; FRAME_LEN];
            for (i, b) in bytes.iter_mut().enumerate() {
                *b = seed.wrapping_mul(37).wrapping_add(i as u8 * 11);
            }

            let mut assembler = FrameAssembler::new();
            feed(&mut assembler, &bytes);
            assert_eq!(assembler.filled(), FRAME_LEN);
            assert_eq!(assembler.raw(), &bytes);
        }
    }

    #[test]
    fn test_eleventh_byte_starts_new_frame() {
        let mut assembler = FrameAssembler::new();
        feed(&mut assembler, &SAMPLE);

        let state = assembler.push_byte(0xAA);
        assert_eq!(state, FrameState::AwaitingFrame { filled: 1 });
        assert_eq!(assembler.snapshot(), None);

        // Only offset 0 is overwritten, the rest still holds the old frame
        assert_eq!(assembler.raw()[0], 0xAA);
        assert_eq!(&assembler.raw()[1..], &SAMPLE[1..]);
    }

    #[test]
    fn test_frame_stays_ready_until_next_byte() {
        let mut assembler = FrameAssembler::new();
        feed(&mut assembler, &SAMPLE);
        assert!(assembler.state().is_ready());
        assert!(assembler.state().is_ready());
        assert_eq!(assembler.frames_completed(), 1);
    }

    #[test]
    fn test_back_to_back_frames() {
        let mut second = SAMPLE;
        second.reverse();

        let mut assembler = FrameAssembler::new();
        feed(&mut assembler, &SAMPLE);
        let state = feed(&mut assembler, &second);

        assert_eq!(state, FrameState::FrameReady(Frame::new(second)));
        assert_eq!(assembler.frames_completed(), 2);
    }

    #[test]
    fn test_extra_byte_shifts_following_frames() {
        // A stray byte ahead of the frame is taken as offset 0; the frame's
        // last byte then becomes offset 0 of the next frame.
        let mut assembler = FrameAssembler::new();
        feed(&mut assembler, &[0xEE]);
        let state = feed(&mut assembler, &SAMPLE[..FRAME_LEN - 1]);

        let frame = state.frame().copied().unwrap();
        assert_eq!(frame.simple_direction(), 0xEE);
        assert_eq!(frame.simple_buttons(), SAMPLE[0]);
    }
}
