//! Report synthesis: turns an assembled frame into an input report.

use crate::alternator::ReportIdAlternator;
use crate::assembler::FrameState;
use dualpad_proto::{Report, ReportId};

/// Why no report was produced this cycle.
///
/// Neither case is fatal: the caller sends nothing and tries again on the
/// next poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SynthesisError {
    /// The current frame has not been fully received yet.
    FrameIncomplete,
    /// The resolved identifier names neither report profile.
    UnrecognizedIdentifier(u8),
}

impl core::fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FrameIncomplete => write!(f, "frame incomplete"),
            Self::UnrecognizedIdentifier(id) => write!(f, "unrecognized report id {id:#04x}"),
        }
    }
}

/// Build the report for `requested_id` from the current frame state.
///
/// Returns [`SynthesisError::FrameIncomplete`] without touching `ids` while
/// the frame is still being received. Otherwise the identifier is resolved
/// through `ids` (see [`ReportIdAlternator::resolve`]) and the matching
/// profile is extracted from the frame snapshot.
///
/// # Example
///
/// ```
/// use dualpad_core::{synthesize, FrameAssembler, ReportIdAlternator};
/// use dualpad_proto::ReportId;
///
/// let mut assembler = FrameAssembler::new();
/// for b in [0x01, 0x02, 0x03, 0x04, 0x05, 0x9C, 0x9C, 0x64, 0x64, 0x00] {
///     assembler.push_byte(b);
/// }
///
/// let mut ids = ReportIdAlternator::new();
/// let report = synthesize(&assembler.state(), &mut ids, 0).unwrap();
/// assert_eq!(report.id(), ReportId::SimplePad);
/// ```
pub fn synthesize(
    state: &FrameState,
    ids: &mut ReportIdAlternator,
    requested_id: u8,
) -> Result<Report, SynthesisError> {
    let frame = state.frame().ok_or(SynthesisError::FrameIncomplete)?;

    let resolved = ids.resolve(requested_id);
    let id = ReportId::try_from(resolved)
        .map_err(|e| SynthesisError::UnrecognizedIdentifier(e.0))?;

    Ok(Report::from_frame(id, frame))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::assembler::FrameAssembler;
    use dualpad_proto::{DualStickReport, Frame, FrameBuilder, SimplePadReport};

    const SAMPLE: [u8; 10] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x9C, 0x9C, 0x64, 0x64, 0x00];

    fn ready(frame: Frame) -> FrameState {
        FrameState::FrameReady(frame)
    }

    #[test]
    fn test_incomplete_frame_never_reports() {
        let mut assembler = FrameAssembler::new();
        let mut ids = ReportIdAlternator::new();

        for &b in &SAMPLE[..9] {
            assembler.push_byte(b);
            for requested in [0x00, 0x01, 0x02, 0x55] {
                assert_eq!(
                    synthesize(&assembler.state(), &mut ids, requested),
                    Err(SynthesisError::FrameIncomplete)
                );
            }
        }

        // Alternation state untouched by the failed attempts
        assert_eq!(ids, ReportIdAlternator::new());
    }

    #[test]
    fn test_end_to_end_alternation() {
        let state = ready(Frame::new(SAMPLE));
        let mut ids = ReportIdAlternator::new();

        let first = synthesize(&state, &mut ids, 0).unwrap();
        assert_eq!(
            first,
            Report::SimplePad(SimplePadReport {
                direction: 0x01,
                buttons: 0x02
            })
        );

        let second = synthesize(&state, &mut ids, 0).unwrap();
        assert_eq!(
            second,
            Report::DualStick(DualStickReport {
                direction: 0x03,
                buttons: [0x04, 0x05],
                left_stick: [0, 0],
                right_stick: [0, 0],
            })
        );
    }

    #[test]
    fn test_strict_alternation_on_ready_frame() {
        let state = ready(Frame::new(SAMPLE));
        let mut ids = ReportIdAlternator::new();

        for i in 0..8 {
            let expected = if i % 2 == 0 {
                ReportId::SimplePad
            } else {
                ReportId::DualStick
            };
            assert_eq!(synthesize(&state, &mut ids, 0).unwrap().id(), expected);
        }
    }

    #[test]
    fn test_requested_id_is_honoured() {
        let state = ready(Frame::new(SAMPLE));
        let mut ids = ReportIdAlternator::new();

        let report = synthesize(&state, &mut ids, ReportId::DualStick.raw()).unwrap();
        assert_eq!(report.id(), ReportId::DualStick);
        assert_eq!(ids.last(), ReportId::DualStick.raw());

        // Next unspecified request flips away from the recorded id
        let report = synthesize(&state, &mut ids, 0).unwrap();
        assert_eq!(report.id(), ReportId::SimplePad);
    }

    #[test]
    fn test_unrecognized_identifier() {
        let state = ready(Frame::new(SAMPLE));
        let mut ids = ReportIdAlternator::new();

        assert_eq!(
            synthesize(&state, &mut ids, 0x09),
            Err(SynthesisError::UnrecognizedIdentifier(0x09))
        );
        assert_eq!(ids.last(), 0x09);
    }

    #[test]
    fn test_stick_axes_are_normalized() {
        let frame = FrameBuilder::new()
            .left_stick(0xFF, 0x00)
            .right_stick(157, 99)
            .build();
        let mut ids = ReportIdAlternator::new();

        let report = synthesize(&ready(frame), &mut ids, ReportId::DualStick.raw()).unwrap();
        let Report::DualStick(dual) = report else {
            panic!("expected dual stick report, got {report:?}");
        };
        assert_eq!(dual.left_stick, [99, -100]);
        assert_eq!(dual.right_stick, [1, -1]);
    }

    #[test]
    fn test_display() {
        use std::string::ToString;

        assert_eq!(SynthesisError::FrameIncomplete.to_string(), "frame incomplete");
        assert_eq!(
            SynthesisError::UnrecognizedIdentifier(0x07).to_string(),
            "unrecognized report id 0x07"
        );
    }
}
