//! SerialHidBridge: connects a serial source to HID report synthesis.

use crate::alternator::ReportIdAlternator;
use crate::assembler::{FrameAssembler, FrameState};
use crate::input::{InputError, SerialSource};
use crate::output::ActivityIndicator;
use crate::synthesizer::{synthesize, SynthesisError};
use dualpad_proto::{Report, Serialize, SerializeError};

/// Owns the frame assembler and the identifier alternator, and drives them
/// from a serial source on one side and report requests on the other.
///
/// Every method is non-blocking and bounded, so a bridge can be shared
/// between an ingest loop and a report path by wrapping it in a critical
/// section mutex; a report then never sees a half-overwritten frame.
///
/// # Error Handling
///
/// Nothing is fatal. Serial errors drop the offending byte; synthesis errors
/// mean "no report this cycle".
pub struct SerialHidBridge<S, A> {
    source: S,
    indicator: A,
    assembler: FrameAssembler,
    ids: ReportIdAlternator,
}

impl<S: SerialSource, A: ActivityIndicator> SerialHidBridge<S, A> {
    /// Create a new bridge with an empty frame and a neutral identifier.
    pub fn new(source: S, indicator: A) -> Self {
        Self {
            source,
            indicator,
            assembler: FrameAssembler::new(),
            ids: ReportIdAlternator::new(),
        }
    }

    /// Run one ingest step.
    ///
    /// Returns `Ok(None)` when no byte is waiting. Otherwise the byte is read,
    /// the indicator is switched on and the byte is stored; the new frame
    /// state is returned.
    pub fn poll_serial(&mut self) -> Result<Option<FrameState>, InputError> {
        if !self.source.byte_available() {
            return Ok(None);
        }

        let byte = self.source.read_byte()?;
        self.indicator.set_active(true);
        Ok(Some(self.assembler.push_byte(byte)))
    }

    /// Drain every byte currently available, stopping at the first error.
    ///
    /// Returns the number of bytes stored.
    pub fn poll_all(&mut self) -> Result<usize, InputError> {
        let mut count = 0;
        while self.poll_serial()?.is_some() {
            count += 1;
        }
        Ok(count)
    }

    /// Synthesize the report for `requested_id` (0 = alternate profiles).
    ///
    /// Switches the indicator off when a report is produced.
    pub fn create_report(&mut self, requested_id: u8) -> Result<Report, SynthesisError> {
        let report = synthesize(&self.assembler.state(), &mut self.ids, requested_id)?;
        self.indicator.set_active(false);
        Ok(report)
    }

    /// Synthesize a report and write its wire form into `buf`.
    ///
    /// Returns the number of bytes written.
    pub fn write_report(
        &mut self,
        requested_id: u8,
        buf: &mut [u8],
    ) -> Result<usize, BridgeError> {
        let report = self.create_report(requested_id)?;
        Ok(report.serialize(buf)?)
    }

    /// Current frame state.
    #[must_use]
    pub fn frame_state(&self) -> FrameState {
        self.assembler.state()
    }

    /// Get a reference to the frame assembler.
    pub fn assembler(&self) -> &FrameAssembler {
        &self.assembler
    }

    /// Get a reference to the identifier alternator.
    pub fn alternator(&self) -> &ReportIdAlternator {
        &self.ids
    }

    /// Get a reference to the serial source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the serial source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the activity indicator.
    pub fn indicator(&self) -> &A {
        &self.indicator
    }

    /// Decompose the bridge into its source and indicator.
    pub fn into_parts(self) -> (S, A) {
        (self.source, self.indicator)
    }
}

/// Error type for bridge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// Error from the serial source.
    Input(InputError),
    /// No report could be synthesized.
    Synthesis(SynthesisError),
    /// The report did not fit the output buffer.
    Serialize(SerializeError),
}

impl From<InputError> for BridgeError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl From<SynthesisError> for BridgeError {
    fn from(err: SynthesisError) -> Self {
        Self::Synthesis(err)
    }
}

impl From<SerializeError> for BridgeError {
    fn from(err: SerializeError) -> Self {
        Self::Serialize(err)
    }
}
