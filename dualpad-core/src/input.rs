//! Serial source trait and error types.

/// Error type for serial input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// UART/communication I/O error.
    Io,
    /// UART framing error.
    Framing,
    /// Receive overrun: bytes were lost before they could be read.
    Overrun,
    /// Line break condition.
    Break,
    /// Parity mismatch.
    Parity,
    /// The source has no more data and never will (e.g. channel closed).
    Disconnected,
}

/// Byte-at-a-time serial line.
///
/// Both methods must return immediately: the ingest loop peeks with
/// [`byte_available`](Self::byte_available) and only calls
/// [`read_byte`](Self::read_byte) when it returned `true`.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait SerialSource {
    /// Check whether at least one byte can be read without waiting.
    fn byte_available(&mut self) -> bool;

    /// Read the next byte.
    ///
    /// Only called after [`byte_available`](Self::byte_available) returned
    /// `true`.
    fn read_byte(&mut self) -> Result<u8, InputError>;
}

impl<T: SerialSource + ?Sized> SerialSource for &mut T {
    fn byte_available(&mut self) -> bool {
        (**self).byte_available()
    }

    fn read_byte(&mut self) -> Result<u8, InputError> {
        (**self).read_byte()
    }
}
