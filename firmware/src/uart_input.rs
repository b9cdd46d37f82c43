//! UART byte source for the frame assembler.
//!
//! The UART peripheral is read asynchronously by [`read_uart`], one byte at a
//! time, and every byte (or receive error) is queued in a [`ByteChannel`].
//! The ingest loop sees that queue through [`ChannelSerialSource`], which
//! implements the non-blocking peek/read contract of [`SerialSource`].
//!
//! # Pins
//!
//! Uses UART1 at 115200 baud, 8N1:
//! - GPIO 8: TX (unused)
//! - GPIO 9: RX

use defmt::warn;
use dualpad_core::{InputError, SerialSource};
use embassy_rp::uart::{Async, Error as UartError, UartRx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::{AtomicU32, Ordering};

/// Baud rate of the link to the companion microcontroller.
pub const UART_BAUDRATE: u32 = 115_200;

/// Bytes buffered between the UART reader and the ingest loop.
pub const BYTE_CHANNEL_DEPTH: usize = 32;

/// Queue of received bytes (or receive errors), oldest first.
pub type ByteChannel =
    Channel<CriticalSectionRawMutex, Result<u8, InputError>, BYTE_CHANNEL_DEPTH>;

/// Receive errors seen since start-up.
static UART_ERRORS: AtomicU32 = AtomicU32::new(0);

/// Convert UART errors to [`InputError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan rule issues
/// (both `UartError` and `InputError` are defined in external crates).
#[inline]
fn uart_error_to_input_error(e: UartError) -> InputError {
    match e {
        UartError::Framing => InputError::Framing,
        UartError::Overrun => InputError::Overrun,
        UartError::Break => InputError::Break,
        UartError::Parity => InputError::Parity,
        _ => InputError::Io,
    }
}

/// Number of UART receive errors since start-up.
#[must_use]
pub fn uart_error_count() -> u32 {
    UART_ERRORS.load(Ordering::Relaxed)
}

/// Read the UART forever, queueing every byte or error into `channel`.
///
/// Waits when the channel is full, so the ingest loop sees bytes in order.
pub async fn read_uart(mut rx: UartRx<'_, Async>, channel: &ByteChannel) -> ! {
    let mut byte = [0u8; 1];

    loop {
        let received = match rx.read(&mut byte).await {
            Ok(()) => Ok(byte[0]),
            Err(e) => {
                let total = UART_ERRORS.fetch_add(1, Ordering::Relaxed) + 1;
                warn!("UART receive error: {:?} ({} total)", e, total);
                Err(uart_error_to_input_error(e))
            }
        };
        channel.send(received).await;
    }
}

/// [`SerialSource`] backed by a [`ByteChannel`].
pub struct ChannelSerialSource<'a> {
    channel: &'a ByteChannel,
}

impl<'a> ChannelSerialSource<'a> {
    /// Create a source draining the given channel.
    #[must_use]
    pub fn new(channel: &'a ByteChannel) -> Self {
        Self { channel }
    }

    /// Bytes currently queued.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> usize {
        self.channel.len()
    }
}

impl SerialSource for ChannelSerialSource<'_> {
    fn byte_available(&mut self) -> bool {
        !self.channel.is_empty()
    }

    fn read_byte(&mut self) -> Result<u8, InputError> {
        // An empty queue here means the peek was skipped
        self.channel.try_receive().map_err(|_| InputError::Io)?
    }
}
