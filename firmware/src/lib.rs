//! Serial-to-dual-gamepad firmware for RP2040.
//!
//! Receives 10-byte controller frames from a companion microcontroller over
//! UART and presents them to the USB host as two HID gamepads, emitting the
//! simple pad and dual stick reports alternately.

#![no_std]

use core::cell::RefCell;

use embassy_rp::gpio::Output;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

// Re-export core types for convenience
pub use dualpad_core::{
    synthesize, BridgeError, FrameAssembler, FrameState, InputError, OutputError, ReportIdAlternator,
    ReportSink, SerialHidBridge, SynthesisError, UNSPECIFIED_REPORT_ID,
};
pub use dualpad_proto::{Report, ReportId, Serialize, FRAME_LEN, MAX_REPORT_SIZE};

pub mod indicator;
pub mod uart_input;
pub mod usb_output;

pub use indicator::LedIndicator;
pub use uart_input::{read_uart, uart_error_count, ByteChannel, ChannelSerialSource, UART_BAUDRATE};
pub use usb_output::{configure_usb_hid, DualpadRequestHandler, UsbHidOutput, REPORT_DESCRIPTOR};

/// The bridge as wired on the board: UART byte queue in, on-board LED as indicator.
pub type PadBridge = SerialHidBridge<ChannelSerialSource<'static>, LedIndicator<Output<'static>>>;

/// Bridge shared between the ingest loop, the report loop and USB control requests.
pub type SharedBridge = Mutex<CriticalSectionRawMutex, RefCell<PadBridge>>;
