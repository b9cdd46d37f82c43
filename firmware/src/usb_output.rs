//! USB HID output: report descriptor, report writer and request handler.

use crate::SharedBridge;
use defmt::{debug, trace};
use dualpad_core::{OutputError, ReportSink};
use dualpad_proto::MAX_REPORT_SIZE;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::{HidWriter, ReportId as HidReportId, RequestHandler, State};
use embassy_usb::control::OutResponse;
use embassy_usb::driver::EndpointError;
use embassy_usb::Builder;

/// Interval at which the host polls the interrupt IN endpoint.
pub const HID_POLL_MS: u8 = 1;

/// HID writer sized for the largest report (identifier prefix included).
pub type DualpadHidWriter<'d> = HidWriter<'d, Driver<'d, USB>, MAX_REPORT_SIZE>;

/// HID report descriptor for both gamepad profiles.
///
/// Each profile is its own application collection, distinguished by the
/// report identifier prefixed to every input report:
/// - Report 1: direction (hat, 8 bits) + 8 buttons
/// - Report 2: direction (hat, 8 bits) + 16 buttons + X/Y/Z/Rz (signed 8-bit)
///
/// Direction values 0-7 are the eight hat positions; anything else reads as
/// centered.
pub const REPORT_DESCRIPTOR: &[u8] = &[
    // === Report 1: simple pad ===
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Gamepad)
    0xA1, 0x01, // Collection (Application)
    0x85, 0x01, //   Report ID (1)
    //
    // --- Direction ---
    0x09, 0x39, //   Usage (Hat switch)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x07, //   Logical Maximum (7)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x42, //   Input (Data, Variable, Absolute, Null State)
    //
    // --- Buttons (8 buttons) ---
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (Button 1)
    0x29, 0x08, //   Usage Maximum (Button 8)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    0xC0, // End Collection
    //
    // === Report 2: dual stick ===
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Gamepad)
    0xA1, 0x01, // Collection (Application)
    0x85, 0x02, //   Report ID (2)
    //
    // --- Direction ---
    0x09, 0x39, //   Usage (Hat switch)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x07, //   Logical Maximum (7)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x42, //   Input (Data, Variable, Absolute, Null State)
    //
    // --- Buttons (16 buttons) ---
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (Button 1)
    0x29, 0x10, //   Usage Maximum (Button 16)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x10, //   Report Count (16)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Sticks: left X/Y, right X/Y ---
    0x05, 0x01, //   Usage Page (Generic Desktop)
    0x09, 0x30, //   Usage (X)
    0x09, 0x31, //   Usage (Y)
    0x09, 0x32, //   Usage (Z)
    0x09, 0x35, //   Usage (Rz)
    0x15, 0x81, //   Logical Minimum (-127)
    0x25, 0x7F, //   Logical Maximum (127)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x04, //   Report Count (4)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    0xC0, // End Collection
];

#[inline]
fn endpoint_error_to_output_error(e: EndpointError) -> OutputError {
    match e {
        EndpointError::BufferOverflow => OutputError::TooLarge,
        EndpointError::Disabled => OutputError::Disabled,
    }
}

/// USB HID gamepad output.
///
/// Wraps an embassy-usb HID writer to send serialized reports.
pub struct UsbHidOutput<'d> {
    writer: DualpadHidWriter<'d>,
    ready: bool,
}

impl<'d> UsbHidOutput<'d> {
    /// Create a new USB HID output from the given HID writer.
    pub fn new(writer: DualpadHidWriter<'d>) -> Self {
        Self {
            writer,
            ready: false,
        }
    }

    /// Wait until the device is ready (USB enumerated).
    pub async fn wait_ready(&mut self) {
        self.writer.ready().await;
        self.ready = true;
    }
}

impl ReportSink for UsbHidOutput<'_> {
    async fn send(&mut self, report: &[u8]) -> Result<(), OutputError> {
        let result = self
            .writer
            .write(report)
            .await
            .map_err(endpoint_error_to_output_error);
        if result == Err(OutputError::Disabled) {
            self.ready = false;
        }
        result
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// HID request handler.
///
/// Answers GET_REPORT(Input) from the shared bridge, with the host's report
/// identifier (0 alternates like the periodic reports do). The idle rate the
/// host sets is stored and echoed back only; the report task keeps its fixed
/// poll interval.
pub struct DualpadRequestHandler {
    bridge: &'static SharedBridge,
    idle_ms: u32,
}

impl DualpadRequestHandler {
    #[must_use]
    pub fn new(bridge: &'static SharedBridge) -> Self {
        Self { bridge, idle_ms: 0 }
    }
}

impl RequestHandler for DualpadRequestHandler {
    fn get_report(&mut self, id: HidReportId, buf: &mut [u8]) -> Option<usize> {
        let HidReportId::In(requested) = id else {
            return None;
        };

        match self
            .bridge
            .lock(|bridge| bridge.borrow_mut().write_report(requested, buf))
        {
            Ok(len) => {
                trace!("GET_REPORT {=u8}: {} bytes", requested, len);
                Some(len)
            }
            Err(e) => {
                debug!("GET_REPORT {=u8} not served: {:?}", requested, e);
                None
            }
        }
    }

    fn set_report(&mut self, _id: HidReportId, _data: &[u8]) -> OutResponse {
        OutResponse::Accepted
    }

    fn set_idle_ms(&mut self, _id: Option<HidReportId>, duration_ms: u32) {
        debug!("SET_IDLE {} ms", duration_ms);
        self.idle_ms = duration_ms;
    }

    fn get_idle_ms(&mut self, _id: Option<HidReportId>) -> Option<u32> {
        Some(self.idle_ms)
    }
}

/// Configure the USB HID class in the USB builder.
///
/// Returns the HID writer for use by the application.
pub fn configure_usb_hid<'d>(
    builder: &mut Builder<'d, Driver<'d, USB>>,
    state: &'d mut State<'d>,
    request_handler: &'d mut DualpadRequestHandler,
) -> DualpadHidWriter<'d> {
    let config = embassy_usb::class::hid::Config {
        report_descriptor: REPORT_DESCRIPTOR,
        request_handler: Some(request_handler),
        poll_ms: HID_POLL_MS,
        max_packet_size: MAX_REPORT_SIZE as u16,
        hid_subclass: embassy_usb::class::hid::HidSubclass::No,
        hid_boot_protocol: embassy_usb::class::hid::HidBootProtocol::None,
    };

    HidWriter::new(builder, state, config)
}
