#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::{debug, error, info, trace, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{UART1, USB};
use embassy_rp::uart::{Async, Config as UartConfig, Uart, UartRx};
use embassy_rp::usb::Driver;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Ticker};
use embassy_usb::class::hid::State;
use embassy_usb::{Builder, Config as UsbConfig};
use serial_to_dualpad::{
    configure_usb_hid, read_uart, usb_output::HID_POLL_MS, ByteChannel, ChannelSerialSource,
    DualpadRequestHandler, FrameState, LedIndicator, PadBridge, ReportSink, Serialize,
    SharedBridge, SynthesisError, UsbHidOutput, MAX_REPORT_SIZE, UART_BAUDRATE,
    UNSPECIFIED_REPORT_ID,
};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

/// Bytes received on the UART, waiting to be assembled into frames.
static BYTE_CHANNEL: ByteChannel = ByteChannel::new();

/// Frame assembler and report identifier state, shared with USB control requests.
static BRIDGE: StaticCell<SharedBridge> = StaticCell::new();

/// USB device configuration buffers.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state.
static HID_STATE: StaticCell<State> = StaticCell::new();
static REQUEST_HANDLER: StaticCell<DualpadRequestHandler> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Serial-to-Dualpad starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = UART_BAUDRATE;

    let uart = Uart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let (_tx, rx) = uart.split();

    // --- Bridge Setup ---
    // On-board LED on Pico, lit while a frame is arriving
    let led = LedIndicator::new(Output::new(p.PIN_25, Level::Low));
    let source = ChannelSerialSource::new(&BYTE_CHANNEL);
    let bridge: &'static SharedBridge =
        BRIDGE.init(Mutex::new(RefCell::new(PadBridge::new(source, led))));

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    let mut usb_config = UsbConfig::new(0x1209, 0x0002); // pid.codes test VID/PID
    usb_config.manufacturer = Some("Rust Gamepad");
    usb_config.product = Some("Serial-to-Dualpad Bridge");
    usb_config.serial_number = Some("001");
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    // Configure HID class
    let hid_state = HID_STATE.init(State::new());
    let request_handler = REQUEST_HANDLER.init(DualpadRequestHandler::new(bridge));
    let hid_writer = configure_usb_hid(&mut builder, hid_state, request_handler);

    // Build the USB device
    let usb_device = builder.build();

    // Create output
    let usb_output = UsbHidOutput::new(hid_writer);

    // Spawn tasks (unwrap the SpawnToken, then spawn)
    spawner.spawn(usb_task(usb_device).unwrap());
    spawner.spawn(uart_task(rx).unwrap());
    spawner.spawn(ingest_task(bridge).unwrap());
    spawner.spawn(report_task(usb_output, bridge).unwrap());

    info!("Serial-to-Dualpad initialized, waiting for frames...");
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// UART task - queues every received byte for the ingest task.
#[embassy_executor::task]
async fn uart_task(rx: UartRx<'static, Async>) {
    read_uart(rx, &BYTE_CHANNEL).await
}

/// Ingest task - feeds queued bytes to the frame assembler.
///
/// Sleeps until the UART task has queued something, then stores one byte per
/// critical section until the queue is empty again.
#[embassy_executor::task]
async fn ingest_task(bridge: &'static SharedBridge) {
    loop {
        BYTE_CHANNEL.ready_to_receive().await;

        loop {
            let (polled, completed, pending) = bridge.lock(|b| {
                let mut b = b.borrow_mut();
                let polled = b.poll_serial();
                (polled, b.assembler().frames_completed(), b.source().pending())
            });

            match polled {
                Ok(Some(FrameState::FrameReady(_))) => trace!("frame {} complete", completed),
                Ok(_) => {}
                Err(e) => warn!("serial byte dropped: {:?}", e),
            }

            if pending == 0 {
                break;
            }
            // Let the report task in between bytes
            yield_now().await;
        }
    }
}

/// Report task - emits one report per poll interval, alternating profiles.
#[embassy_executor::task]
async fn report_task(mut output: UsbHidOutput<'static>, bridge: &'static SharedBridge) {
    // Wait for USB to be ready
    output.wait_ready().await;
    info!("USB HID ready, forwarding frames...");

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(HID_POLL_MS)));

    loop {
        ticker.next().await;

        // Build under the lock, send outside it
        let report = bridge.lock(|b| b.borrow_mut().create_report(UNSPECIFIED_REPORT_ID));
        let report = match report {
            Ok(report) => report,
            Err(SynthesisError::FrameIncomplete) => continue,
            Err(e) => {
                debug!("no report: {:?}", e);
                continue;
            }
        };

        let bytes = match report.serialize_to_vec::<MAX_REPORT_SIZE>() {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Serialize error: {:?}", e);
                continue;
            }
        };

        if let Err(e) = output.send(&bytes).await {
            error!("Output error: {:?}", e);
            if !output.is_ready() {
                output.wait_ready().await;
            }
        }
    }
}
