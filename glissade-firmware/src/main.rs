//! Glissade - Serial-Commanded Pointer Proxy Firmware
//!
//! Main firmware binary for RP2040-based boards. The device enumerates as
//! a native USB HID mouse; a host process drives it over UART with 10-byte
//! move commands that are executed as smooth, time-bounded trajectories.
//!
//! Named after the ballet glissade ("glide") - commands arrive as
//! instantaneous jumps, the pointer leaves as a glide.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{UART0, USB};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::Builder;
use static_cell::StaticCell;
use usbd_hid::descriptor::{MouseReport, SerializedDescriptor};
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

// Static cells for USB descriptor buffers and HID state
static CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESC: StaticCell<[u8; 128]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static HID_STATE: StaticCell<State> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Glissade firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART0 for the host command link
    // 115200 baud is the protocol's assumed rate (UartConfig default)
    let uart_config = UartConfig::default();

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for host command link");

    // Setup the USB HID mouse endpoint
    let driver = Driver::new(p.USB, Irqs);

    let mut usb_config = embassy_usb::Config::new(0xc0de, 0xcafe);
    usb_config.manufacturer = Some("Glissade");
    usb_config.product = Some("Glissade Pointer Proxy");
    usb_config.serial_number = Some("00000001");
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        driver,
        usb_config,
        CONFIG_DESC.init([0; 256]),
        BOS_DESC.init([0; 256]),
        MSOS_DESC.init([0; 128]),
        CONTROL_BUF.init([0; 64]),
    );

    let hid_config = HidConfig {
        report_descriptor: MouseReport::desc(),
        request_handler: None,
        poll_ms: 10,
        max_packet_size: 8,
    };
    let hid_writer =
        HidWriter::<_, 8>::new(&mut builder, HID_STATE.init(State::new()), hid_config);

    let usb_device = builder.build();

    info!("USB HID mouse initialized");

    // Spawn tasks
    spawner.spawn(tasks::usb_device_task(usb_device)).unwrap();
    spawner.spawn(tasks::hid_writer_task(hid_writer)).unwrap();
    spawner.spawn(tasks::proxy_task(rx, tx)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
