//! USB tasks: device state machine and HID mouse report writer
//!
//! The device enumerates as a standard boot-protocol mouse. The writer
//! task drains pointer deltas queued by the proxy task and sends them as
//! 4-byte relative move reports; buttons and wheel are always zero.

use defmt::*;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::HidWriter;
use embassy_usb::UsbDevice;
use usbd_hid::descriptor::MouseReport;

use crate::channels::POINTER_MOVES;

/// USB device task - runs enumeration and the control endpoint
#[embassy_executor::task]
pub async fn usb_device_task(mut device: UsbDevice<'static, Driver<'static, USB>>) {
    info!("USB device task started");
    device.run().await;
}

/// HID writer task - turns queued pointer deltas into mouse reports
#[embassy_executor::task]
pub async fn hid_writer_task(mut writer: HidWriter<'static, Driver<'static, USB>, 8>) {
    info!("HID writer task started");

    loop {
        let delta = POINTER_MOVES.receive().await;

        let report = MouseReport {
            buttons: 0,
            x: delta.dx,
            y: delta.dy,
            wheel: 0,
            pan: 0,
        };

        if let Err(e) = writer.write_serialize(&report).await {
            warn!("Failed to send HID report: {:?}", e);
        }
    }
}
