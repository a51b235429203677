//! Proxy task - the device's single logical loop
//!
//! Owns the UART halves and the `MouseProxy`. Waits on whichever comes
//! first, a received chunk of bytes or the 10 ms service tick, then runs
//! one `service` pass: decode/validate/accept pending packets, tick the
//! motion engine. Afterwards the buffered pointer deltas drain into the
//! HID writer channel and any response bytes go back to the host.
//!
//! The `MovementState` lives inside this task only; pointer deltas leave
//! through the channel to the HID writer.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embassy_time::{Duration, Instant, Ticker};
use embedded_io_async::{Read, Write};
use heapless::Deque;

use glissade_core::proxy::SERVICE_INTERVAL_MS;
use glissade_core::traits::{CommandLink, PointerDevice, MAX_STEP};
use glissade_core::MouseProxy;

use crate::channels::{PointerDelta, POINTER_MOVES};

/// Buffer size for UART receive chunks
const RX_BUF_SIZE: usize = 32;

/// Response queue depth; a movement yields at most one status byte
const TX_QUEUE_SIZE: usize = 8;

/// Deltas a single service pass can produce: one engine tick splits a
/// full-range axis into at most ceil(32768 / 127) = 259 reports
const PENDING_DELTAS: usize = 32768 / MAX_STEP as usize + 2;

/// In-memory byte link between the async UART and the synchronous core
///
/// Received bytes queue up until the next service pass; response bytes
/// queue up until the pass ends and are then flushed to the UART.
#[derive(Default)]
struct UartLink {
    rx_queue: Deque<u8, 64>,
    tx_queue: Deque<u8, TX_QUEUE_SIZE>,
}

impl CommandLink for UartLink {
    fn read_byte(&mut self) -> Option<u8> {
        self.rx_queue.pop_front()
    }

    fn write_byte(&mut self, byte: u8) {
        if self.tx_queue.push_back(byte).is_err() {
            warn!("Response queue full, dropping status byte");
        }
    }
}

/// Pointer device buffering deltas for the HID writer task
///
/// `service` runs synchronously, so a tick that splits a large delta into
/// many reports cannot wait on the channel mid-call. Deltas collect here
/// and [`flush`](Self::flush) hands them to the channel afterwards with
/// awaited sends; backpressure from a slow USB host delays delivery
/// instead of discarding displacement.
#[derive(Default)]
struct ChannelPointer {
    pending: Deque<PointerDelta, PENDING_DELTAS>,
}

impl ChannelPointer {
    async fn flush(&mut self) {
        while let Some(delta) = self.pending.pop_front() {
            POINTER_MOVES.send(delta).await;
        }
    }
}

impl PointerDevice for ChannelPointer {
    fn move_rel(&mut self, dx: i8, dy: i8) {
        // Sized for the worst-case tick; a failed push means lost
        // displacement, so it is worth a warning
        if self.pending.push_back(PointerDelta { dx, dy }).is_err() {
            warn!("Pending delta buffer full, dropping ({}, {})", dx, dy);
        }
    }
}

/// Proxy task - receives command packets and executes movements
#[embassy_executor::task]
pub async fn proxy_task(mut rx: BufferedUartRx, mut tx: BufferedUartTx) {
    info!("Proxy task started");

    let mut proxy = MouseProxy::new();
    let mut link = UartLink::default();
    let mut pointer = ChannelPointer::default();

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(SERVICE_INTERVAL_MS)));
    let started = Instant::now();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match select(ticker.next(), rx.read(&mut buf)).await {
            Either::First(()) => {}
            Either::Second(Ok(n)) => {
                trace!("RX: {} bytes", n);
                for &byte in &buf[..n] {
                    if link.rx_queue.push_back(byte).is_err() {
                        warn!("RX queue full, dropping byte");
                    }
                }
            }
            Either::Second(Err(e)) => {
                warn!("UART read error: {:?}", e);
            }
        }

        let now_ms = started.elapsed().as_millis() as u32;
        proxy.service(&mut link, &mut pointer, now_ms);

        pointer.flush().await;

        let mut responses = [0u8; TX_QUEUE_SIZE];
        let mut len = 0;
        while let Some(byte) = link.tx_queue.pop_front() {
            responses[len] = byte;
            len += 1;
        }
        if len > 0 {
            if let Err(e) = tx.write_all(&responses[..len]).await {
                warn!("Failed to send responses: {:?}", e);
            }
        }
    }
}
