//! Cooperative service loop
//!
//! Composes the packet decoder, validator and motion engine into the single
//! logical loop the device runs: drain pending bytes into commands, then
//! advance the in-flight movement once. No operation blocks; the caller
//! reenters `service` at roughly 10 ms granularity for smooth output, but
//! exact final displacement never depends on the actual rate.

use glissade_protocol::{MoveCommand, PacketDecoder, ResponseCode};

use crate::motion::MotionEngine;
use crate::traits::{CommandLink, PointerDevice, ResponseSink};

/// Target service granularity in milliseconds (design target, not a contract)
pub const SERVICE_INTERVAL_MS: u32 = 10;

/// The device-side command receiver and movement executor
#[derive(Debug, Clone)]
pub struct MouseProxy {
    decoder: PacketDecoder,
    engine: MotionEngine,
}

impl Default for MouseProxy {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseProxy {
    /// Create an idle proxy
    pub const fn new() -> Self {
        Self {
            decoder: PacketDecoder::new(),
            engine: MotionEngine::new(),
        }
    }

    /// Returns true while a movement is in progress
    pub fn is_moving(&self) -> bool {
        self.engine.is_active()
    }

    /// Run one loop iteration at time `now_ms`
    ///
    /// Drains every pending byte from the link: completed packets are
    /// validated and either dispatched to the engine or answered with the
    /// matching NAK byte. Invalid packets never reach the engine. Finally
    /// ticks the engine once, which emits pointer deltas and, on
    /// completion, the ACK byte.
    pub fn service<L: CommandLink, P: PointerDevice>(
        &mut self,
        link: &mut L,
        pointer: &mut P,
        now_ms: u32,
    ) {
        while let Some(byte) = link.read_byte() {
            let Some(packet) = self.decoder.feed(byte) else {
                continue;
            };
            let mut responder = LinkResponder(&mut *link);
            match MoveCommand::parse(&packet) {
                Ok(cmd) => self.engine.accept(cmd, now_ms, &mut responder),
                Err(err) => responder.send(err.into()),
            }
        }

        self.engine.tick(now_ms, pointer, &mut LinkResponder(&mut *link));
    }
}

/// Adapter writing each response code as its single status byte
struct LinkResponder<'a, L: CommandLink>(&'a mut L);

impl<L: CommandLink> ResponseSink for LinkResponder<'_, L> {
    fn send(&mut self, code: ResponseCode) {
        self.0.write_byte(code.to_byte());
    }
}
