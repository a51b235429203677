//! Command link traits
//!
//! The byte transport carrying command packets in and status bytes out
//! (a buffered UART on hardware, an in-memory queue in tests).

use glissade_protocol::ResponseCode;

/// Trait for the non-blocking byte transport to the host
pub trait CommandLink {
    /// Take the next pending received byte, if any
    ///
    /// Never blocks; returns `None` when nothing is pending.
    fn read_byte(&mut self) -> Option<u8>;

    /// Queue one byte for transmission to the host
    fn write_byte(&mut self, byte: u8);
}

/// Trait for reporting packet and movement outcomes
///
/// Exactly one status byte is sent per terminal event: a validation
/// failure or interruption right away, completion ACK from a later tick.
pub trait ResponseSink {
    /// Report one terminal event
    fn send(&mut self, code: ResponseCode);
}
