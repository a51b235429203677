//! Byte-stream framing for command packets.
//!
//! Packets have a fixed size, so framing is a sliding fill anchored on the
//! START byte: bytes are discarded until one equals START, then every byte
//! is accepted positionally until the buffer is full. A START value showing
//! up inside the payload (e.g. as a duration byte) cannot desynchronize a
//! packet already in progress.

/// Packet synchronization byte
pub const START_BYTE: u8 = 0xAA;

/// Complete packet size in bytes
/// (START + TYPE + DX + DY + DURATION + CURVE + CHECKSUM)
pub const PACKET_SIZE: usize = 10;

/// State machine for extracting fixed-size packets from a byte stream
///
/// The decoder only recognizes packet boundaries. It yields the raw bytes
/// of every completed packet regardless of validity — checksum and field
/// validation belong to [`MoveCommand::parse`](crate::MoveCommand::parse).
#[derive(Debug, Clone)]
pub struct PacketDecoder {
    buffer: [u8; PACKET_SIZE],
    index: usize,
}

impl Default for PacketDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketDecoder {
    /// Create a new decoder waiting for a START byte
    pub const fn new() -> Self {
        Self {
            buffer: [0; PACKET_SIZE],
            index: 0,
        }
    }

    /// Reset the decoder to wait for the next START byte
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Feed a single byte to the decoder
    ///
    /// Returns `Some(packet)` when the byte completes a packet, `None` when
    /// more bytes are needed. Never blocks; purely synchronous per byte.
    pub fn feed(&mut self, byte: u8) -> Option<[u8; PACKET_SIZE]> {
        if self.index == 0 && byte != START_BYTE {
            // Scanning for frame start
            return None;
        }

        self.buffer[self.index] = byte;
        self.index += 1;

        if self.index == PACKET_SIZE {
            self.index = 0;
            Some(self.buffer)
        } else {
            None
        }
    }

    /// Feed bytes to the decoder until a packet completes
    ///
    /// Returns the first complete packet together with the number of bytes
    /// consumed, so a caller holding more input resumes from
    /// `&bytes[consumed..]`. `None` means every byte was consumed without
    /// completing a packet.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Option<([u8; PACKET_SIZE], usize)> {
        for (i, &byte) in bytes.iter().enumerate() {
            if let Some(packet) = self.feed(byte) {
                return Some((packet, i + 1));
            }
        }
        None
    }

    /// Returns true if a packet is partially assembled
    pub fn in_progress(&self) -> bool {
        self.index != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_packet(fill: u8) -> [u8; PACKET_SIZE] {
        let mut packet = [fill; PACKET_SIZE];
        packet[0] = START_BYTE;
        packet
    }

    #[test]
    fn test_complete_packet() {
        let mut decoder = PacketDecoder::new();
        let packet = raw_packet(0x42);

        let result = decoder.feed_bytes(&packet);
        assert_eq!(result, Some((packet, PACKET_SIZE)));
        assert!(!decoder.in_progress());
    }

    #[test]
    fn test_resync_after_garbage() {
        let mut decoder = PacketDecoder::new();

        // Garbage before the frame start is discarded
        assert_eq!(decoder.feed_bytes(&[0x00, 0xFF, 0x12, 0x34]), None);
        assert!(!decoder.in_progress());

        let packet = raw_packet(0x01);
        assert_eq!(decoder.feed_bytes(&packet), Some((packet, PACKET_SIZE)));
    }

    #[test]
    fn test_start_byte_inside_payload() {
        let mut decoder = PacketDecoder::new();

        // A START value in the payload is accepted positionally once
        // framing has begun
        let mut packet = raw_packet(0x00);
        packet[6] = START_BYTE; // duration low byte

        assert_eq!(decoder.feed_bytes(&packet), Some((packet, PACKET_SIZE)));
    }

    #[test]
    fn test_yields_invalid_packets() {
        // Validation is the caller's job; the decoder frames anything
        let mut decoder = PacketDecoder::new();
        let mut packet = raw_packet(0xFF);
        packet[0] = START_BYTE;

        assert_eq!(decoder.feed_bytes(&packet), Some((packet, PACKET_SIZE)));
    }

    #[test]
    fn test_back_to_back_packets() {
        let mut decoder = PacketDecoder::new();
        let first = raw_packet(0x11);
        let second = raw_packet(0x22);

        assert_eq!(decoder.feed_bytes(&first), Some((first, PACKET_SIZE)));
        assert_eq!(decoder.feed_bytes(&second), Some((second, PACKET_SIZE)));
    }

    #[test]
    fn test_two_packets_in_one_buffer() {
        let mut decoder = PacketDecoder::new();
        let first = raw_packet(0x11);
        let second = raw_packet(0x22);

        let mut data = [0u8; PACKET_SIZE * 2];
        data[..PACKET_SIZE].copy_from_slice(&first);
        data[PACKET_SIZE..].copy_from_slice(&second);

        let (packet, consumed) = decoder.feed_bytes(&data).unwrap();
        assert_eq!(packet, first);
        assert_eq!(consumed, PACKET_SIZE);

        // Resume from the consumed offset to get the second packet
        let (packet, consumed) = decoder.feed_bytes(&data[consumed..]).unwrap();
        assert_eq!(packet, second);
        assert_eq!(consumed, PACKET_SIZE);
    }

    #[test]
    fn test_consumed_count_includes_leading_garbage() {
        let mut decoder = PacketDecoder::new();
        let packet = raw_packet(0x05);

        let mut data = [0u8; 4 + PACKET_SIZE];
        data[..4].copy_from_slice(&[0x00, 0xFF, 0x12, 0x34]);
        data[4..].copy_from_slice(&packet);

        let (parsed, consumed) = decoder.feed_bytes(&data).unwrap();
        assert_eq!(parsed, packet);
        assert_eq!(consumed, 4 + PACKET_SIZE);
    }

    #[test]
    fn test_reset_mid_packet() {
        let mut decoder = PacketDecoder::new();
        decoder.feed(START_BYTE);
        decoder.feed(0x01);
        assert!(decoder.in_progress());

        decoder.reset();
        assert!(!decoder.in_progress());

        let packet = raw_packet(0x03);
        assert_eq!(decoder.feed_bytes(&packet), Some((packet, PACKET_SIZE)));
    }
}
