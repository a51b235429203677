//! Move command encoding, decoding and validation.

use crate::packet::{PACKET_SIZE, START_BYTE};

/// Command type byte for a relative pointer move
pub const CMD_MOVE: u8 = 0x01;

// Wire format values for easing curves
const CURVE_LINEAR: u8 = 0x00;
const CURVE_EASE_IN: u8 = 0x01;
const CURVE_EASE_OUT: u8 = 0x02;
const CURVE_EASE_IN_OUT: u8 = 0x03;

/// Easing curve selection for a movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Curve {
    /// Constant speed throughout the movement
    Linear,
    /// Starts slow, accelerates (quadratic)
    EaseIn,
    /// Starts fast, decelerates (quadratic)
    EaseOut,
    /// Smooth acceleration and deceleration (quadratic)
    EaseInOut,
}

impl Curve {
    /// Parse a curve from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CURVE_LINEAR => Some(Curve::Linear),
            CURVE_EASE_IN => Some(Curve::EaseIn),
            CURVE_EASE_OUT => Some(Curve::EaseOut),
            CURVE_EASE_IN_OUT => Some(Curve::EaseInOut),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Curve::Linear => CURVE_LINEAR,
            Curve::EaseIn => CURVE_EASE_IN,
            Curve::EaseOut => CURVE_EASE_OUT,
            Curve::EaseInOut => CURVE_EASE_IN_OUT,
        }
    }
}

/// Reasons a framed packet is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// XOR checksum does not match the last byte
    ChecksumMismatch,
    /// Command type byte is not a supported command
    InvalidCommandType,
    /// Curve byte is outside the defined variants
    InvalidCurve,
}

/// A validated relative move command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveCommand {
    /// Horizontal displacement in pixels
    pub dx: i16,
    /// Vertical displacement in pixels
    pub dy: i16,
    /// Movement duration in milliseconds (0 degenerates to an immediate jump)
    pub duration_ms: u16,
    /// Easing curve to apply
    pub curve: Curve,
}

impl MoveCommand {
    /// Validate a framed packet and decode it into a command
    ///
    /// The checksum is always verified before any other field is
    /// interpreted, so a corrupted packet never reads as a valid-looking
    /// command type or curve.
    pub fn parse(packet: &[u8; PACKET_SIZE]) -> Result<Self, PacketError> {
        if xor_checksum(&packet[..PACKET_SIZE - 1]) != packet[PACKET_SIZE - 1] {
            return Err(PacketError::ChecksumMismatch);
        }

        if packet[1] != CMD_MOVE {
            return Err(PacketError::InvalidCommandType);
        }

        let curve = Curve::from_byte(packet[8]).ok_or(PacketError::InvalidCurve)?;

        Ok(Self {
            dx: i16::from_le_bytes([packet[2], packet[3]]),
            dy: i16::from_le_bytes([packet[4], packet[5]]),
            duration_ms: u16::from_le_bytes([packet[6], packet[7]]),
            curve,
        })
    }

    /// Encode this command into a correctly checksummed packet
    ///
    /// This is the host-side direction; the firmware only decodes. Also
    /// used by tests to construct known-good byte streams.
    pub fn encode(&self) -> [u8; PACKET_SIZE] {
        let mut packet = [0u8; PACKET_SIZE];
        packet[0] = START_BYTE;
        packet[1] = CMD_MOVE;
        packet[2..4].copy_from_slice(&self.dx.to_le_bytes());
        packet[4..6].copy_from_slice(&self.dy.to_le_bytes());
        packet[6..8].copy_from_slice(&self.duration_ms.to_le_bytes());
        packet[8] = self.curve.to_byte();
        packet[9] = xor_checksum(&packet[..PACKET_SIZE - 1]);
        packet
    }
}

/// XOR of all bytes in the slice
fn xor_checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, &b| acc ^ b)
}
