//! Single-byte response codes sent back to the host.
//!
//! The device writes exactly one byte per terminal event: a validation
//! failure or interruption immediately after the packet, an ACK later when
//! the movement completes.

use crate::command::PacketError;

// Wire format values
const RESP_ACK: u8 = 0x00;
const RESP_NAK_CHECKSUM: u8 = 0x01;
const RESP_NAK_INVALID: u8 = 0x02;
const RESP_NAK_INTERRUPTED: u8 = 0x03;

/// Status byte reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResponseCode {
    /// Movement completed successfully
    Ack,
    /// Packet failed checksum verification
    NakChecksum,
    /// Packet was well-formed but semantically unsupported
    NakInvalid,
    /// Previous movement was cut short by a new command
    NakInterrupted,
}

impl ResponseCode {
    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            ResponseCode::Ack => RESP_ACK,
            ResponseCode::NakChecksum => RESP_NAK_CHECKSUM,
            ResponseCode::NakInvalid => RESP_NAK_INVALID,
            ResponseCode::NakInterrupted => RESP_NAK_INTERRUPTED,
        }
    }

    /// Parse a response from its wire format byte (host-side direction)
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            RESP_ACK => Some(ResponseCode::Ack),
            RESP_NAK_CHECKSUM => Some(ResponseCode::NakChecksum),
            RESP_NAK_INVALID => Some(ResponseCode::NakInvalid),
            RESP_NAK_INTERRUPTED => Some(ResponseCode::NakInterrupted),
            _ => None,
        }
    }

    /// Returns true for the success response
    pub fn is_ack(self) -> bool {
        self == ResponseCode::Ack
    }
}

impl From<PacketError> for ResponseCode {
    fn from(err: PacketError) -> Self {
        match err {
            PacketError::ChecksumMismatch => ResponseCode::NakChecksum,
            // Both semantic rejections share one NAK value on the wire
            PacketError::InvalidCommandType | PacketError::InvalidCurve => {
                ResponseCode::NakInvalid
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_roundtrip() {
        let codes = [
            ResponseCode::Ack,
            ResponseCode::NakChecksum,
            ResponseCode::NakInvalid,
            ResponseCode::NakInterrupted,
        ];
        for code in codes {
            assert_eq!(ResponseCode::from_byte(code.to_byte()), Some(code));
        }
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(ResponseCode::Ack.to_byte(), 0x00);
        assert_eq!(ResponseCode::NakChecksum.to_byte(), 0x01);
        assert_eq!(ResponseCode::NakInvalid.to_byte(), 0x02);
        assert_eq!(ResponseCode::NakInterrupted.to_byte(), 0x03);
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            ResponseCode::from(PacketError::ChecksumMismatch),
            ResponseCode::NakChecksum
        );
        assert_eq!(
            ResponseCode::from(PacketError::InvalidCommandType),
            ResponseCode::NakInvalid
        );
        assert_eq!(
            ResponseCode::from(PacketError::InvalidCurve),
            ResponseCode::NakInvalid
        );
    }

    #[test]
    fn test_unknown_byte() {
        assert!(ResponseCode::from_byte(0x04).is_none());
        assert!(ResponseCode::from_byte(0xFF).is_none());
    }
}
