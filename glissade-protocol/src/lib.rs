//! Glissade Serial Command Protocol
//!
//! This crate defines the byte protocol between a host process and the
//! Glissade pointer proxy. The host sends fixed-size move commands over a
//! 115200 baud serial link; the device answers every command with a single
//! status byte and executes the movement as a smooth trajectory.
//!
//! # Protocol Overview
//!
//! All commands use a fixed 10-byte packet (multi-byte fields little-endian):
//! ```text
//! ┌───────┬──────┬──────┬──────┬──────────┬───────┬──────────┐
//! │ START │ TYPE │ DX   │ DY   │ DURATION │ CURVE │ CHECKSUM │
//! │ 1B    │ 1B   │ 2B   │ 2B   │ 2B       │ 1B    │ 1B       │
//! └───────┴──────┴──────┴──────┴──────────┴───────┴──────────┘
//! ```
//!
//! The checksum is the XOR of the first nine bytes. Validation order is
//! fixed: checksum, then command type, then curve — a corrupted packet is
//! rejected before any of its fields are interpreted.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod packet;
pub mod response;

pub use command::{Curve, MoveCommand, PacketError, CMD_MOVE};
pub use packet::{PacketDecoder, PACKET_SIZE, START_BYTE};
pub use response::ResponseCode;
