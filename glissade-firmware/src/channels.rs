//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// One relative pointer move, ready to leave as a HID report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerDelta {
    pub dx: i8,
    pub dy: i8,
}

/// Channel capacity for pointer deltas awaiting USB transmission
const POINTER_CHANNEL_SIZE: usize = 8;

/// Pointer deltas from the proxy task to the USB HID writer task
pub static POINTER_MOVES: Channel<CriticalSectionRawMutex, PointerDelta, POINTER_CHANNEL_SIZE> =
    Channel::new();
