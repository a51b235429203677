//! Pointer device trait
//!
//! Abstracts the HID primitive that makes the host operating system observe
//! a relative pointer movement (USB boot-protocol mouse report on hardware,
//! a recording stub in tests).

/// Largest displacement one relative move report can carry, per axis
pub const MAX_STEP: i32 = 127;

/// Trait for emitting relative pointer movement
pub trait PointerDevice {
    /// Emit one relative move report
    ///
    /// Each axis is constrained to [-127, 127] by the HID boot report
    /// format. Callers needing a larger step split it across reports.
    fn move_rel(&mut self, dx: i8, dy: i8);
}
