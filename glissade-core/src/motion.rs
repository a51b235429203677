//! Motion-interpolation engine
//!
//! Converts a validated move command into a stream of small integer pointer
//! deltas emitted at whatever rate the caller ticks, while preserving exact
//! total displacement despite repeated integer truncation. Owns the single
//! in-flight movement; a new command interrupts and replaces it.

use glissade_protocol::{Curve, MoveCommand, ResponseCode};

use crate::easing::ease;
use crate::traits::{PointerDevice, ResponseSink, MAX_STEP};

/// State of the single in-flight movement
///
/// `accumulated_*` is the fractional-pixel carry not yet emitted as an
/// integer delta; it stays in (-1, 1) after each extraction.
/// `last_progress_*` is the eased target position at the most recently
/// processed tick, so deltas are always computed against the true curve
/// rather than against rounded output.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct MovementState {
    active: bool,
    target_dx: i16,
    target_dy: i16,
    duration_ms: u16,
    curve: Curve,
    start_ms: u32,
    accumulated_x: f32,
    accumulated_y: f32,
    last_progress_x: f32,
    last_progress_y: f32,
}

impl MovementState {
    const fn idle() -> Self {
        Self {
            active: false,
            target_dx: 0,
            target_dy: 0,
            duration_ms: 0,
            curve: Curve::Linear,
            start_ms: 0,
            accumulated_x: 0.0,
            accumulated_y: 0.0,
            last_progress_x: 0.0,
            last_progress_y: 0.0,
        }
    }
}

/// The motion engine: IDLE ⇄ MOVING, driven by `accept` and `tick`
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionEngine {
    state: MovementState,
}

impl Default for MotionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionEngine {
    /// Create an idle engine
    pub const fn new() -> Self {
        Self {
            state: MovementState::idle(),
        }
    }

    /// Returns true while a movement is in progress
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Start executing a validated command at time `now_ms`
    ///
    /// An in-flight movement is discarded first and reported as
    /// NAK-interrupted — a status about the previous movement, not a
    /// failure of the new one. No leftover delta from the interrupted
    /// movement is ever emitted.
    pub fn accept<R: ResponseSink>(&mut self, cmd: MoveCommand, now_ms: u32, responses: &mut R) {
        if self.state.active {
            responses.send(ResponseCode::NakInterrupted);
        }

        self.state = MovementState {
            active: true,
            target_dx: cmd.dx,
            target_dy: cmd.dy,
            duration_ms: cmd.duration_ms,
            curve: cmd.curve,
            start_ms: now_ms,
            accumulated_x: 0.0,
            accumulated_y: 0.0,
            last_progress_x: 0.0,
            last_progress_y: 0.0,
        };
    }

    /// Advance the in-flight movement to time `now_ms`
    ///
    /// No-op when idle. Emits at most one pointer delta per tick on the
    /// interpolation path; on completion emits the exact integer remainder
    /// (so the cumulative total equals the target exactly) and an ACK.
    pub fn tick<P: PointerDevice, R: ResponseSink>(
        &mut self,
        now_ms: u32,
        pointer: &mut P,
        responses: &mut R,
    ) {
        if !self.state.active {
            return;
        }
        let s = &mut self.state;

        let elapsed = now_ms.wrapping_sub(s.start_ms);
        if elapsed >= u32::from(s.duration_ms) {
            // Completion: the displacement not yet emitted is
            // (target - last_progress) plus the fractional carry. Including
            // the carry makes the remainder an exact integer, which the
            // rounding only cleans of float noise.
            let remaining_x = f32::from(s.target_dx) - s.last_progress_x + s.accumulated_x;
            let remaining_y = f32::from(s.target_dy) - s.last_progress_y + s.accumulated_y;
            let step_x = round_half_away(remaining_x);
            let step_y = round_half_away(remaining_y);
            if step_x != 0 || step_y != 0 {
                emit_split(pointer, step_x, step_y);
            }

            s.active = false;
            responses.send(ResponseCode::Ack);
            return;
        }

        let t = elapsed as f32 / f32::from(s.duration_ms);
        let eased = ease(t, s.curve);
        let cur_x = f32::from(s.target_dx) * eased;
        let cur_y = f32::from(s.target_dy) * eased;

        s.accumulated_x += cur_x - s.last_progress_x;
        s.accumulated_y += cur_y - s.last_progress_y;

        // Truncation toward zero keeps the sign and leaves the fractional
        // remainder in the accumulator
        let step_x = s.accumulated_x as i32;
        let step_y = s.accumulated_y as i32;
        if step_x != 0 || step_y != 0 {
            s.accumulated_x -= step_x as f32;
            s.accumulated_y -= step_y as f32;
            emit_split(pointer, step_x, step_y);
        }

        // Progress tracks the true eased curve whether or not a delta was
        // emitted this tick
        s.last_progress_x = cur_x;
        s.last_progress_y = cur_y;
    }
}

/// Round to nearest integer, halves away from zero
fn round_half_away(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

/// Emit a delta, splitting steps larger than one HID report can carry
/// across multiple reports within the same tick
fn emit_split<P: PointerDevice>(pointer: &mut P, mut dx: i32, mut dy: i32) {
    while dx != 0 || dy != 0 {
        let step_x = dx.clamp(-MAX_STEP, MAX_STEP);
        let step_y = dy.clamp(-MAX_STEP, MAX_STEP);
        pointer.move_rel(step_x as i8, step_y as i8);
        dx -= step_x;
        dy -= step_y;
    }
}
