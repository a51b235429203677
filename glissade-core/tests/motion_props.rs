//! Property tests for the motion engine's exactness guarantee.

use glissade_core::traits::{PointerDevice, ResponseSink};
use glissade_core::MotionEngine;
use glissade_protocol::{Curve, MoveCommand, ResponseCode};
use proptest::prelude::*;

#[derive(Default)]
struct RecordingPointer {
    total: (i64, i64),
    max_axis: i32,
}

impl PointerDevice for RecordingPointer {
    fn move_rel(&mut self, dx: i8, dy: i8) {
        self.total.0 += i64::from(dx);
        self.total.1 += i64::from(dy);
        self.max_axis = self.max_axis.max(i32::from(dx).abs()).max(i32::from(dy).abs());
    }
}

#[derive(Default)]
struct RecordingResponses {
    codes: Vec<ResponseCode>,
}

impl ResponseSink for RecordingResponses {
    fn send(&mut self, code: ResponseCode) {
        self.codes.push(code);
    }
}

fn arb_command() -> impl Strategy<Value = MoveCommand> {
    (any::<i16>(), any::<i16>(), 0u16..=5000, 0u8..=3).prop_map(|(dx, dy, duration_ms, c)| {
        MoveCommand {
            dx,
            dy,
            duration_ms,
            curve: Curve::from_byte(c).unwrap(),
        }
    })
}

proptest! {
    /// For every command and every (irregular) tick schedule, the emitted
    /// deltas sum to exactly (dx, dy), each report stays within ±127, and
    /// exactly one ACK is produced.
    #[test]
    fn emitted_deltas_sum_to_target(
        cmd in arb_command(),
        intervals in proptest::collection::vec(1u32..=50, 1..64),
        start in any::<u32>(),
    ) {
        let mut engine = MotionEngine::new();
        let mut pointer = RecordingPointer::default();
        let mut responses = RecordingResponses::default();

        engine.accept(cmd, start, &mut responses);

        let mut now = start;
        let mut i = 0;
        while engine.is_active() {
            now = now.wrapping_add(intervals[i % intervals.len()]);
            i += 1;
            engine.tick(now, &mut pointer, &mut responses);
        }

        prop_assert_eq!(pointer.total, (i64::from(cmd.dx), i64::from(cmd.dy)));
        prop_assert!(pointer.max_axis <= 127);
        prop_assert_eq!(responses.codes, vec![ResponseCode::Ack]);
    }

    /// Interrupting at an arbitrary point never leaks displacement from the
    /// first movement into the second.
    #[test]
    fn interruption_leaks_nothing(
        first in arb_command(),
        second in arb_command(),
        cut_ms in 0u32..=5000,
    ) {
        let mut engine = MotionEngine::new();
        let mut pointer = RecordingPointer::default();
        let mut responses = RecordingResponses::default();

        engine.accept(first, 0, &mut responses);
        let mut now = 0;
        while engine.is_active() && now < cut_ms {
            now += 7;
            engine.tick(now, &mut pointer, &mut responses);
        }
        let before = pointer.total;
        let was_active = engine.is_active();

        engine.accept(second, now, &mut responses);
        while engine.is_active() {
            now += 7;
            engine.tick(now, &mut pointer, &mut responses);
        }

        // The second movement contributes exactly its own displacement
        prop_assert_eq!(
            (pointer.total.0 - before.0, pointer.total.1 - before.1),
            (i64::from(second.dx), i64::from(second.dy))
        );
        // One NAK-interrupted iff the first movement was still in flight
        let naks = responses
            .codes
            .iter()
            .filter(|&&c| c == ResponseCode::NakInterrupted)
            .count();
        prop_assert_eq!(naks, usize::from(was_active));
    }
}
