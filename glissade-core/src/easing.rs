//! Easing curve evaluation
//!
//! Pure mapping from normalized elapsed time to normalized progress. Only
//! multiplication and subtraction are used, so evaluation is identical on
//! the host and on thumbv6m soft-float.

use glissade_protocol::Curve;

/// Evaluate an easing curve at normalized time `t`
///
/// `t` is clamped to [0, 1]; the result is in [0, 1] and monotonically
/// non-decreasing in `t` for every curve.
pub fn ease(t: f32, curve: Curve) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match curve {
        Curve::Linear => t,
        Curve::EaseIn => t * t,
        Curve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Curve::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                let u = -2.0 * t + 2.0;
                1.0 - u * u / 2.0
            }
        }
    }
}
