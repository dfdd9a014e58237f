//! Easing curves for timeline tracks.
//!
//! Every track in a schedule names one of these curves. They map normalized
//! progress (0.0 at track start, 1.0 at track end) to an eased fraction of
//! the value range.
//!
//! # Curve Overview
//!
//! | Curve | Shape |
//! |-------|-------|
//! | [`Ease::Linear`] | Constant rate |
//! | [`Ease::SineInOut`] | Gentle accelerate/decelerate (drifts, floats) |
//! | [`Ease::Power1Out`] | Quadratic decelerate (soft settles) |
//! | [`Ease::Power2In`] | Cubic accelerate (exits) |
//! | [`Ease::Power2Out`] | Cubic decelerate (reveals) |
//! | [`Ease::Power2InOut`] | Cubic both ends (focus pulls) |
//! | [`Ease::Power3Out`] | Quartic decelerate (dramatic entrances) |

/// An easing curve applied to a track's normalized progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// No easing: progress maps straight through.
    Linear,
    /// Sinusoidal ease-in-out. Slowest at both ends, used for ambient drift
    /// and floating oscillations.
    SineInOut,
    /// Quadratic ease-out.
    Power1Out,
    /// Cubic ease-in. Starts slow and accelerates; the exit-phase curve.
    Power2In,
    /// Cubic ease-out. Fast start, soft landing; the default reveal curve.
    Power2Out,
    /// Cubic ease-in-out.
    Power2InOut,
    /// Quartic ease-out. Pronounced deceleration for hero entrances.
    Power3Out,
}

impl Ease {
    /// Evaluate the curve at normalized progress `t`.
    ///
    /// `t` is clamped to `[0, 1]`, so the result is always within `[0, 1]`
    /// and the endpoints are exact: `apply(0.0) == 0.0`, `apply(1.0) == 1.0`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::SineInOut => 0.5 - 0.5 * (std::f32::consts::PI * t).cos(),
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}
