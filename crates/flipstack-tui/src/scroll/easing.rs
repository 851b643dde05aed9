//! Settle easing curves, built on the flip curves from the core crate

use flipstack_core::curves::decelerate;

pub use flipstack_core::EasingType;

pub trait EasingTypeExt {
    /// Map progress in [0, 1] to eased progress in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            // 1 - (1-t)^3
            EasingType::Cubic => decelerate(t, 1.5),
            // 1 - (1-t)^5
            EasingType::Quintic => decelerate(t, 2.5),
            EasingType::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}
