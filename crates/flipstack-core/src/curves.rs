//! Easing curves for the flip-away phase
//!
//! Both curves map progress in [0, 1] to [0, 1] and are monotonic.

/// Factor of the decelerating curve driving the page scale
pub const SCALE_DECELERATION: f64 = 1.3;

/// Factor of the accelerating curve driving the page rotation
pub const ROTATION_ACCELERATION: f64 = 0.6;

/// Decelerating curve: f(t) = 1 - (1-t)^(2·factor)
#[inline]
pub fn decelerate(t: f64, factor: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if factor == 1.0 {
        let inv = 1.0 - t;
        1.0 - inv * inv
    } else {
        1.0 - (1.0 - t).powf(2.0 * factor)
    }
}

/// Accelerating curve: f(t) = t^(2·factor)
#[inline]
pub fn accelerate(t: f64, factor: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if factor == 1.0 {
        t * t
    } else {
        t.powf(2.0 * factor)
    }
}

/// Map `value` linearly from `[in_min, in_max]` onto `[out_min, out_max]`
#[inline]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

/// Interpolation that returns `from` at t=0 and `to` at t=1 exactly
#[inline]
pub fn lerp_precise(from: f64, to: f64, t: f64) -> f64 {
    (1.0 - t) * from + t * to
}

/// Scale curve for the leaving page, ranging over [0, `max_scale`]
#[inline]
pub fn eased_scale(position: f64, max_scale: f64) -> f64 {
    map_range(decelerate(position, SCALE_DECELERATION), 0.0, 1.0, 0.0, max_scale)
}

/// Rotation progress for the leaving page, ranging over [0, 1]
#[inline]
pub fn eased_rotation(position: f64) -> f64 {
    accelerate(position, ROTATION_ACCELERATION)
}
