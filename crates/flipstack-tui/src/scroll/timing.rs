//! Pure progress and interpolation helpers for animations

use std::time::{Duration, Instant};

/// Animation progress in [0, 1] since `start`
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = start.elapsed().as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(9.0, 8.0, 0.0) - 9.0).abs() < 1e-12);
        assert!((lerp(9.0, 8.0, 0.25) - 8.75).abs() < 1e-12);
        assert!((lerp(9.0, 8.0, 1.0) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert_eq!(progress(start, Duration::ZERO), 1.0);
        assert!(is_complete(start, Duration::ZERO));
    }
}
